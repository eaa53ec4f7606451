//! Rigid placements (SE3) and their action on spatial vectors.
//!
//! An `SE3` stores the placement of a frame B in a frame A: `aMb`. Chained
//! placements compose left-to-right (`aMb * bMc = aMc`); keeping that order
//! fixed makes repeated evaluations bit-reproducible.

use crate::{skew, Force, Mat3, Mat6, Motion, Quat, Vec3};

/// Rigid transform (rotation + translation) between two coordinate frames.
#[derive(Debug, Clone, Copy)]
pub struct SE3 {
    /// Rotation of frame B expressed in frame A.
    pub rotation: Mat3,
    /// Origin of frame B expressed in frame A.
    pub translation: Vec3,
}

impl SE3 {
    /// Create from rotation matrix and translation.
    pub fn new(rotation: Mat3, translation: Vec3) -> Self {
        Self {
            rotation,
            translation,
        }
    }

    /// Identity placement.
    pub fn identity() -> Self {
        Self {
            rotation: Mat3::identity(),
            translation: Vec3::zeros(),
        }
    }

    /// Pure rotation about the X axis.
    pub fn rot_x(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            Mat3::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c),
            Vec3::zeros(),
        )
    }

    /// Pure rotation about the Y axis.
    pub fn rot_y(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            Mat3::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c),
            Vec3::zeros(),
        )
    }

    /// Pure rotation about the Z axis.
    pub fn rot_z(angle: f64) -> Self {
        let (s, c) = angle.sin_cos();
        Self::new(
            Mat3::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0),
            Vec3::zeros(),
        )
    }

    /// Pure translation.
    pub fn from_translation(translation: Vec3) -> Self {
        Self::new(Mat3::identity(), translation)
    }

    /// Placement from a unit quaternion and a translation.
    pub fn from_quat(q: &Quat, translation: Vec3) -> Self {
        Self::new(q.to_matrix(), translation)
    }

    /// Inverse placement: `bMa` from `aMb`.
    pub fn inverse(&self) -> SE3 {
        let rt = self.rotation.transpose();
        SE3::new(rt, -(rt * self.translation))
    }

    /// Map a point from frame B coordinates to frame A coordinates.
    #[inline]
    pub fn act_point(&self, p: &Vec3) -> Vec3 {
        self.rotation * p + self.translation
    }

    /// Map a point from frame A coordinates to frame B coordinates.
    #[inline]
    pub fn act_inv_point(&self, p: &Vec3) -> Vec3 {
        self.rotation.transpose() * (p - self.translation)
    }

    /// Adjoint action: re-express a motion from frame B in frame A.
    pub fn act(&self, m: &Motion) -> Motion {
        let ang = self.rotation * m.angular;
        let lin = self.rotation * m.linear + self.translation.cross(&ang);
        Motion::new(ang, lin)
    }

    /// Inverse adjoint action: re-express a motion from frame A in frame B.
    pub fn act_inv(&self, m: &Motion) -> Motion {
        let rt = self.rotation.transpose();
        Motion::new(
            rt * m.angular,
            rt * (m.linear - self.translation.cross(&m.angular)),
        )
    }

    /// Dual (transpose-adjoint) action: re-express a wrench from frame B in frame A.
    pub fn act_force(&self, f: &Force) -> Force {
        let lin = self.rotation * f.linear;
        let ang = self.rotation * f.angular + self.translation.cross(&lin);
        Force::new(ang, lin)
    }

    /// Inverse dual action: re-express a wrench from frame A in frame B.
    pub fn act_inv_force(&self, f: &Force) -> Force {
        let rt = self.rotation.transpose();
        Force::new(
            rt * (f.angular - self.translation.cross(&f.linear)),
            rt * f.linear,
        )
    }

    /// 6x6 matrix of the adjoint action on motions.
    ///
    /// X = | R        0 |
    ///     | [t]× R   R |
    pub fn to_action_matrix(&self) -> Mat6 {
        let r = self.rotation;
        let tx_r = skew(&self.translation) * r;
        let mut m = Mat6::zeros();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&r);
        m.fixed_view_mut::<3, 3>(3, 0).copy_from(&tx_r);
        m.fixed_view_mut::<3, 3>(3, 3).copy_from(&r);
        m
    }

    /// 6x6 matrix of the dual action on forces.
    ///
    /// X* = | R   [t]× R |
    ///      | 0      R   |
    pub fn to_dual_action_matrix(&self) -> Mat6 {
        let r = self.rotation;
        let tx_r = skew(&self.translation) * r;
        let mut m = Mat6::zeros();
        m.fixed_view_mut::<3, 3>(0, 0).copy_from(&r);
        m.fixed_view_mut::<3, 3>(0, 3).copy_from(&tx_r);
        m.fixed_view_mut::<3, 3>(3, 3).copy_from(&r);
        m
    }
}

impl std::ops::Mul for SE3 {
    type Output = SE3;

    /// Composition `aMb * bMc = aMc`.
    #[inline]
    fn mul(self, rhs: SE3) -> SE3 {
        SE3::new(
            self.rotation * rhs.rotation,
            self.translation + self.rotation * rhs.translation,
        )
    }
}
