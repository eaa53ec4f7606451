//! Spatial inertia of a rigid body.

use crate::{skew, Force, Mat3, Mat6, Motion, Vec3, SE3};

/// Spatial inertia of a rigid body, expressed at the body frame origin.
///
/// Stored as mass, center-of-mass lever, and rotational inertia about the
/// center of mass. Products with motions never form the 6x6 matrix.
#[derive(Debug, Clone, Copy)]
pub struct Inertia {
    /// Mass of the body.
    pub mass: f64,
    /// Center of mass position in the body frame.
    pub com: Vec3,
    /// Rotational inertia about the center of mass (3x3 symmetric).
    pub inertia: Mat3,
}

impl Inertia {
    /// Create a spatial inertia with the given mass, CoM lever, and inertia matrix.
    pub fn new(mass: f64, com: Vec3, inertia: Mat3) -> Self {
        Self { mass, com, inertia }
    }

    /// Massless body (universe, weld plates).
    pub fn zero() -> Self {
        Self {
            mass: 0.0,
            com: Vec3::zeros(),
            inertia: Mat3::zeros(),
        }
    }

    /// Point mass at a given position in the body frame.
    pub fn point_mass(mass: f64, pos: Vec3) -> Self {
        Self {
            mass,
            com: pos,
            inertia: Mat3::zeros(),
        }
    }

    /// Uniform rod of given mass and length along the Y axis, centered at the origin.
    pub fn rod(mass: f64, length: f64) -> Self {
        let i = mass * length * length / 12.0;
        Self {
            mass,
            com: Vec3::zeros(),
            inertia: Mat3::new(i, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, i),
        }
    }

    /// Uniform solid sphere centered at the origin.
    pub fn sphere(mass: f64, radius: f64) -> Self {
        let i = 2.0 / 5.0 * mass * radius * radius;
        Self {
            mass,
            com: Vec3::zeros(),
            inertia: Mat3::from_diagonal(&Vec3::new(i, i, i)),
        }
    }

    /// Apply the inertia to a motion: f = I·v.
    ///
    /// Computed through the (mass, com, I_com) factorization:
    ///   f_lin = m (v + ω × c)
    ///   f_ang = I_c ω + c × f_lin
    pub fn mul_motion(&self, v: &Motion) -> Force {
        let lin = (v.linear + v.angular.cross(&self.com)) * self.mass;
        let ang = self.inertia * v.angular + self.com.cross(&lin);
        Force::new(ang, lin)
    }

    /// Newton-Euler force of the body given its velocity and acceleration:
    /// f = I·a + v ×* (I·v).
    pub fn body_force(&self, v: &Motion, a: &Motion) -> Force {
        self.mul_motion(a) + v.cross_force(&self.mul_motion(v))
    }

    /// Dense 6x6 spatial inertia matrix (about the body frame origin).
    ///
    /// I = | I_c + m [c]× [c]×ᵀ   m [c]× |
    ///     | m [c]×ᵀ               m E    |
    pub fn to_matrix(&self) -> Mat6 {
        let cx = skew(&self.com);
        let m = self.mass;

        let mut mat = Mat6::zeros();
        let top_left = self.inertia + cx * cx.transpose() * m;
        mat.fixed_view_mut::<3, 3>(0, 0).copy_from(&top_left);
        let mcx = cx * m;
        mat.fixed_view_mut::<3, 3>(0, 3).copy_from(&mcx);
        mat.fixed_view_mut::<3, 3>(3, 0).copy_from(&mcx.transpose());
        mat.fixed_view_mut::<3, 3>(3, 3)
            .copy_from(&(Mat3::identity() * m));
        mat
    }

    /// Re-express the inertia in the parent frame of the placement `aMb`
    /// (congruence transform, computed on the compact factorization).
    pub fn se3_act(&self, m: &SE3) -> Inertia {
        Inertia {
            mass: self.mass,
            com: m.act_point(&self.com),
            inertia: m.rotation * self.inertia * m.rotation.transpose(),
        }
    }

    /// Re-express the inertia in the child frame of the placement `aMb`.
    pub fn se3_act_inv(&self, m: &SE3) -> Inertia {
        let rt = m.rotation.transpose();
        Inertia {
            mass: self.mass,
            com: m.act_inv_point(&self.com),
            inertia: rt * self.inertia * m.rotation,
        }
    }
}

impl std::ops::Add for Inertia {
    type Output = Inertia;

    /// Composition of two bodies rigidly attached in the same frame.
    fn add(self, rhs: Inertia) -> Inertia {
        let mass = self.mass + rhs.mass;
        let com = if mass > 0.0 {
            (self.com * self.mass + rhs.com * rhs.mass) / mass
        } else {
            Vec3::zeros()
        };
        // parallel-axis both terms to the combined CoM
        let d1 = self.com - com;
        let d2 = rhs.com - com;
        let shift = |d: &Vec3, m: f64| {
            let dx = skew(d);
            dx * dx.transpose() * m
        };
        Inertia {
            mass,
            com,
            inertia: self.inertia + shift(&d1, self.mass) + rhs.inertia + shift(&d2, rhs.mass),
        }
    }
}
