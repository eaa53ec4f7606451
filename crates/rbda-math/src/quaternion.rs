//! Unit quaternions for 3D rotations.
//!
//! Stored as scalar part w plus vector part v; the exponential and
//! logarithmic maps connect quaternions to axis-angle tangent vectors,
//! which is what configuration-space integration of ball and free-floating
//! joints is built on.

use crate::{skew, Mat3, Vec3};

/// A unit quaternion representing a 3D rotation.
#[derive(Debug, Clone, Copy)]
pub struct Quat {
    /// Scalar part.
    pub w: f64,
    /// Vector part.
    pub v: Vec3,
}

impl Quat {
    /// Build from scalar and vector components.
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self {
            w,
            v: Vec3::new(x, y, z),
        }
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        Self {
            w: 1.0,
            v: Vec3::zeros(),
        }
    }

    /// Rotation of `angle` radians about a unit `axis`.
    pub fn from_axis_angle(axis: &Vec3, angle: f64) -> Self {
        let (s, c) = (angle * 0.5).sin_cos();
        Self { w: c, v: axis * s }
    }

    /// Exponential map: the rotation whose axis-angle vector is `w`.
    pub fn exp(w: &Vec3) -> Quat {
        let angle = w.norm();
        if angle < 1e-10 {
            // first order in the angle, renormalized
            Quat { w: 1.0, v: w * 0.5 }.normalize()
        } else {
            let (s, c) = (angle * 0.5).sin_cos();
            Quat {
                w: c,
                v: w * (s / angle),
            }
        }
    }

    /// Logarithmic map: the axis-angle vector whose exponential is `self`.
    pub fn log(&self) -> Vec3 {
        let sin_half = self.v.norm();
        if sin_half < 1e-10 {
            return Vec3::zeros();
        }
        self.v * (2.0 * sin_half.atan2(self.w) / sin_half)
    }

    /// Rescale to unit length; degenerate inputs collapse to the identity.
    pub fn normalize(&self) -> Self {
        let norm = (self.w * self.w + self.v.norm_squared()).sqrt();
        if norm < 1e-12 {
            return Self::identity();
        }
        Self {
            w: self.w / norm,
            v: self.v / norm,
        }
    }

    /// Hamilton product `self * other` (apply `other` first).
    pub fn mul(&self, other: &Quat) -> Quat {
        Quat {
            w: self.w * other.w - self.v.dot(&other.v),
            v: other.v * self.w + self.v * other.w + self.v.cross(&other.v),
        }
    }

    /// Rotation matrix of this (unit) quaternion.
    ///
    /// Rodrigues form: R = E + 2w [v]× + 2 [v]×².
    pub fn to_matrix(&self) -> Mat3 {
        let vx = skew(&self.v);
        Mat3::identity() + vx * (2.0 * self.w) + vx * vx * 2.0
    }
}
