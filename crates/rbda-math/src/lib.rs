//! Spatial algebra and math primitives for the rbda rigid-body library.
//!
//! Implements rigid placements (SE3), 6D motion and force vectors, and
//! spatial inertia following Featherstone's conventions. Spatial vectors are
//! stored as [angular; linear].

pub mod inertia;
pub mod quaternion;
pub mod se3;
pub mod spatial;

pub use inertia::Inertia;
pub use quaternion::Quat;
pub use se3::SE3;
pub use spatial::{Force, Motion};

use nalgebra as na;

/// 3D vector alias.
pub type Vec3 = na::Vector3<f64>;
/// 3x3 matrix alias.
pub type Mat3 = na::Matrix3<f64>;
/// 6D vector alias.
pub type Vec6 = na::Vector6<f64>;
/// 6x6 matrix alias.
pub type Mat6 = na::Matrix6<f64>;
/// Dynamic vector.
pub type DVec = na::DVector<f64>;
/// Dynamic matrix.
pub type DMat = na::DMatrix<f64>;

/// Cross-product matrix: [v]× such that [v]× w = v × w.
#[inline]
pub fn skew(v: &Vec3) -> Mat3 {
    Mat3::new(0.0, -v.z, v.y, v.z, 0.0, -v.x, -v.y, v.x, 0.0)
}

/// Standard gravity (m/s²).
pub const GRAVITY: f64 = 9.81;
