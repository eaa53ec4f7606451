//! Joint kinds and their kinematic maps.
//!
//! The set of joint kinds is closed: each variant knows its configuration
//! width `nq`, velocity width `nv`, its configuration-to-placement map, its
//! motion subspace S(q), and how to integrate a configuration step.
//!
//! Quaternions in configuration vectors are stored as [x, y, z, w].

use rbda_math::{DMat, Motion, Quat, Vec3, SE3};

/// A joint kind in the kinematic tree.
#[derive(Debug, Clone, PartialEq)]
pub enum JointModel {
    /// Single rotational DOF about a fixed axis (unit vector, joint frame).
    Revolute { axis: Vec3 },
    /// Single translational DOF along a fixed axis (unit vector, joint frame).
    Prismatic { axis: Vec3 },
    /// 3 DOF ball joint; configuration is a unit quaternion (nq = 4, nv = 3).
    Spherical,
    /// 6 DOF free-floating joint; configuration is translation + unit
    /// quaternion (nq = 7, nv = 6). Velocity is [ω; v] in the joint frame.
    FreeFlyer,
    /// 0 DOF rigid attachment (also the universe slot).
    Fixed,
}

impl JointModel {
    /// Revolute joint about the Z axis.
    pub fn revolute_z() -> Self {
        JointModel::Revolute {
            axis: Vec3::new(0.0, 0.0, 1.0),
        }
    }

    /// Configuration width of this joint.
    pub fn nq(&self) -> usize {
        match self {
            JointModel::Revolute { .. } | JointModel::Prismatic { .. } => 1,
            JointModel::Spherical => 4,
            JointModel::FreeFlyer => 7,
            JointModel::Fixed => 0,
        }
    }

    /// Velocity width of this joint.
    pub fn nv(&self) -> usize {
        match self {
            JointModel::Revolute { .. } | JointModel::Prismatic { .. } => 1,
            JointModel::Spherical => 3,
            JointModel::FreeFlyer => 6,
            JointModel::Fixed => 0,
        }
    }

    /// Relative placement of the joint's successor for the configuration
    /// slice `q` (length `nq`).
    pub fn transform(&self, q: &[f64]) -> SE3 {
        match self {
            JointModel::Revolute { axis } => {
                let quat = Quat::from_axis_angle(axis, q[0]);
                SE3::from_quat(&quat, Vec3::zeros())
            }
            JointModel::Prismatic { axis } => SE3::from_translation(axis * q[0]),
            JointModel::Spherical => {
                let quat = Quat::new(q[3], q[0], q[1], q[2]).normalize();
                SE3::from_quat(&quat, Vec3::zeros())
            }
            JointModel::FreeFlyer => {
                let quat = Quat::new(q[6], q[3], q[4], q[5]).normalize();
                SE3::from_quat(&quat, Vec3::new(q[0], q[1], q[2]))
            }
            JointModel::Fixed => SE3::identity(),
        }
    }

    /// Motion subspace matrix S(q), 6 x nv, rows ordered [angular; linear].
    ///
    /// Constant in the joint frame for every kind here; the configuration
    /// argument keeps the interface uniform for kinds where it would not be.
    pub fn motion_subspace(&self, _q: &[f64]) -> DMat {
        match self {
            JointModel::Revolute { axis } => {
                DMat::from_column_slice(6, 1, &[axis.x, axis.y, axis.z, 0.0, 0.0, 0.0])
            }
            JointModel::Prismatic { axis } => {
                DMat::from_column_slice(6, 1, &[0.0, 0.0, 0.0, axis.x, axis.y, axis.z])
            }
            JointModel::Spherical => {
                let mut s = DMat::zeros(6, 3);
                for k in 0..3 {
                    s[(k, k)] = 1.0;
                }
                s
            }
            JointModel::FreeFlyer => DMat::identity(6, 6),
            JointModel::Fixed => DMat::zeros(6, 0),
        }
    }

    /// Joint-frame motion S(q)·vj for the velocity slice `vj` (length `nv`),
    /// computed without forming S.
    pub fn joint_motion(&self, _q: &[f64], vj: &[f64]) -> Motion {
        match self {
            JointModel::Revolute { axis } => Motion::new(axis * vj[0], Vec3::zeros()),
            JointModel::Prismatic { axis } => Motion::new(Vec3::zeros(), axis * vj[0]),
            JointModel::Spherical => {
                Motion::new(Vec3::new(vj[0], vj[1], vj[2]), Vec3::zeros())
            }
            JointModel::FreeFlyer => Motion::new(
                Vec3::new(vj[0], vj[1], vj[2]),
                Vec3::new(vj[3], vj[4], vj[5]),
            ),
            JointModel::Fixed => Motion::zero(),
        }
    }

    /// Integrate a tangent step `dq` (length `nv`) from configuration `q`
    /// (length `nq`), writing the result (length `nq`) into `out`.
    ///
    /// ℝⁿ joints integrate by addition; quaternion joints by composition
    /// with `exp(dq)` in the joint frame.
    pub fn integrate(&self, q: &[f64], dq: &[f64], out: &mut [f64]) {
        match self {
            JointModel::Revolute { .. } | JointModel::Prismatic { .. } => {
                out[0] = q[0] + dq[0];
            }
            JointModel::Spherical => {
                let quat = Quat::new(q[3], q[0], q[1], q[2]);
                let step = Quat::exp(&Vec3::new(dq[0], dq[1], dq[2]));
                let next = quat.mul(&step).normalize();
                out[0] = next.v.x;
                out[1] = next.v.y;
                out[2] = next.v.z;
                out[3] = next.w;
            }
            JointModel::FreeFlyer => {
                let quat = Quat::new(q[6], q[3], q[4], q[5]);
                let rot = quat.to_matrix();
                // local-frame twist step: translate along the current axes
                let dt = rot * Vec3::new(dq[3], dq[4], dq[5]);
                out[0] = q[0] + dt.x;
                out[1] = q[1] + dt.y;
                out[2] = q[2] + dt.z;
                let step = Quat::exp(&Vec3::new(dq[0], dq[1], dq[2]));
                let next = quat.mul(&step).normalize();
                out[3] = next.v.x;
                out[4] = next.v.y;
                out[5] = next.v.z;
                out[6] = next.w;
            }
            JointModel::Fixed => {}
        }
    }

    /// Neutral configuration (zeros, identity quaternions), written into `out`
    /// (length `nq`).
    pub fn neutral(&self, out: &mut [f64]) {
        match self {
            JointModel::Revolute { .. } | JointModel::Prismatic { .. } => out[0] = 0.0,
            JointModel::Spherical => {
                out[..3].fill(0.0);
                out[3] = 1.0;
            }
            JointModel::FreeFlyer => {
                out[..6].fill(0.0);
                out[6] = 1.0;
            }
            JointModel::Fixed => {}
        }
    }
}
