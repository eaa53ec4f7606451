//! Recursive spatial-algebra algorithms over a kinematic tree.
//!
//! Forward kinematics, the recursive Newton-Euler inverse dynamics, joint
//! Jacobians, and frame-level kinematic extraction. Every entry point takes
//! the immutable [`rbda_model::Model`] and an exclusively borrowed
//! [`rbda_model::Data`] workspace; input dimensions are validated before any
//! mutation, after which the computation runs to completion with no early
//! exit.

pub mod frames;
pub mod jacobian;
pub mod kinematics;
pub mod rnea;

pub use frames::{
    frames_forward_kinematics, get_frame_acceleration, get_frame_jacobian,
    get_frame_jacobian_time_variation, get_frame_velocity, ReferenceFrame,
};
pub use jacobian::{
    compute_joint_jacobians, compute_joint_jacobians_time_variation, get_joint_jacobian,
};
pub use kinematics::{
    forward_kinematics, forward_kinematics_acceleration, forward_kinematics_velocity,
    update_frame_placements,
};
pub use rnea::{non_linear_effects, rnea, rnea_with_external_forces};

use thiserror::Error;

/// Errors surfaced by the algorithm entry points.
///
/// Only input shape problems are detected; stale intermediate results (a
/// prerequisite algorithm not having been run) are a documented caller
/// responsibility and go unreported.
#[derive(Debug, Error)]
pub enum AlgoError {
    #[error("{what} has size {got}, expected {expected}")]
    DimensionMismatch {
        what: &'static str,
        expected: usize,
        got: usize,
    },
    #[error("frame index {id} out of bounds (model has {nframes} frames)")]
    FrameIndexOutOfBounds { id: usize, nframes: usize },
    #[error("joint index {id} out of bounds (model has {njoints} joints)")]
    JointIndexOutOfBounds { id: usize, njoints: usize },
}

/// Result alias for the algorithms.
pub type Result<T> = std::result::Result<T, AlgoError>;

#[inline]
pub(crate) fn check_dim(what: &'static str, expected: usize, got: usize) -> Result<()> {
    if expected != got {
        return Err(AlgoError::DimensionMismatch {
            what,
            expected,
            got,
        });
    }
    Ok(())
}
