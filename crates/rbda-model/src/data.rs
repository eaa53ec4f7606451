//! Mutable per-call workspace for the algorithms.

use crate::Model;
use rbda_math::{DMat, DVec, Force, Motion, SE3};

/// Algorithm workspace tied to a [`Model`].
///
/// Allocated once per model; algorithms mutate it in place and never resize
/// any field. Results are only as fresh as the last compatible algorithm
/// call — nothing is invalidated automatically, and reading a field whose
/// prerequisite has not been run yields stale values. Callers needing
/// parallel computations allocate one `Data` per thread over a shared model.
#[derive(Debug, Clone)]
#[allow(non_snake_case)] // oMi/liMi/oMf are the standard names for these placements
pub struct Data {
    /// World placement of each joint frame.
    pub oMi: Vec<SE3>,
    /// Placement of each joint frame in its parent's frame.
    pub liMi: Vec<SE3>,
    /// Spatial velocity of each joint, expressed in the joint frame.
    pub v: Vec<Motion>,
    /// Spatial acceleration of each joint, expressed in the joint frame
    /// (pure kinematic, no gravity).
    pub a: Vec<Motion>,
    /// Gravity-augmented accelerations used by the inverse dynamics
    /// recursion (kept apart so `a` always means kinematic acceleration).
    pub a_gf: Vec<Motion>,
    /// Accumulated spatial force at each joint, expressed in the joint frame.
    pub f: Vec<Force>,
    /// World placement of each operational frame.
    pub oMf: Vec<SE3>,
    /// Generalized force output of the inverse dynamics (length nv).
    pub tau: DVec,
    /// World-expressed joint Jacobian (6 x nv).
    pub jacobian: DMat,
    /// Time variation of the world-expressed joint Jacobian (6 x nv).
    pub jacobian_dot: DMat,
}

impl Data {
    /// Allocate a workspace sized for `model`.
    pub fn new(model: &Model) -> Self {
        let nj = model.njoints();
        Self {
            oMi: vec![SE3::identity(); nj],
            liMi: vec![SE3::identity(); nj],
            v: vec![Motion::zero(); nj],
            a: vec![Motion::zero(); nj],
            a_gf: vec![Motion::zero(); nj],
            f: vec![Force::zero(); nj],
            oMf: vec![SE3::identity(); model.nframes()],
            tau: DVec::zeros(model.nv),
            jacobian: DMat::zeros(6, model.nv),
            jacobian_dot: DMat::zeros(6, model.nv),
        }
    }
}
