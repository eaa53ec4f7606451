//! The immutable kinematic tree description and its builder.

use crate::{Frame, FrameIndex, JointIndex, JointModel};
use rbda_math::{DVec, Inertia, Motion, Vec3, GRAVITY, SE3};
use thiserror::Error;

/// Errors raised while assembling a model.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("parent joint index {parent} out of range (model has {njoints} joints)")]
    ParentOutOfRange { parent: usize, njoints: usize },
    #[error("duplicate name: {0}")]
    DuplicateName(String),
}

/// Immutable description of a kinematic tree.
///
/// Joints are indexed 1..njoints; index 0 is the virtual universe joint.
/// Indices are handed out in insertion order, so every joint's index is
/// greater than its parent's — forward iteration visits parents before
/// children and reverse iteration children before parents, with no sorting
/// at call time.
///
/// A `Model` is immutable after `build()` and safe to share across threads;
/// each concurrent computation owns its own [`crate::Data`].
#[derive(Debug, Clone)]
pub struct Model {
    /// Joint kinds, indexed by joint (entry 0 is the universe, `Fixed`).
    pub joints: Vec<JointModel>,
    /// Parent joint of each joint (`parents[i] < i`; `parents[0] == 0`).
    pub parents: Vec<JointIndex>,
    /// Fixed placement of each joint frame in its parent's frame.
    pub joint_placements: Vec<SE3>,
    /// Spatial inertia of the body attached to each joint.
    pub inertias: Vec<Inertia>,
    /// Joint names, indexed by joint.
    pub joint_names: Vec<String>,
    /// Offset of each joint's slice in a configuration vector.
    pub idx_q: Vec<usize>,
    /// Offset of each joint's slice in a velocity vector.
    pub idx_v: Vec<usize>,
    /// Total configuration width.
    pub nq: usize,
    /// Total velocity width.
    pub nv: usize,
    /// Gravity field as a spatial motion (linear part, world frame).
    pub gravity: Motion,
    /// Operational frames attached to the tree.
    pub frames: Vec<Frame>,
}

impl Model {
    /// Number of joints including the universe.
    #[inline]
    pub fn njoints(&self) -> usize {
        self.joints.len()
    }

    /// Number of operational frames.
    #[inline]
    pub fn nframes(&self) -> usize {
        self.frames.len()
    }

    /// Forward traversal: ascending joint indices, parent before child.
    #[inline]
    pub fn joint_ids(&self) -> std::ops::Range<JointIndex> {
        1..self.njoints()
    }

    /// Backward traversal: descending joint indices, child before parent.
    #[inline]
    pub fn joint_ids_reversed(&self) -> std::iter::Rev<std::ops::Range<JointIndex>> {
        (1..self.njoints()).rev()
    }

    /// Configuration slice of joint `i` within `q`.
    #[inline]
    pub fn q_slice<'a>(&self, i: JointIndex, q: &'a DVec) -> &'a [f64] {
        &q.as_slice()[self.idx_q[i]..self.idx_q[i] + self.joints[i].nq()]
    }

    /// Velocity slice of joint `i` within `v`.
    #[inline]
    pub fn v_slice<'a>(&self, i: JointIndex, v: &'a DVec) -> &'a [f64] {
        &v.as_slice()[self.idx_v[i]..self.idx_v[i] + self.joints[i].nv()]
    }

    /// Look up a joint index by name.
    pub fn joint_id(&self, name: &str) -> Option<JointIndex> {
        self.joint_names.iter().position(|n| n == name)
    }

    /// Look up a frame index by name.
    pub fn frame_id(&self, name: &str) -> Option<FrameIndex> {
        self.frames.iter().position(|f| f.name == name)
    }

    /// Neutral configuration: zeros for ℝⁿ joints, identity quaternions.
    pub fn neutral(&self) -> DVec {
        let mut q = DVec::zeros(self.nq);
        for i in self.joint_ids() {
            let idx = self.idx_q[i];
            self.joints[i].neutral(&mut q.as_mut_slice()[idx..idx + self.joints[i].nq()]);
        }
        q
    }

    /// Configuration-space step: `q ⊕ dq` with each joint's own integration
    /// rule (`dq` has length `nv`).
    pub fn integrate(&self, q: &DVec, dq: &DVec) -> DVec {
        let mut out = DVec::zeros(self.nq);
        for i in self.joint_ids() {
            let joint = &self.joints[i];
            let (iq, iv) = (self.idx_q[i], self.idx_v[i]);
            joint.integrate(
                &q.as_slice()[iq..iq + joint.nq()],
                &dq.as_slice()[iv..iv + joint.nv()],
                &mut out.as_mut_slice()[iq..iq + joint.nq()],
            );
        }
        out
    }
}

/// Incremental builder for a [`Model`].
///
/// Joint indices are handed out in insertion order, which is what upholds
/// the parent-before-child index invariant the traversals rely on.
pub struct ModelBuilder {
    model: Model,
}

impl ModelBuilder {
    /// Start an empty model (universe joint only, default gravity −Z).
    pub fn new() -> Self {
        Self {
            model: Model {
                joints: vec![JointModel::Fixed],
                parents: vec![0],
                joint_placements: vec![SE3::identity()],
                inertias: vec![Inertia::zero()],
                joint_names: vec!["universe".to_string()],
                idx_q: vec![0],
                idx_v: vec![0],
                nq: 0,
                nv: 0,
                gravity: Motion::new(Vec3::zeros(), Vec3::new(0.0, 0.0, -GRAVITY)),
                frames: Vec::new(),
            },
        }
    }

    /// Set the gravity field (linear part, world frame).
    pub fn gravity(mut self, g: Vec3) -> Self {
        self.model.gravity = Motion::new(Vec3::zeros(), g);
        self
    }

    /// Add a joint (and the body rigidly attached to it) under `parent`.
    ///
    /// `placement` is the joint frame in the parent frame; `inertia` is the
    /// attached body's spatial inertia in the joint frame. Returns the new
    /// joint's index.
    pub fn add_joint(
        &mut self,
        parent: JointIndex,
        joint: JointModel,
        placement: SE3,
        inertia: Inertia,
        name: &str,
    ) -> Result<JointIndex, ModelError> {
        let m = &mut self.model;
        if parent >= m.joints.len() {
            return Err(ModelError::ParentOutOfRange {
                parent,
                njoints: m.joints.len(),
            });
        }
        if m.joint_names.iter().any(|n| n == name) {
            return Err(ModelError::DuplicateName(name.to_string()));
        }
        let idx = m.joints.len();
        m.idx_q.push(m.nq);
        m.idx_v.push(m.nv);
        m.nq += joint.nq();
        m.nv += joint.nv();
        m.joints.push(joint);
        m.parents.push(parent);
        m.joint_placements.push(placement);
        m.inertias.push(inertia);
        m.joint_names.push(name.to_string());
        Ok(idx)
    }

    /// Attach a named frame to `parent_joint` with a fixed offset.
    pub fn add_frame(
        &mut self,
        name: &str,
        parent_joint: JointIndex,
        placement: SE3,
    ) -> Result<FrameIndex, ModelError> {
        let m = &mut self.model;
        if parent_joint >= m.joints.len() {
            return Err(ModelError::ParentOutOfRange {
                parent: parent_joint,
                njoints: m.joints.len(),
            });
        }
        if m.frames.iter().any(|f| f.name == name) {
            return Err(ModelError::DuplicateName(name.to_string()));
        }
        m.frames.push(Frame::new(name, parent_joint, placement));
        Ok(m.frames.len() - 1)
    }

    /// Finalize the model.
    pub fn build(self) -> Model {
        self.model
    }
}

impl Default for ModelBuilder {
    fn default() -> Self {
        Self::new()
    }
}
