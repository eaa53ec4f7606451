//! Operational frames: named points rigidly attached to joints.

use crate::JointIndex;
use rbda_math::SE3;

/// A named frame rigidly attached to a joint through a fixed offset.
///
/// Frames are annotations on the tree, not tree nodes: they carry no inertia
/// and no degrees of freedom.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Frame name, unique within a model.
    pub name: String,
    /// Joint the frame is attached to.
    pub parent_joint: JointIndex,
    /// Fixed placement of the frame in the joint frame.
    pub placement: SE3,
}

impl Frame {
    /// Create a frame attached to `parent_joint` with the given offset.
    pub fn new(name: impl Into<String>, parent_joint: JointIndex, placement: SE3) -> Self {
        Self {
            name: name.into(),
            parent_joint,
            placement,
        }
    }
}
