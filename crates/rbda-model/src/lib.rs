//! Model and data types for the rbda rigid-body library.
//!
//! `Model` is the immutable description of a kinematic tree (joints, their
//! placements, body inertias, attached frames). `Data` is the mutable
//! per-call workspace every algorithm reads from and writes into.

pub mod data;
pub mod frame;
pub mod joint;
pub mod model;

pub use data::Data;
pub use frame::Frame;
pub use joint::JointModel;
pub use model::{Model, ModelBuilder, ModelError};

/// Index of a joint in the kinematic tree (0 is the universe).
pub type JointIndex = usize;
/// Index of a frame attached to the tree.
pub type FrameIndex = usize;
