//! rbda — rigid-body dynamics algorithms over kinematic trees.
//!
//! This is the umbrella crate re-exporting the public surface of the
//! sub-crates: spatial algebra (`rbda-math`), the kinematic tree model and
//! its workspace (`rbda-model`), and the recursive algorithms
//! (`rbda-rigid`).
//!
//! Typical call sequence:
//!
//! ```
//! use rbda::{Data, Inertia, JointModel, ModelBuilder, Vec3, SE3};
//!
//! let mut builder = ModelBuilder::new();
//! let joint = builder
//!     .add_joint(
//!         0,
//!         JointModel::revolute_z(),
//!         SE3::identity(),
//!         Inertia::point_mass(1.0, Vec3::new(1.0, 0.0, 0.0)),
//!         "rotor",
//!     )
//!     .unwrap();
//! builder
//!     .add_frame("tip", joint, SE3::from_translation(Vec3::new(1.0, 0.0, 0.0)))
//!     .unwrap();
//! let model = builder.build();
//! let mut data = Data::new(&model);
//!
//! let q = model.neutral();
//! let v = rbda::DVec::zeros(model.nv);
//! let tau = rbda::rnea(&model, &mut data, &q, &v, &v.clone()).unwrap();
//! assert_eq!(tau.len(), model.nv);
//! ```

pub use rbda_math::{
    self, skew, DMat, DVec, Force, Inertia, Mat3, Mat6, Motion, Quat, Vec3, Vec6, GRAVITY, SE3,
};
pub use rbda_model::{
    self, Data, Frame, FrameIndex, JointIndex, JointModel, Model, ModelBuilder, ModelError,
};
pub use rbda_rigid::{
    self, compute_joint_jacobians, compute_joint_jacobians_time_variation, forward_kinematics,
    forward_kinematics_acceleration, forward_kinematics_velocity, frames_forward_kinematics,
    get_frame_acceleration, get_frame_jacobian, get_frame_jacobian_time_variation,
    get_frame_velocity, get_joint_jacobian, non_linear_effects, rnea, rnea_with_external_forces,
    update_frame_placements, AlgoError, ReferenceFrame,
};
