//! Frame-level kinematic extraction.
//!
//! Frames are rigidly attached to joints; everything here transports the
//! owning joint's quantities through the fixed offset and re-expresses them
//! in the requested reference-frame convention. Placements, velocities and
//! the whole-body Jacobian must have been computed by the prerequisite
//! algorithms named on each function — freshness is not re-verified.

use crate::jacobian::{column_motion, write_column};
use crate::{check_dim, AlgoError, Result};
use rbda_math::{DMat, Motion};
use rbda_model::{Data, FrameIndex, Model};

pub use crate::kinematics::{frames_forward_kinematics, update_frame_placements};

/// Convention in which a frame-level quantity is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceFrame {
    /// Axes rigidly attached to the target frame, rotating with it.
    Local,
    /// Axes aligned with the fixed world frame, origin translated to the
    /// target point (orientation-aligned only, not world-fixed).
    World,
}

fn check_frame(model: &Model, frame_id: FrameIndex) -> Result<()> {
    if frame_id >= model.nframes() {
        return Err(AlgoError::FrameIndexOutOfBounds {
            id: frame_id,
            nframes: model.nframes(),
        });
    }
    Ok(())
}

/// Spatial velocity of a frame.
///
/// Precondition: [`crate::forward_kinematics_velocity`] (or any algorithm
/// filling `data.v`) has been run.
pub fn get_frame_velocity(
    model: &Model,
    data: &Data,
    frame_id: FrameIndex,
    rf: ReferenceFrame,
) -> Result<Motion> {
    check_frame(model, frame_id)?;
    let frame = &model.frames[frame_id];
    let local = frame.placement.act_inv(&data.v[frame.parent_joint]);
    Ok(express(model, data, frame_id, local, rf))
}

/// Spatial acceleration of a frame.
///
/// Precondition: [`crate::forward_kinematics_acceleration`] has been run.
pub fn get_frame_acceleration(
    model: &Model,
    data: &Data,
    frame_id: FrameIndex,
    rf: ReferenceFrame,
) -> Result<Motion> {
    check_frame(model, frame_id)?;
    let frame = &model.frames[frame_id];
    let local = frame.placement.act_inv(&data.a[frame.parent_joint]);
    Ok(express(model, data, frame_id, local, rf))
}

fn express(
    model: &Model,
    data: &Data,
    frame_id: FrameIndex,
    local: Motion,
    rf: ReferenceFrame,
) -> Motion {
    match rf {
        ReferenceFrame::Local => local,
        ReferenceFrame::World => {
            // world-aligned axes at the frame point: rotation only, computed
            // from the joint placement so only FK freshness is required
            let frame = &model.frames[frame_id];
            let rot = data.oMi[frame.parent_joint].rotation * frame.placement.rotation;
            Motion::new(rot * local.angular, rot * local.linear)
        }
    }
}

/// Jacobian of a frame in the requested convention, written into `out`
/// (6 x nv).
///
/// Only the column blocks of the frame's ancestor joints are written — the
/// caller must supply a zero-initialized matrix. Preconditions:
/// [`crate::compute_joint_jacobians`] and [`update_frame_placements`] have
/// been run.
pub fn get_frame_jacobian(
    model: &Model,
    data: &Data,
    frame_id: FrameIndex,
    rf: ReferenceFrame,
    out: &mut DMat,
) -> Result<()> {
    check_frame(model, frame_id)?;
    reexpress_columns(model, data, frame_id, rf, &data.jacobian, out)
}

/// Time variation of a frame Jacobian, written into `out` (6 x nv).
///
/// Re-expresses the precomputed whole-body `data.jacobian_dot`; same caller
/// contract as [`get_frame_jacobian`]. Precondition:
/// [`crate::compute_joint_jacobians_time_variation`] has been run.
pub fn get_frame_jacobian_time_variation(
    model: &Model,
    data: &Data,
    frame_id: FrameIndex,
    rf: ReferenceFrame,
    out: &mut DMat,
) -> Result<()> {
    check_frame(model, frame_id)?;
    reexpress_columns(model, data, frame_id, rf, &data.jacobian_dot, out)
}

fn reexpress_columns(
    model: &Model,
    data: &Data,
    frame_id: FrameIndex,
    rf: ReferenceFrame,
    world_jac: &DMat,
    out: &mut DMat,
) -> Result<()> {
    check_dim("out (columns)", model.nv, out.ncols())?;
    check_dim("out (rows)", 6, out.nrows())?;

    let placement = data.oMf[frame_id];
    let mut j = model.frames[frame_id].parent_joint;
    while j > 0 {
        let idx = model.idx_v[j];
        for c in 0..model.joints[j].nv() {
            let col = column_motion(world_jac, idx + c);
            let expressed = match rf {
                ReferenceFrame::Local => placement.act_inv(&col),
                ReferenceFrame::World => Motion::new(
                    col.angular,
                    col.linear - placement.translation.cross(&col.angular),
                ),
            };
            write_column(out, idx + c, &expressed);
        }
        j = model.parents[j];
    }
    Ok(())
}
