//! Forward kinematics — placement, velocity and acceleration propagation.

use crate::{check_dim, Result};
use rbda_math::DVec;
use rbda_model::{Data, Model};

/// Propagate joint placements down the tree for the configuration `q`.
///
/// Fills `data.liMi` (parent-relative) and `data.oMi` (world) for every
/// joint; the universe stays at identity.
pub fn forward_kinematics(model: &Model, data: &mut Data, q: &DVec) -> Result<()> {
    check_dim("q", model.nq, q.len())?;

    for i in model.joint_ids() {
        let qi = model.q_slice(i, q);
        data.liMi[i] = model.joint_placements[i] * model.joints[i].transform(qi);
        data.oMi[i] = data.oMi[model.parents[i]] * data.liMi[i];
    }
    Ok(())
}

/// Propagate placements and spatial velocities for `(q, v)`.
///
/// Velocities are expressed in each joint's own frame:
/// `v[i] = liMi[i]⁻¹ · v[parent] + S_i(q_i) · v̇_i`.
pub fn forward_kinematics_velocity(model: &Model, data: &mut Data, q: &DVec, v: &DVec) -> Result<()> {
    check_dim("q", model.nq, q.len())?;
    check_dim("v", model.nv, v.len())?;

    for i in model.joint_ids() {
        let qi = model.q_slice(i, q);
        let joint = &model.joints[i];
        data.liMi[i] = model.joint_placements[i] * joint.transform(qi);
        let parent = model.parents[i];
        data.oMi[i] = data.oMi[parent] * data.liMi[i];
        data.v[i] = data.liMi[i].act_inv(&data.v[parent]) + joint.joint_motion(qi, model.v_slice(i, v));
    }
    Ok(())
}

/// Propagate placements, velocities and accelerations for `(q, v, a)`.
///
/// `a[i] = liMi[i]⁻¹ · a[parent] + S_i · a_i + v[i] × (S_i · v̇_i)`.
/// Purely kinematic: gravity never enters here (it belongs to dynamics).
pub fn forward_kinematics_acceleration(
    model: &Model,
    data: &mut Data,
    q: &DVec,
    v: &DVec,
    a: &DVec,
) -> Result<()> {
    check_dim("q", model.nq, q.len())?;
    check_dim("v", model.nv, v.len())?;
    check_dim("a", model.nv, a.len())?;

    for i in model.joint_ids() {
        let qi = model.q_slice(i, q);
        let joint = &model.joints[i];
        data.liMi[i] = model.joint_placements[i] * joint.transform(qi);
        let parent = model.parents[i];
        data.oMi[i] = data.oMi[parent] * data.liMi[i];

        let vj = joint.joint_motion(qi, model.v_slice(i, v));
        data.v[i] = data.liMi[i].act_inv(&data.v[parent]) + vj;
        data.a[i] = data.liMi[i].act_inv(&data.a[parent])
            + joint.joint_motion(qi, model.v_slice(i, a))
            + data.v[i].cross(&vj);
    }
    Ok(())
}

/// Refresh the world placement of every operational frame from the joint
/// placements currently stored in `data`.
///
/// Convenience mode: no configuration is taken, so the result is only as
/// fresh as the last forward-kinematics call that wrote `data.oMi`.
pub fn update_frame_placements(model: &Model, data: &mut Data) {
    for (k, frame) in model.frames.iter().enumerate() {
        data.oMf[k] = data.oMi[frame.parent_joint] * frame.placement;
    }
}

/// Placement-only forward kinematics followed by a frame placement refresh.
pub fn frames_forward_kinematics(model: &Model, data: &mut Data, q: &DVec) -> Result<()> {
    forward_kinematics(model, data, q)?;
    update_frame_placements(model, data);
    Ok(())
}
