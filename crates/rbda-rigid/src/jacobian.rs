//! Whole-body joint Jacobians and their time variation.
//!
//! `data.jacobian` holds every joint's motion-subspace columns transported
//! to the world frame; frame- and joint-level extraction routines then only
//! re-select and re-express columns.

use crate::{check_dim, frames::ReferenceFrame, AlgoError, Result};
use rbda_math::{DMat, DVec, Motion};
use rbda_model::{Data, JointIndex, Model};

/// Compute the world-expressed joint Jacobian into `data.jacobian`.
///
/// Runs placement forward kinematics, then writes column block `idx_v[j]` of
/// each joint j as `oMi[j] · S_j(q_j)`.
pub fn compute_joint_jacobians(model: &Model, data: &mut Data, q: &DVec) -> Result<()> {
    crate::kinematics::forward_kinematics(model, data, q)?;
    fill_world_jacobian(model, data, q);
    Ok(())
}

/// Compute both the world-expressed joint Jacobian and its time variation
/// into `data.jacobian` / `data.jacobian_dot`.
///
/// Column block of joint j: `d/dt (oMi[j]·S_j) = (oMi[j]·v[j]) × (oMi[j]·S_j)`.
pub fn compute_joint_jacobians_time_variation(
    model: &Model,
    data: &mut Data,
    q: &DVec,
    v: &DVec,
) -> Result<()> {
    crate::kinematics::forward_kinematics_velocity(model, data, q, v)?;
    fill_world_jacobian(model, data, q);

    for j in model.joint_ids() {
        let ov = data.oMi[j].act(&data.v[j]);
        let idx = model.idx_v[j];
        for c in 0..model.joints[j].nv() {
            let col = column_motion(&data.jacobian, idx + c);
            write_column(&mut data.jacobian_dot, idx + c, &ov.cross(&col));
        }
    }
    Ok(())
}

/// Extract the Jacobian of joint `joint_id` in the requested reference-frame
/// convention, writing the ancestor column blocks into `out` (6 x nv).
///
/// Only ancestor columns are written; the caller supplies a zero-initialized
/// matrix. Precondition: [`compute_joint_jacobians`] has been run.
pub fn get_joint_jacobian(
    model: &Model,
    data: &Data,
    joint_id: JointIndex,
    rf: ReferenceFrame,
    out: &mut DMat,
) -> Result<()> {
    if joint_id >= model.njoints() {
        return Err(AlgoError::JointIndexOutOfBounds {
            id: joint_id,
            njoints: model.njoints(),
        });
    }
    check_dim("out (columns)", model.nv, out.ncols())?;
    check_dim("out (rows)", 6, out.nrows())?;

    let placement = data.oMi[joint_id];
    let mut j = joint_id;
    while j > 0 {
        let idx = model.idx_v[j];
        for c in 0..model.joints[j].nv() {
            let col = column_motion(&data.jacobian, idx + c);
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

pub(crate) fn fill_world_jacobian(model: &Model, data: &mut Data, q: &DVec) {
    data.jacobian.fill(0.0);
    for j in model.joint_ids() {
        let s = model.joints[j].motion_subspace(model.q_slice(j, q));
        let idx = model.idx_v[j];
        for c in 0..model.joints[j].nv() {
            let local = Motion::new(
                rbda_math::Vec3::new(s[(0, c)], s[(1, c)], s[(2, c)]),
                rbda_math::Vec3::new(s[(3, c)], s[(4, c)], s[(5, c)]),
            );
            write_column(&mut data.jacobian, idx + c, &data.oMi[j].act(&local));
        }
    }
}

pub(crate) fn column_motion(jac: &DMat, c: usize) -> Motion {
    Motion::new(
        rbda_math::Vec3::new(jac[(0, c)], jac[(1, c)], jac[(2, c)]),
        rbda_math::Vec3::new(jac[(3, c)], jac[(4, c)], jac[(5, c)]),
    )
}

pub(crate) fn write_column(jac: &mut DMat, c: usize, m: &Motion) {
    jac[(0, c)] = m.angular.x;
    jac[(1, c)] = m.angular.y;
    jac[(2, c)] = m.angular.z;
    jac[(3, c)] = m.linear.x;
    jac[(4, c)] = m.linear.y;
    jac[(5, c)] = m.linear.z;
}
