//! Recursive Newton-Euler Algorithm (RNEA) — inverse dynamics.
//!
//! Given (q, v, a), compute the generalized forces tau such that
//! `tau = M(q)·a + C(q,v)·v + g(q) − Jᵀ·fext`, without ever forming M, C
//! or g. Two sweeps over the tree: a forward pass propagating placements,
//! velocities and gravity-augmented accelerations and seeding each joint's
//! Newton-Euler force, and a backward pass accumulating forces into parents
//! and projecting them onto the joint subspaces.

use crate::{check_dim, Result};
use rbda_math::{DVec, Force};
use rbda_model::{Data, Model};

/// Inverse dynamics: generalized forces for the motion `(q, v, a)`.
///
/// Writes the result into `data.tau` and returns a reference to it.
pub fn rnea<'a>(model: &Model, data: &'a mut Data, q: &DVec, v: &DVec, a: &DVec) -> Result<&'a DVec> {
    rnea_inner(model, data, q, v, a, None)
}

/// Inverse dynamics with per-joint external forces.
///
/// `fext` holds one wrench per joint (including the universe slot, which is
/// ignored), each expressed in the local frame of its joint.
pub fn rnea_with_external_forces<'a>(
    model: &Model,
    data: &'a mut Data,
    q: &DVec,
    v: &DVec,
    a: &DVec,
    fext: &[Force],
) -> Result<&'a DVec> {
    check_dim("fext", model.njoints(), fext.len())?;
    rnea_inner(model, data, q, v, a, Some(fext))
}

/// Non-linear effects: Coriolis, centrifugal and gravitational forces.
///
/// Exactly `rnea(model, data, q, v, 0)` — the zero-acceleration path is
/// taken literally, so the results agree bit for bit.
pub fn non_linear_effects<'a>(
    model: &Model,
    data: &'a mut Data,
    q: &DVec,
    v: &DVec,
) -> Result<&'a DVec> {
    let a_zero = DVec::zeros(model.nv);
    rnea_inner(model, data, q, v, &a_zero, None)
}

fn rnea_inner<'a>(
    model: &Model,
    data: &'a mut Data,
    q: &DVec,
    v: &DVec,
    a: &DVec,
    fext: Option<&[Force]>,
) -> Result<&'a DVec> {
    check_dim("q", model.nq, q.len())?;
    check_dim("v", model.nv, v.len())?;
    check_dim("a", model.nv, a.len())?;

    // the universe "accelerates" upward against gravity, which charges every
    // body with the gravitational force as it propagates down the tree
    data.a_gf[0] = -model.gravity;
    // the backward pass accumulates the root reaction here
    data.f[0] = Force::zero();

    // ── Forward pass: placements, velocities, accelerations, body forces ──
    for i in model.joint_ids() {
        let qi = model.q_slice(i, q);
        let joint = &model.joints[i];
        data.liMi[i] = model.joint_placements[i] * joint.transform(qi);
        let parent = model.parents[i];
        data.oMi[i] = data.oMi[parent] * data.liMi[i];

        let vj = joint.joint_motion(qi, model.v_slice(i, v));
        data.v[i] = data.liMi[i].act_inv(&data.v[parent]) + vj;
        data.a_gf[i] = data.liMi[i].act_inv(&data.a_gf[parent])
            + joint.joint_motion(qi, model.v_slice(i, a))
            + data.v[i].cross(&vj);

        data.f[i] = model.inertias[i].body_force(&data.v[i], &data.a_gf[i]);
        if let Some(fext) = fext {
            data.f[i] = data.f[i] - fext[i];
        }
    }

    // ── Backward pass: project onto joint subspaces, accumulate into parents ──
    for i in model.joint_ids_reversed() {
        let joint = &model.joints[i];
        let s = joint.motion_subspace(model.q_slice(i, q));
        let tau_i = s.transpose() * data.f[i].to_vector();
        let idx = model.idx_v[i];
        for k in 0..joint.nv() {
            data.tau[idx + k] = tau_i[k];
        }
        let parent = model.parents[i];
        data.f[parent] = data.f[parent] + data.liMi[i].act_force(&data.f[i]);
    }

    Ok(&data.tau)
}
