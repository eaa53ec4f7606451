//! Cross-crate scenario tests for the rbda algorithms.

use approx::assert_relative_eq;
use rand::{rngs::StdRng, Rng, SeedableRng};
use rbda::{
    compute_joint_jacobians, forward_kinematics_velocity, frames_forward_kinematics,
    get_frame_jacobian, get_frame_velocity, non_linear_effects, rnea, update_frame_placements,
    DMat, DVec, Data, Inertia, JointModel, Model, ModelBuilder, Quat, ReferenceFrame, Vec3,
    GRAVITY, SE3,
};

/// Pendulum: revolute about ŷ at the origin, point mass m hanging at
/// (0, 0, −length). Holding torque at angle θ from the vertical is
/// m·g·length·sin(θ).
fn make_pendulum(mass: f64, length: f64) -> Model {
    let mut builder = ModelBuilder::new();
    builder
        .add_joint(
            0,
            JointModel::Revolute {
                axis: Vec3::new(0.0, 1.0, 0.0),
            },
            SE3::identity(),
            Inertia::point_mass(mass, Vec3::new(0.0, 0.0, -length)),
            "swing",
        )
        .unwrap();
    builder.build()
}

/// Two-joint planar chain: revolute about ŷ, link lengths 1, unit point
/// masses at each tip, fully extended along x̂ at q = 0.
fn make_two_link() -> Model {
    let mut builder = ModelBuilder::new();
    let axis = Vec3::new(0.0, 1.0, 0.0);
    let j1 = builder
        .add_joint(
            0,
            JointModel::Revolute { axis },
            SE3::identity(),
            Inertia::point_mass(1.0, Vec3::new(1.0, 0.0, 0.0)),
            "shoulder",
        )
        .unwrap();
    let j2 = builder
        .add_joint(
            j1,
            JointModel::Revolute { axis },
            SE3::from_translation(Vec3::new(1.0, 0.0, 0.0)),
            Inertia::point_mass(1.0, Vec3::new(1.0, 0.0, 0.0)),
            "elbow",
        )
        .unwrap();
    builder
        .add_frame("tip", j2, SE3::from_translation(Vec3::new(1.0, 0.0, 0.0)))
        .unwrap();
    builder.build()
}

/// Spatial three-joint chain with mixed axes, used for randomized checks.
fn make_spatial_chain() -> Model {
    let mut builder = ModelBuilder::new();
    let j1 = builder
        .add_joint(
            0,
            JointModel::revolute_z(),
            SE3::identity(),
            Inertia::point_mass(1.2, Vec3::new(0.3, 0.0, 0.0)),
            "yaw",
        )
        .unwrap();
    let j2 = builder
        .add_joint(
            j1,
            JointModel::Revolute {
                axis: Vec3::new(0.0, 1.0, 0.0),
            },
            SE3::from_translation(Vec3::new(0.5, 0.0, 0.1)),
            Inertia::point_mass(0.8, Vec3::new(0.4, 0.0, 0.0)),
            "pitch",
        )
        .unwrap();
    let j3 = builder
        .add_joint(
            j2,
            JointModel::Revolute {
                axis: Vec3::new(1.0, 0.0, 0.0),
            },
            SE3::from_translation(Vec3::new(0.4, 0.2, 0.0)),
            Inertia::point_mass(0.5, Vec3::new(0.3, 0.0, 0.0)),
            "roll",
        )
        .unwrap();
    builder
        .add_frame(
            "hand",
            j3,
            SE3::from_translation(Vec3::new(0.3, 0.0, -0.1)),
        )
        .unwrap();
    builder.build()
}

fn random_dvec(rng: &mut StdRng, n: usize) -> DVec {
    DVec::from_fn(n, |_, _| rng.gen_range(-1.0..1.0))
}

#[test]
fn pendulum_gravity_torque() {
    let (mass, length) = (1.3, 0.7);
    let model = make_pendulum(mass, length);
    let mut data = Data::new(&model);
    let zero = DVec::zeros(1);

    for theta in [0.0, 0.2, 1.0, -0.6, std::f64::consts::FRAC_PI_2] {
        let q = DVec::from_vec(vec![theta]);
        let tau = rnea(&model, &mut data, &q, &zero, &zero).unwrap();
        assert_relative_eq!(
            tau[0],
            mass * GRAVITY * length * theta.sin(),
            epsilon = 1e-9
        );
    }
}

#[test]
fn two_link_extended_gravity_torques() {
    let model = make_two_link();
    let mut data = Data::new(&model);
    let q = DVec::zeros(2);
    let zero = DVec::zeros(2);
    let tau = rnea(&model, &mut data, &q, &zero, &zero).unwrap();

    // Holding the arm horizontal: gravity exerts +mgd about +ŷ for a mass
    // at distance d along x̂, so the actuators push with the opposite sign.
    // Shoulder carries masses at 1 m and 2 m, elbow its own tip mass at 1 m.
    assert_relative_eq!(tau[0], -3.0 * GRAVITY, epsilon = 1e-9);
    assert_relative_eq!(tau[1], -GRAVITY, epsilon = 1e-9);
}

#[test]
fn nle_equals_rnea_with_zero_acceleration() {
    let model = make_spatial_chain();
    let mut data = Data::new(&model);
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..20 {
        let q = random_dvec(&mut rng, model.nq);
        let v = random_dvec(&mut rng, model.nv);
        let zero = DVec::zeros(model.nv);

        let tau_rnea = rnea(&model, &mut data, &q, &v, &zero).unwrap().clone();
        let tau_nle = non_linear_effects(&model, &mut data, &q, &v).unwrap();
        // bit-for-bit: nle literally takes the zero-acceleration path
        for k in 0..model.nv {
            assert_eq!(tau_rnea[k], tau_nle[k]);
        }
    }
}

#[test]
fn rnea_is_affine_in_acceleration() {
    let model = make_spatial_chain();
    let mut data = Data::new(&model);
    let mut rng = StdRng::seed_from_u64(7);

    let q = random_dvec(&mut rng, model.nq);
    let v = random_dvec(&mut rng, model.nv);
    let a1 = random_dvec(&mut rng, model.nv);
    let a2 = random_dvec(&mut rng, model.nv);
    let zero = DVec::zeros(model.nv);

    let tau0 = rnea(&model, &mut data, &q, &v, &zero).unwrap().clone();
    let tau1 = rnea(&model, &mut data, &q, &v, &a1).unwrap().clone();
    let tau2 = rnea(&model, &mut data, &q, &v, &a2).unwrap().clone();
    let tau12 = rnea(&model, &mut data, &q, &v, &(&a1 + &a2)).unwrap().clone();

    let lhs = &tau12 - &tau0;
    let rhs = (&tau1 - &tau0) + (&tau2 - &tau0);
    for k in 0..model.nv {
        assert_relative_eq!(lhs[k], rhs[k], epsilon = 1e-9);
    }
}

#[test]
fn se3_inverse_roundtrip_randomized() {
    let mut rng = StdRng::seed_from_u64(123);
    for _ in 0..100 {
        let axis = Vec3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        let axis = if axis.norm() < 1e-3 {
            Vec3::new(0.0, 0.0, 1.0)
        } else {
            axis.normalize()
        };
        let angle = rng.gen_range(-std::f64::consts::PI..std::f64::consts::PI);
        let translation = Vec3::new(
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
        );
        let m = SE3::from_quat(&Quat::from_axis_angle(&axis, angle), translation);

        let roundtrip = m * m.inverse();
        assert_relative_eq!(roundtrip.translation.norm(), 0.0, epsilon = 1e-10);
        for i in 0..3 {
            for j in 0..3 {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert_relative_eq!(roundtrip.rotation[(i, j)], expected, epsilon = 1e-10);
            }
        }
    }
}

#[test]
fn frame_jacobian_matches_finite_differences() {
    let model = make_spatial_chain();
    let mut data = Data::new(&model);
    let frame_id = model.frame_id("hand").unwrap();
    let q0 = DVec::from_vec(vec![0.3, -0.7, 0.5]);

    compute_joint_jacobians(&model, &mut data, &q0).unwrap();
    update_frame_placements(&model, &mut data);
    let mut jac = DMat::zeros(6, model.nv);
    get_frame_jacobian(&model, &data, frame_id, ReferenceFrame::World, &mut jac).unwrap();

    let h = 1e-6;
    let mut fd_data = Data::new(&model);
    for k in 0..model.nv {
        let mut dq = DVec::zeros(model.nv);
        dq[k] = h;
        let q_plus = model.integrate(&q0, &dq);
        dq[k] = -h;
        let q_minus = model.integrate(&q0, &dq);

        frames_forward_kinematics(&model, &mut fd_data, &q_plus).unwrap();
        let p_plus = fd_data.oMf[frame_id].translation;
        frames_forward_kinematics(&model, &mut fd_data, &q_minus).unwrap();
        let p_minus = fd_data.oMf[frame_id].translation;

        // world-aligned convention: linear rows are the derivative of the
        // frame point's world position
        let fd = (p_plus - p_minus) / (2.0 * h);
        for r in 0..3 {
            assert_relative_eq!(jac[(3 + r, k)], fd[r], epsilon = 1e-6);
        }
    }
}

#[test]
fn world_and_local_frame_velocity_differ_by_rotation() {
    let model = make_spatial_chain();
    let mut data = Data::new(&model);
    let frame_id = model.frame_id("hand").unwrap();
    let mut rng = StdRng::seed_from_u64(99);

    let q = random_dvec(&mut rng, model.nq);
    let v = random_dvec(&mut rng, model.nv);
    forward_kinematics_velocity(&model, &mut data, &q, &v).unwrap();
    update_frame_placements(&model, &mut data);

    let local = get_frame_velocity(&model, &data, frame_id, ReferenceFrame::Local).unwrap();
    let world = get_frame_velocity(&model, &data, frame_id, ReferenceFrame::World).unwrap();
    let rot = data.oMf[frame_id].rotation;
    assert_relative_eq!(world.linear, rot * local.linear, epsilon = 1e-12);
    assert_relative_eq!(world.angular, rot * local.angular, epsilon = 1e-12);
}

#[test]
fn shared_model_independent_data() {
    // one immutable model, one workspace per "thread"
    let model = make_two_link();
    let mut data_a = Data::new(&model);
    let mut data_b = Data::new(&model);
    let zero = DVec::zeros(2);

    let q_a = DVec::from_vec(vec![0.1, 0.2]);
    let q_b = DVec::from_vec(vec![-1.0, 0.5]);
    let tau_a = rnea(&model, &mut data_a, &q_a, &zero, &zero).unwrap().clone();
    let tau_b = rnea(&model, &mut data_b, &q_b, &zero, &zero).unwrap().clone();

    // recompute a with a fresh workspace: b's calls did not interfere
    let mut data_c = Data::new(&model);
    let tau_c = rnea(&model, &mut data_c, &q_a, &zero, &zero).unwrap();
    for k in 0..2 {
        assert_eq!(tau_a[k], tau_c[k]);
        assert_ne!(tau_a[k], tau_b[k]);
    }
}

#[test]
fn rnea_external_forces_shift_gravity_torque() {
    let model = make_pendulum(1.0, 1.0);
    let mut data = Data::new(&model);
    let q = DVec::from_vec(vec![0.4]);
    let zero = DVec::zeros(1);

    let tau_plain = rnea(&model, &mut data, &q, &zero, &zero).unwrap().clone();

    // a wrench opposing the joint axis directly shifts the projected torque
    let fext = vec![
        rbda::Force::zero(),
        rbda::Force::new(Vec3::new(0.0, 0.25, 0.0), Vec3::zeros()),
    ];
    let tau_pushed =
        rbda::rnea_with_external_forces(&model, &mut data, &q, &zero, &zero, &fext).unwrap();
    assert_relative_eq!(tau_pushed[0], tau_plain[0] - 0.25, epsilon = 1e-12);
}

#[test]
fn free_flyer_feels_no_internal_torque_in_free_fall() {
    // a free-floating body accelerating exactly with gravity needs no wrench
    let mut builder = ModelBuilder::new();
    builder
        .add_joint(
            0,
            JointModel::FreeFlyer,
            SE3::identity(),
            Inertia::sphere(3.0, 0.2),
            "base",
        )
        .unwrap();
    let model = builder.build();
    let mut data = Data::new(&model);

    let q = model.neutral();
    let v = DVec::zeros(6);
    // [ω̇; v̇] slice ordering: free fall is v̇ = g
    let a = DVec::from_vec(vec![0.0, 0.0, 0.0, 0.0, 0.0, -GRAVITY]);
    let tau = rnea(&model, &mut data, &q, &v, &a).unwrap().clone();
    assert_relative_eq!(tau.norm(), 0.0, epsilon = 1e-9);

    // the gravity-augmented acceleration cancels exactly in free fall
    assert_relative_eq!(data.a_gf[1].to_vector().norm(), 0.0, epsilon = 1e-9);
}
