use approx::assert_relative_eq;

use orrery_core::{State, VectorField};
use orrery_solvers::{
    fixed_step::{self, Config, Method, Stepper},
    transient::{self, Session},
};
use orrery_systems::{Gravity, scenario};

const DT: f64 = 0.001;

#[test]
fn first_rk4_step_from_rest() {
    let field = Gravity::three_body();
    let start = scenario::three_body_initial();
    let accel = field.derivative(0.0, &start);

    let next = Stepper::rk4(&field).step(&start, DT).unwrap();

    assert_eq!(next.len(), start.len());
    for body in 0..3 {
        let base = body * 4;
        for axis in 0..2 {
            let a = accel[base + 2 + axis];

            // Bodies start at rest, so they move by about a * dt² / 2.
            let moved = next[base + axis] - start[base + axis];
            assert!(moved.abs() < 1e-4);
            assert_relative_eq!(moved, 0.5 * a * DT * DT, max_relative = 1e-4);

            // Velocity changes by dt times the initial acceleration.
            let dv = next[base + 2 + axis] - start[base + 2 + axis];
            assert_relative_eq!(dv, DT * a, max_relative = 1e-4);
        }
    }
}

#[test]
fn euler_and_rk4_nearly_agree_on_first_step() {
    let field = Gravity::three_body();
    let start = scenario::three_body_initial();

    let euler = fixed_step::euler(&field, 0.0, &start, DT);
    let rk4 = fixed_step::rk4(&field, 0.0, &start, DT);

    // Euler leaves positions untouched because the velocities are zero.
    for body in 0..3 {
        assert_eq!(euler[body * 4], start[body * 4]);
        assert_eq!(euler[body * 4 + 1], start[body * 4 + 1]);
    }
    for (e, r) in euler.iter().zip(rk4.iter()) {
        assert_relative_eq!(*e, *r, epsilon = 1e-4);
    }
}

#[test]
fn zero_step_is_identity() {
    let stepper = Stepper::rk4(Gravity::three_body());
    let start = scenario::three_body_initial();

    assert_eq!(stepper.step(&start, 0.0).unwrap(), start);
    assert_eq!(fixed_step::euler(stepper.field(), 0.0, &start, 0.0), start);
}

#[test]
fn rk4_conserves_energy_far_better_than_euler() {
    let field = Gravity::three_body();
    let start = scenario::three_body_initial();
    let config = transient::Config::new(0.0, DT, 100).unwrap();
    let e0 = field.energy(&start);

    let drift = |method| {
        let stepper = Stepper::new(&field, Config::new(method));
        let solution = transient::solve_unobserved(&stepper, start.clone(), &config).unwrap();
        ((field.energy(&solution.last().state) - e0) / e0).abs()
    };

    assert!(drift(Method::Rk4) < 1e-9);
    assert!(drift(Method::Euler) > 1e-5);
}

#[test]
fn momentum_stays_zero() {
    let field = Gravity::three_body();
    let config = transient::Config::new(0.0, DT, 200).unwrap();

    let solution = transient::solve_unobserved(
        &Stepper::rk4(&field),
        scenario::three_body_initial(),
        &config,
    )
    .unwrap();

    for sample in &solution.history {
        let [px, py] = field.momentum(&sample.state);
        assert!(px.abs() < 1e-6 && py.abs() < 1e-6);
    }
}

#[test]
fn live_session_keeps_max_history() {
    let stepper = Stepper::rk4(Gravity::three_body());
    let mut session = Session::new(
        stepper,
        scenario::three_body_initial(),
        DT,
        scenario::MAX_HISTORY,
    )
    .unwrap();

    session.advance(50).unwrap();
    let before_reset = session.latest().clone();
    assert_eq!(session.trajectory().capacity(), 10_000);
    assert_eq!(session.trajectory().len(), 51);

    session.reset();
    session.advance(50).unwrap();

    assert_eq!(session.latest().as_slice(), before_reset.as_slice());
}

#[test]
fn batch_and_live_drivers_agree() {
    let field = Gravity::three_body();
    let config = transient::Config::new(0.0, DT, 40).unwrap();
    let batch = transient::solve_unobserved(
        &Stepper::rk4(&field),
        scenario::three_body_initial(),
        &config,
    )
    .unwrap();

    let mut live = Session::new(
        Stepper::rk4(&field),
        scenario::three_body_initial(),
        DT,
        100,
    )
    .unwrap();
    live.advance(40).unwrap();

    let trail: Vec<&State> = live.trajectory().iter().map(|s| &s.state).collect();
    let history: Vec<&State> = batch.history.iter().map(|s| &s.state).collect();
    assert_eq!(trail, history);
}

#[test]
fn coincident_bodies_are_caught_only_when_checked() {
    let collided = State::from([
        1.0, 1.0, 0.0, 0.0, //
        1.0, 1.0, 0.0, 0.0, //
        -7.0, -3.0, 0.0, 0.0,
    ]);

    let next = Stepper::rk4(Gravity::three_body())
        .step(&collided, DT)
        .expect("unchecked steps propagate NaN");
    assert!(!next.is_finite());

    let checked = Stepper::new(
        Gravity::three_body(),
        Config::new(Method::Rk4).with_finite_check(),
    );
    assert!(matches!(
        checked.step(&collided, DT),
        Err(fixed_step::Error::NonFiniteResult { .. })
    ));
}

#[test]
fn wrong_state_length_fails_fast() {
    let stepper = Stepper::euler(Gravity::three_body());

    let err = stepper.step(&scenario::lorenz_initial(), DT).unwrap_err();

    assert_eq!(
        err,
        fixed_step::Error::DimensionMismatch {
            expected: 12,
            found: 3
        }
    );
}
