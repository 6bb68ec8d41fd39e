use approx::assert_relative_eq;

use orrery_core::{State, VectorField, from_fn};

use super::{Config, Error, Method, Stepper, euler, rk4};

/// dy/dt = -y, applied to every entry.
fn decay() -> impl VectorField {
    from_fn(3, |_t, y: &State| y.iter().map(|v| -v).collect())
}

/// dy/dt = t, ignoring the state.
fn ramp() -> impl VectorField {
    from_fn(1, |t, _y: &State| State::from([t]))
}

/// A field whose first derivative is always NaN.
fn poisoned() -> impl VectorField {
    from_fn(2, |_t, y: &State| State::from([f64::NAN, y[1]]))
}

#[test]
fn zero_step_is_identity() {
    let field = decay();
    let state = State::from([1.5, -2.0, 1e6]);

    assert_eq!(euler(&field, 0.0, &state, 0.0), state);
    assert_eq!(rk4(&field, 0.0, &state, 0.0), state);
}

#[test]
fn steps_preserve_length() {
    let field = decay();
    let state = State::from([1.0, 2.0, 3.0]);

    for method in [Method::Euler, Method::Rk4] {
        let next = method.apply(&field, 0.0, &state, method.default_dt());
        assert_eq!(next.len(), state.len());
    }
}

#[test]
fn input_state_is_untouched() {
    let field = decay();
    let state = State::from([1.0, 2.0, 3.0]);
    let copy = state.clone();

    let _ = rk4(&field, 0.0, &state, 0.5);
    let _ = euler(&field, 0.0, &state, 0.5);

    assert_eq!(state, copy);
}

#[test]
fn euler_matches_closed_form() {
    let field = decay();
    let next = euler(&field, 0.0, &State::from([1.0, 2.0, -4.0]), 0.1);

    assert_relative_eq!(next[0], 0.9);
    assert_relative_eq!(next[1], 1.8);
    assert_relative_eq!(next[2], -3.6);
}

#[test]
fn rk4_matches_taylor_polynomial_for_linear_decay() {
    // For y' = -y one RK4 step is the degree-4 Taylor polynomial of exp(-h).
    let h: f64 = 0.1;
    let expected = 1.0 - h + h.powi(2) / 2.0 - h.powi(3) / 6.0 + h.powi(4) / 24.0;

    let next = rk4(&decay(), 0.0, &State::from([1.0, 1.0, 1.0]), h);

    assert_relative_eq!(next[0], expected, epsilon = 1e-15);
    assert_relative_eq!(next[0], (-h).exp(), epsilon = 1e-7);
}

#[test]
fn stages_see_the_right_times() {
    // y' = t integrates to t²/2, which Simpson's rule (and RK4) gets exactly.
    let field = ramp();
    let next = rk4(&field, 1.0, &State::from([0.0]), 2.0);
    assert_relative_eq!(next[0], (3.0_f64.powi(2) - 1.0) / 2.0);

    // Euler only samples the start of the interval.
    let next = euler(&field, 1.0, &State::from([0.0]), 2.0);
    assert_relative_eq!(next[0], 2.0);
}

#[test]
fn steps_are_deterministic() {
    let field = decay();
    let state = State::from([0.3, 0.7, 1.1]);

    let a = rk4(&field, 0.25, &state, 0.001);
    let b = rk4(&field, 0.25, &state, 0.001);

    assert_eq!(a.as_slice(), b.as_slice());
}

#[test]
fn default_step_sizes() {
    assert_relative_eq!(Method::Euler.default_dt(), 0.01);
    assert_relative_eq!(Method::Rk4.default_dt(), 0.001);
    assert_eq!(Method::default(), Method::Rk4);
}

#[test]
fn stepper_rejects_wrong_dimension() {
    let stepper = Stepper::rk4(decay());

    let err = stepper
        .step(&State::from([1.0, 2.0]), 0.1)
        .expect_err("should reject a two-entry state");

    assert_eq!(
        err,
        Error::DimensionMismatch {
            expected: 3,
            found: 2
        }
    );
}

#[test]
fn stepper_propagates_non_finite_by_default() {
    let stepper = Stepper::euler(poisoned());

    let next = stepper
        .step(&State::from([1.0, 2.0]), 0.1)
        .expect("unchecked steps never fail on values");

    assert!(next[0].is_nan());
    assert_relative_eq!(next[1], 2.2);
}

#[test]
fn stepper_reports_non_finite_when_checked() {
    let stepper = Stepper::new(poisoned(), Config::new(Method::Rk4).with_finite_check());

    let err = stepper
        .step(&State::from([1.0, 2.0]), 0.1)
        .expect_err("should flag the NaN entry");

    assert_eq!(err, Error::NonFiniteResult { index: 0 });
}

#[test]
fn checked_and_unchecked_steps_agree_on_finite_values() {
    let state = State::from([1.0, 2.0, 3.0]);
    let unchecked = Stepper::rk4(decay());
    let checked = Stepper::new(decay(), Config::new(Method::Rk4).with_finite_check());

    assert_eq!(
        unchecked.step(&state, 0.01).unwrap(),
        checked.step(&state, 0.01).unwrap()
    );
}

#[test]
fn stepper_method_matches_free_functions() {
    let field = decay();
    let state = State::from([1.0, -1.0, 0.5]);

    let stepper = Stepper::euler(&field);
    assert_eq!(stepper.step_at(2.0, &state, 0.2).unwrap(), euler(&field, 2.0, &state, 0.2));

    let stepper = Stepper::rk4(&field);
    assert_eq!(stepper.step_at(2.0, &state, 0.2).unwrap(), rk4(&field, 2.0, &state, 0.2));
}
