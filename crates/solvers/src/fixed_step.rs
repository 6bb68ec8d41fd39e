//! Fixed-step explicit integrators.
//!
//! Each function advances a [`State`] by one step of size `dt` through a
//! [`VectorField`]:
//!
//! ```text
//! euler: y_{n+1} = y_n + f(t_n, y_n) * dt
//!
//! rk4:   k1 = f(t_n,        y_n)
//!        k2 = f(t_n + dt/2, y_n + dt*k1/2)
//!        k3 = f(t_n + dt/2, y_n + dt*k2/2)
//!        k4 = f(t_n + dt,   y_n + dt*k3)
//!        y_{n+1} = y_n + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
//! ```
//!
//! Steps are pure and deterministic: the input state is never modified, and
//! the same `(field, time, state, dt)` always produces the same bits. Nothing
//! is checked here; non-finite derivatives flow straight into the result.
//! Use a [`Stepper`] to reject wrong-length states or non-finite results.
//!
//! # Example
//!
//! ```
//! use orrery_core::{State, from_fn};
//! use orrery_solvers::fixed_step::{Config, Method, Stepper};
//!
//! // dy/dt = -y
//! let decay = from_fn(1, |_t, y: &State| y.iter().map(|v| -v).collect());
//! let stepper = Stepper::new(decay, Config::new(Method::Rk4));
//!
//! let next = stepper.step(&State::from([1.0]), 0.1)?;
//! assert!((next[0] - (-0.1_f64).exp()).abs() < 1e-6);
//! # Ok::<(), orrery_solvers::fixed_step::Error>(())
//! ```

mod config;
mod error;
mod method;
mod stepper;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::Error;
pub use method::Method;
pub use stepper::Stepper;

use orrery_core::{State, StepIntegrable, VectorField};

/// Advances `state` by one forward Euler step.
///
/// First-order accurate: the local truncation error is `O(dt²)`.
#[must_use]
pub fn euler<F>(field: &F, time: f64, state: &State, dt: f64) -> State
where
    F: VectorField + ?Sized,
{
    let derivative = field.derivative(time, state);
    state.step(&derivative, dt)
}

/// Advances `state` by one classical fourth-order Runge-Kutta step.
///
/// Fourth-order accurate: the local truncation error is `O(dt⁵)`.
#[must_use]
pub fn rk4<F>(field: &F, time: f64, state: &State, dt: f64) -> State
where
    F: VectorField + ?Sized,
{
    let half = dt / 2.0;

    let k1 = field.derivative(time, state);
    let k2 = field.derivative(time + half, &state.step(&k1, half));
    let k3 = field.derivative(time + half, &state.step(&k2, half));
    let k4 = field.derivative(time + dt, &state.step(&k3, dt));

    // Weighted left to right so the sum rounds the same way every time.
    let slope: State = k1
        .iter()
        .zip(k2.iter())
        .zip(k3.iter())
        .zip(k4.iter())
        .map(|(((a, b), c), d)| a + 2.0 * b + 2.0 * c + d)
        .collect();

    state.step(&slope, dt / 6.0)
}
