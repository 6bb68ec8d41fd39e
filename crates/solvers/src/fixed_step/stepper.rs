use orrery_core::{State, VectorField};

use super::{Config, Error, Method};

/// A vector field paired with a stepping rule.
///
/// The stepper holds no state between calls. Each step checks the input
/// length against [`VectorField::dimension`] before evaluating the field, and
/// checks the result for non-finite entries when
/// [`Config::check_finite`] is set.
#[derive(Debug, Clone)]
pub struct Stepper<F> {
    field: F,
    config: Config,
}

impl<F: VectorField> Stepper<F> {
    /// Creates a stepper for `field`.
    pub fn new(field: F, config: Config) -> Self {
        Self { field, config }
    }

    /// Creates an unchecked forward Euler stepper.
    pub fn euler(field: F) -> Self {
        Self::new(field, Config::new(Method::Euler))
    }

    /// Creates an unchecked RK4 stepper.
    pub fn rk4(field: F) -> Self {
        Self::new(field, Config::new(Method::Rk4))
    }

    /// Returns the vector field.
    pub fn field(&self) -> &F {
        &self.field
    }

    /// Returns the stepper configuration.
    pub fn config(&self) -> Config {
        self.config
    }

    /// Returns the state length the stepper accepts.
    pub fn dimension(&self) -> usize {
        self.field.dimension()
    }

    /// Verifies that `state` has the length the field expects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the lengths differ.
    pub fn check(&self, state: &State) -> Result<(), Error> {
        let expected = self.field.dimension();
        if state.len() == expected {
            Ok(())
        } else {
            Err(Error::DimensionMismatch {
                expected,
                found: state.len(),
            })
        }
    }

    /// Advances `state` by `dt` starting at time zero.
    ///
    /// Equivalent to [`step_at`](Self::step_at) with `time = 0.0`, which is
    /// exact for autonomous fields.
    ///
    /// # Errors
    ///
    /// See [`step_at`](Self::step_at).
    pub fn step(&self, state: &State, dt: f64) -> Result<State, Error> {
        self.step_at(0.0, state, dt)
    }

    /// Advances `state` from `time` to `time + dt`.
    ///
    /// # Errors
    ///
    /// - [`Error::DimensionMismatch`] if `state` has the wrong length.
    /// - [`Error::NonFiniteResult`] if the finite check is enabled and the
    ///   next state has a NaN or infinite entry.
    pub fn step_at(&self, time: f64, state: &State, dt: f64) -> Result<State, Error> {
        self.check(state)?;

        let next = self.config.method.apply(&self.field, time, state, dt);

        if self.config.check_finite {
            if let Some(index) = next.first_non_finite() {
                return Err(Error::NonFiniteResult { index });
            }
        }

        Ok(next)
    }
}
