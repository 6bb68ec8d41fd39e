use orrery_core::{Sample, State, Trajectory, VectorField};

use crate::fixed_step::Stepper;

use super::{Error, config::validate_dt};

/// A live integration that advances one step per tick.
///
/// The session owns the fixed initial condition, the latest sample, and a
/// bounded trail of recent samples. Nothing is shared: two sessions built
/// from the same inputs produce identical trajectories, and [`reset`] followed
/// by the same ticks reproduces the same states bit for bit.
///
/// [`reset`]: Session::reset
#[derive(Debug, Clone)]
pub struct Session<F> {
    stepper: Stepper<F>,
    initial: State,
    dt: f64,
    steps: usize,
    current: Sample,
    trail: Trajectory,
}

impl<F: VectorField> Session<F> {
    /// Creates a session at time zero holding `initial` as its only sample.
    ///
    /// `capacity` bounds the trail; once full, each tick evicts the oldest
    /// sample.
    ///
    /// # Errors
    ///
    /// - [`Error::Config`] if `dt` is zero or not finite, or `capacity` is zero.
    /// - [`Error::Step`] with step 0 if `initial` has the wrong length.
    pub fn new(
        stepper: Stepper<F>,
        initial: State,
        dt: f64,
        capacity: usize,
    ) -> Result<Self, Error> {
        validate_dt(dt)?;
        let mut trail = Trajectory::new(capacity).map_err(super::ConfigError::from)?;
        stepper
            .check(&initial)
            .map_err(|source| Error::Step { step: 0, source })?;

        let current = Sample::new(0.0, initial.clone());
        trail.push(current.clone());

        Ok(Self {
            stepper,
            initial,
            dt,
            steps: 0,
            current,
            trail,
        })
    }

    /// Advances the latest state by one step and records it in the trail.
    ///
    /// On error the session is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Step`] if the stepper rejects the step.
    pub fn tick(&mut self) -> Result<&State, Error> {
        let step = self.steps + 1;
        let next = self
            .stepper
            .step_at(self.current.time, &self.current.state, self.dt)
            .map_err(|source| Error::Step { step, source })?;

        #[allow(clippy::cast_precision_loss)]
        let time = step as f64 * self.dt;

        self.steps = step;
        self.current = Sample::new(time, next);
        self.trail.push(self.current.clone());

        Ok(&self.current.state)
    }

    /// Advances `count` steps, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Step`] for the first rejected step. Steps taken before
    /// it are kept.
    pub fn advance(&mut self, count: usize) -> Result<&State, Error> {
        for _ in 0..count {
            self.tick()?;
        }
        Ok(&self.current.state)
    }

    /// Discards the trail and restarts from the initial condition.
    pub fn reset(&mut self) {
        self.steps = 0;
        self.current = Sample::new(0.0, self.initial.clone());
        self.trail.clear();
        self.trail.push(self.current.clone());
    }

    /// Returns the latest state.
    pub fn latest(&self) -> &State {
        &self.current.state
    }

    /// Returns the time of the latest state.
    pub fn time(&self) -> f64 {
        self.current.time
    }

    /// Returns the number of ticks since creation or the last reset.
    pub fn steps(&self) -> usize {
        self.steps
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }

    pub fn initial(&self) -> &State {
        &self.initial
    }

    pub fn stepper(&self) -> &Stepper<F> {
        &self.stepper
    }

    /// Returns the bounded trail of recent samples, oldest first.
    pub fn trajectory(&self) -> &Trajectory {
        &self.trail
    }
}
