//! Drivers that advance a state through many fixed steps.
//!
//! Two drivers share the same [`Stepper`]:
//!
//! - [`solve`] runs a batch of steps ahead of time and keeps every sample,
//!   reporting each one to an [`Observer`].
//! - [`Session`] advances one step per [`tick`](Session::tick), keeps a
//!   bounded trail of recent samples, and can [`reset`](Session::reset) to
//!   its initial condition.
//!
//! Sample times are computed as `start + step * dt` rather than accumulated,
//! so long runs do not drift.
//!
//! # Example
//!
//! ```
//! use orrery_core::{State, from_fn};
//! use orrery_solvers::{fixed_step::Stepper, transient};
//!
//! let drift = from_fn(1, |_t, _y: &State| State::from([2.0]));
//! let stepper = Stepper::euler(drift);
//! let config = transient::Config::new(0.0, 0.1, 10)?;
//!
//! let solution = transient::solve_unobserved(&stepper, State::from([0.0]), &config)?;
//!
//! assert_eq!(solution.history.len(), 11);
//! assert!((solution.history[10].state[0] - 2.0).abs() < 1e-12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod action;
mod config;
mod error;
mod event;
mod session;
mod solution;

pub use action::Action;
pub use config::{Config, ConfigError};
pub use error::Error;
pub use event::Event;
pub use session::Session;
pub use solution::{Solution, Status};

use orrery_core::{Observer, Sample, State, VectorField};

use crate::fixed_step::Stepper;

/// Upper bound on the history reserved before the first step.
///
/// Longer runs grow the history as steps are taken.
const MAX_RESERVE: usize = 1 << 16;

/// Integrates `initial` for `config.steps()` fixed steps.
///
/// # Algorithm
///
/// 1. Check the initial state length and record it as step 0.
/// 2. Emit an [`Event`] for step 0.
/// 3. For each step:
///    - Advance the latest state by `dt` with the stepper.
///    - Record the new sample.
///    - Emit an [`Event`]; if the observer returns
///      [`Action::StopEarly`], terminate.
/// 4. Return the solution with the full history.
///
/// # Errors
///
/// Returns [`Error::Step`] if the initial state has the wrong length, or if
/// the stepper rejects a step (see [`Stepper::step_at`]).
pub fn solve<F, Obs>(
    stepper: &Stepper<F>,
    initial: State,
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: VectorField,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    stepper
        .check(&initial)
        .map_err(|source| Error::Step { step: 0, source })?;

    let mut history = Vec::with_capacity(config.steps().saturating_add(1).min(MAX_RESERVE));
    history.push(Sample::new(config.start(), initial));

    let event = Event {
        step: 0,
        time: config.start(),
        state: &history[0].state,
    };
    if let Some(Action::StopEarly) = observer.observe(&event) {
        return Ok(Solution {
            status: Status::StoppedByObserver,
            history,
            steps: 0,
        });
    }

    for step in 1..=config.steps() {
        let current = &history[step - 1];
        let next = stepper
            .step_at(current.time, &current.state, config.dt())
            .map_err(|source| Error::Step { step, source })?;

        let time = config.time_at(step);
        history.push(Sample::new(time, next));

        let event = Event {
            step,
            time,
            state: &history[step].state,
        };
        if let Some(Action::StopEarly) = observer.observe(&event) {
            return Ok(Solution {
                status: Status::StoppedByObserver,
                history,
                steps: step,
            });
        }
    }

    Ok(Solution {
        status: Status::Complete,
        history,
        steps: config.steps(),
    })
}

/// Integrates without observation.
///
/// This is a convenience wrapper around [`solve`] that discards events.
///
/// # Errors
///
/// Returns an error if the stepper rejects the initial state or any step.
pub fn solve_unobserved<F>(
    stepper: &Stepper<F>,
    initial: State,
    config: &Config,
) -> Result<Solution, Error>
where
    F: VectorField,
{
    solve(stepper, initial, config, ())
}
