//! Capability traits for reusable observers.
//!
//! These traits abstract over driver-specific event and action types, so an
//! observer written once works with any driver whose types implement them.
//!
//! # Event traits
//!
//! - [`HasState`]: events that carry a step number, time, and state
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use orrery_core::Observer;
//! use orrery_observers::traits::{CanStopEarly, HasState};
//!
//! /// Stops once the first entry leaves `[-limit, limit]`.
//! struct Escape {
//!     limit: f64,
//! }
//!
//! impl<E: HasState, A: CanStopEarly> Observer<E, A> for Escape {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.state()[0].abs() > self.limit).then(A::stop_early)
//!     }
//! }
//! ```

use orrery_core::State;
use orrery_solvers::transient;

/// An event that carries a sampled state.
pub trait HasState {
    /// Returns the step number (0 for the initial state).
    fn step(&self) -> usize;

    /// Returns the sample time.
    fn time(&self) -> f64;

    /// Returns the sampled state.
    fn state(&self) -> &State;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the run early.
    fn stop_early() -> Self;
}

impl HasState for transient::Event<'_> {
    fn step(&self) -> usize {
        self.step
    }

    fn time(&self) -> f64 {
        self.time
    }

    fn state(&self) -> &State {
        self.state
    }
}

impl CanStopEarly for transient::Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
