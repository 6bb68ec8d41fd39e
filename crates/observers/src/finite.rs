use orrery_core::Observer;

use crate::traits::{CanStopEarly, HasState};

/// Where a run first produced a non-finite value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NonFinite {
    pub step: usize,
    pub time: f64,

    /// Index of the first NaN or infinite entry in the state.
    pub index: usize,
}

/// Stops a run at the first state with a NaN or infinite entry.
///
/// This is the driver-level counterpart of the stepper's finite check: the
/// offending state is still recorded, and the caller can inspect where the
/// run broke down through [`tripped`](FiniteGuard::tripped).
#[derive(Debug, Clone, Default)]
pub struct FiniteGuard {
    tripped: Option<NonFinite>,
}

impl FiniteGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the first non-finite sample seen, if any.
    #[must_use]
    pub fn tripped(&self) -> Option<NonFinite> {
        self.tripped
    }
}

impl<E: HasState, A: CanStopEarly> Observer<E, A> for FiniteGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        if self.tripped.is_some() {
            return Some(A::stop_early());
        }

        let index = event.state().first_non_finite()?;
        self.tripped = Some(NonFinite {
            step: event.step(),
            time: event.time(),
            index,
        });
        Some(A::stop_early())
    }
}

/// Allows `&mut FiniteGuard` to be passed to drivers that take an observer
/// by value, so the guard can be inspected after the run.
impl<E: HasState, A: CanStopEarly> Observer<E, A> for &mut FiniteGuard {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
