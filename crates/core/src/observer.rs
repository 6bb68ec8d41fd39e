/// Receives driver events and decides how a run should proceed.
///
/// Observers let callers monitor or steer an integration without changing its
/// API, enabling logging, trail recording, early stopping, or custom checks.
///
/// The `observe` method returns `Option<A>`, where `Some(action)` requests a
/// driver-specific action and `None` lets the run continue unchanged.
///
/// Closures automatically implement `Observer`, and a built-in impl for `()`
/// provides a no-op observer that always returns `None`.
pub trait Observer<E, A> {
    /// Observes an event and optionally returns a control action.
    fn observe(&mut self, event: &E) -> Option<A>;
}

/// Blanket implementation for observer closures.
impl<E, A, F> Observer<E, A> for F
where
    F: FnMut(&E) -> Option<A>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        self(event)
    }
}

/// A no-op observer that always returns `None`.
impl<E, A> Observer<E, A> for () {
    fn observe(&mut self, _event: &E) -> Option<A> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_observer_never_acts() {
        let mut obs = ();
        let action: Option<()> = obs.observe(&42);
        assert!(action.is_none());
    }

    #[test]
    fn closures_can_count_and_act() {
        let mut seen = 0;
        let mut obs = |event: &u32| {
            seen += 1;
            (*event > 2).then_some("stop")
        };

        assert_eq!(obs.observe(&1), None);
        assert_eq!(obs.observe(&3), Some("stop"));
        assert_eq!(seen, 2);
    }
}
