use orrery_core::Observer;

/// Two observers called in order on every event.
///
/// Both observers always see the event. The first one's action wins; the
/// second's is used only when the first returns `None`.
///
/// Created with [`chain`].
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

/// Combines two observers into one.
///
/// # Example
///
/// ```
/// use orrery_observers::{FiniteGuard, TrailRecorder, chain};
///
/// let mut trail = TrailRecorder::new(100)?;
/// let mut guard = FiniteGuard::new();
/// let observer = chain(&mut trail, &mut guard);
/// # drop(observer);
/// # Ok::<(), orrery_core::CapacityError>(())
/// ```
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B> {
    Chain { first, second }
}

impl<E, Act, A, B> Observer<E, Act> for Chain<A, B>
where
    A: Observer<E, Act>,
    B: Observer<E, Act>,
{
    fn observe(&mut self, event: &E) -> Option<Act> {
        let first = self.first.observe(event);
        let second = self.second.observe(event);
        first.or(second)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_observers_see_every_event() {
        let mut a_seen = Vec::new();
        let mut b_seen = Vec::new();

        let mut observer = chain(
            |e: &u32| {
                a_seen.push(*e);
                (*e == 2).then_some("a")
            },
            |e: &u32| {
                b_seen.push(*e);
                (*e >= 2).then_some("b")
            },
        );

        assert_eq!(observer.observe(&1), None);
        assert_eq!(observer.observe(&2), Some("a"));
        assert_eq!(observer.observe(&3), Some("b"));
        drop(observer);

        assert_eq!(a_seen, vec![1, 2, 3]);
        assert_eq!(b_seen, vec![1, 2, 3]);
    }
}
