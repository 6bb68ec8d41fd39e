use orrery_core::{CapacityError, Observer, Sample, Trajectory};

use crate::traits::HasState;

/// Records observed states into a bounded [`Trajectory`].
///
/// This is the trail a renderer draws behind each body: the last
/// `capacity` samples, oldest first. The recorder never requests an action.
#[derive(Debug, Clone)]
pub struct TrailRecorder {
    trail: Trajectory,
}

impl TrailRecorder {
    /// Creates a recorder that keeps the last `capacity` samples.
    ///
    /// # Errors
    ///
    /// Returns [`CapacityError`] if `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self, CapacityError> {
        Ok(Self {
            trail: Trajectory::new(capacity)?,
        })
    }

    #[must_use]
    pub fn trail(&self) -> &Trajectory {
        &self.trail
    }

    #[must_use]
    pub fn into_trail(self) -> Trajectory {
        self.trail
    }

    /// Returns the recorded path through two state entries, oldest first.
    ///
    /// For planar gravity, body `b` traces `path(4 * b, 4 * b + 1)`.
    /// Samples missing either entry are skipped.
    #[must_use]
    pub fn path(&self, x: usize, y: usize) -> Vec<[f64; 2]> {
        self.trail
            .iter()
            .filter_map(|s| Some([*s.state.get(x)?, *s.state.get(y)?]))
            .collect()
    }
}

impl<E: HasState, A> Observer<E, A> for TrailRecorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.trail.push(Sample::new(event.time(), event.state().clone()));
        None
    }
}

/// Allows `&mut TrailRecorder` to be passed to drivers that take an observer
/// by value, so the trail can be read after the run.
impl<E: HasState, A> Observer<E, A> for &mut TrailRecorder {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
