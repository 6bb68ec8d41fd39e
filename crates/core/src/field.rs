use crate::State;

/// A vector field: maps a state to its instantaneous rate of change.
///
/// Implementations must be pure. The returned derivative has the same length
/// and layout as the input state, and any physical parameters are fixed when
/// the field is constructed. `time` is passed for non-autonomous systems and
/// may be ignored.
///
/// Fields do not validate their input. A state whose length differs from
/// [`dimension`](VectorField::dimension) is a caller error; the stepper in
/// `orrery-solvers` rejects it before the field is ever called.
pub trait VectorField {
    /// Returns the state length this field expects.
    fn dimension(&self) -> usize;

    /// Evaluates the derivative of `state` at `time`.
    fn derivative(&self, time: f64, state: &State) -> State;
}

impl<F: VectorField + ?Sized> VectorField for &F {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn derivative(&self, time: f64, state: &State) -> State {
        (**self).derivative(time, state)
    }
}

/// A [`VectorField`] backed by a closure.
///
/// Created with [`from_fn`].
#[derive(Debug, Clone, Copy)]
pub struct FnField<F> {
    dimension: usize,
    f: F,
}

/// Wraps a closure `(time, state) -> derivative` as a [`VectorField`].
///
/// # Example
///
/// ```
/// use orrery_core::{State, VectorField, from_fn};
///
/// // dy/dt = -y
/// let decay = from_fn(1, |_t, y: &State| y.iter().map(|v| -v).collect());
///
/// assert_eq!(decay.derivative(0.0, &State::from([2.0])), State::from([-2.0]));
/// ```
pub fn from_fn<F>(dimension: usize, f: F) -> FnField<F>
where
    F: Fn(f64, &State) -> State,
{
    FnField { dimension, f }
}

impl<F> VectorField for FnField<F>
where
    F: Fn(f64, &State) -> State,
{
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn derivative(&self, time: f64, state: &State) -> State {
        (self.f)(time, state)
    }
}
