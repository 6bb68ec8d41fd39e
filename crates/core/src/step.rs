/// A trait for types that can be stepped using their derivative.
///
/// Implementing this trait lets the fixed-step integrators advance a value
/// via `self + derivative * delta`, where the derivative is with respect to
/// `Delta`. `Delta` is usually time, but nothing here depends on that.
pub trait StepIntegrable<Delta> {
    /// The derivative of the type with respect to `Delta`.
    type Derivative;

    /// Returns the value after stepping with a derivative and step size.
    ///
    /// Implementations must not mutate `self`.
    #[must_use]
    fn step(&self, derivative: &Self::Derivative, delta: Delta) -> Self;
}

/// Type alias for the derivative of a `StepIntegrable` type.
///
/// This is a convenience for accessing the [`StepIntegrable::Derivative`]
/// associated type without writing out the fully qualified syntax.
pub type DerivativeOf<T, Delta> = <T as StepIntegrable<Delta>>::Derivative;
