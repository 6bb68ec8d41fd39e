/// Errors that can occur when taking a checked step.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The state length does not match the vector field.
    #[error("state has {found} entries but the vector field expects {expected}")]
    DimensionMismatch { expected: usize, found: usize },

    /// The next state contains a NaN or infinite entry.
    ///
    /// Only reported when [`Config::check_finite`](super::Config::check_finite)
    /// is enabled.
    #[error("step produced a non-finite value at index {index}")]
    NonFiniteResult { index: usize },
}
