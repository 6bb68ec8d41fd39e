use thiserror::Error;

/// Errors that can occur when validating a system config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("at least one body is required")]
    NoBodies,

    #[error("gravitational constant must be finite")]
    Gravity,

    #[error("mass of body {index} must be finite and non-negative")]
    Mass { index: usize },

    #[error("{name} must be finite")]
    Parameter { name: &'static str },
}
