//! Core traits and types for fixed-step ODE integration.
//!
//! This crate defines the shared abstractions that steppers, drivers, and
//! observers build on:
//!
//! - [`State`]: a positional vector of `f64` degrees of freedom
//! - [`StepIntegrable`]: a value that can be advanced by `derivative * delta`
//! - [`VectorField`]: a pure map from a state to its rate of change
//! - [`Observer`]: receives driver events and optionally returns control actions
//! - [`Trajectory`]: a bounded, oldest-first-evicting history of [`Sample`]s

mod field;
mod observer;
mod state;
mod step;
mod trajectory;

pub use field::{FnField, VectorField, from_fn};
pub use observer::Observer;
pub use state::State;
pub use step::{DerivativeOf, StepIntegrable};
pub use trajectory::{CapacityError, Sample, Trajectory};
