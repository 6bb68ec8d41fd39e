//! Fixed-step integrators and the drivers that run them.
//!
//! # Modules
//!
//! - [`fixed_step`]: single Euler and classical RK4 steps over a
//!   [`VectorField`], and a [`Stepper`](fixed_step::Stepper) that validates
//!   dimensions and optionally rejects non-finite results
//! - [`transient`]: drivers that call a stepper repeatedly: a batch
//!   [`solve`](transient::solve) over a fixed number of steps, and a live
//!   [`Session`](transient::Session) that ticks and resets
//!
//! [`VectorField`]: orrery_core::VectorField

pub mod fixed_step;
pub mod transient;
