//! Core types and integration loop for the chemical weathering feedback
//! box model.
//!
//! The model tracks carbon in two well-mixed reservoirs (rock and
//! atmosphere) exchanging mass through linear flux laws, and derives a
//! global temperature from the atmospheric carbon anomaly. See
//! [`integrator::Integrator`] for the governing equations.

pub mod config;
pub mod errors;
pub mod integrator;
pub mod trajectory;

/// Type of each value in the model state.
pub type FloatValue = f64;
