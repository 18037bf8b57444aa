//! Error types for solver operations.

use cryo_core::error::CryoError;
use thiserror::Error;

/// Errors that can occur during root finding or quadrature.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolverError {
    #[error("No sign change in bracket [{a}, {b}]: f(a) = {fa:e}, f(b) = {fb:e}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("Convergence failed: {what}")]
    ConvergenceFailed { what: String },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    #[error("Numeric error: {what}")]
    Numeric { what: String },
}

pub type SolverResult<T> = Result<T, SolverError>;

impl From<SolverError> for CryoError {
    fn from(e: SolverError) -> Self {
        match e {
            SolverError::ConvergenceFailed { what } | SolverError::Numeric { what } => {
                CryoError::Invariant { what }
            }
            other => CryoError::InvalidArg {
                what: other.to_string(),
            },
        }
    }
}
