//! Error types for no-vent fill calculations.

use cryo_core::CryoError;
use cryo_props::PropsError;
use cryo_solver::SolverError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NvfError {
    #[error("Property error: {0}")]
    Props(#[from] PropsError),

    #[error("Solver error: {0}")]
    Solver(#[from] SolverError),
}

pub type NvfResult<T> = Result<T, NvfError>;

impl From<NvfError> for CryoError {
    fn from(e: NvfError) -> Self {
        match e {
            NvfError::Props(e) => e.into(),
            NvfError::Solver(e) => e.into(),
        }
    }
}
