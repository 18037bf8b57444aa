//! Property correlation errors.

use cryo_core::CryoError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for property operations.
pub type PropsResult<T> = Result<T, PropsError>;

/// Errors that can occur while evaluating correlations or writing tables.
#[derive(Error, Debug)]
pub enum PropsError {
    /// Input outside the domain of `log10` (T <= 0 or non-finite).
    #[error("Temperature outside correlation domain for {what}: {value} K")]
    Domain { what: &'static str, value: f64 },

    /// Invalid argument.
    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },

    /// Correlation evaluated to a non-finite value (overflow of `10^log_y`).
    #[error("Non-finite result for {what} at {t_k} K")]
    NonFinite { what: &'static str, t_k: f64 },

    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl From<PropsError> for CryoError {
    fn from(err: PropsError) -> Self {
        match err {
            PropsError::Domain { what, value } => CryoError::InvalidArg {
                what: format!("temperature {value} K outside domain of {what}"),
            },
            PropsError::InvalidArg { what } => CryoError::InvalidArg { what },
            PropsError::NonFinite { what, t_k } => CryoError::NonFinite { what, value: t_k },
            PropsError::Io { path, source } => CryoError::Io { path, source },
        }
    }
}
