//! Scalar numerics for cryocalc.
//!
//! Bracketed root finding (Brent, bisection) for one-dimensional residuals and
//! trapezoidal quadrature over sampled data.

pub mod bracket;
pub mod error;
pub mod quadrature;

pub use bracket::{BracketConfig, RootResult, bisection, brent};
pub use error::{SolverError, SolverResult};
pub use quadrature::{linspace, trapezoid};
