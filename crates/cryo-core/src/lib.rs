//! cryo-core: shared foundation for cryocalc.
//!
//! Contains:
//! - units (uom SI types + constructors, Rankine conversion)
//! - numeric (tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{CryoError, CryoResult};
pub use numeric::*;
pub use units::*;
