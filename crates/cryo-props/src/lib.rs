//! cryo-props: cryogenic material property correlations.
//!
//! Provides:
//! - Log10-polynomial correlations (`log10(y)` as a polynomial in `log10(T)`)
//! - Embedded NIST-style coefficient sets (microfilm, 304 stainless)
//! - SI to imperial conversion for specific heat and thermal conductivity
//! - Property tables over linear Kelvin sweeps, written as `.prp` text
//!
//! # Example
//!
//! ```no_run
//! use cryo_props::{PropertyKind, TableSpec, catalog, generate_table};
//!
//! let table = generate_table(
//!     &TableSpec::default(),
//!     &catalog::MICROFILM_SPECIFIC_HEAT,
//!     PropertyKind::SpecificHeat,
//! )
//! .unwrap();
//! print!("{}", table.to_prp_string());
//! ```

pub mod catalog;
pub mod correlation;
pub mod error;
pub mod microfilm;
pub mod table;

pub use correlation::{Log10Polynomial, PropertyKind, evaluate_property};
pub use error::{PropsError, PropsResult};
pub use microfilm::{MicrofilmOutputs, write_microfilm_tables};
pub use table::{PropertyTable, TableRow, TableSpec, generate_table};
