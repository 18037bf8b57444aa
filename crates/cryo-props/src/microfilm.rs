//! Production microfilm property tables.
//!
//! Writes the specific heat and thermal conductivity tables consumed as user
//! property files (`user1Cp.prp`, `user1K.prp`) by the fluid network model.

use crate::catalog::{MICROFILM_SPECIFIC_HEAT, MICROFILM_THERMAL_CONDUCTIVITY};
use crate::correlation::PropertyKind;
use crate::error::{PropsError, PropsResult};
use crate::table::{TableSpec, generate_table};
use std::fs;
use std::path::{Path, PathBuf};

/// Output directory, relative to the run root.
pub const OUTPUT_DIR: &str = "LCD_CORRECT_MICROFILM";
pub const SPECIFIC_HEAT_FILE: &str = "user1Cp.prp";
pub const THERMAL_CONDUCTIVITY_FILE: &str = "user1K.prp";

/// Paths written by [`write_microfilm_tables`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MicrofilmOutputs {
    pub specific_heat: PathBuf,
    pub thermal_conductivity: PathBuf,
}

/// Generate both microfilm tables over the default sweep and write them under
/// `root/LCD_CORRECT_MICROFILM/`, creating the directory if needed.
///
/// Both tables are evaluated before anything is written.
pub fn write_microfilm_tables(root: &Path) -> PropsResult<MicrofilmOutputs> {
    let spec = TableSpec::default();
    let cp = generate_table(&spec, &MICROFILM_SPECIFIC_HEAT, PropertyKind::SpecificHeat)?;
    let k = generate_table(
        &spec,
        &MICROFILM_THERMAL_CONDUCTIVITY,
        PropertyKind::ThermalConductivity,
    )?;

    let dir = root.join(OUTPUT_DIR);
    fs::create_dir_all(&dir).map_err(|source| PropsError::Io {
        path: dir.clone(),
        source,
    })?;

    let outputs = MicrofilmOutputs {
        specific_heat: dir.join(SPECIFIC_HEAT_FILE),
        thermal_conductivity: dir.join(THERMAL_CONDUCTIVITY_FILE),
    };
    cp.write_file(&outputs.specific_heat)?;
    k.write_file(&outputs.thermal_conductivity)?;

    Ok(outputs)
}
