//! Property-vs-temperature tables.
//!
//! A table is a linear Kelvin sweep evaluated through a correlation, with the
//! sample temperatures reported in Rankine. The `.prp` text form is one
//! `"<T_R:.4> <value:.9>"` line per sample.

use crate::correlation::{Log10Polynomial, PropertyKind, evaluate_property};
use crate::error::{PropsError, PropsResult};
use cryo_core::units::kelvin_to_rankine;
use std::fmt::{self, Write as _};
use std::fs;
use std::path::Path;
use tracing::{debug, info};

/// Linear Kelvin sweep definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableSpec {
    /// First sample temperature [K]
    pub start_k: f64,
    /// Last sample temperature [K], inclusive
    pub end_k: f64,
    /// Number of samples, at least 2
    pub num_points: usize,
}

impl Default for TableSpec {
    fn default() -> Self {
        Self {
            start_k: 4.0,
            end_k: 300.0,
            num_points: 50,
        }
    }
}

impl TableSpec {
    pub fn new(start_k: f64, end_k: f64, num_points: usize) -> PropsResult<Self> {
        let spec = Self {
            start_k,
            end_k,
            num_points,
        };
        spec.validate()?;
        Ok(spec)
    }

    pub fn validate(&self) -> PropsResult<()> {
        if self.num_points < 2 {
            return Err(PropsError::InvalidArg {
                what: format!(
                    "table needs at least 2 points, got {}",
                    self.num_points
                ),
            });
        }
        if !self.start_k.is_finite() || !self.end_k.is_finite() {
            return Err(PropsError::InvalidArg {
                what: "table bounds must be finite".to_string(),
            });
        }
        Ok(())
    }

    /// Kelvin step between consecutive samples.
    pub fn step_k(&self) -> f64 {
        (self.end_k - self.start_k) / (self.num_points - 1) as f64
    }

    /// Sample temperatures [K], both ends included.
    pub fn kelvin_points(&self) -> PropsResult<Vec<f64>> {
        self.validate()?;

        let step = self.step_k();
        let mut points: Vec<f64> = (0..self.num_points)
            .map(|i| self.start_k + i as f64 * step)
            .collect();

        // Ensure exact endpoint
        points[self.num_points - 1] = self.end_k;
        Ok(points)
    }
}

impl fmt::Display for TableSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} K to {} K ({} points)",
            self.start_k, self.end_k, self.num_points
        )
    }
}

/// One table sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TableRow {
    /// Sample temperature [°R]
    pub t_rankine: f64,
    /// Property value in imperial units
    pub value: f64,
}

/// An evaluated property table.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyTable {
    kind: PropertyKind,
    rows: Vec<TableRow>,
}

impl PropertyTable {
    pub fn kind(&self) -> PropertyKind {
        self.kind
    }

    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Render the table in `.prp` text form.
    pub fn to_prp_string(&self) -> String {
        let mut out = String::with_capacity(self.rows.len() * 24);
        for row in &self.rows {
            // Writing into a String cannot fail
            let _ = writeln!(out, "{:.4} {:.9}", row.t_rankine, row.value);
        }
        out
    }

    /// Write the whole table to `path` in one write, replacing any existing file.
    pub fn write_file(&self, path: &Path) -> PropsResult<()> {
        fs::write(path, self.to_prp_string()).map_err(|source| PropsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        info!(
            kind = %self.kind,
            unit = self.kind.imperial_unit(),
            rows = self.rows.len(),
            path = %path.display(),
            "wrote property table"
        );
        Ok(())
    }
}

/// Evaluate `polynomial` over the sweep in `spec`, converting to imperial units.
pub fn generate_table(
    spec: &TableSpec,
    polynomial: &Log10Polynomial,
    kind: PropertyKind,
) -> PropsResult<PropertyTable> {
    let points = spec.kelvin_points()?;
    debug!(
        %spec,
        correlation = polynomial.label(),
        si_unit = kind.si_unit(),
        "generating table"
    );

    let rows = points
        .into_iter()
        .map(|t_k| -> PropsResult<TableRow> {
            Ok(TableRow {
                t_rankine: kelvin_to_rankine(t_k),
                value: evaluate_property(t_k, polynomial, kind)?,
            })
        })
        .collect::<PropsResult<Vec<_>>>()?;

    Ok(PropertyTable { kind, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{MICROFILM_SPECIFIC_HEAT, MICROFILM_THERMAL_CONDUCTIVITY};

    #[test]
    fn default_spec_is_production_sweep() {
        let spec = TableSpec::default();
        assert_eq!(spec.num_points, 50);
        assert_eq!(spec.start_k, 4.0);
        assert_eq!(spec.end_k, 300.0);
    }

    #[test]
    fn reject_single_point() {
        let err = TableSpec::new(4.0, 300.0, 1).unwrap_err();
        assert!(matches!(err, PropsError::InvalidArg { .. }));

        let spec = TableSpec {
            start_k: 4.0,
            end_k: 300.0,
            num_points: 0,
        };
        assert!(spec.kelvin_points().is_err());
    }

    #[test]
    fn linear_points_are_uniform() {
        let spec = TableSpec::new(10.0, 20.0, 5).unwrap();
        let points = spec.kelvin_points().unwrap();
        assert_eq!(points, vec![10.0, 12.5, 15.0, 17.5, 20.0]);
    }

    #[test]
    fn production_table_endpoints() {
        let table = generate_table(
            &TableSpec::default(),
            &MICROFILM_SPECIFIC_HEAT,
            PropertyKind::SpecificHeat,
        )
        .unwrap();

        assert_eq!(table.len(), 50);
        let rows = table.rows();
        assert!((rows[0].t_rankine - 7.2).abs() < 1e-9);
        assert!((rows[49].t_rankine - 540.0).abs() < 1e-9);

        let step_r = TableSpec::default().step_k() * 9.0 / 5.0;
        for pair in rows.windows(2) {
            assert!((pair[1].t_rankine - pair[0].t_rankine - step_r).abs() < 1e-9);
        }
    }

    #[test]
    fn prp_line_format() {
        let table = generate_table(
            &TableSpec::default(),
            &MICROFILM_THERMAL_CONDUCTIVITY,
            PropertyKind::ThermalConductivity,
        )
        .unwrap();
        let text = table.to_prp_string();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 50);
        assert!(text.ends_with('\n'));
        assert!(lines[0].starts_with("7.2000 "));
        assert!(lines[49].starts_with("540.0000 "));

        for line in lines {
            let (t, v) = line.split_once(' ').unwrap();
            assert_eq!(t.split_once('.').unwrap().1.len(), 4, "{line}");
            assert_eq!(v.split_once('.').unwrap().1.len(), 9, "{line}");
        }
    }

    #[test]
    fn non_positive_start_is_domain_error() {
        let spec = TableSpec::new(0.0, 300.0, 10).unwrap();
        let err = generate_table(&spec, &MICROFILM_SPECIFIC_HEAT, PropertyKind::SpecificHeat)
            .unwrap_err();
        assert!(matches!(err, PropsError::Domain { .. }));
    }
}
