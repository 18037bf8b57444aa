//! Log10-polynomial property correlations.
//!
//! The model is the NIST cryogenic material fit form
//!
//! ```text
//! log10(y) = a + b·log10(T) + c·log10(T)² + … + i·log10(T)⁸
//! ```
//!
//! with `T` in Kelvin and `y` in SI units. Fits of lower degree pad the
//! trailing coefficients with zero.

use crate::error::{PropsError, PropsResult};
use cryo_core::numeric::ensure_finite;
use cryo_core::units::constants::{
    SPECIFIC_HEAT_SI_TO_IMPERIAL, THERMAL_CONDUCTIVITY_SI_TO_IMPERIAL,
};
use std::fmt;

/// Number of coefficients (a..i) in a correlation.
pub const NUM_COEFFS: usize = 9;

/// A log10-domain polynomial of degree 8 with fixed coefficients.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Log10Polynomial {
    label: &'static str,
    coeffs: [f64; NUM_COEFFS],
}

impl Log10Polynomial {
    /// Coefficients are positional: `coeffs[n]` multiplies `log10(T)^n`.
    pub const fn new(label: &'static str, coeffs: [f64; NUM_COEFFS]) -> Self {
        Self { label, coeffs }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn coefficients(&self) -> &[f64; NUM_COEFFS] {
        &self.coeffs
    }

    /// Evaluate `log10(y)` at `t_k`.
    ///
    /// Fails with [`PropsError::Domain`] unless `t_k` is finite and strictly positive.
    pub fn log10_value(&self, t_k: f64) -> PropsResult<f64> {
        if !t_k.is_finite() || t_k <= 0.0 {
            return Err(PropsError::Domain {
                what: self.label,
                value: t_k,
            });
        }

        let log_t = t_k.log10();
        // Horner
        Ok(self
            .coeffs
            .iter()
            .rev()
            .fold(0.0, |acc, &c| acc * log_t + c))
    }

    /// Evaluate the property in SI units at `t_k`.
    pub fn evaluate_si(&self, t_k: f64) -> PropsResult<f64> {
        let y = 10f64.powf(self.log10_value(t_k)?);
        ensure_finite(y, self.label).map_err(|_| PropsError::NonFinite {
            what: self.label,
            t_k,
        })
    }

    /// Vectorized [`evaluate_si`](Self::evaluate_si). Output order matches input order.
    pub fn evaluate_si_many(&self, temps_k: &[f64]) -> PropsResult<Vec<f64>> {
        temps_k.iter().map(|&t| self.evaluate_si(t)).collect()
    }
}

/// Which physical property a correlation describes.
///
/// Selects the SI to imperial conversion applied to the evaluated value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyKind {
    /// Specific heat, J/(kg·K) -> BTU/(lbm·°R)
    SpecificHeat,
    /// Thermal conductivity, W/(m·K) -> BTU/(s·ft·°R)
    ThermalConductivity,
}

impl PropertyKind {
    pub fn si_to_imperial(self) -> f64 {
        match self {
            Self::SpecificHeat => SPECIFIC_HEAT_SI_TO_IMPERIAL,
            Self::ThermalConductivity => THERMAL_CONDUCTIVITY_SI_TO_IMPERIAL,
        }
    }

    pub fn si_unit(self) -> &'static str {
        match self {
            Self::SpecificHeat => "J/(kg·K)",
            Self::ThermalConductivity => "W/(m·K)",
        }
    }

    pub fn imperial_unit(self) -> &'static str {
        match self {
            Self::SpecificHeat => "BTU/(lbm·°R)",
            Self::ThermalConductivity => "BTU/(s·ft·°R)",
        }
    }
}

impl fmt::Display for PropertyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SpecificHeat => write!(f, "Specific Heat"),
            Self::ThermalConductivity => write!(f, "Thermal Conductivity"),
        }
    }
}

/// Evaluate a correlation at `t_k` and convert the result to imperial units.
pub fn evaluate_property(
    t_k: f64,
    polynomial: &Log10Polynomial,
    kind: PropertyKind,
) -> PropsResult<f64> {
    Ok(polynomial.evaluate_si(t_k)? * kind.si_to_imperial())
}

#[cfg(test)]
mod tests {
    use super::*;

    const LINEAR: Log10Polynomial =
        Log10Polynomial::new("linear", [1.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);

    #[test]
    fn horner_matches_power_sum() {
        let poly = Log10Polynomial::new(
            "mixed",
            [0.5, -1.25, 0.75, 0.1, -0.02, 0.003, 0.0, -1e-4, 2e-5],
        );
        let t = 37.5_f64;
        let log_t = t.log10();
        let expected: f64 = poly
            .coefficients()
            .iter()
            .enumerate()
            .map(|(n, c)| c * log_t.powi(n as i32))
            .sum();
        let got = poly.log10_value(t).unwrap();
        assert!((got - expected).abs() < 1e-12);
    }

    #[test]
    fn closed_form_linear_fit() {
        // log10(y) = 1 + 2·log10(T)  =>  y = 10·T²
        let y = LINEAR.evaluate_si(10.0).unwrap();
        assert!((y - 1000.0).abs() < 1e-9);
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        for t in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = LINEAR.evaluate_si(t).unwrap_err();
            assert!(matches!(err, PropsError::Domain { .. }), "t = {t}");
        }
    }

    #[test]
    fn conversion_factor_applied() {
        let si = LINEAR.evaluate_si(10.0).unwrap();
        let cp = evaluate_property(10.0, &LINEAR, PropertyKind::SpecificHeat).unwrap();
        let kc = evaluate_property(10.0, &LINEAR, PropertyKind::ThermalConductivity).unwrap();
        assert!((cp - si * 2.388459e-4).abs() < 1e-12);
        assert!((kc - si * 1.605e-4).abs() < 1e-12);
    }

    #[test]
    fn overflow_is_reported() {
        let huge = Log10Polynomial::new("huge", [400.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0]);
        assert!(matches!(
            huge.evaluate_si(10.0),
            Err(PropsError::NonFinite { .. })
        ));
    }

    #[test]
    fn vectorized_preserves_order() {
        let ys = LINEAR.evaluate_si_many(&[1.0, 2.0, 3.0]).unwrap();
        assert_eq!(ys.len(), 3);
        assert!((ys[0] - 10.0).abs() < 1e-9);
        assert!((ys[1] - 40.0).abs() < 1e-9);
        assert!((ys[2] - 90.0).abs() < 1e-9);

        assert!(LINEAR.evaluate_si_many(&[1.0, 0.0]).is_err());
    }
}
