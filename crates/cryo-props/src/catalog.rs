//! Embedded correlation coefficient sets.

use crate::correlation::Log10Polynomial;

/// Microfilm thermal conductivity, W/(m·K).
pub const MICROFILM_THERMAL_CONDUCTIVITY: Log10Polynomial = Log10Polynomial::new(
    "microfilm thermal conductivity",
    [
        2.7380, -30.677, 89.430, -136.99, 124.69, -69.556, 23.320, -4.3135, 0.33829,
    ],
);

/// Microfilm specific heat, J/(kg·K).
pub const MICROFILM_SPECIFIC_HEAT: Log10Polynomial = Log10Polynomial::new(
    "microfilm specific heat",
    [
        31.88256, -166.51949, 352.01879, -393.44232, 259.98072, -104.61429, 24.99276, -3.20792,
        0.16503,
    ],
);

/// 304 stainless steel specific heat, J/(kg·K). Degree 7 fit.
pub const SS304_SPECIFIC_HEAT: Log10Polynomial = Log10Polynomial::new(
    "304 stainless specific heat",
    [
        22.0061, -127.5528, 303.647, -381.0098, 274.0328, -112.9212, 24.7593, -2.239153, 0.0,
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stainless_fit_has_zero_ninth_coefficient() {
        assert_eq!(SS304_SPECIFIC_HEAT.coefficients()[8], 0.0);
    }

    #[test]
    fn thermal_conductivity_positive_at_100k() {
        let k_si = MICROFILM_THERMAL_CONDUCTIVITY.evaluate_si(100.0).unwrap();
        assert!(k_si > 0.0);
        // Polymer film conductivity at 100 K is a fraction of a W/(m·K)
        assert!(k_si > 0.1 && k_si < 0.5, "k = {k_si}");
    }

    #[test]
    fn stainless_specific_heat_plausible() {
        let cp_100 = SS304_SPECIFIC_HEAT.evaluate_si(100.0).unwrap();
        let cp_300 = SS304_SPECIFIC_HEAT.evaluate_si(300.0).unwrap();
        assert!(cp_100 > 200.0 && cp_100 < 350.0, "cp(100 K) = {cp_100}");
        assert!(cp_300 > 400.0 && cp_300 < 550.0, "cp(300 K) = {cp_300}");
    }
}
