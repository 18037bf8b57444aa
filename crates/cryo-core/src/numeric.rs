use crate::error::CryoError;

/// Absolute + relative tolerance pair.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: f64,
    pub rel: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: f64, b: f64, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

/// Opposite-sign test used for root brackets. Zero counts as a sign change.
pub fn opposite_signs(a: f64, b: f64) -> bool {
    a == 0.0 || b == 0.0 || (a < 0.0) != (b < 0.0)
}

pub fn ensure_finite(v: f64, what: &'static str) -> Result<f64, CryoError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(CryoError::NonFinite { what, value: v })
    }
}
