//! Sampling and trapezoidal quadrature.

use crate::error::{SolverError, SolverResult};

/// `n` evenly spaced samples from `start` to `end`, both included.
///
/// `end` may be below `start`; the samples then descend.
pub fn linspace(start: f64, end: f64, n: usize) -> SolverResult<Vec<f64>> {
    if n < 2 {
        return Err(SolverError::InvalidArg {
            what: format!("linspace needs at least 2 points, got {n}"),
        });
    }

    let delta = (end - start) / (n - 1) as f64;
    let mut points: Vec<f64> = (0..n).map(|i| start + i as f64 * delta).collect();

    // Ensure exact endpoint
    points[n - 1] = end;
    Ok(points)
}

/// Composite trapezoidal rule over paired samples `(xs[i], ys[i])`.
///
/// The result is signed: descending `xs` yields the negated integral.
/// Fewer than two samples integrate to zero.
pub fn trapezoid(ys: &[f64], xs: &[f64]) -> SolverResult<f64> {
    if ys.len() != xs.len() {
        return Err(SolverError::InvalidArg {
            what: format!(
                "trapezoid sample length mismatch: {} values, {} abscissae",
                ys.len(),
                xs.len()
            ),
        });
    }

    Ok(xs
        .windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| 0.5 * (x[1] - x[0]) * (y[0] + y[1]))
        .sum())
}
