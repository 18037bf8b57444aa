//! Bracketed scalar root finding.
//!
//! Both solvers require `f(a)` and `f(b)` to differ in sign and never leave
//! `[a, b]`. The residual closure may fail with the caller's error type; solver
//! failures are converted into it through `From<SolverError>`.

use crate::error::SolverError;
use cryo_core::numeric::{ensure_finite, opposite_signs};
use tracing::debug;

/// Bracketed solver configuration.
#[derive(Debug, Clone, Copy)]
pub struct BracketConfig {
    /// Absolute tolerance on the root location
    pub xtol: f64,
    /// Relative tolerance on the root location
    pub rtol: f64,
    /// Maximum iterations
    pub max_iterations: usize,
}

impl Default for BracketConfig {
    fn default() -> Self {
        Self {
            xtol: 2e-12,
            rtol: 4.0 * f64::EPSILON,
            max_iterations: 100,
        }
    }
}

/// Converged root.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RootResult {
    /// Root location
    pub root: f64,
    /// Residual at `root`
    pub residual: f64,
    /// Number of iterations
    pub iterations: usize,
    /// Number of residual evaluations, endpoints included
    pub evaluations: usize,
}

fn finite_residual(x: f64, fx: f64) -> Result<f64, SolverError> {
    ensure_finite(fx, "residual").map_err(|_| SolverError::Numeric {
        what: format!("residual is {fx} at x = {x}"),
    })
}

fn check_bracket(a: f64, b: f64) -> Result<(), SolverError> {
    if !a.is_finite() || !b.is_finite() || a == b {
        return Err(SolverError::InvalidArg {
            what: format!("bracket [{a}, {b}] must be finite and non-degenerate"),
        });
    }
    Ok(())
}

/// Brent's method: inverse quadratic / secant steps guarded by bisection.
pub fn brent<F, E>(mut f: F, a: f64, b: f64, config: &BracketConfig) -> Result<RootResult, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SolverError>,
{
    check_bracket(a, b)?;

    let mut xpre = a;
    let mut xcur = b;
    let mut fpre = finite_residual(xpre, f(xpre)?)?;
    let mut fcur = finite_residual(xcur, f(xcur)?)?;
    let mut evaluations = 2;

    if !opposite_signs(fpre, fcur) {
        return Err(SolverError::NoSignChange {
            a,
            b,
            fa: fpre,
            fb: fcur,
        }
        .into());
    }
    if fpre == 0.0 {
        return Ok(RootResult {
            root: xpre,
            residual: fpre,
            iterations: 0,
            evaluations,
        });
    }
    if fcur == 0.0 {
        return Ok(RootResult {
            root: xcur,
            residual: fcur,
            iterations: 0,
            evaluations,
        });
    }

    // xblk/fblk: contrapoint, always of opposite sign to xcur
    let mut xblk = 0.0;
    let mut fblk = 0.0;
    let mut spre = 0.0;
    let mut scur = 0.0;

    for iter in 0..config.max_iterations {
        if fpre != 0.0 && fcur != 0.0 && (fpre < 0.0) != (fcur < 0.0) {
            xblk = xpre;
            fblk = fpre;
            scur = xcur - xpre;
            spre = scur;
        }
        if fblk.abs() < fcur.abs() {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;

            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        let delta = 0.5 * (config.xtol + config.rtol * xcur.abs());
        let sbis = 0.5 * (xblk - xcur);
        if fcur == 0.0 || sbis.abs() < delta {
            debug!(root = xcur, iterations = iter, evaluations, "brent converged");
            return Ok(RootResult {
                root: xcur,
                residual: fcur,
                iterations: iter,
                evaluations,
            });
        }

        if spre.abs() > delta && fcur.abs() < fpre.abs() {
            let stry = if xpre == xblk {
                // Secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                // Inverse quadratic interpolation
                let dpre = (fpre - fcur) / (xpre - xcur);
                let dblk = (fblk - fcur) / (xblk - xcur);
                -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
            };

            if 2.0 * stry.abs() < spre.abs().min(3.0 * sbis.abs() - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if scur.abs() > delta {
            xcur += scur;
        } else {
            xcur += if sbis > 0.0 { delta } else { -delta };
        }

        fcur = finite_residual(xcur, f(xcur)?)?;
        evaluations += 1;
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "brent: maximum iterations {} reached near x = {}",
            config.max_iterations, xcur
        ),
    }
    .into())
}

/// Plain bisection. Slower than [`brent`] but each step halves the bracket.
pub fn bisection<F, E>(mut f: F, a: f64, b: f64, config: &BracketConfig) -> Result<RootResult, E>
where
    F: FnMut(f64) -> Result<f64, E>,
    E: From<SolverError>,
{
    check_bracket(a, b)?;

    let mut lo = a;
    let mut hi = b;
    let mut f_lo = finite_residual(lo, f(lo)?)?;
    let f_hi = finite_residual(hi, f(hi)?)?;
    let mut evaluations = 2;

    if !opposite_signs(f_lo, f_hi) {
        return Err(SolverError::NoSignChange {
            a,
            b,
            fa: f_lo,
            fb: f_hi,
        }
        .into());
    }
    if f_lo == 0.0 {
        return Ok(RootResult {
            root: lo,
            residual: f_lo,
            iterations: 0,
            evaluations,
        });
    }
    if f_hi == 0.0 {
        return Ok(RootResult {
            root: hi,
            residual: f_hi,
            iterations: 0,
            evaluations,
        });
    }

    for iter in 0..config.max_iterations {
        let mid = 0.5 * (lo + hi);
        let f_mid = finite_residual(mid, f(mid)?)?;
        evaluations += 1;

        let tol = config.xtol + config.rtol * mid.abs();
        if f_mid == 0.0 || 0.5 * (hi - lo).abs() < tol {
            debug!(root = mid, iterations = iter + 1, "bisection converged");
            return Ok(RootResult {
                root: mid,
                residual: f_mid,
                iterations: iter + 1,
                evaluations,
            });
        }

        if opposite_signs(f_lo, f_mid) {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    Err(SolverError::ConvergenceFailed {
        what: format!(
            "bisection: maximum iterations {} reached, bracket [{}, {}]",
            config.max_iterations, lo, hi
        ),
    }
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SolverResult;

    fn cubic(x: f64) -> SolverResult<f64> {
        Ok(x * x * x - 2.0 * x - 5.0)
    }

    // Root of x^3 - 2x - 5 (Wallis)
    const CUBIC_ROOT: f64 = 2.094_551_481_542_326_5;

    #[test]
    fn brent_finds_cubic_root() {
        let result = brent(cubic, 2.0, 3.0, &BracketConfig::default()).unwrap();
        assert!((result.root - CUBIC_ROOT).abs() < 1e-11);
        assert!(result.iterations < 15);
    }

    #[test]
    fn bisection_finds_cubic_root() {
        let result = bisection(cubic, 2.0, 3.0, &BracketConfig::default()).unwrap();
        assert!((result.root - CUBIC_ROOT).abs() < 1e-11);
        assert!(result.iterations > 30);
    }

    #[test]
    fn reversed_bracket_is_accepted() {
        let result = brent(cubic, 3.0, 2.0, &BracketConfig::default()).unwrap();
        assert!((result.root - CUBIC_ROOT).abs() < 1e-11);
    }

    #[test]
    fn no_sign_change_is_reported() {
        let config = BracketConfig::default();
        let positive = |x: f64| Ok::<_, SolverError>(x * x + 1.0);

        let err = brent(positive, -1.0, 2.0, &config).unwrap_err();
        assert!(matches!(err, SolverError::NoSignChange { .. }));

        let err = bisection(positive, -1.0, 2.0, &config).unwrap_err();
        assert!(matches!(err, SolverError::NoSignChange { .. }));
    }

    #[test]
    fn endpoint_root_returns_immediately() {
        let linear = |x: f64| Ok::<_, SolverError>(x - 1.0);
        let result = brent(linear, 1.0, 4.0, &BracketConfig::default()).unwrap();
        assert_eq!(result.root, 1.0);
        assert_eq!(result.evaluations, 2);
    }

    #[test]
    fn iteration_limit_is_convergence_failure() {
        let config = BracketConfig {
            max_iterations: 2,
            ..BracketConfig::default()
        };
        let err = bisection(cubic, 2.0, 3.0, &config).unwrap_err();
        assert!(matches!(err, SolverError::ConvergenceFailed { .. }));
    }

    #[test]
    fn residual_errors_propagate() {
        #[derive(Debug)]
        #[allow(dead_code)]
        enum ModelError {
            Model,
            Solver(SolverError),
        }
        impl From<SolverError> for ModelError {
            fn from(e: SolverError) -> Self {
                ModelError::Solver(e)
            }
        }

        let err = brent(
            |x: f64| if x > 2.5 { Err(ModelError::Model) } else { Ok(x - 2.0) },
            0.0,
            3.0,
            &BracketConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ModelError::Model));
    }

    #[test]
    fn non_finite_residual_is_numeric_error() {
        let nan = |_x: f64| Ok::<_, SolverError>(f64::NAN);
        let err = brent(nan, 0.0, 1.0, &BracketConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::Numeric { .. }));

        let err = bisection(nan, 0.0, 1.0, &BracketConfig::default()).unwrap_err();
        assert!(matches!(err, SolverError::Numeric { .. }));
    }
}
