//! Property tests for bracketed root finders.

use cryo_solver::{BracketConfig, SolverError, bisection, brent};
use proptest::prelude::*;

proptest! {
    #[test]
    fn brent_recovers_linear_root(root in -100.0f64..100.0, slope in 0.1f64..50.0) {
        let f = |x: f64| Ok::<_, SolverError>(slope * (x - root));
        let result = brent(f, -200.0, 200.0, &BracketConfig::default()).unwrap();
        prop_assert!((result.root - root).abs() < 1e-9);
    }

    #[test]
    fn brent_and_bisection_agree(root in 50.0f64..350.0) {
        // Monotone decreasing, curved, like a heat-balance residual
        let f = |x: f64| Ok::<_, SolverError>((root / x).powi(3) - 1.0);
        let config = BracketConfig::default();
        let a = brent(f, 50.0, 350.0, &config).unwrap();
        let b = bisection(f, 50.0, 350.0, &config).unwrap();
        prop_assert!((a.root - root).abs() < 1e-8);
        prop_assert!((a.root - b.root).abs() < 1e-8);
        prop_assert!(a.evaluations <= b.evaluations);
    }

    #[test]
    fn root_stays_inside_bracket(shift in -1.0f64..1.0) {
        let f = |x: f64| Ok::<_, SolverError>((x - shift).tanh());
        let result = brent(f, -1.5, 1.5, &BracketConfig::default()).unwrap();
        prop_assert!(result.root >= -1.5 && result.root <= 1.5);
    }
}
