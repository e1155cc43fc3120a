//! Interval halving.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Finds a root of `f` inside `[a, b]` by repeated halving.
///
/// The endpoints may come in either order but must straddle a sign change
/// (a zero at either end also counts). Each step keeps the half whose ends
/// still differ in sign, stopping once the half-width drops below
/// `config.tolerance` or `f(mid)` is exactly zero.
///
/// # Example
///
/// ```rust
/// use abacus_math::solvers::{bisection, SolverConfig};
///
/// // rate at which 1000 grows to 1210 over two periods
/// let f = |i: f64| 1000.0 * (1.0 + i).powi(2) - 1210.0;
///
/// let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 0.10).abs() < 1e-10);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    let (mut lo, mut hi) = if a <= b { (a, b) } else { (b, a) };
    let (f_a, f_b) = (f(lo), f(hi));

    let straddles = !f_a.is_nan()
        && !f_b.is_nan()
        && (f_a == 0.0 || f_b == 0.0 || (f_a < 0.0) != (f_b < 0.0));
    if !straddles {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_a,
            fb: f_b,
        });
    }

    for (x, fx) in [(lo, f_a), (hi, f_b)] {
        if fx == 0.0 {
            return Ok(SolverResult {
                root: x,
                iterations: 0,
                residual: fx,
            });
        }
    }

    let lo_negative = f_a < 0.0;
    let mut mid = lo + (hi - lo) / 2.0;
    for step in 1..=config.max_iterations {
        mid = lo + (hi - lo) / 2.0;
        let f_mid = f(mid);

        if f_mid == 0.0 || (hi - lo) / 2.0 < config.tolerance {
            return Ok(SolverResult {
                root: mid,
                iterations: step,
                residual: f_mid,
            });
        }

        // the lower end keeps its sign throughout, so one comparison decides
        if (f_mid < 0.0) == lo_negative {
            lo = mid;
        } else {
            hi = mid;
        }
    }

    Err(MathError::convergence_failed(config.max_iterations, f(mid).abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn two_period_growth(i: f64) -> f64 {
        1000.0 * (1.0 + i).powi(2) - 1210.0
    }

    #[test]
    fn test_growth_rate() {
        let result = bisection(two_period_growth, 0.0, 1.0, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, 0.10, epsilon = 1e-10);
    }

    #[test]
    fn test_endpoints_in_either_order() {
        let forward = bisection(two_period_growth, -0.5, 2.0, &SolverConfig::default()).unwrap();
        let reversed = bisection(two_period_growth, 2.0, -0.5, &SolverConfig::default()).unwrap();
        assert_eq!(forward.root, reversed.root);
    }

    #[test]
    fn test_decreasing_function() {
        // NPV falls as the discount rate rises
        let npv = |r: f64| -1000.0 + 1100.0 / (1.0 + r);
        let result = bisection(npv, -0.5, 5.0, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, 0.10, epsilon = 1e-9);
    }

    #[test]
    fn test_same_sign_is_rejected() {
        let result = bisection(two_period_growth, 0.2, 0.9, &SolverConfig::default());
        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_nan_endpoint_is_rejected() {
        let result = bisection(f64::ln, -1.0, 2.0, &SolverConfig::default());
        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_zero_at_endpoint() {
        let result = bisection(|x| x * x - 4.0, 2.0, 5.0, &SolverConfig::default()).unwrap();
        assert_eq!(result.iterations, 0);
        assert_eq!(result.root, 2.0);
    }

    #[test]
    fn test_tiny_values_still_narrow_the_interval() {
        let f = |x: f64| 1e-15 * (x - 0.3);
        let result = bisection(f, 0.0, 1.0, &SolverConfig::default()).unwrap();
        assert_relative_eq!(result.root, 0.3, epsilon = 1e-9);
    }

    #[test]
    fn test_underflowing_product_is_not_a_bracket() {
        // f(a) * f(b) underflows to zero although both are positive
        let f = |x: f64| 1e-200 * (x * x + 1.0);
        let result = bisection(f, -1.0, 1.0, &SolverConfig::default());
        assert!(matches!(result, Err(MathError::InvalidBracket { .. })));
    }

    #[test]
    fn test_iteration_cap() {
        let result = bisection(two_period_growth, 0.0, 1.0, &SolverConfig::new(1e-14, 5));
        assert!(matches!(
            result,
            Err(MathError::ConvergenceFailed { iterations: 5, .. })
        ));
    }
}
