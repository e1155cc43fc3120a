//! Hybrid root-finding algorithm.
//!
//! Newton-Raphson with a bisection safety net.

use crate::error::MathResult;
use crate::solvers::{bisection, newton_raphson, SolverConfig, SolverResult};

/// Hybrid root-finding algorithm.
///
/// Runs Newton-Raphson from `initial_guess` with the full `config`. If Newton
/// fails for any reason and `bounds` are given, bisection is run over them;
/// its outcome (including [`MathError::InvalidBracket`](crate::MathError::InvalidBracket)
/// when the bounds do not straddle a sign change) is returned. Without
/// bounds the Newton error is returned unchanged.
///
/// # Example
///
/// ```rust
/// use abacus_math::solvers::{hybrid, SolverConfig};
///
/// let f = |x: f64| x * x * x - x - 2.0;
/// let df = |x: f64| 3.0 * x * x - 1.0;
///
/// let result = hybrid(f, df, 1.5, Some((1.0, 2.0)), &SolverConfig::default()).unwrap();
/// assert!(f(result.root).abs() < 1e-9);
/// ```
pub fn hybrid<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    bounds: Option<(f64, f64)>,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    match newton_raphson(&f, &df, initial_guess, config) {
        Ok(result) => Ok(result),
        Err(newton_error) => match bounds {
            Some((a, b)) => {
                log::debug!(
                    "Newton-Raphson failed from {initial_guess} ({newton_error}); bisecting [{a}, {b}]"
                );
                bisection(&f, a, b, config)
            }
            None => Err(newton_error),
        },
    }
}
