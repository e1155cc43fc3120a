//! Newton-Raphson iteration with an analytic derivative.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Refines `initial_guess` toward a root of `f` using `x - f(x) / f'(x)`.
///
/// Succeeds once a step is shorter than `config.tolerance`, or when `f(x)`
/// is exactly zero. The size of `f(x)` alone never ends the search, so the
/// answer does not depend on how `f` is scaled. Errors:
///
/// - [`MathError::DerivativeTooSmall`] if `f'(x)` is NaN or smaller in
///   magnitude than `config.derivative_floor`
/// - [`MathError::Diverged`] if an iterate stops being finite
/// - [`MathError::ConvergenceFailed`] after `config.max_iterations` steps
///
/// # Example
///
/// ```rust
/// use abacus_math::solvers::{newton_raphson, SolverConfig};
///
/// // 1000 at rate i for three periods reaches 1331
/// let f = |i: f64| 1000.0 * (1.0 + i).powi(3) - 1331.0;
/// let df = |i: f64| 3000.0 * (1.0 + i).powi(2);
///
/// let result = newton_raphson(f, df, 0.05, &SolverConfig::default()).unwrap();
/// assert!((result.root - 0.10).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let tolerance = config.tolerance;
    let mut x = initial_guess;
    let mut iteration = 0;

    while iteration < config.max_iterations {
        let residual = f(x);
        if residual == 0.0 {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual,
            });
        }

        let slope = df(x);
        if slope.is_nan() || slope.abs() < config.derivative_floor {
            return Err(MathError::DerivativeTooSmall {
                iteration,
                value: slope,
            });
        }

        let step = residual / slope;
        x -= step;
        if !x.is_finite() {
            return Err(MathError::Diverged { iteration });
        }

        iteration += 1;
        if step.abs() < tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: f(x),
            });
        }
    }

    Err(MathError::convergence_failed(config.max_iterations, f(x).abs()))
}
