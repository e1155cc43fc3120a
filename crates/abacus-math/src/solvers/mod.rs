//! Scalar root finders used by the rate solvers.
//!
//! [`newton_raphson`] needs a derivative and converges fast near the root but
//! can wander off from a poor guess. [`bisection`] needs a sign change over
//! an interval and always narrows it down. [`hybrid`] tries the first and
//! falls back to the second.
//!
//! All three stop after [`SolverConfig::max_iterations`] steps, so a call
//! never loops indefinitely.
//!
//! # Example: solving for a periodic rate
//!
//! ```rust
//! use abacus_math::solvers::{newton_raphson, SolverConfig};
//!
//! // -1000 today grows to 1100 in one period: rate is 10%.
//! let f = |i: f64| -1000.0 * (1.0 + i) + 1100.0;
//! let df = |_: f64| -1000.0;
//!
//! let result = newton_raphson(f, df, 0.05, &SolverConfig::financial()).unwrap();
//! assert!((result.root - 0.10).abs() < 1e-10);
//! ```

mod bisection;
mod hybrid;
mod newton;

pub use bisection::bisection;
pub use hybrid::hybrid;
pub use newton::newton_raphson;

/// Step size or half-width treated as converged, unless configured otherwise.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Step budget per solve, unless configured otherwise.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Default magnitude below which a derivative counts as zero.
pub const DEFAULT_DERIVATIVE_FLOOR: f64 = 1e-15;

/// Stopping rules shared by every solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// A Newton step or bisection half-width smaller than this ends the
    /// search successfully.
    pub tolerance: f64,
    /// Steps allowed before the search is abandoned.
    pub max_iterations: u32,
    /// Newton stops with [`MathError::DerivativeTooSmall`](crate::MathError::DerivativeTooSmall)
    /// when `|f'(x)|` falls below this.
    pub derivative_floor: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            derivative_floor: DEFAULT_DERIVATIVE_FLOOR,
        }
    }
}

impl SolverConfig {
    /// Custom tolerance and step budget with the default derivative floor.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
            derivative_floor: DEFAULT_DERIVATIVE_FLOOR,
        }
    }

    /// Settings used by the rate and IRR solvers: tolerance 1e-10,
    /// 1000 iterations, derivative floor 1e-20.
    #[must_use]
    pub fn financial() -> Self {
        Self {
            tolerance: 1e-10,
            max_iterations: 1000,
            derivative_floor: 1e-20,
        }
    }

    /// Replaces the tolerance.
    #[must_use]
    pub fn with_tolerance(self, tolerance: f64) -> Self {
        Self { tolerance, ..self }
    }

    /// Replaces the step budget.
    #[must_use]
    pub fn with_max_iterations(self, max_iterations: u32) -> Self {
        Self {
            max_iterations,
            ..self
        }
    }

    /// Replaces the derivative floor.
    #[must_use]
    pub fn with_derivative_floor(self, derivative_floor: f64) -> Self {
        Self {
            derivative_floor,
            ..self
        }
    }
}

/// A converged solve.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// Where `f` vanishes, to within the tolerance.
    pub root: f64,
    /// Steps taken; 0 when a starting point was already an exact root.
    pub iterations: u32,
    /// `f(root)`.
    pub residual: f64,
}
