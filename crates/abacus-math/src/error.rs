//! Error types for mathematical operations.

use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Division (or reciprocal, or modulo) by exactly zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// A function's input lies outside its mathematical domain.
    #[error("Domain error: {function} requires {requirement}")]
    Domain {
        /// Name of the function whose precondition failed.
        function: &'static str,
        /// The violated precondition, in words.
        requirement: &'static str,
    },

    /// Root-finding algorithm failed to converge.
    #[error("Convergence failed after {iterations} iterations (residual: {residual:.2e})")]
    ConvergenceFailed {
        /// Number of iterations attempted.
        iterations: u32,
        /// Final residual value.
        residual: f64,
    },

    /// Newton step impossible because the derivative vanished.
    #[error("Derivative too small at iteration {iteration}: {value:.2e}")]
    DerivativeTooSmall {
        /// Iteration at which the derivative vanished.
        iteration: u32,
        /// The near-zero derivative.
        value: f64,
    },

    /// The iterate left the finite numbers.
    #[error("Iteration diverged to a non-finite value at iteration {iteration}")]
    Diverged {
        /// Iteration at which the iterate became non-finite.
        iteration: u32,
    },

    /// Invalid bracket for root-finding.
    #[error("Invalid bracket: f({a}) = {fa:.2e} and f({b}) = {fb:.2e} have same sign")]
    InvalidBracket {
        /// Lower bound of bracket.
        a: f64,
        /// Upper bound of bracket.
        b: f64,
        /// Function value at a.
        fa: f64,
        /// Function value at b.
        fb: f64,
    },
}

impl MathError {
    /// Creates a domain error.
    #[must_use]
    pub fn domain(function: &'static str, requirement: &'static str) -> Self {
        Self::Domain {
            function,
            requirement,
        }
    }

    /// Creates a convergence failed error.
    #[must_use]
    pub fn convergence_failed(iterations: u32, residual: f64) -> Self {
        Self::ConvergenceFailed {
            iterations,
            residual,
        }
    }

    /// Returns true if this error comes from an iterative solver giving up,
    /// as opposed to bad input.
    #[must_use]
    pub fn is_solver_failure(&self) -> bool {
        matches!(
            self,
            Self::ConvergenceFailed { .. }
                | Self::DerivativeTooSmall { .. }
                | Self::Diverged { .. }
                | Self::InvalidBracket { .. }
        )
    }
}
