//! Error types for financial calculations.

use abacus_math::MathError;
use thiserror::Error;

/// A specialized Result type for financial calculations.
pub type FinanceResult<T> = Result<T, FinanceError>;

/// Errors that can occur during financial calculations.
///
/// `NonConvergent` ("no value found") is kept apart from the other two
/// ("the inputs are wrong") so callers can word their messages differently.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinanceError {
    /// A closed-form formula has no real solution for these inputs.
    #[error("No solution: {reason}")]
    Unsolvable {
        /// Why no solution exists.
        reason: String,
    },

    /// An iterative solver gave up without finding a value.
    #[error("Solver did not converge: {reason}")]
    NonConvergent {
        /// What the solver ran into.
        reason: String,
    },

    /// An argument is out of range.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl FinanceError {
    /// Creates an unsolvable error.
    #[must_use]
    pub fn unsolvable(reason: impl Into<String>) -> Self {
        Self::Unsolvable {
            reason: reason.into(),
        }
    }

    /// Creates a non-convergence error.
    #[must_use]
    pub fn non_convergent(reason: impl Into<String>) -> Self {
        Self::NonConvergent {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for FinanceError {
    fn from(err: MathError) -> Self {
        if err.is_solver_failure() {
            Self::non_convergent(err.to_string())
        } else {
            Self::invalid_input(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_failures_become_non_convergent() {
        let err = FinanceError::from(MathError::convergence_failed(1000, 3.5));
        assert!(matches!(err, FinanceError::NonConvergent { .. }));

        let err = FinanceError::from(MathError::Diverged { iteration: 4 });
        assert!(matches!(err, FinanceError::NonConvergent { .. }));
    }

    #[test]
    fn test_other_math_errors_become_invalid_input() {
        let err = FinanceError::from(MathError::DivisionByZero);
        assert_eq!(err, FinanceError::invalid_input("Division by zero"));
    }

    #[test]
    fn test_display() {
        assert_eq!(
            FinanceError::unsolvable("ratio is not positive").to_string(),
            "No solution: ratio is not positive"
        );
    }
}
