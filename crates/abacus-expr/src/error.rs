//! Error types for expression evaluation.

use abacus_math::MathError;
use thiserror::Error;

/// A specialized Result type for expression evaluation.
pub type EvalResult<T = f64> = Result<T, EvalError>;

/// Errors that can occur while parsing or evaluating an expression.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A character that the grammar does not allow at this point.
    ///
    /// `position` is a character index into the input after whitespace has
    /// been removed.
    #[error("Unexpected character '{character}' at position {position}")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// Character index in the normalized input.
        position: usize,
    },

    /// The input ended where an operand or closing parenthesis was required.
    #[error("Unexpected end of expression")]
    UnexpectedEnd,

    /// A name that is not a known constant, or not a function of the given arity.
    #[error("Unknown function: {name}")]
    UnknownFunction {
        /// The identifier, lowercased.
        name: String,
    },

    /// Division, reciprocal or modulo by zero.
    #[error("Division by zero")]
    DivisionByZero,

    /// A function argument outside its mathematical domain.
    #[error("Domain error: {reason}")]
    Domain {
        /// Which function and which precondition failed.
        reason: String,
    },
}

impl EvalError {
    /// Creates an unknown function error.
    #[must_use]
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction { name: name.into() }
    }

    /// Creates a domain error.
    #[must_use]
    pub fn domain(reason: impl Into<String>) -> Self {
        Self::Domain {
            reason: reason.into(),
        }
    }
}

impl From<MathError> for EvalError {
    fn from(err: MathError) -> Self {
        match err {
            MathError::DivisionByZero => Self::DivisionByZero,
            MathError::Domain {
                function,
                requirement,
            } => Self::domain(format!("{function} requires {requirement}")),
            other => Self::domain(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EvalError::UnexpectedCharacter {
            character: ')',
            position: 3,
        };
        assert_eq!(err.to_string(), "Unexpected character ')' at position 3");
        assert_eq!(
            EvalError::unknown_function("foo").to_string(),
            "Unknown function: foo"
        );
    }

    #[test]
    fn test_from_math_error() {
        assert_eq!(
            EvalError::from(MathError::DivisionByZero),
            EvalError::DivisionByZero
        );
        assert_eq!(
            EvalError::from(MathError::domain("sqrt", "x >= 0")),
            EvalError::domain("sqrt requires x >= 0")
        );
    }
}
