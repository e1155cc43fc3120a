//! Error types for the Abacus core crate.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building core values from user input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// An angle unit name was not recognised.
    #[error("Invalid angle unit: '{value}' (expected DEG or RAD)")]
    InvalidAngleUnit {
        /// The rejected input.
        value: String,
    },
}

impl CoreError {
    /// Creates an invalid angle unit error.
    #[must_use]
    pub fn invalid_angle_unit(value: impl Into<String>) -> Self {
        Self::InvalidAngleUnit {
            value: value.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_angle_unit("grad");
        assert!(err.to_string().contains("'grad'"));
    }
}
