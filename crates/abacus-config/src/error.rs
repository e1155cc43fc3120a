//! Configuration error types.

use std::path::PathBuf;

use thiserror::Error;

/// Configuration operation result type.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("Cannot read {}: {source}", .path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// The file extension names no supported format.
    #[error("Unsupported configuration format '{extension}' (expected toml or json)")]
    UnsupportedFormat {
        /// Extension found, empty if there was none.
        extension: String,
    },

    /// Deserialization error.
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// Validation error.
    #[error("Validation error: {field}: {message}")]
    Validation {
        /// Field that failed validation.
        field: String,
        /// Validation error message.
        message: String,
    },

    /// Multiple validation errors.
    #[error("Multiple validation errors: {}", join_errors(.0))]
    MultipleValidationErrors(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// One rejected setting, named by its dotted path (`graph.samples`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dotted path of the offending setting.
    pub field: String,
    /// What is wrong with it.
    pub message: String,
    /// Short identifier of the broken rule, if any.
    pub rule: Option<String>,
}

impl ValidationError {
    /// Creates an error with no rule identifier.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            rule: None,
        }
    }

    /// Creates an error tagged with the rule it breaks.
    pub fn with_rule(
        field: impl Into<String>,
        message: impl Into<String>,
        rule: impl Into<String>,
    ) -> Self {
        Self {
            rule: Some(rule.into()),
            ..Self::new(field, message)
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)?;
        match &self.rule {
            Some(rule) => write!(f, " (rule: {rule})"),
            None => Ok(()),
        }
    }
}

impl From<ValidationError> for ConfigError {
    fn from(err: ValidationError) -> Self {
        ConfigError::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::Deserialization(err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Deserialization(err.to_string())
    }
}

/// Settings that can check their own values after deserialization.
pub trait Validate {
    /// Every problem found; empty when the settings are usable.
    fn validate(&self) -> Vec<ValidationError>;

    /// True when [`validate`](Self::validate) finds nothing.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }

    /// Collapses the findings into a single [`ConfigError`].
    ///
    /// One problem becomes [`ConfigError::Validation`], several become
    /// [`ConfigError::MultipleValidationErrors`].
    fn validate_or_error(&self) -> ConfigResult<()> {
        let mut errors = self.validate();
        if errors.len() > 1 {
            return Err(ConfigError::MultipleValidationErrors(errors));
        }
        errors.pop().map_or(Ok(()), |err| Err(err.into()))
    }
}
