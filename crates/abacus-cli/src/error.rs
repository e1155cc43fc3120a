//! CLI error types.

use abacus_config::ConfigError;
use abacus_expr::EvalError;
use abacus_finance::FinanceError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// The expression could not be evaluated.
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] EvalError),

    /// A financial function rejected its inputs or did not converge.
    #[error("{0}")]
    Finance(#[from] FinanceError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// An argument combination the commands cannot use.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
