//! CLI error types.

use finmath::DomainError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Command name not present in the formula registry.
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    /// Wrong number of values for a formula.
    #[error("{command} expects {expected} values, got {actual}")]
    ArgumentCount {
        /// Command name.
        command: &'static str,
        /// Declared arity.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },

    /// A value could not be parsed as a number.
    #[error("invalid number: {0:?}")]
    InvalidNumber(String),

    /// Strict mode rejected a non-finite result.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
