//! CLI error types.

use ratescope_config::ConfigError;
use ratescope_core::ScopeError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date argument.
    #[error("Invalid date: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Rate history could not be loaded or built.
    #[error("Data error: {0}")]
    Data(#[from] ScopeError),

    /// Logging could not be initialised.
    #[error("Logging error: {0}")]
    Logging(String),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
