//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Directive tag cannot be empty: {0}")]
    EmptyDirectiveTag(&'static str),

    #[error("Directive open and close tags must differ")]
    IdenticalDirectiveTags,

    #[error("Invalid log filter '{0}'")]
    InvalidLogLevel(String),
}
