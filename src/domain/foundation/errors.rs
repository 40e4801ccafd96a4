//! Error types for the domain layer.

use thiserror::Error;

/// Errors raised synchronously by Context Store mutators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid role '{value}': expected one of user, assistant, system")]
    InvalidRole { value: String },

    #[error("Invalid memory scope '{value}': expected short_term or long_term")]
    InvalidMemoryScope { value: String },
}

impl ValidationError {
    /// Creates an invalid role error.
    pub fn invalid_role(value: impl Into<String>) -> Self {
        ValidationError::InvalidRole { value: value.into() }
    }

    /// Creates an invalid memory scope error.
    pub fn invalid_memory_scope(value: impl Into<String>) -> Self {
        ValidationError::InvalidMemoryScope { value: value.into() }
    }
}
