//! Error types for tool dispatch.

use thiserror::Error;

/// Failure reported by a tool handler.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("Missing argument: {0}")]
    MissingArgument(String),

    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    #[error("{0}")]
    Failed(String),
}

impl ToolError {
    /// Creates a generic handler failure.
    pub fn failed(message: impl Into<String>) -> Self {
        Self::Failed(message.into())
    }

    /// Creates an invalid argument error.
    pub fn invalid_argument(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            name: name.into(),
            reason: reason.into(),
        }
    }
}

/// Errors from looking up and invoking a handler by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolDispatchError {
    #[error("Tool {0} not registered")]
    NotRegistered(String),

    #[error("Tool {0} panicked")]
    Panicked(String),

    #[error(transparent)]
    Handler(#[from] ToolError),
}
