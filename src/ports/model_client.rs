//! Model Client Port - Interface for the language model collaborator.
//!
//! The protocol only needs text in and text out: the rendered prompt goes
//! to the model and its free-form response comes back for directive
//! processing.

use async_trait::async_trait;
use thiserror::Error;

/// Port for obtaining a model response to a prompt.
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Sends the prompt and returns the model's response text.
    async fn complete(&self, prompt: &str) -> Result<String, ModelError>;

    /// Identifier of the backing model, for logging.
    fn model_name(&self) -> &str;
}

/// Errors from the model collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Rate limited by provider.
    #[error("rate limited: retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u32 },

    /// Provider is unavailable.
    #[error("provider unavailable: {message}")]
    Unavailable { message: String },

    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// No response was available.
    #[error("empty response")]
    EmptyResponse,
}

impl ModelError {
    /// Returns true if retrying the same request may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            ModelError::RateLimited { .. } | ModelError::Unavailable { .. } | ModelError::Network(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limited_displays_retry_delay() {
        let err = ModelError::RateLimited { retry_after_secs: 30 };
        assert_eq!(err.to_string(), "rate limited: retry after 30s");
    }

    #[test]
    fn retryable_classification() {
        assert!(ModelError::Network("reset".into()).is_retryable());
        assert!(!ModelError::EmptyResponse.is_retryable());
    }

    #[test]
    fn model_client_trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn ModelClient>();
    }
}
