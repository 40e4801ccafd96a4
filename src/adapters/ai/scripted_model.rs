//! Scripted model client for tests and demos.
//!
//! Provides a configurable implementation of the ModelClient port that
//! replays canned responses instead of calling a real model.
//!
//! # Features
//!
//! - Pre-configured responses, consumed in order
//! - Error injection for resilience testing
//! - Simulated latency
//! - Prompt recording for verification
//!
//! # Example
//!
//! ```ignore
//! let model = ScriptedModelClient::new()
//!     .with_response(r#"<tool>search_products</tool>{"query": "sneakers"}"#)
//!     .with_error(ModelError::Network("connection reset".into()));
//!
//! let text = model.complete("System: ...").await?;
//! assert_eq!(model.prompts().len(), 1);
//! ```

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::sleep;

use crate::ports::{ModelClient, ModelError};

/// Model client that replays a queue of scripted results.
///
/// Once the queue is exhausted every call fails with `ModelError::EmptyResponse`.
#[derive(Debug, Clone)]
pub struct ScriptedModelClient {
    responses: Arc<Mutex<VecDeque<Result<String, ModelError>>>>,
    prompts: Arc<Mutex<Vec<String>>>,
    model_name: String,
    delay: Duration,
}

impl Default for ScriptedModelClient {
    fn default() -> Self {
        Self::new()
    }
}

impl ScriptedModelClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            model_name: "scripted-model".to_string(),
            delay: Duration::ZERO,
        }
    }

    /// Queues a successful response.
    pub fn with_response(self, text: impl Into<String>) -> Self {
        lock(&self.responses).push_back(Ok(text.into()));
        self
    }

    /// Queues a failure.
    pub fn with_error(self, error: ModelError) -> Self {
        lock(&self.responses).push_back(Err(error));
        self
    }

    /// Sets simulated latency per request.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_model_name(mut self, name: impl Into<String>) -> Self {
        self.model_name = name.into();
        self
    }

    /// Returns every prompt received so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        lock(&self.prompts).clone()
    }

    pub fn call_count(&self) -> usize {
        lock(&self.prompts).len()
    }

    /// Number of scripted results not yet consumed.
    pub fn remaining(&self) -> usize {
        lock(&self.responses).len()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl ModelClient for ScriptedModelClient {
    async fn complete(&self, prompt: &str) -> Result<String, ModelError> {
        lock(&self.prompts).push(prompt.to_string());

        if !self.delay.is_zero() {
            sleep(self.delay).await;
        }

        let next = lock(&self.responses).pop_front();
        next.unwrap_or(Err(ModelError::EmptyResponse))
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_responses_in_order() {
        let model = ScriptedModelClient::new()
            .with_response("First")
            .with_response("Second");

        assert_eq!(model.complete("p1").await.unwrap(), "First");
        assert_eq!(model.complete("p2").await.unwrap(), "Second");
        assert_eq!(model.remaining(), 0);
    }

    #[tokio::test]
    async fn fails_when_exhausted() {
        let model = ScriptedModelClient::new();
        assert_eq!(model.complete("p").await, Err(ModelError::EmptyResponse));
    }

    #[tokio::test]
    async fn injects_errors() {
        let model = ScriptedModelClient::new()
            .with_error(ModelError::RateLimited { retry_after_secs: 5 })
            .with_response("ok");

        assert!(matches!(
            model.complete("p").await,
            Err(ModelError::RateLimited { retry_after_secs: 5 })
        ));
        assert_eq!(model.complete("p").await.unwrap(), "ok");
    }

    #[tokio::test]
    async fn records_prompts() {
        let model = ScriptedModelClient::new().with_response("a");
        let _ = model.complete("System: hi").await;

        assert_eq!(model.prompts(), vec!["System: hi".to_string()]);
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn clones_share_the_script() {
        let model = ScriptedModelClient::new().with_response("shared");
        let clone = model.clone();

        assert_eq!(clone.complete("p").await.unwrap(), "shared");
        assert_eq!(model.remaining(), 0);
        assert_eq!(model.call_count(), 1);
    }

    #[tokio::test]
    async fn simulates_delay() {
        let model = ScriptedModelClient::new()
            .with_response("slow")
            .with_delay(Duration::from_millis(20));

        let start = std::time::Instant::now();
        model.complete("p").await.unwrap();
        assert!(start.elapsed() >= Duration::from_millis(20));
    }
}
