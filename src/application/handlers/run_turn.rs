//! RunTurnHandler - One full protocol turn against a model.
//!
//! Renders the context, asks the model, runs the directives in its
//! response and (optionally) commits the response to chat history.

use std::sync::Arc;

use thiserror::Error;
use tracing::{debug, info};

use crate::domain::context::{Context, Role};
use crate::domain::interpreter::{Interpreter, ProcessingResult};
use crate::ports::{ModelClient, ModelError};

/// Command to run a single turn.
#[derive(Debug, Clone)]
pub struct RunTurnCommand {
    /// Appended as a `user` message before the prompt is rendered.
    pub user_message: Option<String>,
    /// Whether to append the response and tool results to the context.
    pub commit_history: bool,
}

impl RunTurnCommand {
    /// A turn that starts with a new user message.
    pub fn with_user_message(message: impl Into<String>) -> Self {
        Self {
            user_message: Some(message.into()),
            commit_history: true,
        }
    }

    /// A turn that re-prompts with the context as it stands.
    pub fn continue_turn() -> Self {
        Self {
            user_message: None,
            commit_history: true,
        }
    }

    /// Leaves chat history for the caller to update.
    pub fn without_commit(mut self) -> Self {
        self.commit_history = false;
        self
    }
}

/// Result of a turn.
#[derive(Debug, Clone)]
pub struct TurnOutcome {
    /// The prompt sent to the model.
    pub prompt: String,
    pub result: ProcessingResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TurnError {
    #[error("Model request failed: {0}")]
    Model(#[from] ModelError),
}

/// Handler for running protocol turns.
pub struct RunTurnHandler {
    model: Arc<dyn ModelClient>,
    interpreter: Arc<Interpreter>,
}

impl RunTurnHandler {
    pub fn new(model: Arc<dyn ModelClient>, interpreter: Arc<Interpreter>) -> Self {
        Self { model, interpreter }
    }

    /// Runs one turn.
    ///
    /// # Errors
    ///
    /// - `TurnError::Model` if the model call fails; the context then only
    ///   carries the new user message (if any)
    pub async fn handle(
        &self,
        context: &mut Context,
        command: RunTurnCommand,
    ) -> Result<TurnOutcome, TurnError> {
        if let Some(message) = command.user_message {
            context.add_message(Role::User, message);
        }

        let prompt = self.interpreter.prepare_prompt(context);
        debug!(
            model = self.model.model_name(),
            prompt_chars = prompt.len(),
            "Sending prompt to model"
        );
        let response = self.model.complete(&prompt).await?;

        let result = self.interpreter.process_response(context, &response).await;
        info!(
            tool_calls = result.tool_results.len(),
            failures = result.failures().count(),
            "Processed model response"
        );

        if command.commit_history {
            self.interpreter
                .update_context_from_response(context, &response, &result.tool_results);
        }

        Ok(TurnOutcome { prompt, result })
    }
}
