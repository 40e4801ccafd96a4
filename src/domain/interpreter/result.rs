//! Per-response processing results.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Outcome of a single tool call.
///
/// Serialized untagged so entries read as `{tool, result}` or
/// `{tool, error}`. An entry carrying an `error` key is always a failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ToolOutcome {
    Failure { error: String },
    Success { result: Value },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResultEntry {
    tool: String,
    #[serde(flatten)]
    outcome: ToolOutcome,
}

impl ToolResultEntry {
    pub fn success(tool: impl Into<String>, result: Value) -> Self {
        Self {
            tool: tool.into(),
            outcome: ToolOutcome::Success { result },
        }
    }

    pub fn failure(tool: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            outcome: ToolOutcome::Failure {
                error: error.into(),
            },
        }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn outcome(&self) -> &ToolOutcome {
        &self.outcome
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, ToolOutcome::Success { .. })
    }

    pub fn result(&self) -> Option<&Value> {
        match &self.outcome {
            ToolOutcome::Success { result } => Some(result),
            ToolOutcome::Failure { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match &self.outcome {
            ToolOutcome::Failure { error } => Some(error),
            ToolOutcome::Success { .. } => None,
        }
    }
}

/// What `process_response` hands back: the untouched response text and
/// one entry per extracted directive, in execution order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub response: String,
    pub tool_results: Vec<ToolResultEntry>,
}

impl ProcessingResult {
    pub fn successes(&self) -> impl Iterator<Item = &ToolResultEntry> {
        self.tool_results.iter().filter(|entry| entry.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &ToolResultEntry> {
        self.tool_results.iter().filter(|entry| !entry.is_success())
    }

    pub fn has_failures(&self) -> bool {
        self.failures().next().is_some()
    }
}
