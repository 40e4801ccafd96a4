//! Context aggregate - the protocol state handed to a model.
//!
//! A `Context` is owned by exactly one caller. It is built once with a
//! system instruction and a user goal, then mutated incrementally as
//! documents are retrieved, messages exchanged and tool results recorded.
//!
//! # Example
//!
//! ```
//! use modl::domain::context::{Context, ToolDescriptor, UserProfile};
//!
//! let mut context = Context::new("You are a shopping assistant.", "Find sneakers under 150")
//!     .with_user_profile(UserProfile::named("Pranav").with_style("minimalist"))
//!     .with_tools(vec![ToolDescriptor::new("check_price", "Check a price")]);
//!
//! context.add_chat_message("user", "Anything waterproof?").unwrap();
//! assert!(context.add_chat_message("moderator", "hi").is_err());
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use super::document::DocumentRecord;
use super::{ChatMessage, Memory, MemoryScope, RetrievedDocument, Role, ToolDescriptor, UserProfile};
use crate::domain::foundation::{Timestamp, ValidationError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    system_instruction: String,
    user_goal: String,
    #[serde(default)]
    user_profile: UserProfile,
    #[serde(default)]
    retrieved_documents: Vec<RetrievedDocument>,
    #[serde(default)]
    tools: Vec<ToolDescriptor>,
    #[serde(default)]
    chat_history: Vec<ChatMessage>,
    #[serde(default)]
    memory: Memory,
}

impl Context {
    /// Creates a context with empty profile, documents, tools, history and memory.
    pub fn new(system_instruction: impl Into<String>, user_goal: impl Into<String>) -> Self {
        Self {
            system_instruction: system_instruction.into(),
            user_goal: user_goal.into(),
            user_profile: UserProfile::default(),
            retrieved_documents: Vec::new(),
            tools: Vec::new(),
            chat_history: Vec::new(),
            memory: Memory::default(),
        }
    }

    pub fn with_user_profile(mut self, profile: UserProfile) -> Self {
        self.user_profile = profile;
        self
    }

    pub fn with_tools(mut self, tools: impl IntoIterator<Item = ToolDescriptor>) -> Self {
        for tool in tools {
            self.add_tool(tool);
        }
        self
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutators
    // ─────────────────────────────────────────────────────────────────────────

    /// Advertises a tool to the model.
    ///
    /// Names are expected to be unique but this is not enforced: a duplicate
    /// is appended and both descriptors are rendered.
    pub fn add_tool(&mut self, tool: ToolDescriptor) {
        if self.has_tool(tool.name()) {
            warn!(tool = tool.name(), "Duplicate tool descriptor added to context");
        }
        self.tools.push(tool);
    }

    /// Appends a chat message, parsing `role` from its wire name.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidRole` if `role` is not `user`, `assistant` or `system`
    pub fn add_chat_message(
        &mut self,
        role: &str,
        content: impl Into<String>,
    ) -> Result<&ChatMessage, ValidationError> {
        let role: Role = role.parse()?;
        Ok(self.add_message(role, content))
    }

    /// Appends a chat message stamped with the current time.
    ///
    /// Timestamps never go backwards across the history, even if the
    /// wall clock does.
    pub fn add_message(&mut self, role: Role, content: impl Into<String>) -> &ChatMessage {
        let now = Timestamp::now();
        let timestamp = match self.chat_history.last() {
            Some(previous) => now.max(*previous.timestamp()),
            None => now,
        };
        self.chat_history.push(ChatMessage::at(role, content, timestamp));
        &self.chat_history[self.chat_history.len() - 1]
    }

    pub fn add_retrieved_document(
        &mut self,
        source: impl Into<String>,
        query: impl Into<String>,
        results: Vec<DocumentRecord>,
    ) {
        self.retrieved_documents
            .push(RetrievedDocument::new(source, query, results));
    }

    /// Writes a memory entry, parsing `scope` from its wire name.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidMemoryScope` if `scope` is not `short_term` or `long_term`
    pub fn update_memory(
        &mut self,
        key: impl Into<String>,
        value: Value,
        scope: &str,
    ) -> Result<(), ValidationError> {
        let scope: MemoryScope = scope.parse()?;
        self.memory.set(scope, key, value);
        Ok(())
    }

    /// Writes a short-term memory entry.
    pub fn update_short_term(&mut self, key: impl Into<String>, value: Value) {
        self.memory.set(MemoryScope::ShortTerm, key, value);
    }

    pub fn user_profile_mut(&mut self) -> &mut UserProfile {
        &mut self.user_profile
    }

    pub fn memory_mut(&mut self) -> &mut Memory {
        &mut self.memory
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn system_instruction(&self) -> &str {
        &self.system_instruction
    }

    pub fn user_goal(&self) -> &str {
        &self.user_goal
    }

    pub fn user_profile(&self) -> &UserProfile {
        &self.user_profile
    }

    pub fn retrieved_documents(&self) -> &[RetrievedDocument] {
        &self.retrieved_documents
    }

    pub fn tools(&self) -> &[ToolDescriptor] {
        &self.tools
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.tools.iter().any(|tool| tool.name() == name)
    }

    pub fn chat_history(&self) -> &[ChatMessage] {
        &self.chat_history
    }

    pub fn memory(&self) -> &Memory {
        &self.memory
    }
}
