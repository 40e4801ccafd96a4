//! Interpreter - turns model output into tool calls and context updates.
//!
//! # Flow for one response
//!
//! 1. Extract directives in textual order
//! 2. Dispatch each one sequentially through the registry
//! 3. On success, record `{tool, result}` and write
//!    `memory.short_term["{tool}_result"]` before the next directive runs
//! 4. On failure, record `{tool, error}` and carry on with the rest
//!
//! Chat history is only touched by [`Interpreter::update_context_from_response`],
//! which callers invoke separately once they are happy with the results.
//!
//! # Example
//!
//! ```
//! use modl::adapters::tools::tool_fn;
//! use modl::domain::context::Context;
//! use modl::domain::interpreter::{Interpreter, ToolError};
//! use serde_json::json;
//!
//! # #[tokio::main]
//! # async fn main() {
//! let mut interpreter = Interpreter::new();
//! interpreter.register("checkPrice", tool_fn(|_args| async { Ok::<_, ToolError>(json!({"price": 10})) }));
//!
//! let mut context = Context::new("You are a shopping assistant.", "Find sneakers");
//! let response = r#"<tool>checkPrice</tool>{"productLink":"X"}"#;
//!
//! let result = interpreter.process_response(&mut context, response).await;
//! assert_eq!(result.tool_results[0].result(), Some(&json!({"price": 10})));
//! assert_eq!(context.memory().short_term["checkPrice_result"], json!({"price": 10}));
//! # }
//! ```

use std::sync::Arc;

use serde_json::Value;
use tracing::{debug, warn};

use super::{
    Directive, DirectiveParser, ProcessingResult, ToolArguments, ToolDispatchError,
    ToolHandlerRegistry, ToolResultEntry,
};
use crate::domain::context::{Context, Memory, Role};
use crate::ports::ToolHandler;

/// Memory key under which a tool's latest successful result is stored.
pub fn result_memory_key(tool: &str) -> String {
    format!("{}_result", tool)
}

#[derive(Debug, Clone, Default)]
pub struct Interpreter {
    registry: ToolHandlerRegistry,
    parser: DirectiveParser,
}

impl Interpreter {
    /// Creates an interpreter using the default `<tool>…</tool>` markers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an interpreter with a custom directive parser.
    pub fn with_parser(parser: DirectiveParser) -> Self {
        Self {
            registry: ToolHandlerRegistry::new(),
            parser,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Registration
    // ─────────────────────────────────────────────────────────────────────────

    /// Registers a handler. A later registration for the same name wins.
    pub fn register<H>(&mut self, name: impl Into<String>, handler: H)
    where
        H: ToolHandler + 'static,
    {
        self.registry.register(name, Arc::new(handler));
    }

    /// Registers an already shared handler.
    pub fn register_shared(&mut self, name: impl Into<String>, handler: Arc<dyn ToolHandler>) {
        self.registry.register(name, handler);
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.registry.has_tool(name)
    }

    pub fn registered_tools(&self) -> Vec<&str> {
        self.registry.names()
    }

    pub fn parser(&self) -> &DirectiveParser {
        &self.parser
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Operations
    // ─────────────────────────────────────────────────────────────────────────

    pub fn prepare_prompt(&self, context: &Context) -> String {
        context.to_prompt()
    }

    pub fn parse_directives(&self, response: &str) -> Vec<Directive> {
        self.parser.parse(response)
    }

    /// Invokes one registered tool directly.
    pub async fn execute_tool(
        &self,
        name: &str,
        args: ToolArguments,
        memory: &Memory,
    ) -> Result<Value, ToolDispatchError> {
        self.registry.invoke(name, args, memory).await
    }

    /// Runs every directive in `response` against `context`.
    ///
    /// Directives run one at a time in textual order; each success is
    /// written to short-term memory before the next directive starts, so
    /// later handlers see earlier results. A failing call never aborts the
    /// batch.
    pub async fn process_response(&self, context: &mut Context, response: &str) -> ProcessingResult {
        let directives = self.parser.parse(response);
        let mut tool_results = Vec::with_capacity(directives.len());

        for directive in directives {
            let (tool, arguments) = directive.into_parts();
            debug!(tool = %tool, args = arguments.len(), "Dispatching tool directive");

            let outcome = self.registry.invoke(&tool, arguments, context.memory()).await;
            match outcome {
                Ok(value) => {
                    context.update_short_term(result_memory_key(&tool), value.clone());
                    tool_results.push(ToolResultEntry::success(tool, value));
                }
                Err(err) => {
                    warn!(tool = %tool, error = %err, "Tool call failed");
                    tool_results.push(ToolResultEntry::failure(tool, err.to_string()));
                }
            }
        }

        ProcessingResult {
            response: response.to_string(),
            tool_results,
        }
    }

    /// Commits a processed response to the context.
    ///
    /// Appends `response` as one assistant message and re-writes
    /// `{tool}_result` for every successful entry. Calling this twice with
    /// the same results appends two messages but leaves memory unchanged.
    pub fn update_context_from_response(
        &self,
        context: &mut Context,
        response: &str,
        tool_results: &[ToolResultEntry],
    ) {
        context.add_message(Role::Assistant, response);

        for entry in tool_results {
            if let Some(result) = entry.result() {
                context.update_short_term(result_memory_key(entry.tool()), result.clone());
            }
        }
    }
}
