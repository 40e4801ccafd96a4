//! Closure-backed tool handlers.
//!
//! Most tools are a single async function of their arguments. `tool_fn`
//! lifts such a closure into a [`ToolHandler`] so it can be registered
//! without writing a struct and trait impl.

use std::fmt;
use std::future::Future;

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::context::Memory;
use crate::domain::interpreter::{ToolArguments, ToolError};
use crate::ports::ToolHandler;

/// A [`ToolHandler`] wrapping an async closure over the tool arguments.
///
/// The closure does not see context memory; implement [`ToolHandler`]
/// directly for tools that need it.
pub struct FnToolHandler<F> {
    f: F,
}

impl<F> fmt::Debug for FnToolHandler<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnToolHandler").finish_non_exhaustive()
    }
}

/// Wraps an async closure as a tool handler.
///
/// # Example
///
/// ```
/// use modl::adapters::tools::tool_fn;
/// use modl::domain::interpreter::{Interpreter, ToolError};
/// use serde_json::json;
///
/// let mut interpreter = Interpreter::new();
/// interpreter.register(
///     "search_products",
///     tool_fn(|args| async move {
///         let query = args.require_str("query")?.to_lowercase();
///         Ok::<_, ToolError>(json!({ "query": query, "hits": [] }))
///     }),
/// );
/// assert!(interpreter.has_tool("search_products"));
/// ```
pub fn tool_fn<F, Fut>(f: F) -> FnToolHandler<F>
where
    F: Fn(ToolArguments) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, ToolError>> + Send + 'static,
{
    FnToolHandler { f }
}

#[async_trait]
impl<F, Fut> ToolHandler for FnToolHandler<F>
where
    F: Fn(ToolArguments) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<Value, ToolError>> + Send + 'static,
{
    async fn call(&self, args: ToolArguments, _memory: &Memory) -> Result<Value, ToolError> {
        (self.f)(args).await
    }
}
