//! Interpreter module - directive extraction, tool dispatch and
//! write-back of results into the [`Context`](crate::domain::context::Context).
//!
//! ## Key Types
//!
//! - [`Interpreter`] - Processes model responses against a context
//! - [`DirectiveParser`] - Finds `<tool>NAME</tool>{...}` directives in free text
//! - [`ToolHandlerRegistry`] - Name → handler lookup with last-registration-wins
//! - [`ToolArguments`] - Decoded JSON-object argument set
//! - [`ProcessingResult`] / [`ToolResultEntry`] - Per-response outcome

mod arguments;
mod directive;
mod errors;
#[allow(clippy::module_inception)]
mod interpreter;
mod registry;
mod result;

pub use arguments::ToolArguments;
pub use directive::{Directive, DirectiveParser, DEFAULT_CLOSE_TAG, DEFAULT_OPEN_TAG};
pub use errors::{ToolDispatchError, ToolError};
pub use interpreter::{result_memory_key, Interpreter};
pub use registry::ToolHandlerRegistry;
pub use result::{ProcessingResult, ToolOutcome, ToolResultEntry};
