//! Tool handler adapters.
//!
//! - `FnToolHandler` / `tool_fn` - Registers a plain async closure as a tool

mod fn_handler;

pub use fn_handler::{tool_fn, FnToolHandler};
