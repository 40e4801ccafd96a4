//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Model clients
//! - `tools` - Tool handler implementations

pub mod ai;
pub mod tools;

pub use ai::ScriptedModelClient;
pub use tools::{tool_fn, FnToolHandler};
