//! Ports - Interfaces for external collaborators.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ToolHandler` - An asynchronous tool implementation invoked by name
//! - `ModelClient` - The language model that turns prompts into responses

mod model_client;
mod tool_handler;

pub use model_client::{ModelClient, ModelError};
pub use tool_handler::ToolHandler;
