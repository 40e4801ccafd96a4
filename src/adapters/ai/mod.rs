//! Model client adapters.
//!
//! Implementations of the ModelClient port.
//!
//! ## Available Adapters
//!
//! - `ScriptedModelClient` - Replays canned responses for tests and demos

mod scripted_model;

pub use scripted_model::ScriptedModelClient;
