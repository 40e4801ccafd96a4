//! Context Store - the structured state driving a model through the protocol.
//!
//! Holds the system instruction, user goal, profile, retrieved documents,
//! advertised tools, chat history and memory, and projects them into a
//! deterministic prompt. There is no control flow here; the interpreter
//! owns dispatch and writes results back through the mutators below.

#[allow(clippy::module_inception)]
mod context;
mod document;
mod memory;
mod message;
mod profile;
mod prompt;
mod tool_descriptor;

pub use context::Context;
pub use document::{DocumentRecord, RetrievedDocument};
pub use memory::{Memory, MemoryScope};
pub use message::{ChatMessage, MessageId, Role};
pub use profile::UserProfile;
pub use tool_descriptor::ToolDescriptor;
