//! Foundation module - Shared domain primitives.
//!
//! Contains value objects and error types that form the vocabulary
//! of the context protocol.

mod errors;
mod timestamp;

pub use errors::ValidationError;
pub use timestamp::Timestamp;
