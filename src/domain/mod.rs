//! Domain layer containing the protocol state and its interpreter.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (timestamps, validation errors)
//! - `context` - Context Store: instruction, goal, profile, documents, tools, history, memory
//! - `interpreter` - Directive extraction, tool dispatch and context write-back

pub mod context;
pub mod foundation;
pub mod interpreter;
