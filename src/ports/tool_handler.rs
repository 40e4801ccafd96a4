//! Tool Handler Port - Interface for callables behind a tool name.
//!
//! The interpreter knows nothing about concrete tool signatures. Every
//! handler accepts the decoded argument object and returns an opaque JSON
//! value, so the dispatch site stays the same for any tool.
//!
//! # Example
//!
//! ```
//! use async_trait::async_trait;
//! use modl::domain::context::Memory;
//! use modl::domain::interpreter::{ToolArguments, ToolError};
//! use modl::ports::ToolHandler;
//! use serde_json::{json, Value};
//!
//! struct CheckPrice;
//!
//! #[async_trait]
//! impl ToolHandler for CheckPrice {
//!     async fn call(&self, args: ToolArguments, _memory: &Memory) -> Result<Value, ToolError> {
//!         let link = args.require_str("product_link")?;
//!         Ok(json!({ "product_link": link, "current_price": 135 }))
//!     }
//! }
//! ```

use async_trait::async_trait;
use serde_json::Value;

use crate::domain::context::Memory;
use crate::domain::interpreter::{ToolArguments, ToolError};

/// Port for an asynchronous tool implementation.
///
/// Handlers receive the directive's arguments plus a read-only view of the
/// context memory as it stood when the call was dispatched, which includes
/// results written by earlier directives in the same response.
#[async_trait]
pub trait ToolHandler: Send + Sync {
    /// Executes the tool.
    ///
    /// # Errors
    ///
    /// Any `ToolError`; the interpreter records its message against this call
    /// and continues with the remaining directives.
    async fn call(&self, args: ToolArguments, memory: &Memory) -> Result<Value, ToolError>;
}
