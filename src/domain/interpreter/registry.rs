//! Tool Handler Registry - name → handler lookup for dispatch.
//!
//! Registration is permissive: registering a name twice replaces the
//! earlier handler. There is no removal; entries live as long as the
//! registry does.

use std::collections::HashMap;
use std::fmt;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use serde_json::Value;
use tracing::debug;

use super::{ToolArguments, ToolDispatchError};
use crate::domain::context::Memory;
use crate::ports::ToolHandler;

#[derive(Clone, Default)]
pub struct ToolHandlerRegistry {
    handlers: HashMap<String, Arc<dyn ToolHandler>>,
}

impl fmt::Debug for ToolHandlerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToolHandlerRegistry")
            .field("tools", &self.names())
            .finish()
    }
}

impl ToolHandlerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` under `name`, returning the handler it replaced.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: Arc<dyn ToolHandler>,
    ) -> Option<Arc<dyn ToolHandler>> {
        let name = name.into();
        let previous = self.handlers.insert(name.clone(), handler);
        if previous.is_some() {
            debug!(tool = %name, "Replaced previously registered tool handler");
        }
        previous
    }

    /// Looks up `name` and awaits its handler.
    ///
    /// Handler errors are returned as-is. A panicking handler is reported
    /// as `ToolDispatchError::Panicked` instead of unwinding into the caller.
    ///
    /// # Errors
    ///
    /// - `NotRegistered` if no handler exists for `name`
    /// - `Handler` if the handler returned an error
    /// - `Panicked` if the handler panicked
    pub async fn invoke(
        &self,
        name: &str,
        args: ToolArguments,
        memory: &Memory,
    ) -> Result<Value, ToolDispatchError> {
        let handler = self
            .handlers
            .get(name)
            .ok_or_else(|| ToolDispatchError::NotRegistered(name.to_string()))?;

        match AssertUnwindSafe(handler.call(args, memory)).catch_unwind().await {
            Ok(result) => result.map_err(ToolDispatchError::from),
            Err(_) => Err(ToolDispatchError::Panicked(name.to_string())),
        }
    }

    pub fn has_tool(&self, name: &str) -> bool {
        self.handlers.contains_key(name)
    }

    /// Returns registered tool names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.handlers.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
