//! Long- and short-term memory.
//!
//! Two independent key/value maps. Last write wins per key; there is no
//! expiry or eviction.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::ValidationError;

/// Which memory map a write targets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemoryScope {
    #[default]
    ShortTerm,
    LongTerm,
}

impl MemoryScope {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemoryScope::ShortTerm => "short_term",
            MemoryScope::LongTerm => "long_term",
        }
    }
}

impl fmt::Display for MemoryScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemoryScope {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "short_term" => Ok(MemoryScope::ShortTerm),
            "long_term" => Ok(MemoryScope::LongTerm),
            other => Err(ValidationError::invalid_memory_scope(other)),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Memory {
    #[serde(default)]
    pub long_term: HashMap<String, Value>,
    #[serde(default)]
    pub short_term: HashMap<String, Value>,
}

impl Memory {
    /// Writes `value` under `key` in the given scope, returning the
    /// value it replaced.
    pub fn set(&mut self, scope: MemoryScope, key: impl Into<String>, value: Value) -> Option<Value> {
        self.scope_mut(scope).insert(key.into(), value)
    }

    pub fn get(&self, scope: MemoryScope, key: &str) -> Option<&Value> {
        self.scope(scope).get(key)
    }

    pub fn scope(&self, scope: MemoryScope) -> &HashMap<String, Value> {
        match scope {
            MemoryScope::ShortTerm => &self.short_term,
            MemoryScope::LongTerm => &self.long_term,
        }
    }

    fn scope_mut(&mut self, scope: MemoryScope) -> &mut HashMap<String, Value> {
        match scope {
            MemoryScope::ShortTerm => &mut self.short_term,
            MemoryScope::LongTerm => &mut self.long_term,
        }
    }
}
