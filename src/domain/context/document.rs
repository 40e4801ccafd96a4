//! Retrieved documents - one record per retrieval event.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A single result row inside a retrieved document.
///
/// No schema is enforced. The prompt projection only looks at the
/// `name` and `description` keys.
pub type DocumentRecord = Map<String, Value>;

/// The outcome of one retrieval: where it came from, what was asked,
/// and the rows that came back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetrievedDocument {
    source: String,
    query: String,
    #[serde(default)]
    results: Vec<DocumentRecord>,
}

impl RetrievedDocument {
    pub fn new(
        source: impl Into<String>,
        query: impl Into<String>,
        results: Vec<DocumentRecord>,
    ) -> Self {
        Self {
            source: source.into(),
            query: query.into(),
            results,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[DocumentRecord] {
        &self.results
    }

    /// Renders a record field for the prompt.
    ///
    /// Strings are rendered raw, anything else as compact JSON.
    pub(crate) fn render_field(record: &DocumentRecord, key: &str) -> Option<String> {
        record.get(key).map(|value| match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}
