//! Decoded directive arguments.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::ToolError;

/// The JSON object a directive carries as its argument set.
///
/// Handlers read arguments by name or decode the whole set into a typed
/// struct; the interpreter itself never looks inside.
///
/// # Examples
///
/// ```
/// use modl::domain::interpreter::ToolArguments;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct PriceQuery {
///     product_link: String,
/// }
///
/// let args = ToolArguments::from_value(serde_json::json!({"product_link": "X"})).unwrap();
/// assert_eq!(args.require_str("product_link").unwrap(), "X");
///
/// let query: PriceQuery = args.parse().unwrap();
/// assert_eq!(query.product_link, "X");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToolArguments(Map<String, Value>);

impl ToolArguments {
    pub fn new(map: Map<String, Value>) -> Self {
        Self(map)
    }

    /// Wraps a JSON value, returning `None` unless it is an object.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns the named argument or a `MissingArgument` error.
    pub fn require(&self, name: &str) -> Result<&Value, ToolError> {
        self.0
            .get(name)
            .ok_or_else(|| ToolError::MissingArgument(name.to_string()))
    }

    /// Returns the named argument as a string slice.
    pub fn require_str(&self, name: &str) -> Result<&str, ToolError> {
        self.require(name)?
            .as_str()
            .ok_or_else(|| ToolError::invalid_argument(name, "expected a string"))
    }

    /// Decodes the full argument set into a typed value.
    pub fn parse<T: DeserializeOwned>(&self) -> Result<T, ToolError> {
        serde_json::from_value(Value::Object(self.0.clone()))
            .map_err(|e| ToolError::InvalidArguments(e.to_string()))
    }

    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_map(self) -> Map<String, Value> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Map<String, Value>> for ToolArguments {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}
