//! Tool descriptor - a capability advertised to the model.

use serde::{Deserialize, Serialize};

/// Description of a tool the model may invoke through a directive.
///
/// Descriptors are what the model *sees* in the prompt. The callable
/// behind a name lives in the interpreter's handler registry.
///
/// # Examples
///
/// ```
/// use modl::domain::context::ToolDescriptor;
///
/// let tool = ToolDescriptor::new("check_price", "Check current price of a product")
///     .with_arg("product_link");
///
/// assert_eq!(tool.name(), "check_price");
/// assert_eq!(tool.args(), ["product_link"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolDescriptor {
    /// Name the model uses inside a directive
    name: String,

    /// Human-readable description rendered into the prompt
    description: String,

    /// Argument names, in declaration order
    #[serde(default)]
    args: Vec<String>,
}

impl ToolDescriptor {
    /// Creates a descriptor with no declared arguments.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            args: Vec::new(),
        }
    }

    /// Appends a declared argument name.
    pub fn with_arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Appends several declared argument names.
    pub fn with_args(mut self, args: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_args_preserves_order() {
        let tool = ToolDescriptor::new("compare_style", "Compare styles")
            .with_args(["image_url", "past_purchases"]);

        assert_eq!(tool.args(), ["image_url", "past_purchases"]);
    }

    #[test]
    fn deserializes_without_args() {
        let tool: ToolDescriptor =
            serde_json::from_str(r#"{"name":"search","description":"Search things"}"#).unwrap();

        assert_eq!(tool.name(), "search");
        assert!(tool.args().is_empty());
    }
}
