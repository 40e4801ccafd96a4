//! Interpreter configuration

use serde::Deserialize;

use super::error::ValidationError;
use crate::domain::interpreter::{DirectiveParser, Interpreter, DEFAULT_CLOSE_TAG, DEFAULT_OPEN_TAG};

/// Directive marker configuration
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct InterpreterConfig {
    /// Marker opening a tool name
    #[serde(default = "default_open_tag")]
    pub open_tag: String,

    /// Marker closing a tool name
    #[serde(default = "default_close_tag")]
    pub close_tag: String,
}

impl InterpreterConfig {
    /// Build a directive parser for the configured markers
    pub fn directive_parser(&self) -> DirectiveParser {
        DirectiveParser::new(self.open_tag.clone(), self.close_tag.clone())
    }

    /// Build an interpreter with no tools registered
    pub fn build_interpreter(&self) -> Interpreter {
        Interpreter::with_parser(self.directive_parser())
    }

    /// Validate interpreter configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.open_tag.is_empty() {
            return Err(ValidationError::EmptyDirectiveTag("open_tag"));
        }
        if self.close_tag.is_empty() {
            return Err(ValidationError::EmptyDirectiveTag("close_tag"));
        }
        if self.open_tag == self.close_tag {
            return Err(ValidationError::IdenticalDirectiveTags);
        }
        Ok(())
    }
}

impl Default for InterpreterConfig {
    fn default() -> Self {
        Self {
            open_tag: default_open_tag(),
            close_tag: default_close_tag(),
        }
    }
}

fn default_open_tag() -> String {
    DEFAULT_OPEN_TAG.to_string()
}

fn default_close_tag() -> String {
    DEFAULT_CLOSE_TAG.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_use_tool_tags() {
        let config = InterpreterConfig::default();
        assert_eq!(config.open_tag, "<tool>");
        assert_eq!(config.close_tag, "</tool>");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validation_rejects_empty_tags() {
        let config = InterpreterConfig {
            open_tag: String::new(),
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::EmptyDirectiveTag("open_tag"))
        );
    }

    #[test]
    fn test_validation_rejects_identical_tags() {
        let config = InterpreterConfig {
            open_tag: "|".to_string(),
            close_tag: "|".to_string(),
        };
        assert_eq!(config.validate(), Err(ValidationError::IdenticalDirectiveTags));
    }

    #[test]
    fn test_build_interpreter_uses_configured_tags() {
        let config = InterpreterConfig {
            open_tag: "<call>".to_string(),
            close_tag: "</call>".to_string(),
        };
        let interpreter = config.build_interpreter();
        assert_eq!(interpreter.parser().open_tag(), "<call>");
        assert_eq!(interpreter.parse_directives("<call>x</call>{}").len(), 1);
    }
}
