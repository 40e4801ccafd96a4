//! Directive extraction from free-form model output.
//!
//! A directive is a tool name wrapped in a marker pair, immediately followed
//! by a JSON object with its arguments:
//!
//! ```text
//! Let me check that. <tool>check_price</tool>{"product_link": "X"}
//! ```
//!
//! The argument run extends from the closing marker to the next opening
//! marker (or end of text). Runs that do not decode as a JSON object are
//! skipped without error.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::ToolArguments;

pub const DEFAULT_OPEN_TAG: &str = "<tool>";
pub const DEFAULT_CLOSE_TAG: &str = "</tool>";

/// A tool invocation requested by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Directive {
    tool: String,
    arguments: ToolArguments,
}

impl Directive {
    pub fn new(tool: impl Into<String>, arguments: ToolArguments) -> Self {
        Self {
            tool: tool.into(),
            arguments,
        }
    }

    pub fn tool(&self) -> &str {
        &self.tool
    }

    pub fn arguments(&self) -> &ToolArguments {
        &self.arguments
    }

    pub fn into_parts(self) -> (String, ToolArguments) {
        (self.tool, self.arguments)
    }
}

/// Scans model output for directives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveParser {
    open_tag: String,
    close_tag: String,
}

impl Default for DirectiveParser {
    fn default() -> Self {
        Self::new(DEFAULT_OPEN_TAG, DEFAULT_CLOSE_TAG)
    }
}

impl DirectiveParser {
    /// Creates a parser for a custom marker pair.
    pub fn new(open_tag: impl Into<String>, close_tag: impl Into<String>) -> Self {
        Self {
            open_tag: open_tag.into(),
            close_tag: close_tag.into(),
        }
    }

    pub fn open_tag(&self) -> &str {
        &self.open_tag
    }

    pub fn close_tag(&self) -> &str {
        &self.close_tag
    }

    /// Extracts directives in the order their opening markers appear.
    ///
    /// The name is everything between an opening marker and the first
    /// closing marker after it, trimmed. Malformed argument runs are dropped.
    pub fn parse(&self, text: &str) -> Vec<Directive> {
        let mut directives = Vec::new();
        let mut skipped = 0usize;
        let mut cursor = 0;

        if self.open_tag.is_empty() || self.close_tag.is_empty() {
            return directives;
        }

        while let Some(open_at) = text[cursor..].find(&self.open_tag) {
            let name_start = cursor + open_at + self.open_tag.len();
            let Some(close_at) = text[name_start..].find(&self.close_tag) else {
                break;
            };
            let name_end = name_start + close_at;
            let args_start = name_end + self.close_tag.len();
            let args_end = text[args_start..]
                .find(&self.open_tag)
                .map_or(text.len(), |next| args_start + next);

            let name = text[name_start..name_end].trim();
            match Self::decode_arguments(&text[args_start..args_end]) {
                Some(arguments) => directives.push(Directive::new(name, arguments)),
                None => {
                    debug!(tool = name, "Skipping directive with malformed arguments");
                    skipped += 1;
                }
            }

            cursor = args_end;
        }

        if skipped > 0 {
            debug!(
                extracted = directives.len(),
                skipped, "Finished scanning response for directives"
            );
        }

        directives
    }

    fn decode_arguments(raw: &str) -> Option<ToolArguments> {
        serde_json::from_str::<Value>(raw.trim())
            .ok()
            .and_then(ToolArguments::from_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(text: &str) -> Vec<Directive> {
        DirectiveParser::default().parse(text)
    }

    mod well_formed {
        use super::*;

        #[test]
        fn extracts_single_directive() {
            let directives = parse(r#"<tool>checkPrice</tool>{"productLink":"X"}"#);

            assert_eq!(directives.len(), 1);
            assert_eq!(directives[0].tool(), "checkPrice");
            assert_eq!(directives[0].arguments().get("productLink"), Some(&json!("X")));
        }

        #[test]
        fn tolerates_surrounding_prose_and_whitespace() {
            let text = "Here is what I found:\n  <tool>  search  </tool>  \n {\"query\": \"boots\"}\n\n  <tool>check_price</tool>{\"product_link\": \"L\"}  \n";
            let directives = parse(text);

            let names: Vec<_> = directives.iter().map(|d| d.tool()).collect();
            assert_eq!(names, vec!["search", "check_price"]);
        }

        #[test]
        fn preserves_textual_order_and_duplicates() {
            let text = r#"<tool>b</tool>{"n":1}<tool>a</tool>{"n":2}<tool>b</tool>{"n":3}"#;
            let directives = parse(text);

            let calls: Vec<_> = directives
                .iter()
                .map(|d| (d.tool(), d.arguments().get("n").cloned()))
                .collect();
            assert_eq!(
                calls,
                vec![("b", Some(json!(1))), ("a", Some(json!(2))), ("b", Some(json!(3)))]
            );
        }

        #[test]
        fn accepts_empty_object() {
            let directives = parse("<tool>ping</tool>{}");
            assert_eq!(directives.len(), 1);
            assert!(directives[0].arguments().is_empty());
        }

        #[test]
        fn argument_strings_may_contain_close_tag() {
            let directives = parse(r#"<tool>echo</tool>{"text": "</tool>"}"#);
            assert_eq!(directives[0].arguments().get("text"), Some(&json!("</tool>")));
        }
    }

    mod skipped {
        use super::*;

        #[test]
        fn invalid_json_yields_nothing() {
            assert!(parse(r#"<tool>checkPrice</tool>{"productLink": X}"#).is_empty());
        }

        #[test]
        fn missing_arguments_at_end_of_text() {
            assert!(parse("Calling <tool>search</tool>").is_empty());
        }

        #[test]
        fn trailing_prose_after_object_is_malformed() {
            assert!(parse(r#"<tool>search</tool>{"query": "x"} and that's it"#).is_empty());
        }

        #[test]
        fn non_object_json_is_skipped() {
            assert!(parse("<tool>search</tool>[1, 2, 3]").is_empty());
            assert!(parse("<tool>search</tool>\"query\"").is_empty());
        }

        #[test]
        fn malformed_directive_does_not_affect_neighbours() {
            let text = r#"<tool>a</tool>{"ok":1}<tool>b</tool>{broken<tool>c</tool>{"ok":3}"#;
            let names: Vec<_> = parse(text).iter().map(|d| d.tool().to_string()).collect();
            assert_eq!(names, vec!["a", "c"]);
        }

        #[test]
        fn unclosed_marker_ends_scan() {
            assert!(parse(r#"<tool>search{"query": "x"}"#).is_empty());
        }

        #[test]
        fn text_without_markers_yields_nothing() {
            assert!(parse("Just a friendly answer with {\"json\": true}.").is_empty());
        }
    }

    mod markers {
        use super::*;

        #[test]
        fn nested_open_marker_becomes_part_of_name() {
            let directives = parse(r#"<tool>outer<tool>inner</tool>{"x":1}"#);

            assert_eq!(directives.len(), 1);
            assert_eq!(directives[0].tool(), "outer<tool>inner");
        }

        #[test]
        fn custom_markers_are_honoured() {
            let parser = DirectiveParser::new("[[call:", "]]");
            let directives = parser.parse(r#"ok [[call: lookup ]]{"id": 7} done? no"#);
            assert!(directives.is_empty());

            let directives = parser.parse(r#"ok [[call: lookup ]]{"id": 7}"#);
            assert_eq!(directives[0].tool(), "lookup");
        }

        #[test]
        fn default_markers_are_tool_tags() {
            let parser = DirectiveParser::default();
            assert_eq!(parser.open_tag(), "<tool>");
            assert_eq!(parser.close_tag(), "</tool>");
        }
    }
}
