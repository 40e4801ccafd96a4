//! Deterministic text projection of a [`Context`].
//!
//! Section order is fixed: system instruction, user goal, profile,
//! retrieved information, available tools, chat history. Sections whose
//! source collection is empty are omitted entirely.

use super::{Context, RetrievedDocument};

const UNKNOWN_RESULT_NAME: &str = "Unknown";

impl Context {
    /// Renders the context into the prompt handed to a model.
    ///
    /// Pure: the same state always renders the same string.
    pub fn to_prompt(&self) -> String {
        let mut lines: Vec<String> = vec![
            format!("System: {}", self.system_instruction()),
            format!("User Goal: {}", self.user_goal()),
        ];

        let profile = self.user_profile();
        if let Some(name) = &profile.name {
            lines.push(format!("User Profile: {}", name));
            if !profile.style.is_empty() {
                lines.push(format!("Style Preferences: {}", profile.style.join(", ")));
            }
        }

        if !self.retrieved_documents().is_empty() {
            lines.push(String::new());
            lines.push("Retrieved Information:".to_string());
            for document in self.retrieved_documents() {
                lines.push(format!("From {}:", document.source()));
                for record in document.results() {
                    let name = RetrievedDocument::render_field(record, "name")
                        .unwrap_or_else(|| UNKNOWN_RESULT_NAME.to_string());
                    let description =
                        RetrievedDocument::render_field(record, "description").unwrap_or_default();
                    lines.push(format!("- {}: {}", name, description));
                }
            }
        }

        if !self.tools().is_empty() {
            lines.push(String::new());
            lines.push("Available Tools:".to_string());
            for tool in self.tools() {
                lines.push(format!("- {}: {}", tool.name(), tool.description()));
            }
        }

        if !self.chat_history().is_empty() {
            lines.push(String::new());
            lines.push("Chat History:".to_string());
            for message in self.chat_history() {
                lines.push(format!("{}: {}", message.role().label(), message.content()));
            }
        }

        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Role, ToolDescriptor, UserProfile};
    use super::*;
    use serde_json::json;

    fn record(value: serde_json::Value) -> serde_json::Map<String, serde_json::Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn bare_context_renders_two_lines() {
        let ctx = Context::new("You are helpful.", "Find shoes.");

        assert_eq!(ctx.to_prompt(), "System: You are helpful.\nUser Goal: Find shoes.");
    }

    #[test]
    fn profile_without_name_is_omitted() {
        let mut ctx = Context::new("S", "G");
        ctx.user_profile_mut().add_style("minimalist");

        assert_eq!(ctx.to_prompt(), "System: S\nUser Goal: G");
    }

    #[test]
    fn named_profile_without_style_has_no_style_line() {
        let ctx = Context::new("S", "G").with_user_profile(UserProfile::named("Pranav"));

        assert_eq!(ctx.to_prompt(), "System: S\nUser Goal: G\nUser Profile: Pranav");
    }

    #[test]
    fn full_context_renders_every_section_in_order() {
        let mut ctx = Context::new("S", "G")
            .with_user_profile(
                UserProfile::named("Pranav")
                    .with_style("minimalist")
                    .with_style("neutral"),
            )
            .with_tools(vec![
                ToolDescriptor::new("search_products", "Search the catalog"),
                ToolDescriptor::new("check_price", "Check a price"),
            ]);
        ctx.add_retrieved_document(
            "ProductCatalog",
            "sneakers",
            vec![
                record(json!({"name": "Vessi Cityscape", "description": "Waterproof"})),
                record(json!({"price": 145})),
            ],
        );
        ctx.add_message(Role::User, "Any options?");
        ctx.add_message(Role::Assistant, "Two.");

        let expected = [
            "System: S",
            "User Goal: G",
            "User Profile: Pranav",
            "Style Preferences: minimalist, neutral",
            "",
            "Retrieved Information:",
            "From ProductCatalog:",
            "- Vessi Cityscape: Waterproof",
            "- Unknown: ",
            "",
            "Available Tools:",
            "- search_products: Search the catalog",
            "- check_price: Check a price",
            "",
            "Chat History:",
            "User: Any options?",
            "Assistant: Two.",
        ]
        .join("\n");

        assert_eq!(ctx.to_prompt(), expected);
    }

    #[test]
    fn document_with_no_results_still_lists_source() {
        let mut ctx = Context::new("S", "G");
        ctx.add_retrieved_document("EmptyIndex", "nothing", vec![]);

        assert!(ctx.to_prompt().ends_with("Retrieved Information:\nFrom EmptyIndex:"));
    }

    #[test]
    fn rendering_twice_is_identical() {
        let mut ctx = Context::new("S", "G");
        ctx.add_message(Role::System, "note");

        assert_eq!(ctx.to_prompt(), ctx.to_prompt());
    }

    #[test]
    fn memory_is_not_rendered() {
        let mut ctx = Context::new("S", "G");
        ctx.update_short_term("secret_result", json!("hidden"));

        assert!(!ctx.to_prompt().contains("hidden"));
    }
}
