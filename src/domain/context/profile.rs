//! User profile information carried in the context.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What the assistant knows about the user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub name: Option<String>,

    /// Style tags, ordered, duplicates ignored.
    #[serde(default)]
    pub style: Vec<String>,

    #[serde(default)]
    pub preferences: Map<String, Value>,

    #[serde(default)]
    pub past_interactions: Vec<Value>,
}

impl UserProfile {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Adds a style tag unless it is already present.
    pub fn with_style(mut self, tag: impl Into<String>) -> Self {
        self.add_style(tag);
        self
    }

    pub fn with_preference(mut self, key: impl Into<String>, value: Value) -> Self {
        self.preferences.insert(key.into(), value);
        self
    }

    /// Adds a style tag unless it is already present.
    pub fn add_style(&mut self, tag: impl Into<String>) {
        let tag = tag.into();
        if !self.style.contains(&tag) {
            self.style.push(tag);
        }
    }

    pub fn record_interaction(&mut self, interaction: Value) {
        self.past_interactions.push(interaction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn style_tags_are_deduplicated_in_order() {
        let profile = UserProfile::named("Pranav")
            .with_style("minimalist")
            .with_style("neutral")
            .with_style("minimalist");

        assert_eq!(profile.style, vec!["minimalist", "neutral"]);
    }

    #[test]
    fn default_profile_is_anonymous() {
        let profile = UserProfile::default();
        assert!(profile.name.is_none());
        assert!(profile.style.is_empty());
    }

    #[test]
    fn record_interaction_appends() {
        let mut profile = UserProfile::default().with_preference("budget_eur", json!(150));
        profile.record_interaction(json!({"purchased": "Common Projects"}));

        assert_eq!(profile.preferences["budget_eur"], 150);
        assert_eq!(profile.past_interactions.len(), 1);
    }
}
