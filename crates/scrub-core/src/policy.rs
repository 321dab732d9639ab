//! Redaction policy

use serde::{Deserialize, Serialize};

/// Placeholder substituted for a confirmed name mention
pub const DEFAULT_PLACEHOLDER: &str = "[NAME]";

/// How a confirmed name is replaced in text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionPolicy {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub match_mode: MatchMode,
}

impl Default for RedactionPolicy {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
            match_mode: MatchMode::default(),
        }
    }
}

/// Which occurrences of a name count as a match
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Any case-insensitive occurrence, including inside longer words.
    /// Over-redacts words that merely contain a short name.
    #[default]
    Substring,
    /// Only occurrences not flanked by letters or digits
    WholeWord,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}
