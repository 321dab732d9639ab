//! Name redaction engine

use std::collections::BTreeSet;
use std::ops::Range;

use regex::{Regex, RegexBuilder};
use scrub_core::{MatchMode, RedactionPolicy};
use tracing::{debug, warn};

/// Replaces confirmed name mentions with a placeholder
#[derive(Debug, Clone, Default)]
pub struct Redactor {
    policy: RedactionPolicy,
}

impl Redactor {
    pub fn new(policy: RedactionPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &RedactionPolicy {
        &self.policy
    }

    /// Redact every case-insensitive occurrence of `names` in `text`.
    ///
    /// Longer names go first so "John Smith" is consumed before "John".
    /// Returns the redacted text and the number of replacements made.
    pub fn redact(&self, text: Option<&str>, names: &BTreeSet<String>) -> (String, usize) {
        let Some(text) = text else {
            return (String::new(), 0);
        };

        let mut ordered: Vec<&str> = names
            .iter()
            .map(String::as_str)
            .filter(|name| !name.trim().is_empty())
            .collect();
        if ordered.is_empty() {
            return (text.to_string(), 0);
        }
        // Stable sort keeps set order among equal lengths
        ordered.sort_by_key(|name| std::cmp::Reverse(name.chars().count()));

        let mut result = text.to_string();
        let mut total = 0;

        for name in ordered {
            let (next, count) = self.replace_name(&result, name);
            result = next;
            total += count;
        }

        debug!("Applied {} name redactions", total);
        (result, total)
    }

    fn replace_name(&self, text: &str, name: &str) -> (String, usize) {
        let protected = placeholder_ranges(text, &self.policy.placeholder);
        let matches = match literal_pattern(name) {
            Some(pattern) => self.find_matches(text, &protected, |at| {
                pattern.find_at(text, at).map(|m| m.range())
            }),
            None => self.find_matches(text, &protected, |at| {
                text[at..].find(name).map(|i| at + i..at + i + name.len())
            }),
        };

        if matches.is_empty() {
            return (text.to_string(), 0);
        }

        let mut result = String::with_capacity(text.len());
        let mut last = 0;
        for range in &matches {
            result.push_str(&text[last..range.start]);
            result.push_str(&self.policy.placeholder);
            last = range.end;
        }
        result.push_str(&text[last..]);

        (result, matches.len())
    }

    fn find_matches<F>(
        &self,
        text: &str,
        protected: &[Range<usize>],
        mut next: F,
    ) -> Vec<Range<usize>>
    where
        F: FnMut(usize) -> Option<Range<usize>>,
    {
        let mut found = Vec::new();
        let mut at = 0;

        while at <= text.len() {
            let Some(range) = next(at) else {
                break;
            };

            let overlaps = protected
                .iter()
                .any(|p| range.start < p.end && p.start < range.end);
            let bounded = match self.policy.match_mode {
                MatchMode::Substring => true,
                MatchMode::WholeWord => is_whole_word(text, &range),
            };

            if overlaps || !bounded || range.is_empty() {
                // Retry one character further on
                at = range.start
                    + text[range.start..]
                        .chars()
                        .next()
                        .map_or(1, char::len_utf8);
                continue;
            }

            at = range.end;
            found.push(range);
        }

        found
    }
}

/// Case-insensitive literal pattern for `name`
fn literal_pattern(name: &str) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(name))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            // Only oversized names get here; fall back to exact-case search
            warn!("Could not compile name pattern, matching case-sensitively: {}", e);
            None
        }
    }
}

fn placeholder_ranges(text: &str, placeholder: &str) -> Vec<Range<usize>> {
    if placeholder.is_empty() {
        return Vec::new();
    }
    text.match_indices(placeholder)
        .map(|(start, p)| start..start + p.len())
        .collect()
}

fn is_whole_word(text: &str, range: &Range<usize>) -> bool {
    let before = text[..range.start].chars().next_back();
    let after = text[range.end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
