//! Roster index of known participant names

use std::collections::HashSet;

use lazy_static::lazy_static;
use regex::Regex;
use scrub_core::Participant;

lazy_static! {
    static ref TOKEN_REGEX: Regex = Regex::new(r"\S+").unwrap();
}

/// Case-folded full names and name tokens of every participant.
///
/// Built once per session and read-only afterwards. A candidate matches when
/// its full text or any one of its whitespace-separated tokens is indexed, so
/// a first name alone is enough.
#[derive(Debug, Clone, Default)]
pub struct RosterIndex {
    names: HashSet<String>,
}

impl RosterIndex {
    pub fn build(participants: &[Participant]) -> Self {
        let mut names = HashSet::new();

        for participant in participants {
            let full_name = participant.name.trim();
            if full_name.is_empty() {
                continue;
            }

            names.insert(full_name.to_lowercase());

            // Single letters (initials) are too ambiguous to index
            for part in full_name.split_whitespace() {
                if part.chars().count() > 1 {
                    names.insert(part.to_lowercase());
                }
            }
        }

        Self { names }
    }

    pub fn contains(&self, candidate: &str) -> bool {
        let folded = candidate.to_lowercase();

        if self.names.contains(&folded) {
            return true;
        }

        folded
            .split_whitespace()
            .any(|token| self.names.contains(token))
    }

    /// The parts of `candidate` that name a participant, as written.
    ///
    /// An indexed full name is kept whole. Otherwise each maximal run of
    /// indexed tokens is returned, so "Recursion Help Sarah" yields "Sarah"
    /// and unrelated capitalised words stay in the text.
    pub fn name_runs<'a>(&self, candidate: &'a str) -> Vec<&'a str> {
        let candidate = candidate.trim();
        if candidate.is_empty() {
            return Vec::new();
        }
        if self.names.contains(&candidate.to_lowercase()) {
            return vec![candidate];
        }

        let mut runs = Vec::new();
        let mut run: Option<(usize, usize)> = None;

        for token in TOKEN_REGEX.find_iter(candidate) {
            if self.names.contains(&token.as_str().to_lowercase()) {
                run = Some(match run {
                    Some((start, _)) => (start, token.end()),
                    None => (token.start(), token.end()),
                });
            } else if let Some((start, end)) = run.take() {
                runs.push(&candidate[start..end]);
            }
        }
        if let Some((start, end)) = run {
            runs.push(&candidate[start..end]);
        }

        runs
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
