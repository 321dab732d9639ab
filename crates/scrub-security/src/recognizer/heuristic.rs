//! Rule-based person tagger
//!
//! Tags runs of capitalised words separated only by spaces as PERSON.
//! Pronouns, modal verbs, greetings, honorifics, calendar words and common
//! course vocabulary never belong to a span and break runs apart, which is
//! what keeps "Will you help?" from producing a candidate. Shouted names
//! ("SARAH") count as capitalised. Everything else is left to the roster
//! filter.

use std::collections::HashSet;
use std::path::Path;

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use super::{EntityLabel, EntityRecognizer, EntitySpan, RecognizerError, Result};

lazy_static! {
    // Initial capital, then letters; allows O'Brien and Mary-Jane
    static ref CAPITALIZED_WORD: Regex =
        Regex::new(r"\b\p{Lu}\p{L}*(?:['’]\p{Lu}\p{L}*)?(?:-\p{Lu}\p{L}*)*").unwrap();
}

const COMMON_WORDS: &[&str] = &[
    // pronouns and determiners
    "i", "me", "my", "mine", "we", "us", "our", "you", "your", "he", "him", "his", "she", "her",
    "they", "them", "their", "it", "its", "this", "that", "these", "those", "the", "a", "an",
    "there", "here", "what", "which", "who", "whom", "whose", "when", "where", "why", "how",
    "any", "anyone", "some", "someone", "everyone", "all", "each", "every", "both",
    // auxiliaries and modals
    "will", "would", "can", "could", "shall", "should", "may", "might", "must", "do", "does",
    "did", "is", "are", "was", "were", "be", "been", "am", "have", "has", "had",
    // conjunctions and prepositions
    "and", "or", "but", "so", "if", "then", "also", "because", "since", "as", "at", "by",
    "for", "from", "in", "into", "of", "on", "to", "with", "without", "about", "after",
    "before", "not", "no", "yes", "just", "only", "still", "again", "however", "otherwise",
    // greetings and discourse
    "hi", "hello", "hey", "thanks", "thank", "dear", "regards", "cheers", "best", "sorry",
    "please", "ok", "okay", "great", "good", "sure", "yeah", "yep", "nope", "nice", "cool",
    "update", "edit", "note", "ps", "btw", "fyi", "re",
    // sentence-initial verbs
    "see", "ask", "asked", "check", "try", "tried", "let", "lets", "make", "use", "look",
    "get", "got", "go", "told", "said", "met", "talked", "worked", "shoutout",
    // honorifics
    "prof", "professor", "dr", "mr", "mrs", "ms", "mx", "sir", "madam", "miss",
    // calendar
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "january",
    "february", "march", "april", "june", "july", "august", "september", "october",
    "november", "december", "today", "tomorrow", "yesterday", "tonight",
    // course vocabulary
    "lab", "labs", "homework", "hw", "assignment", "assignments", "project", "quiz", "exam",
    "midterm", "final", "lecture", "lectures", "section", "question", "questions", "answer",
    "problem", "part", "step", "piazza", "ta", "tas", "instructor", "instructors", "class",
    "course", "office", "hours", "canvas", "gradescope", "python", "java", "javascript",
    "rust", "linux", "windows", "mac", "git", "github", "google", "zoom", "slack", "error",
    "exception", "test", "tests", "code", "function", "file", "english",
];

/// In-process PERSON tagger based on capitalisation
pub struct HeuristicRecognizer {
    stopwords: HashSet<String>,
}

impl HeuristicRecognizer {
    pub fn new() -> Self {
        Self {
            stopwords: COMMON_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add words that must never be tagged
    pub fn with_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.stopwords
            .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        self
    }

    /// Load extra stop-words from a lexicon file (one per line, `#` comments)
    pub fn from_lexicon_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            RecognizerError::Unavailable(format!(
                "cannot read lexicon {}: {}",
                path.display(),
                e
            ))
        })?;

        let words: Vec<&str> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();

        debug!("Loaded {} lexicon words from {}", words.len(), path.display());
        Ok(Self::new().with_stopwords(words))
    }

    fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }
}

impl Default for HeuristicRecognizer {
    fn default() -> Self {
        Self::new()
    }
}

fn person_span(text: &str, start: usize, end: usize) -> EntitySpan {
    EntitySpan {
        text: text[start..end].to_string(),
        label: EntityLabel::Person,
        start,
        end,
    }
}

impl EntityRecognizer for HeuristicRecognizer {
    fn name(&self) -> &str {
        "heuristic"
    }

    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>> {
        let mut spans = Vec::new();
        // (start, end) of the capitalised run being built
        let mut run: Option<(usize, usize)> = None;

        for word in CAPITALIZED_WORD.find_iter(text) {
            let token = word.as_str();

            if self.is_stopword(token) {
                if let Some((start, end)) = run.take() {
                    spans.push(person_span(text, start, end));
                }
                continue;
            }

            run = match run {
                Some((start, end)) if text[end..word.start()].chars().all(|c| c == ' ') => {
                    Some((start, word.end()))
                }
                Some((start, end)) => {
                    spans.push(person_span(text, start, end));
                    Some((word.start(), word.end()))
                }
                None => Some((word.start(), word.end())),
            };
        }

        if let Some((start, end)) = run {
            spans.push(person_span(text, start, end));
        }

        Ok(spans)
    }
}
