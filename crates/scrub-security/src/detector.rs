//! Roster-confirmed person name detection

use std::collections::BTreeSet;
use std::sync::Arc;

use scrub_core::Outcome;
use tracing::{debug, warn};

use crate::recognizer::EntityRecognizer;
use crate::roster::RosterIndex;

/// Finds participant names mentioned in free text.
///
/// A mention counts only when the recognizer tags it PERSON *and* the roster
/// knows it. The roster is never scanned against the text directly, so
/// words like "Will" are not redacted unless tagged as a person.
#[derive(Clone)]
pub struct NameDetector {
    roster: Arc<RosterIndex>,
    recognizer: Arc<dyn EntityRecognizer>,
}

impl NameDetector {
    pub fn new(roster: Arc<RosterIndex>, recognizer: Arc<dyn EntityRecognizer>) -> Self {
        Self { roster, recognizer }
    }

    pub fn roster(&self) -> &RosterIndex {
        &self.roster
    }

    pub fn recognizer_name(&self) -> &str {
        self.recognizer.name()
    }

    /// Literal name mentions, original casing kept. Recognizer failures
    /// degrade to an empty set and are reported in the outcome.
    pub fn try_find_names(&self, text: Option<&str>) -> Outcome<BTreeSet<String>> {
        let text = match text {
            Some(text) if !text.trim().is_empty() => text,
            _ => return Outcome::Clean(BTreeSet::new()),
        };

        let spans = match self.recognizer.recognize(text) {
            Ok(spans) => spans,
            Err(e) => {
                warn!(
                    recognizer = self.recognizer.name(),
                    "Name detection failed, treating text as name-free: {}", e
                );
                return Outcome::recovered(BTreeSet::new(), e.to_string());
            }
        };

        // A span may carry capitalised words around the name; keep only the
        // roster-confirmed part
        let names: BTreeSet<String> = spans
            .iter()
            .filter(|span| span.is_person())
            .flat_map(|span| self.roster.name_runs(&span.text))
            .map(str::to_string)
            .collect();

        debug!(
            "Detected {} roster names among {} entity spans",
            names.len(),
            spans.len()
        );

        Outcome::Clean(names)
    }

    pub fn find_names(&self, text: Option<&str>) -> BTreeSet<String> {
        self.try_find_names(text).into_value()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recognizer::{
        EntityLabel, EntitySpan, HeuristicRecognizer, RecognizerError, Result as RecognizerResult,
    };
    use scrub_core::{Participant, Role};

    /// Tags exactly the given words, everywhere they appear
    struct Scripted(Vec<(&'static str, EntityLabel)>);

    impl EntityRecognizer for Scripted {
        fn name(&self) -> &str {
            "scripted"
        }

        fn recognize(&self, text: &str) -> RecognizerResult<Vec<EntitySpan>> {
            let mut spans = Vec::new();
            for (word, label) in &self.0 {
                for (start, matched) in text.match_indices(word) {
                    spans.push(EntitySpan {
                        text: matched.to_string(),
                        label: label.clone(),
                        start,
                        end: start + matched.len(),
                    });
                }
            }
            Ok(spans)
        }
    }

    struct Broken;

    impl EntityRecognizer for Broken {
        fn name(&self) -> &str {
            "broken"
        }

        fn recognize(&self, _text: &str) -> RecognizerResult<Vec<EntitySpan>> {
            Err(RecognizerError::Failed("tokenizer choked".to_string()))
        }
    }

    fn roster() -> Arc<RosterIndex> {
        Arc::new(RosterIndex::build(&[
            Participant::new("Sarah Johnson", Role::Student),
            Participant::new("John Smith", Role::Student),
        ]))
    }

    fn detector(recognizer: impl EntityRecognizer + 'static) -> NameDetector {
        NameDetector::new(roster(), Arc::new(recognizer))
    }

    fn set(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_roster_name_found() {
        let detector = detector(HeuristicRecognizer::new());
        assert_eq!(
            detector.find_names(Some("I worked with Sarah on this.")),
            set(&["Sarah"])
        );
    }

    #[test]
    fn test_common_word_not_found() {
        let detector = detector(HeuristicRecognizer::new());
        assert!(detector.find_names(Some("Will you help me?")).is_empty());

        // Even when tagged PERSON, "Will" is not on the roster
        let detector = self::detector(Scripted(vec![("Will", EntityLabel::Person)]));
        assert!(detector.find_names(Some("Will you help me?")).is_empty());
    }

    #[test]
    fn test_untagged_roster_word_not_found() {
        let detector = detector(Scripted(vec![]));
        assert!(detector.find_names(Some("Sarah and John")).is_empty());
    }

    #[test]
    fn test_non_person_labels_ignored() {
        let detector = detector(Scripted(vec![("Johnson", EntityLabel::Organization)]));
        assert!(detector.find_names(Some("Johnson & Johnson")).is_empty());
    }

    #[test]
    fn test_case_distinct_literals() {
        let detector = detector(Scripted(vec![
            ("Sarah", EntityLabel::Person),
            ("sarah", EntityLabel::Person),
        ]));
        assert_eq!(
            detector.find_names(Some("Sarah said sarah twice, Sarah.")),
            set(&["Sarah", "sarah"])
        );
    }

    #[test]
    fn test_spans_trimmed() {
        let detector = detector(Scripted(vec![
            (" John Smith ", EntityLabel::Person),
            ("  ", EntityLabel::Person),
        ]));
        assert_eq!(
            detector.find_names(Some("ask  John Smith  later")),
            set(&["John Smith"])
        );
    }

    #[test]
    fn test_title_case_subject_narrowed_to_name() {
        let detector = detector(HeuristicRecognizer::new());
        assert_eq!(
            detector.find_names(Some("Recursion Help Needed Sarah")),
            set(&["Sarah"])
        );
        assert_eq!(
            detector.find_names(Some("Grading Help John Smith")),
            set(&["John Smith"])
        );
    }

    #[test]
    fn test_remote_style_span_narrowed() {
        let detector = detector(Scripted(vec![("Team Lead Johnson", EntityLabel::Person)]));
        assert_eq!(
            detector.find_names(Some("ask Team Lead Johnson today")),
            set(&["Johnson"])
        );
    }

    #[test]
    fn test_empty_text_is_clean() {
        let detector = detector(Broken);
        assert!(!detector.try_find_names(None).is_recovered());
        assert!(!detector.try_find_names(Some("")).is_recovered());
    }

    #[test]
    fn test_recognizer_failure_recovered() {
        let detector = detector(Broken);
        let outcome = detector.try_find_names(Some("Sarah helped"));

        assert!(outcome.is_recovered());
        assert!(outcome.diagnostic().unwrap().contains("tokenizer choked"));
        assert!(outcome.into_value().is_empty());
    }

    #[test]
    fn test_empty_roster_matches_nothing() {
        let detector = NameDetector::new(
            Arc::new(RosterIndex::build(&[])),
            Arc::new(HeuristicRecognizer::new()),
        );
        assert!(detector.find_names(Some("I worked with Sarah")).is_empty());
    }
}
