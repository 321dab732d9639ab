//! Sanitizer construction from configuration

use std::sync::Arc;

use anyhow::{Context, Result, bail};
use scrub_config::{RecognizerBackend, RecognizerConfig};
use scrub_core::{Participant, RedactionPolicy};
use scrub_security::{
    EntityRecognizer, HeuristicRecognizer, NameDetector, Redactor, RemoteRecognizer, RosterIndex,
};
use tracing::{info, warn};

use crate::sanitizer::PostSanitizer;

/// Create the configured entity recognizer.
///
/// Fails when the engine cannot start; running without one would let every
/// name through.
pub fn create_recognizer(config: &RecognizerConfig) -> Result<Arc<dyn EntityRecognizer>> {
    match config.backend {
        RecognizerBackend::Heuristic => {
            let recognizer = match &config.stopwords_file {
                Some(path) => HeuristicRecognizer::from_lexicon_file(path)
                    .context("Failed to initialise heuristic recognizer")?,
                None => HeuristicRecognizer::new(),
            };
            Ok(Arc::new(recognizer))
        }
        RecognizerBackend::Remote => {
            let Some(endpoint) = config.endpoint.as_deref() else {
                bail!("Remote recognizer selected but no [recognizer] endpoint is configured");
            };
            let recognizer = RemoteRecognizer::connect(endpoint, config.timeout())
                .context("Failed to initialise remote recognizer")?;
            Ok(Arc::new(recognizer))
        }
    }
}

/// Build a sanitizer for one session over a fixed roster
pub fn build_sanitizer(
    policy: RedactionPolicy,
    recognizer: Arc<dyn EntityRecognizer>,
    participants: &[Participant],
) -> PostSanitizer {
    let roster = RosterIndex::build(participants);
    if roster.is_empty() {
        warn!("Roster is empty; no names will be redacted");
    }

    info!(
        recognizer = recognizer.name(),
        participants = participants.len(),
        roster_entries = roster.len(),
        match_mode = ?policy.match_mode,
        "Sanitizer ready"
    );

    let detector = NameDetector::new(Arc::new(roster), recognizer);
    PostSanitizer::new(detector, Redactor::new(policy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scrub_core::Role;

    #[test]
    fn test_default_backend_is_heuristic() {
        let recognizer = create_recognizer(&RecognizerConfig::default()).unwrap();
        assert_eq!(recognizer.name(), "heuristic");
    }

    #[test]
    fn test_missing_lexicon_fails_startup() {
        let config = RecognizerConfig {
            stopwords_file: Some("/nonexistent/words.txt".into()),
            ..RecognizerConfig::default()
        };
        assert!(create_recognizer(&config).is_err());
    }

    #[test]
    fn test_remote_without_endpoint_fails() {
        let config = RecognizerConfig {
            backend: RecognizerBackend::Remote,
            ..RecognizerConfig::default()
        };
        let err = create_recognizer(&config).err().unwrap();
        assert!(err.to_string().contains("endpoint"));
    }

    #[test]
    fn test_build_sanitizer() {
        let recognizer = create_recognizer(&RecognizerConfig::default()).unwrap();
        let sanitizer = build_sanitizer(
            RedactionPolicy::default(),
            recognizer,
            &[Participant::new("Grace Kim", Role::Instructor)],
        );

        assert_eq!(sanitizer.detector().roster().len(), 3);
        assert_eq!(
            sanitizer.clean_text(Some("Grace said hi")).into_value(),
            "[NAME] said hi"
        );
    }
}
