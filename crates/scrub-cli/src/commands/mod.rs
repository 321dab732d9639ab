pub mod extract;
pub mod inspect;
pub mod sanitize;
pub mod text;

use std::path::Path;

use anyhow::{Context, Result};
use scrub_config::Config;
use scrub_core::{MatchMode, RedactionPolicy};
use scrub_engine::{PostSanitizer, build_sanitizer, create_recognizer};

/// Config policy with command-line overrides applied
pub fn redaction_policy(
    config: &Config,
    placeholder: Option<String>,
    whole_word: bool,
) -> RedactionPolicy {
    let mut policy = config.redaction.clone();
    if let Some(placeholder) = placeholder {
        policy.placeholder = placeholder;
    }
    if whole_word {
        policy.match_mode = MatchMode::WholeWord;
    }
    policy
}

/// Start the recognizer and load the roster. Fails loudly when either is
/// unavailable.
pub fn open_sanitizer(
    config: &Config,
    roster: &Path,
    placeholder: Option<String>,
    whole_word: bool,
) -> Result<PostSanitizer> {
    let recognizer = create_recognizer(&config.recognizer)?;
    let participants = scrub_storage::read_roster(roster)
        .with_context(|| format!("Failed to load roster {}", roster.display()))?;

    Ok(build_sanitizer(
        redaction_policy(config, placeholder, whole_word),
        recognizer,
        &participants,
    ))
}
