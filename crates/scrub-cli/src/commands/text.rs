use std::path::Path;

use anyhow::Result;
use scrub_config::Config;

pub fn handle(
    config: &Config,
    roster: &Path,
    text: &str,
    placeholder: Option<String>,
    whole_word: bool,
) -> Result<()> {
    let sanitizer = super::open_sanitizer(config, roster, placeholder, whole_word)?;
    let outcome = sanitizer.clean_text(Some(text));

    if let Some(diagnostic) = outcome.diagnostic() {
        eprintln!("⚠ {}; text printed without redaction", diagnostic);
    }
    println!("{}", outcome.value());

    Ok(())
}
