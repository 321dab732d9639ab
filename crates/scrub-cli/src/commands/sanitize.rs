use std::path::Path;

use anyhow::{Context, Result};
use scrub_config::Config;
use scrub_core::Post;

pub fn handle(
    config: &Config,
    input: &Path,
    roster: &Path,
    output: &Path,
    placeholder: Option<String>,
    whole_word: bool,
    append: bool,
) -> Result<()> {
    let sanitizer = super::open_sanitizer(config, roster, placeholder, whole_word)?;

    let posts: Vec<Post> = scrub_storage::read(input)
        .with_context(|| format!("Failed to read posts from {}", input.display()))?;
    if posts.is_empty() {
        println!("No posts found in {}", input.display());
        return Ok(());
    }

    let report = sanitizer.sanitize_batch(&posts);
    let written = scrub_storage::write(&report.posts, output, append)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("✓ Sanitized {} posts -> {}", written, output.display());
    println!("  Names redacted: {}", report.redactions);

    if report.detection_failures > 0 {
        println!(
            "  ⚠ Name detection failed on {} fields (left unredacted)",
            report.detection_failures
        );
    }

    if !report.degraded.is_empty() {
        println!("  ⚠ Kept {} posts unsanitized:", report.degraded.len());
        for degraded in &report.degraded {
            println!(
                "    [{}] {}: {}",
                degraded.index, degraded.post_id, degraded.reason
            );
        }
    }

    Ok(())
}
