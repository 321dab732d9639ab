//! Post sanitization
//!
//! Every text leaf of a post goes through normalize, detect, redact in that
//! order. Entities are decoded before detection so names next to `&amp;` or
//! `&#39;` are still seen whole.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

use scrub_core::{Outcome, Post, TextTree};
use scrub_security::{NameDetector, Redactor, normalize};
use tracing::{debug, error, info};

use crate::error::SanitizeError;
use crate::report::{BatchReport, DegradedPost};

const PROGRESS_EVERY: usize = 10;

/// Counters for one sanitized post
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    pub fields: usize,
    pub redactions: usize,
    pub detection_failures: usize,
}

pub struct PostSanitizer {
    detector: NameDetector,
    redactor: Redactor,
}

impl PostSanitizer {
    pub fn new(detector: NameDetector, redactor: Redactor) -> Self {
        Self { detector, redactor }
    }

    pub fn detector(&self) -> &NameDetector {
        &self.detector
    }

    pub fn redactor(&self) -> &Redactor {
        &self.redactor
    }

    /// Sanitize one piece of text. The outcome is recovered when name
    /// detection failed and the text went through unredacted.
    pub fn clean_text(&self, text: Option<&str>) -> Outcome<String> {
        let mut stats = CleanStats::default();
        let cleaned = self.clean_field(text.unwrap_or_default(), &mut stats);

        if stats.detection_failures > 0 {
            Outcome::recovered(cleaned, "name detection failed")
        } else {
            Outcome::Clean(cleaned)
        }
    }

    fn clean_field(&self, text: &str, stats: &mut CleanStats) -> String {
        stats.fields += 1;

        let normalized = normalize(Some(text));
        let names = self.detector.try_find_names(Some(&normalized));
        if names.is_recovered() {
            stats.detection_failures += 1;
        }

        let (redacted, count) = self.redactor.redact(Some(&normalized), names.value());
        stats.redactions += count;
        redacted
    }

    /// A sanitized copy of `post` with its counters
    pub fn clean_post_with_stats(&self, post: &Post) -> (Post, CleanStats) {
        let mut stats = CleanStats::default();
        let cleaned = post.map_text(&mut |leaf| self.clean_field(leaf.text, &mut stats));

        debug!(
            post_id = %post.post_id,
            fields = stats.fields,
            redactions = stats.redactions,
            "Sanitized post"
        );
        (cleaned, stats)
    }

    /// A sanitized copy of `post`; the argument is never modified
    pub fn clean_post(&self, post: &Post) -> Post {
        self.clean_post_with_stats(post).0
    }

    /// Like `clean_post_with_stats`, but an internal fault becomes an error
    /// instead of unwinding through the caller
    pub fn try_clean_post(&self, post: &Post) -> Result<(Post, CleanStats), SanitizeError> {
        panic::catch_unwind(AssertUnwindSafe(|| self.clean_post_with_stats(post))).map_err(
            |payload| SanitizeError::Panicked {
                post_id: post.post_id.clone(),
                message: panic_message(payload.as_ref()),
            },
        )
    }

    /// Sanitize every post, keeping the original of any post that faults.
    pub fn sanitize_batch(&self, posts: &[Post]) -> BatchReport {
        info!("Sanitizing batch of {} posts", posts.len());

        let mut report = BatchReport {
            posts: Vec::with_capacity(posts.len()),
            ..BatchReport::default()
        };

        for (index, post) in posts.iter().enumerate() {
            match self.try_clean_post(post) {
                Ok((cleaned, stats)) => {
                    report.redactions += stats.redactions;
                    report.detection_failures += stats.detection_failures;
                    report.posts.push(cleaned);
                }
                Err(e) => {
                    error!(post_id = %post.post_id, index, "Keeping original post: {}", e);
                    report.degraded.push(DegradedPost {
                        index,
                        post_id: post.post_id.clone(),
                        reason: e.to_string(),
                    });
                    report.posts.push(post.clone());
                }
            }

            if (index + 1) % PROGRESS_EVERY == 0 {
                debug!("Sanitized {}/{} posts", index + 1, posts.len());
            }
        }

        info!(
            redactions = report.redactions,
            degraded = report.degraded.len(),
            detection_failures = report.detection_failures,
            "Batch sanitized: {} posts",
            report.posts.len()
        );
        report
    }

    pub fn clean_posts_batch(&self, posts: &[Post]) -> Vec<Post> {
        self.sanitize_batch(posts).posts
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
