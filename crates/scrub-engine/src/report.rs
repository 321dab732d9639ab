//! Batch sanitization results

use scrub_core::Post;

/// A post that could not be sanitized and was kept unchanged
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DegradedPost {
    /// Position in the input batch
    pub index: usize,
    pub post_id: String,
    pub reason: String,
}

/// Output of `PostSanitizer::sanitize_batch`.
///
/// `posts` always has one entry per input post, in input order.
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub posts: Vec<Post>,
    pub degraded: Vec<DegradedPost>,
    /// Names replaced across the batch
    pub redactions: usize,
    /// Text fields whose name detection failed and was treated as name-free
    pub detection_failures: usize,
}

impl BatchReport {
    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// True when every post was cleaned with working detection
    pub fn is_clean(&self) -> bool {
        self.degraded.is_empty() && self.detection_failures == 0
    }
}
