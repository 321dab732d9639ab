//! Post sanitization engine
//!
//! Wires the normalizer, detector and redactor from `scrub-security` over
//! whole posts and batches of posts.

pub mod error;
pub mod folders;
pub mod report;
pub mod sanitizer;
pub mod session;

pub use error::SanitizeError;
pub use folders::{available_folders, filter_by_folder};
pub use report::{BatchReport, DegradedPost};
pub use sanitizer::{CleanStats, PostSanitizer};
pub use session::{build_sanitizer, create_recognizer};
