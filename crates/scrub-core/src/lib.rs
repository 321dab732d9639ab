//! Core domain models and logic for scrub
//!
//! This crate contains:
//! - Domain models (Post, Answer, Followup, Reply, Participant)
//! - Redaction policy shared by the engine and config
//! - Text tree visitor over post threads
//! - Plain-text rendering of posts for summarization prompts

pub mod error;
pub mod outcome;
pub mod participant;
pub mod policy;
pub mod post;
pub mod render;
pub mod tree;

pub use error::{Error, Result};
pub use outcome::Outcome;
pub use participant::{Participant, Role};
pub use policy::{MatchMode, RedactionPolicy};
pub use post::{Answer, AuthorType, Followup, Post, Reply, ReplyKind};
pub use render::{OutputFormat, render_post, render_posts};
pub use tree::{FieldKind, NodeKind, TextLeaf, TextTree};
