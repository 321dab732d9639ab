//! Named-entity recognition engines
//!
//! The name detector only needs literal spans with a label. Engines plug in
//! behind `EntityRecognizer`:
//! - `HeuristicRecognizer`: in-process capitalised-run tagger
//! - `RemoteRecognizer`: HTTP call to an external NER service

pub mod heuristic;
pub mod remote;

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use heuristic::HeuristicRecognizer;
pub use remote::RemoteRecognizer;

/// Entity type assigned by a recognizer
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityLabel {
    Person,
    Organization,
    Other(String),
}

impl EntityLabel {
    /// Map a conventional NER tag ("PERSON", "PER", "ORG", ...) to a label
    pub fn from_tag(tag: &str) -> Self {
        match tag.to_ascii_uppercase().as_str() {
            "PERSON" | "PER" => EntityLabel::Person,
            "ORG" | "ORGANIZATION" => EntityLabel::Organization,
            _ => EntityLabel::Other(tag.to_string()),
        }
    }
}

/// A labelled region of the input text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    /// Literal text as it appears in the source
    pub text: String,
    pub label: EntityLabel,
    /// Byte offsets into the source text
    pub start: usize,
    pub end: usize,
}

impl EntitySpan {
    pub fn is_person(&self) -> bool {
        self.label == EntityLabel::Person
    }
}

#[derive(Error, Debug)]
pub enum RecognizerError {
    /// The engine could not be initialised; running without it is unsafe
    #[error("Entity recognizer unavailable: {0}")]
    Unavailable(String),

    #[error("Entity recognition failed: {0}")]
    Failed(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, RecognizerError>;

/// A person-entity recognition capability
pub trait EntityRecognizer: Send + Sync {
    /// Engine name for logs
    fn name(&self) -> &str;

    /// Find labelled entity spans in `text`
    fn recognize(&self, text: &str) -> Result<Vec<EntitySpan>>;
}
