//! Name detection and redaction for forum text
//!
//! The pipeline for one field is normalize, detect, redact:
//! - `normalizer`: HTML entity decoding and whitespace cleanup
//! - `roster`: index of known participant names
//! - `recognizer`: pluggable named-entity recognition
//! - `detector`: roster-confirmed person mentions
//! - `redactor`: placeholder substitution

pub mod detector;
pub mod normalizer;
pub mod recognizer;
pub mod redactor;
pub mod roster;

pub use detector::NameDetector;
pub use normalizer::normalize;
pub use recognizer::{
    EntityLabel, EntityRecognizer, EntitySpan, HeuristicRecognizer, RecognizerError,
    RemoteRecognizer,
};
pub use redactor::Redactor;
pub use roster::RosterIndex;
