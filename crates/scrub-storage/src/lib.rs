//! Storage layer for scrub
//!
//! This crate provides:
//! - Line-delimited JSON record files (one object per line, UTF-8)
//! - File metadata for record files
//! - Roster snapshot loading

pub mod error;
pub mod jsonl;
pub mod roster;

pub use error::{Result, StorageError};
pub use jsonl::{FileMetadata, JsonlReader, append_one, metadata, read, read_iter, write};
pub use roster::read_roster;
