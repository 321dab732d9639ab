//! Roster snapshots
//!
//! The roster collaborator dumps participants either as one JSON array or
//! as JSONL. Both are accepted.

use std::fs;
use std::path::Path;

use scrub_core::Participant;
use tracing::info;

use crate::{Result, StorageError, jsonl};

/// Load participants from `path`. Unlike post files, a missing roster is an
/// error.
pub fn read_roster(path: &Path) -> Result<Vec<Participant>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(StorageError::NotFound(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };

    let participants: Vec<Participant> = if content.trim_start().starts_with('[') {
        serde_json::from_str(&content).map_err(|source| StorageError::MalformedRecord {
            path: path.to_path_buf(),
            line: source.line(),
            source,
        })?
    } else {
        jsonl::read(path)?
    };

    info!("Loaded {} participants from {}", participants.len(), path.display());
    Ok(participants)
}
