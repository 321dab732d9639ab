//! Line-delimited JSON record files

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Lines, Write};
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use time::OffsetDateTime;
use tracing::{debug, info, warn};

use crate::{Result, StorageError};

/// Write `records` one per line, creating parent directories.
///
/// Overwrites the file unless `append` is set. Returns the number written.
pub fn write<T: Serialize>(records: &[T], path: &Path, append: bool) -> Result<usize> {
    let mut writer = BufWriter::new(open_for_write(path, append)?);

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }
    writer.flush()?;

    info!("Wrote {} records to {}", records.len(), path.display());
    Ok(records.len())
}

/// Append a single record
pub fn append_one<T: Serialize>(record: &T, path: &Path) -> Result<()> {
    let mut line = serde_json::to_vec(record)?;
    line.push(b'\n');

    open_for_write(path, true)?.write_all(&line)?;
    debug!("Appended 1 record to {}", path.display());
    Ok(())
}

fn open_for_write(path: &Path, append: bool) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .append(append)
        .truncate(!append)
        .open(path)?;
    Ok(file)
}

/// Read every record. A missing file reads as empty.
pub fn read<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let records = read_iter(path)?.collect::<Result<Vec<T>>>()?;
    info!("Read {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Stream records one at a time. A missing file yields nothing.
pub fn read_iter<T: DeserializeOwned>(path: &Path) -> Result<JsonlReader<T>> {
    let lines = match File::open(path) {
        Ok(file) => Some(BufReader::new(file).lines()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            warn!("File not found: {}", path.display());
            None
        }
        Err(e) => return Err(e.into()),
    };

    Ok(JsonlReader {
        path: path.to_path_buf(),
        lines,
        line: 0,
        _record: PhantomData,
    })
}

/// Iterator over the records of a JSONL file. Blank lines are skipped.
pub struct JsonlReader<T> {
    path: PathBuf,
    lines: Option<Lines<BufReader<File>>>,
    line: usize,
    _record: PhantomData<T>,
}

impl<T: DeserializeOwned> Iterator for JsonlReader<T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let lines = self.lines.as_mut()?;

        loop {
            let text = match lines.next()? {
                Ok(text) => text,
                Err(e) => return Some(Err(e.into())),
            };
            self.line += 1;

            if text.trim().is_empty() {
                continue;
            }

            return Some(serde_json::from_str(&text).map_err(|source| {
                StorageError::MalformedRecord {
                    path: self.path.clone(),
                    line: self.line,
                    source,
                }
            }));
        }
    }
}

/// Facts about a record file
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileMetadata {
    pub exists: bool,
    pub path: PathBuf,
    pub size_bytes: u64,
    pub record_count: usize,
    #[serde(with = "time::serde::rfc3339::option")]
    pub modified: Option<OffsetDateTime>,
}

/// Inspect a record file without keeping its records
pub fn metadata(path: &Path) -> Result<FileMetadata> {
    let meta = match fs::metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Ok(FileMetadata {
                exists: false,
                path: path.to_path_buf(),
                size_bytes: 0,
                record_count: 0,
                modified: None,
            });
        }
        Err(e) => return Err(e.into()),
    };

    let mut record_count = 0;
    for record in read_iter::<serde_json::Value>(path)? {
        record?;
        record_count += 1;
    }

    Ok(FileMetadata {
        exists: true,
        path: path.to_path_buf(),
        size_bytes: meta.len(),
        record_count,
        modified: meta.modified().ok().map(OffsetDateTime::from),
    })
}
