//! Append-only JSONL persistence for fetched transaction documents.
//!
//! One serialized document per line. The store never deduplicates; the
//! crawl's visited-set discipline is what keeps one record per hash within
//! a run.

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::CoreError;
use crate::types::TxRecord;

/// Append-only sink for fetched transaction documents.
pub trait TxStore {
    /// Append one document, preserving its full structure for later
    /// re-extraction.
    fn append(&mut self, record: &TxRecord) -> Result<(), CoreError>;
}

/// A JSONL dataset file on disk.
pub struct JsonlStore {
    file: File,
    path: PathBuf,
}

impl JsonlStore {
    /// Open a dataset file in append mode, creating it (and any missing
    /// parent directories) if it does not exist yet.
    pub fn open(path: &Path) -> Result<Self, CoreError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file,
            path: path.to_owned(),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TxStore for JsonlStore {
    fn append(&mut self, record: &TxRecord) -> Result<(), CoreError> {
        let line = serde_json::to_string(record)
            .map_err(|e| CoreError::InvalidRecord(format!("serialize transaction document: {e}")))?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        self.file.flush()?;
        Ok(())
    }
}

/// Re-parse a JSONL dataset, skipping empty lines. Parse failures carry the
/// offending line number.
pub fn read_records(path: &Path) -> Result<Vec<TxRecord>, CoreError> {
    let content = fs::read_to_string(path)?;
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(line_num, line)| {
            serde_json::from_str(line.trim()).map_err(|e| CoreError::RecordParse {
                line: line_num + 1,
                message: e.to_string(),
            })
        })
        .collect()
}

/// Load a single JSON transaction document, e.g. the seed for a crawl.
pub fn read_seed(path: &Path) -> Result<TxRecord, CoreError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content)
        .map_err(|e| CoreError::InvalidRecord(format!("decode seed document: {e}")))
}
