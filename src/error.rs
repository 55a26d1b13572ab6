use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Run-level failures. Any of these aborts the run.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("base directory unavailable: {}: {reason}", path.display())]
    BaseDirectoryUnavailable { path: PathBuf, reason: String },
    #[error("failed to write catalog to {}: {source}", path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid taxonomy: {0}")]
    Taxonomy(String),
}

/// Failures confined to a single record. The builder records these and moves on.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read record: {0}")]
    Unreadable(#[from] io::Error),
    #[error("record too large ({size} bytes, max {max} bytes)")]
    TooLarge { size: u64, max: u64 },
    #[error("malformed record: {0}")]
    Malformed(String),
}

impl RecordError {
    pub fn is_malformed(&self) -> bool {
        matches!(self, RecordError::Malformed(_))
    }
}
