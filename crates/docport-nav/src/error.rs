//! Navigation errors.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while reading or updating navigation.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("Invalid navigation document: {0}")]
    ConfigParse(String),

    #[error("Navigation section not found: {0}")]
    SectionNotFound(String),

    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
