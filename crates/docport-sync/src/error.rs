//! Errors raised while selecting, filtering, or copying files.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while mirroring a documentation tree.
#[derive(Debug, thiserror::Error)]
pub enum SyncError {
    #[error("Version control unavailable for {dir}: {reason}")]
    VcsUnavailable { dir: PathBuf, reason: String },

    #[error("Path {path} is not under {base}")]
    PathNotUnderBase { path: PathBuf, base: PathBuf },

    #[error("Source file not found: {0}")]
    SourceNotFound(PathBuf),

    #[error("Permission denied copying {path}: {source}")]
    PermissionDenied {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SyncError {
    /// Classify an I/O failure on `path`, keeping permission problems distinct.
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path, source },
            _ => Self::Io { path, source },
        }
    }
}
