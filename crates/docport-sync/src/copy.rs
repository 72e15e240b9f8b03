//! Copy a file list from one root to another, preserving relative layout.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use crate::error::SyncError;
use crate::git::git_tracked_files;

/// Result of a copy batch.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CopyReport {
    /// Number of files written
    pub files: usize,

    /// Total bytes written
    pub bytes: u64,
}

/// Copy `files` from `src_root` into `dst_root`.
///
/// Each entry may be absolute or relative to `src_root`; it lands at the same
/// relative location under `dst_root`, with missing parent directories
/// created. File contents, permissions and modification time are copied.
///
/// A destination file is replaced atomically, but the batch is not: the
/// first failing file aborts the batch and files copied before it stay.
pub fn copy_files(
    src_root: &Path,
    dst_root: &Path,
    files: &[PathBuf],
) -> Result<CopyReport, SyncError> {
    let mut report = CopyReport::default();

    for file in files {
        let source = resolve_source(src_root, file);

        let relative = source
            .strip_prefix(src_root)
            .map_err(|_| SyncError::PathNotUnderBase {
                path: source.clone(),
                base: src_root.to_path_buf(),
            })?;

        if !source.is_file() {
            return Err(SyncError::SourceNotFound(source));
        }

        let dest = dst_root.join(relative);
        report.bytes += copy_file(&source, &dest)?;
        report.files += 1;

        tracing::debug!("Copied {} -> {}", source.display(), dest.display());
    }

    tracing::info!(
        "Copied {} files ({} bytes) to {}",
        report.files,
        report.bytes,
        dst_root.display()
    );

    Ok(report)
}

/// Where `file` lives on disk: as given when it is absolute or already under
/// `src_root`, otherwise relative to `src_root`.
fn resolve_source(src_root: &Path, file: &Path) -> PathBuf {
    if file.is_absolute() || file.starts_with(src_root) {
        file.to_path_buf()
    } else {
        src_root.join(file)
    }
}

/// Copy every git-tracked file under `src_dir` into `dst_dir`.
pub fn copy_tracked_files(src_dir: &Path, dst_dir: &Path) -> Result<CopyReport, SyncError> {
    let files: Vec<PathBuf> = git_tracked_files(src_dir)?.into_iter().collect();
    copy_files(src_dir, dst_dir, &files)
}

/// Copy one file through a temporary sibling, then rename it into place.
fn copy_file(source: &Path, dest: &Path) -> Result<u64, SyncError> {
    let parent = dest.parent().ok_or_else(|| SyncError::Io {
        path: dest.to_path_buf(),
        source: io::Error::other("destination has no parent directory"),
    })?;
    fs::create_dir_all(parent).map_err(|e| SyncError::from_io(parent, e))?;

    let file_name = dest.file_name().ok_or_else(|| SyncError::Io {
        path: dest.to_path_buf(),
        source: io::Error::other("destination has no file name"),
    })?;
    let partial = parent.join(format!(".{}.partial", file_name.to_string_lossy()));

    let result = write_partial(source, &partial)
        .and_then(|bytes| {
            fs::rename(&partial, dest).map_err(|e| SyncError::from_io(dest, e))?;
            Ok(bytes)
        });

    if result.is_err() {
        let _ = fs::remove_file(&partial);
    }

    result
}

fn write_partial(source: &Path, partial: &Path) -> Result<u64, SyncError> {
    let mut reader = File::open(source).map_err(|e| SyncError::from_io(source, e))?;
    let metadata = reader
        .metadata()
        .map_err(|e| SyncError::from_io(source, e))?;

    let mut writer = File::create(partial).map_err(|e| SyncError::from_io(partial, e))?;
    let bytes = io::copy(&mut reader, &mut writer).map_err(|e| SyncError::from_io(partial, e))?;

    let modified = metadata
        .modified()
        .map_err(|e| SyncError::from_io(source, e))?;
    writer
        .set_modified(modified)
        .map_err(|e| SyncError::from_io(partial, e))?;
    drop(writer);

    fs::set_permissions(partial, metadata.permissions())
        .map_err(|e| SyncError::from_io(partial, e))?;

    Ok(bytes)
}
