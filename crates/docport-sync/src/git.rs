//! File selection backed by the git index.

use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::SyncError;

/// Files under `dir` that are tracked by git.
///
/// Returned paths are `dir` joined with the path git reports. Index entries
/// that are not regular files on disk (deleted files, submodules) are dropped.
pub fn git_tracked_files(dir: &Path) -> Result<BTreeSet<PathBuf>, SyncError> {
    let listed = ls_files(dir, &[])?;
    Ok(existing_files(dir, listed))
}

/// Files under `dir` that are tracked, plus untracked files not ignored by
/// `.gitignore`.
pub fn git_tracked_and_untracked_files(dir: &Path) -> Result<BTreeSet<PathBuf>, SyncError> {
    let mut listed = ls_files(dir, &[])?;
    listed.extend(ls_files(dir, &["--others", "--exclude-standard"])?);
    Ok(existing_files(dir, listed))
}

/// Run `git ls-files -z` in `dir` and split its NUL-separated output.
fn ls_files(dir: &Path, extra: &[&str]) -> Result<Vec<String>, SyncError> {
    let output = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(["ls-files", "-z"])
        .args(extra)
        .output()
        .map_err(|e| SyncError::VcsUnavailable {
            dir: dir.to_path_buf(),
            reason: match e.kind() {
                io::ErrorKind::NotFound => "git executable not found".to_string(),
                _ => e.to_string(),
            },
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(SyncError::VcsUnavailable {
            dir: dir.to_path_buf(),
            reason: stderr.trim().to_string(),
        });
    }

    Ok(output
        .stdout
        .split(|b| *b == 0)
        .filter(|entry| !entry.is_empty())
        .map(|entry| String::from_utf8_lossy(entry).into_owned())
        .collect())
}

fn existing_files(dir: &Path, listed: Vec<String>) -> BTreeSet<PathBuf> {
    let total = listed.len();
    let files: BTreeSet<PathBuf> = listed
        .into_iter()
        .map(|rel| dir.join(rel))
        .filter(|path| path.is_file())
        .collect();

    if files.len() < total {
        tracing::debug!(
            "Skipped {} index entries under {} that are not files on disk",
            total - files.len(),
            dir.display()
        );
    }

    files
}
