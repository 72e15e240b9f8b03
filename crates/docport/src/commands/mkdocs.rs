//! Mirror the Mintlify docs tree into the mkdocs source tree.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use docport_sync::{copy_files, filter_excluded_files, git_tracked_and_untracked_files, CopyReport};

use crate::config::MkdocsConfig;

/// Run the mkdocs mirror: select → filter → copy.
pub fn run(website: &Path, output: Option<PathBuf>, config: &MkdocsConfig) -> Result<CopyReport> {
    let input = website.join(&config.input);
    let output = output.unwrap_or_else(|| website.join(&config.output));

    tracing::info!("Mirroring {} into {}", input.display(), output.display());

    let files: Vec<PathBuf> = git_tracked_and_untracked_files(&input)
        .with_context(|| format!("Failed to list files under {}", input.display()))?
        .into_iter()
        .collect();

    let selected = filter_excluded_files(&files, &config.exclude, website)
        .context("Failed to apply exclusion list")?;

    tracing::info!(
        "Selected {} of {} files ({} excluded)",
        selected.len(),
        files.len(),
        files.len() - selected.len()
    );

    let report = copy_files(&input, &output, &selected)
        .with_context(|| format!("Failed to copy docs into {}", output.display()))?;

    Ok(report)
}
