//! In-place conversion of a directory of markdown files.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::content::to_mdx;

/// Files converted by a conversion run.
#[derive(Debug, Default)]
pub struct ConversionReport {
    /// `(source .md, written .mdx)` pairs, in walk order
    pub converted: Vec<(PathBuf, PathBuf)>,
}

impl ConversionReport {
    /// Number of converted files.
    pub fn len(&self) -> usize {
        self.converted.len()
    }

    /// Whether nothing was converted.
    pub fn is_empty(&self) -> bool {
        self.converted.is_empty()
    }
}

/// Errors that can occur during conversion.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Convert every `.md` file under `dir` into an `.mdx` sibling and remove
/// the original.
///
/// Stops at the first failure; files converted before it stay converted.
pub fn convert_md_to_mdx(dir: &Path) -> Result<ConversionReport, ConvertError> {
    if !dir.is_dir() {
        return Err(ConvertError::DirectoryNotFound(dir.to_path_buf()));
    }

    // Collect first so the walk never observes files created by the conversion.
    let sources: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| p.extension().and_then(|e| e.to_str()) == Some("md"))
        .collect();

    let mut report = ConversionReport::default();

    for md_file in sources {
        let mdx_file = md_file.with_extension("mdx");
        convert_file(&md_file, &mdx_file)?;
        tracing::info!("Converted: {} -> {}", md_file.display(), mdx_file.display());
        report.converted.push((md_file, mdx_file));
    }

    Ok(report)
}

fn convert_file(md_file: &Path, mdx_file: &Path) -> Result<(), ConvertError> {
    let content = fs::read_to_string(md_file).map_err(|source| ConvertError::Io {
        path: md_file.to_path_buf(),
        source,
    })?;

    fs::write(mdx_file, to_mdx(&content)).map_err(|source| ConvertError::Io {
        path: mdx_file.to_path_buf(),
        source,
    })?;

    fs::remove_file(md_file).map_err(|source| ConvertError::Io {
        path: md_file.to_path_buf(),
        source,
    })
}
