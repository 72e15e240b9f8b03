//! Discovery of generated reference pages.

use std::path::{Component, Path};

use walkdir::WalkDir;

use crate::error::NavError;

/// All `.mdx` pages under `dir`, as sorted `/`-separated paths relative to
/// `dir` with the extension removed.
pub fn mdx_pages(dir: &Path) -> Result<Vec<String>, NavError> {
    if !dir.is_dir() {
        return Err(NavError::DirectoryNotFound(dir.to_path_buf()));
    }

    let mut pages = Vec::new();

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() {
            continue;
        }

        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "mdx" {
            continue;
        }

        let relative = path.strip_prefix(dir).unwrap_or(path).with_extension("");
        let page = relative
            .components()
            .filter_map(|c| match c {
                Component::Normal(part) => Some(part.to_string_lossy()),
                _ => None,
            })
            .collect::<Vec<_>>()
            .join("/");

        pages.push(page);
    }

    pages.sort();
    tracing::debug!("Found {} pages under {}", pages.len(), dir.display());

    Ok(pages)
}
