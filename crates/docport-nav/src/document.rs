//! Splicing generated navigation into the site's `mint.json`.

use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::NavError;
use crate::tree::NavNode;

/// Name of the top-level section that holds the API reference.
pub const DEFAULT_SECTION: &str = "API Reference";

/// What to do when no top-level section carries the requested name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingSection {
    /// Log a warning and leave the document unchanged
    #[default]
    Warn,
    /// Fail with [`NavError::SectionNotFound`]
    Fail,
}

/// Outcome of a navigation update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateOutcome {
    /// The section at this index of `navigation` had its pages replaced
    Replaced { index: usize },
    /// No section matched; the document was left as it was
    SectionMissing,
}

/// Replace the `pages` of the first `navigation` section whose `group` equals
/// `section`.
///
/// Section order and every other section are left untouched.
pub fn update_nav(
    doc: &mut Value,
    section: &str,
    pages: &[NavNode],
    missing: MissingSection,
) -> Result<UpdateOutcome, NavError> {
    let navigation = doc
        .get_mut("navigation")
        .and_then(Value::as_array_mut)
        .ok_or_else(|| NavError::ConfigParse("missing `navigation` list".to_string()))?;

    let position = navigation
        .iter()
        .position(|s| s.get("group").and_then(Value::as_str) == Some(section));

    let Some(index) = position else {
        return match missing {
            MissingSection::Warn => {
                tracing::warn!(
                    "No navigation section named '{}'; navigation left unchanged",
                    section
                );
                Ok(UpdateOutcome::SectionMissing)
            }
            MissingSection::Fail => Err(NavError::SectionNotFound(section.to_string())),
        };
    };

    let pages = serde_json::to_value(pages).map_err(|e| NavError::ConfigParse(e.to_string()))?;
    if let Some(entry) = navigation[index].as_object_mut() {
        entry.insert("pages".to_string(), pages);
    }

    Ok(UpdateOutcome::Replaced { index })
}

/// Serialize a navigation document with 2-space indentation and a trailing
/// newline.
pub fn render_document(doc: &Value) -> Result<String, NavError> {
    let mut out = serde_json::to_string_pretty(doc).map_err(|e| NavError::ConfigParse(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

/// Read the navigation document at `path`, update it, and write it back.
///
/// A document that fails to parse is reported before anything is written.
/// The new content goes to a temporary sibling that is renamed over `path`,
/// so a failed write leaves the previous file in place.
pub fn update_nav_file(
    path: &Path,
    section: &str,
    pages: &[NavNode],
    missing: MissingSection,
) -> Result<UpdateOutcome, NavError> {
    let content = fs::read_to_string(path).map_err(|source| NavError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut doc: Value = serde_json::from_str(&content)
        .map_err(|e| NavError::ConfigParse(format!("{} is not valid JSON: {}", path.display(), e)))?;

    let outcome = update_nav(&mut doc, section, pages, missing)?;
    let rendered = render_document(&doc)?;

    let staging = path.with_extension("json.tmp");
    let written = fs::write(&staging, rendered).and_then(|()| fs::rename(&staging, path));
    if let Err(source) = written {
        let _ = fs::remove_file(&staging);
        return Err(NavError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    tracing::info!("Updated navigation in {}", path.display());
    Ok(outcome)
}
