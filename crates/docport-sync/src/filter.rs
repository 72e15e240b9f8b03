//! Prefix-based exclusion of files relative to a base directory.

use std::path::{Component, Path, PathBuf};

use crate::error::SyncError;

/// Keep the files whose path relative to `base` does not start with any of
/// the `exclusions` prefixes.
///
/// Matching is on the plain string form (`docs/home` also excludes
/// `docs/homepage.mdx`). Order is preserved and an empty exclusion list keeps
/// every file, but each file must still live under `base`.
pub fn filter_excluded_files(
    files: &[PathBuf],
    exclusions: &[String],
    base: &Path,
) -> Result<Vec<PathBuf>, SyncError> {
    let mut kept = Vec::with_capacity(files.len());

    for file in files {
        let key = relative_key(file, base)?;
        match exclusions.iter().find(|prefix| key.starts_with(prefix.as_str())) {
            Some(prefix) => tracing::debug!("Excluded {} (matches {})", key, prefix),
            None => kept.push(file.clone()),
        }
    }

    Ok(kept)
}

/// The `/`-separated form of `path` relative to `base`.
pub fn relative_key(path: &Path, base: &Path) -> Result<String, SyncError> {
    let relative = path
        .strip_prefix(base)
        .map_err(|_| SyncError::PathNotUnderBase {
            path: path.to_path_buf(),
            base: base.to_path_buf(),
        })?;

    Ok(relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn exclusions(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn excludes_blog_and_home_directories() {
        let files = vec![
            PathBuf::from("/tmp/ag2/ag2/website/docs/user-guide/advanced-concepts/groupchat/groupchat.mdx"),
            PathBuf::from("/tmp/ag2/ag2/website/docs/_blogs/2023-04-21-LLM-tuning-math/index.mdx"),
            PathBuf::from("/tmp/ag2/ag2/website/docs/home/home.mdx"),
            PathBuf::from("/tmp/ag2/ag2/website/docs/home/quick-start.mdx"),
        ];
        let website = Path::new("/tmp/ag2/ag2/website");

        let actual =
            filter_excluded_files(&files, &exclusions(&["docs/_blogs", "docs/home"]), website)
                .unwrap();

        assert_eq!(actual, vec![files[0].clone()]);
    }

    #[test]
    fn empty_exclusion_list_keeps_everything_in_order() {
        let files = vec![
            PathBuf::from("/site/docs/z.mdx"),
            PathBuf::from("/site/docs/a.mdx"),
            PathBuf::from("/site/docs/m/n.mdx"),
        ];

        let actual = filter_excluded_files(&files, &[], Path::new("/site")).unwrap();

        assert_eq!(actual, files);
    }

    #[test]
    fn prefix_match_is_string_based() {
        let files = vec![
            PathBuf::from("/site/docs/homepage.mdx"),
            PathBuf::from("/site/docs/guide.mdx"),
        ];

        let actual =
            filter_excluded_files(&files, &exclusions(&["docs/home"]), Path::new("/site")).unwrap();

        assert_eq!(actual, vec![PathBuf::from("/site/docs/guide.mdx")]);
    }

    #[test]
    fn excludes_single_file_entries() {
        let files = vec![
            PathBuf::from("/site/docs/.gitignore"),
            PathBuf::from("/site/docs/index.mdx"),
        ];

        let actual =
            filter_excluded_files(&files, &exclusions(&["docs/.gitignore"]), Path::new("/site"))
                .unwrap();

        assert_eq!(actual, vec![PathBuf::from("/site/docs/index.mdx")]);
    }

    #[test]
    fn rejects_path_outside_base() {
        let files = vec![PathBuf::from("/elsewhere/docs/index.mdx")];

        let result = filter_excluded_files(&files, &[], Path::new("/site"));

        assert!(matches!(result, Err(SyncError::PathNotUnderBase { .. })));
    }

    #[test]
    fn relative_key_uses_forward_slashes() {
        let path = Path::new("/site").join("docs").join("a").join("b.mdx");

        assert_eq!(relative_key(&path, Path::new("/site")).unwrap(), "docs/a/b.mdx");
    }
}
