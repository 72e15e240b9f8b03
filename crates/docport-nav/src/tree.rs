//! Navigation tree construction.

use std::collections::BTreeMap;

use serde::Serialize;

/// Prefix prepended to every generated page reference.
pub const DEFAULT_PAGE_PREFIX: &str = "docs/reference";

/// A navigation entry as it appears in `mint.json`.
///
/// Pages serialize as bare strings, groups as `{"group": .., "pages": [..]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum NavNode {
    Group { group: String, pages: Vec<NavNode> },
    Page(String),
}

impl NavNode {
    /// Whether this node is a group.
    pub fn is_group(&self) -> bool {
        matches!(self, Self::Group { .. })
    }
}

/// Build navigation for `paths`, each a `/`-separated page path without
/// extension.
///
/// Directories become groups (sorted by segment name) listed before the pages
/// of the same level (sorted by reference). Empty input yields no nodes.
pub fn build_nav<S: AsRef<str>>(paths: &[S], prefix: &str) -> Vec<NavNode> {
    build_nav_with_parents(paths, prefix, &[])
}

/// Like [`build_nav`], for paths already nested under `parents`.
///
/// Page references include the parent segments and group names are the
/// dot-joined parents followed by the group's own segment (`agentchat.contrib`).
pub fn build_nav_with_parents<S: AsRef<str>>(
    paths: &[S],
    prefix: &str,
    parents: &[String],
) -> Vec<NavNode> {
    let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    let mut pages: Vec<String> = Vec::new();

    for path in paths {
        match path.as_ref().split_once('/') {
            Some((group, rest)) => groups.entry(group).or_default().push(rest),
            None => pages.push(page_reference(prefix, parents, path.as_ref())),
        }
    }

    pages.sort();

    let mut nodes: Vec<NavNode> = groups
        .into_iter()
        .map(|(name, children)| {
            let mut nested = parents.to_vec();
            nested.push(name.to_string());

            NavNode::Group {
                group: nested.join("."),
                pages: build_nav_with_parents(&children, prefix, &nested),
            }
        })
        .collect();

    nodes.extend(pages.into_iter().map(NavNode::Page));
    nodes
}

fn page_reference(prefix: &str, parents: &[String], page: &str) -> String {
    std::iter::once(prefix)
        .filter(|p| !p.is_empty())
        .chain(parents.iter().map(String::as_str))
        .chain(std::iter::once(page))
        .collect::<Vec<_>>()
        .join("/")
}

/// Every page reference in `nodes`, depth first.
pub fn flatten_pages(nodes: &[NavNode]) -> Vec<&str> {
    let mut out = Vec::new();
    for node in nodes {
        match node {
            NavNode::Group { pages, .. } => out.extend(flatten_pages(pages)),
            NavNode::Page(page) => out.push(page.as_str()),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn page(s: &str) -> NavNode {
        NavNode::Page(s.to_string())
    }

    fn group(name: &str, pages: Vec<NavNode>) -> NavNode {
        NavNode::Group {
            group: name.to_string(),
            pages,
        }
    }

    #[test]
    fn groups_before_pages() {
        let nav = build_nav(&["a/b", "a/c", "d"], DEFAULT_PAGE_PREFIX);

        assert_eq!(
            nav,
            vec![
                group(
                    "a",
                    vec![page("docs/reference/a/b"), page("docs/reference/a/c")]
                ),
                page("docs/reference/d"),
            ]
        );
    }

    #[test]
    fn nested_groups_use_dotted_names() {
        let nav = build_nav(
            &[
                "autogen/agentchat/contrib/img_utils",
                "autogen/agentchat/conversable_agent",
                "autogen/browser_utils",
            ],
            DEFAULT_PAGE_PREFIX,
        );

        assert_eq!(
            nav,
            vec![group(
                "autogen",
                vec![
                    group(
                        "autogen.agentchat",
                        vec![
                            group(
                                "autogen.agentchat.contrib",
                                vec![page("docs/reference/autogen/agentchat/contrib/img_utils")]
                            ),
                            page("docs/reference/autogen/agentchat/conversable_agent"),
                        ]
                    ),
                    page("docs/reference/autogen/browser_utils"),
                ]
            )]
        );
    }

    #[test]
    fn sorts_groups_and_pages_independently() {
        let nav = build_nav(&["z", "b/x", "a", "a/y"], "ref");

        assert_eq!(
            nav,
            vec![
                group("a", vec![page("ref/a/y")]),
                group("b", vec![page("ref/b/x")]),
                page("ref/a"),
                page("ref/z"),
            ]
        );
    }

    #[test]
    fn empty_input_yields_empty_nav() {
        let empty: [&str; 0] = [];
        assert!(build_nav(&empty, DEFAULT_PAGE_PREFIX).is_empty());
    }

    #[test]
    fn honours_parent_groups() {
        let parents = vec!["autogen".to_string(), "oai".to_string()];
        let nav = build_nav_with_parents(&["client", "cache/disk"], "docs/reference", &parents);

        assert_eq!(
            nav,
            vec![
                group(
                    "autogen.oai.cache",
                    vec![page("docs/reference/autogen/oai/cache/disk")]
                ),
                page("docs/reference/autogen/oai/client"),
            ]
        );
    }

    #[test]
    fn every_input_appears_exactly_once() {
        let paths = vec![
            "x/y/z", "x/y/w", "x/v", "u", "t/s", "x/y/a/b", "r",
        ];
        let nav = build_nav(&paths, "p");

        let mut leaves: Vec<&str> = flatten_pages(&nav);
        leaves.sort();
        let mut expected: Vec<String> = paths.iter().map(|p| format!("p/{}", p)).collect();
        expected.sort();

        assert_eq!(leaves, expected.iter().map(String::as_str).collect::<Vec<_>>());
    }

    #[test]
    fn rebuilding_from_flattened_output_is_stable() {
        let paths = ["b/c/d", "a", "b/e", "f/g", "b/c/h"];
        let nav = build_nav(&paths, "p");

        let reflattened: Vec<&str> = flatten_pages(&nav)
            .into_iter()
            .map(|leaf| leaf.strip_prefix("p/").unwrap())
            .collect();

        assert_eq!(build_nav(&reflattened, "p"), nav);
    }

    #[test]
    fn groups_precede_pages_at_every_level() {
        fn check(nodes: &[NavNode]) {
            let first_page = nodes.iter().position(|n| !n.is_group()).unwrap_or(nodes.len());
            assert!(nodes[first_page..].iter().all(|n| !n.is_group()));
            for node in nodes {
                if let NavNode::Group { pages, .. } = node {
                    check(pages);
                }
            }
        }

        check(&build_nav(&["m/n", "m", "m/o/p", "a", "c/d/e", "c/f"], "p"));
    }

    #[test]
    fn serializes_to_mint_schema() {
        let nav = build_nav(&["a/b", "d"], "docs/reference");
        let json = serde_json::to_value(&nav).unwrap();

        assert_eq!(
            json,
            serde_json::json!([
                {"group": "a", "pages": ["docs/reference/a/b"]},
                "docs/reference/d"
            ])
        );
    }
}
