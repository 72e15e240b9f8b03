//! Content rewriting.

/// Frontmatter key written by the markdown generator.
const GENERATOR_SIDEBAR_KEY: &str = "sidebar_label: ";

/// Frontmatter key the site expects.
const SITE_SIDEBAR_KEY: &str = "sidebarTitle: ";

/// Escape characters that MDX would otherwise parse as JSX or expressions.
pub fn escape_mdx(content: &str) -> String {
    let mut out = String::with_capacity(content.len());
    for c in content.chars() {
        if c == '<' || c == '{' {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Rename the generator's sidebar label key to the site's.
pub fn rename_sidebar_key(content: &str) -> String {
    content.replace(GENERATOR_SIDEBAR_KEY, SITE_SIDEBAR_KEY)
}

/// Full markdown → MDX content rewrite.
pub fn to_mdx(content: &str) -> String {
    rename_sidebar_key(&escape_mdx(content))
}
