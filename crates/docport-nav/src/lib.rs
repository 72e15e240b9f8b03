//! Navigation tooling for the documentation site.
//!
//! Turns a flat list of generated reference pages into nested navigation
//! groups and replaces one section of the site's `mint.json` with the result.

pub mod document;
pub mod error;
pub mod pages;
pub mod tree;

pub use document::{
    render_document, update_nav, update_nav_file, MissingSection, UpdateOutcome,
    DEFAULT_SECTION,
};
pub use error::NavError;
pub use pages::mdx_pages;
pub use tree::{build_nav, build_nav_with_parents, flatten_pages, NavNode, DEFAULT_PAGE_PREFIX};
