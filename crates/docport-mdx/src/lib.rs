//! Markdown to MDX conversion for generated API reference pages.
//!
//! Generated markdown is not valid MDX as-is: bare `<` and `{` start JSX, and
//! the sidebar label key differs between the generator and the site. This
//! crate rewrites content and file extensions in place.

pub mod content;
pub mod convert;

pub use content::{escape_mdx, rename_sidebar_key, to_mdx};
pub use convert::{convert_md_to_mdx, ConversionReport, ConvertError};
