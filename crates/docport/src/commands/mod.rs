//! CLI command implementations.

pub mod api_reference;
pub mod mkdocs;
