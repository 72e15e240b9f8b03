//! Optional `docport.toml` in the website directory.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use docport_nav::{DEFAULT_PAGE_PREFIX, DEFAULT_SECTION};
use serde::Deserialize;

pub const CONFIG_FILE: &str = "docport.toml";

/// Configuration file structure (docport.toml).
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    #[serde(default)]
    pub mkdocs: MkdocsConfig,
    #[serde(default)]
    pub reference: ReferenceConfig,
}

#[derive(Debug, Deserialize)]
pub struct MkdocsConfig {
    /// Docs source, relative to the website directory
    #[serde(default = "default_input")]
    pub input: String,
    /// Mirror destination, relative to the website directory
    #[serde(default = "default_output")]
    pub output: String,
    /// Prefixes (relative to the website directory) left out of the mirror
    #[serde(default = "default_exclude")]
    pub exclude: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ReferenceConfig {
    #[serde(default = "default_api_dir")]
    pub api_dir: String,
    #[serde(default = "default_nav_file")]
    pub nav_file: String,
    #[serde(default = "default_section")]
    pub section: String,
    #[serde(default = "default_page_prefix")]
    pub page_prefix: String,
    #[serde(default = "default_generator")]
    pub generator: String,
    #[serde(default)]
    pub strict: bool,
}

impl Default for MkdocsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output: default_output(),
            exclude: default_exclude(),
        }
    }
}

impl Default for ReferenceConfig {
    fn default() -> Self {
        Self {
            api_dir: default_api_dir(),
            nav_file: default_nav_file(),
            section: default_section(),
            page_prefix: default_page_prefix(),
            generator: default_generator(),
            strict: false,
        }
    }
}

fn default_input() -> String {
    "docs".to_string()
}
fn default_output() -> String {
    "mkdocs/docs/docs".to_string()
}
fn default_exclude() -> Vec<String> {
    vec![
        "docs/_blogs".to_string(),
        "docs/home".to_string(),
        "docs/.gitignore".to_string(),
    ]
}
fn default_api_dir() -> String {
    "docs/reference".to_string()
}
fn default_nav_file() -> String {
    "mint.json".to_string()
}
fn default_section() -> String {
    DEFAULT_SECTION.to_string()
}
fn default_page_prefix() -> String {
    DEFAULT_PAGE_PREFIX.to_string()
}
fn default_generator() -> String {
    "pydoc-markdown".to_string()
}

/// Load configuration from `<website>/docport.toml` if it exists.
/// Returns an error if the config file exists but is malformed.
pub fn load_config(website: &Path) -> Result<ConfigFile> {
    let config_path = website.join(CONFIG_FILE);
    if config_path.exists() {
        let content = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        let config: ConfigFile = toml::from_str(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?;
        tracing::info!("Loaded config from {}", config_path.display());
        return Ok(config);
    }
    Ok(ConfigFile::default())
}
