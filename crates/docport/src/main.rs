//! docport CLI - documentation site build steps.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, EnvFilter};

mod commands;
mod config;
mod generator;

#[derive(Parser)]
#[command(name = "docport")]
#[command(about = "Documentation site build steps")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Website directory (holds docs/, mint.json and docport.toml)
    #[arg(short, long, default_value = "website", global = true)]
    website: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Mirror git-tracked docs into the mkdocs source tree
    Mkdocs {
        /// Output directory (defaults to config or "<website>/mkdocs/docs/docs")
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Generate API reference pages and update mint.json navigation
    ApiReference {
        /// Path to the markdown generator config (file or directory)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory containing API documentation to process
        #[arg(long)]
        api_dir: Option<PathBuf>,

        /// Fail when mint.json has no API reference section
        #[arg(long)]
        strict: bool,

        /// Reuse existing generator output instead of running the generator
        #[arg(long)]
        skip_generate: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    fmt().with_env_filter(filter).with_target(false).init();

    let website = website_dir(&cli.website)?;
    let file_config = config::load_config(&website)?;

    match cli.command {
        Commands::Mkdocs { output } => {
            commands::mkdocs::run(&website, output, &file_config.mkdocs)?;
        }
        Commands::ApiReference {
            config,
            api_dir,
            strict,
            skip_generate,
        } => {
            let args = commands::api_reference::Args {
                generator_config: config,
                api_dir,
                strict,
                skip_generate,
            };
            commands::api_reference::run(&website, args, &file_config.reference)?;
        }
    }

    Ok(())
}

/// Anchor the website directory to the current directory so every path
/// derived from it shares one absolute prefix.
fn website_dir(website: &Path) -> Result<PathBuf> {
    std::path::absolute(website)
        .with_context(|| format!("Failed to resolve {}", website.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mkdocs_with_defaults() {
        let cli = Cli::try_parse_from(["docport", "mkdocs"]).unwrap();

        assert_eq!(cli.website, PathBuf::from("website"));
        assert!(!cli.verbose);
        assert!(matches!(cli.command, Commands::Mkdocs { output: None }));
    }

    #[test]
    fn parses_api_reference_overrides() {
        let cli = Cli::try_parse_from([
            "docport",
            "api-reference",
            "--config",
            "pydoc-markdown.yml",
            "--api-dir",
            "out/reference",
            "--strict",
            "--website",
            "site",
        ])
        .unwrap();

        assert_eq!(cli.website, PathBuf::from("site"));
        match cli.command {
            Commands::ApiReference {
                config,
                api_dir,
                strict,
                skip_generate,
            } => {
                assert_eq!(config, Some(PathBuf::from("pydoc-markdown.yml")));
                assert_eq!(api_dir, Some(PathBuf::from("out/reference")));
                assert!(strict);
                assert!(!skip_generate);
            }
            _ => panic!("expected api-reference"),
        }
    }

    #[test]
    fn website_dir_is_made_absolute() {
        let resolved = website_dir(Path::new("website")).unwrap();

        assert!(resolved.is_absolute());
        assert!(resolved.ends_with("website"));
        assert_eq!(resolved, std::env::current_dir().unwrap().join("website"));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["docport", "publish"]).is_err());
    }
}
