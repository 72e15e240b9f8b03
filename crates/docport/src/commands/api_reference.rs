//! API reference build: generate, convert to MDX, rebuild navigation.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use docport_mdx::convert_md_to_mdx;
use docport_nav::{build_nav, mdx_pages, update_nav_file, MissingSection, NavError, UpdateOutcome};

use crate::config::ReferenceConfig;
use crate::generator::run_generator;

/// Command-line overrides for the API reference build.
#[derive(Debug, Default)]
pub struct Args {
    pub generator_config: Option<PathBuf>,
    pub api_dir: Option<PathBuf>,
    pub strict: bool,
    pub skip_generate: bool,
}

/// Run the API reference pipeline.
///
/// Generator and conversion failures abort with an error. Navigation update
/// failures are logged and leave the nav file as it was, except a missing
/// section in strict mode.
pub fn run(website: &Path, args: Args, config: &ReferenceConfig) -> Result<()> {
    let nav_file = website.join(&config.nav_file);
    if !nav_file.exists() {
        bail!("File not found: {}", nav_file.display());
    }

    let api_dir = args.api_dir.unwrap_or_else(|| website.join(&config.api_dir));

    if args.skip_generate {
        tracing::info!("Skipping {}", config.generator);
    } else {
        let generator_config = args
            .generator_config
            .unwrap_or_else(|| website.to_path_buf());
        tracing::info!("Running {}...", config.generator);
        run_generator(&config.generator, &generator_config)?;
    }

    tracing::info!("Converting MD files to MDX...");
    let report = convert_md_to_mdx(&api_dir)?;
    tracing::info!("Converted {} files", report.len());

    let pages = mdx_pages(&api_dir)
        .with_context(|| format!("Failed to list pages under {}", api_dir.display()))?;
    let nav = build_nav(&pages, &config.page_prefix);

    let missing = if args.strict || config.strict {
        MissingSection::Fail
    } else {
        MissingSection::Warn
    };

    match update_nav_file(&nav_file, &config.section, &nav, missing) {
        Ok(UpdateOutcome::Replaced { .. }) => {
            tracing::info!("Updated '{}' with {} pages", config.section, pages.len());
        }
        Ok(UpdateOutcome::SectionMissing) => {}
        Err(e @ NavError::SectionNotFound(_)) => return Err(e.into()),
        Err(e) => tracing::error!("Error updating {}: {}", nav_file.display(), e),
    }

    tracing::info!("API reference processing complete!");
    Ok(())
}
