//! Invocation of the external markdown generator.

use std::io;
use std::path::Path;
use std::process::Command;

/// Errors from running the generator.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    #[error("{tool} not found. Please install it with: pip install {tool}")]
    ExternalToolMissing { tool: String },

    #[error("Error running {tool}: {stderr}")]
    ExternalToolFailed { tool: String, stderr: String },

    #[error("Failed to start {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: io::Error,
    },
}

/// Run `tool` against `config`.
///
/// A directory `config` becomes the working directory, where the tool finds
/// its own config file; anything else is passed as the single argument.
pub fn run_generator(tool: &str, config: &Path) -> Result<(), GeneratorError> {
    let mut cmd = Command::new(tool);
    if config.is_dir() {
        cmd.current_dir(config);
    } else {
        cmd.arg(config);
    }

    let output = cmd.output().map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => GeneratorError::ExternalToolMissing {
            tool: tool.to_string(),
        },
        _ => GeneratorError::Spawn {
            tool: tool.to_string(),
            source,
        },
    })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        return Err(GeneratorError::ExternalToolFailed {
            tool: tool.to_string(),
            stderr,
        });
    }

    tracing::info!("Successfully ran {} with config: {}", tool, config.display());
    Ok(())
}
