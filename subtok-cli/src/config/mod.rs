//! Segmenter configuration for CLI commands

use crate::error::CliError;
use anyhow::Result;
use std::path::Path;
use subtok_core::{Segmenter, SegmenterConfig};

/// Load the configuration at `path`, or the defaults when no path is given
pub fn load_config(path: Option<&Path>) -> Result<SegmenterConfig> {
    match path {
        Some(path) => {
            if !path.exists() {
                return Err(CliError::FileNotFound(path.display().to_string()).into());
            }
            let config = SegmenterConfig::from_file(path)
                .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
            log::info!("Using segmenter configuration from {}", path.display());
            Ok(config)
        }
        None => Ok(SegmenterConfig::default()),
    }
}

/// Build a segmenter from an optional configuration file
pub fn load_segmenter(path: Option<&Path>) -> Result<Segmenter> {
    let config = load_config(path)?;
    let segmenter =
        Segmenter::new(config).map_err(|e| CliError::ConfigError(e.to_string()))?;
    Ok(segmenter)
}
