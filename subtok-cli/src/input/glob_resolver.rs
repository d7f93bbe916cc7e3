//! File pattern resolution using glob

use crate::error::CliError;
use anyhow::Result;
use glob::glob;
use std::path::PathBuf;

/// Resolve file patterns to a sorted, de-duplicated list of files
pub fn resolve_patterns(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let paths = glob(pattern).map_err(|_| CliError::InvalidPattern(pattern.clone()))?;

        let before = files.len();
        for path in paths.flatten() {
            if path.is_file() {
                files.push(path);
            }
        }
        if files.len() == before {
            log::warn!("Pattern matched no files: {pattern}");
        }
    }

    if files.is_empty() {
        return Err(CliError::FileNotFound(patterns.join(", ")).into());
    }

    files.sort();
    files.dedup();
    log::debug!("Resolved {} input file(s)", files.len());

    Ok(files)
}
