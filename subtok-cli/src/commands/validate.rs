//! Validate command implementation

use crate::commands::GlobalArgs;
use crate::config::load_config;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Configuration file to validate (defaults to --config)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let path = self
            .file
            .as_deref()
            .or(global.config.as_deref())
            .ok_or_else(|| CliError::ConfigError("no configuration file given".to_string()))?;

        println!("Validating segmenter configuration: {}", path.display());

        match load_config(Some(path)) {
            Ok(config) => {
                println!("✓ Configuration is valid!");
                println!("  Word groups: {}", config.word_groups);
                println!("  Non-Latin chunk: {}", config.non_latin_run);
                println!("  Repeat run: {}", config.repeat_run);
                println!("  Abbreviations: {}", config.abbreviations.len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Configuration is invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_validate_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ok.toml");
        fs::write(&path, "symbol_run = 2\n").unwrap();

        let args = ValidateArgs { file: Some(path) };
        assert!(args.execute(&GlobalArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_falls_back_to_global_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("ok.toml");
        fs::write(&path, "").unwrap();

        let global = GlobalArgs {
            config: Some(path),
            ..GlobalArgs::default()
        };
        assert!(ValidateArgs { file: None }.execute(&global).is_ok());
    }

    #[test]
    fn test_validate_invalid_config() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "word_groups = 0\n").unwrap();

        let args = ValidateArgs { file: Some(path) };
        let err = args.execute(&GlobalArgs::default()).unwrap_err();
        assert!(err.to_string().contains("Validation failed"));
    }

    #[test]
    fn test_validate_without_any_file() {
        let err = ValidateArgs { file: None }
            .execute(&GlobalArgs::default())
            .unwrap_err();
        assert!(err.to_string().contains("no configuration file"));
    }
}
