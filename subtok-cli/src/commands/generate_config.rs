//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;
use subtok_core::config::DEFAULT_CONFIG_TOML;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Overwrite an existing file
    #[arg(long)]
    pub force: bool,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        if self.output.exists() && !self.force {
            anyhow::bail!(
                "{} already exists (use --force to overwrite)",
                self.output.display()
            );
        }

        std::fs::write(&self.output, DEFAULT_CONFIG_TOML)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!(
            "✓ Default configuration written to {}",
            self.output.display()
        );
        println!();
        println!("Next steps:");
        println!("1. Edit the bounds or abbreviations");
        println!("2. Validate your configuration:");
        println!("   subtok validate {}", self.output.display());
        println!("3. Use it for counting:");
        println!(
            "   subtok count -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}
