//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

pub mod count;
pub mod generate_config;
pub mod tokenize;
pub mod truncate;
pub mod validate;

/// Flags accepted by every command
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Segmenter configuration file (TOML)
    #[arg(short, long, value_name = "FILE", global = true, env = "SUBTOK_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress progress output and logging
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split text into approximate tokens
    Tokenize(tokenize::TokenizeArgs),

    /// Count approximate tokens
    Count(count::CountArgs),

    /// Keep only the leading tokens that fit a budget
    Truncate(truncate::TruncateArgs),

    /// Write the default segmenter configuration to a file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Check a segmenter configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        match self {
            Commands::Tokenize(args) => args.execute(global),
            Commands::Count(args) => args.execute(global),
            Commands::Truncate(args) => args.execute(global),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(global),
        }
    }
}
