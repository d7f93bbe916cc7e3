//! subtok command-line entry point

use anyhow::Result;
use clap::Parser;
use subtok_cli::commands::{Commands, GlobalArgs};
use subtok_cli::logging;

/// Approximate LLM token counting and truncation without a vocabulary
#[derive(Debug, Parser)]
#[command(name = "subtok", version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.global.verbose, cli.global.quiet)?;
    log::debug!("Arguments: {:?}", cli);

    cli.command.execute(&cli.global)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["subtok", "count", "-t", "hi", "-vv", "-q"]).unwrap();
        assert_eq!(cli.global.verbose, 2);
        assert!(cli.global.quiet);
    }
}
