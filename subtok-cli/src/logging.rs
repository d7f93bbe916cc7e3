//! Logger initialisation

use anyhow::{Context, Result};

/// Map a `-v` count to a default filter level
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialise `env_logger` unless `quiet` is set.
///
/// `RUST_LOG` still takes precedence over the verbosity flags.
pub fn init_logging(verbose: u8, quiet: bool) -> Result<()> {
    if quiet {
        return Ok(());
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level_for(verbose)))
        .try_init()
        .context("Failed to initialise logger")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for_verbosity() {
        assert_eq!(level_for(0), "warn");
        assert_eq!(level_for(1), "info");
        assert_eq!(level_for(2), "debug");
        assert_eq!(level_for(3), "trace");
        assert_eq!(level_for(u8::MAX), "trace");
    }

    #[test]
    fn test_quiet_skips_initialisation() {
        assert!(init_logging(3, true).is_ok());
    }
}
