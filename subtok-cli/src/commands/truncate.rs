//! Truncate command implementation

use crate::commands::GlobalArgs;
use crate::config::load_segmenter;
use crate::error::CliError;
use crate::input::InputArgs;
use crate::output::open_output;
use anyhow::Result;
use clap::Args;
use std::io::Write;
use std::path::PathBuf;

/// Arguments for the truncate command
#[derive(Debug, Args)]
pub struct TruncateArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Maximum number of tokens to keep; negative values keep nothing
    #[arg(short, long, value_name = "N", allow_negative_numbers = true)]
    pub max_tokens: i64,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: TruncateFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Output formats for truncation
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum TruncateFormat {
    /// The truncated text, byte for byte
    Text,
    /// `{"truncated_text": ..., "truncated_token_count": ...}`
    Json,
}

/// Convert a signed limit to a token budget, clamping negatives to zero
pub fn token_limit(max_tokens: i64) -> usize {
    if max_tokens <= 0 {
        0
    } else {
        usize::try_from(max_tokens).unwrap_or(usize::MAX)
    }
}

impl TruncateArgs {
    /// Execute the truncate command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let segmenter = load_segmenter(global.config.as_deref())?;
        let documents = self.input.documents()?;
        let document = match documents.as_slice() {
            [document] => document,
            _ => return Err(CliError::AmbiguousInput(documents.len()).into()),
        };

        let limit = token_limit(self.max_tokens);
        if self.max_tokens < 0 {
            log::warn!("Negative token limit {} treated as 0", self.max_tokens);
        }

        let truncation = segmenter.truncate(&document.text, limit);
        log::info!(
            "Kept {} token(s), {} of {} bytes from {}",
            truncation.token_count,
            truncation.text.len(),
            document.text.len(),
            document.name
        );

        let mut writer = open_output(self.output.as_deref())?;
        match self.format {
            TruncateFormat::Text => writer.write_all(truncation.text.as_bytes())?,
            TruncateFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, &truncation)?;
                writeln!(writer)?;
            }
        }
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_token_limit_clamps_negatives() {
        assert_eq!(token_limit(-5), 0);
        assert_eq!(token_limit(i64::MIN), 0);
        assert_eq!(token_limit(0), 0);
        assert_eq!(token_limit(7), 7);
    }

    #[test]
    fn test_truncate_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("out.txt");

        let args = TruncateArgs {
            input: InputArgs {
                input: Vec::new(),
                text: Some("Hello, world!".to_string()),
            },
            max_tokens: 2,
            format: TruncateFormat::Text,
            output: Some(output.clone()),
        };
        args.execute(&GlobalArgs::default()).unwrap();

        assert_eq!(std::fs::read_to_string(&output).unwrap(), "Hello,");
    }

    #[test]
    fn test_multiple_files_rejected() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("a.txt"), "a").unwrap();
        std::fs::write(temp_dir.path().join("b.txt"), "b").unwrap();

        let args = TruncateArgs {
            input: InputArgs {
                input: vec![format!("{}/*.txt", temp_dir.path().display())],
                text: None,
            },
            max_tokens: 1,
            format: TruncateFormat::Text,
            output: None,
        };
        let err = args.execute(&GlobalArgs::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::AmbiguousInput(2))
        ));
    }
}
