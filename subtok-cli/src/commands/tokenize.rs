//! Tokenize command implementation

use crate::commands::GlobalArgs;
use crate::config::load_segmenter;
use crate::input::InputArgs;
use crate::output::{formatter_for, open_output, OutputFormat};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let segmenter = load_segmenter(global.config.as_deref())?;
        let documents = self.input.documents()?;
        log::info!("Tokenizing {} input(s)", documents.len());

        let writer = open_output(self.output.as_deref())?;
        let mut formatter = formatter_for(self.format, writer, documents.len());

        for document in &documents {
            formatter.begin_document(&document.name)?;
            for token in segmenter.tagged_tokens(&document.text) {
                formatter.format_token(&token)?;
            }
        }

        formatter.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_tokenize_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let output = temp_dir.path().join("tokens.txt");

        let args = TokenizeArgs {
            input: InputArgs {
                input: Vec::new(),
                text: Some("[]{}()".to_string()),
            },
            format: OutputFormat::Text,
            output: Some(output.clone()),
        };
        args.execute(&GlobalArgs::default()).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        assert_eq!(content, "\"[]\"\n\"{}\"\n\"()\"\n");
    }
}
