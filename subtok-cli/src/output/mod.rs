//! Output formatting module

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use subtok_core::TaggedToken;

/// Trait for token stream formatters
pub trait TokenFormatter: Send + Sync {
    /// Start a new input document
    fn begin_document(&mut self, name: &str) -> Result<()>;

    /// Format and output a single token
    fn format_token(&mut self, token: &TaggedToken<'_>) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Plain text, one quoted token per line
    Text,
    /// JSON with offsets and rule names
    Json,
    /// Markdown numbered list
    Markdown,
}

/// Writer for command output
pub type OutputWriter = Box<dyn Write + Send + Sync>;

/// Open `path` for writing, or stdout when no path is given
pub fn open_output(path: Option<&Path>) -> Result<OutputWriter> {
    match path {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(io::stdout())),
    }
}

/// Build the formatter for `format`; `documents` is how many inputs follow
pub fn formatter_for(
    format: OutputFormat,
    writer: OutputWriter,
    documents: usize,
) -> Box<dyn TokenFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer).with_headers(documents > 1)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}
