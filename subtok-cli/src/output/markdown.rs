//! Markdown output formatter

use super::TokenFormatter;
use anyhow::Result;
use std::io::Write;
use subtok_core::TaggedToken;

/// Markdown formatter - outputs tokens as a numbered list per document
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    documents: usize,
    document_tokens: usize,
    total_tokens: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: 0,
            document_tokens: 0,
            total_tokens: 0,
        }
    }
}

impl<W: Write + Send + Sync> TokenFormatter for MarkdownFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        if self.documents > 0 {
            writeln!(self.writer)?;
        }
        writeln!(self.writer, "## {name}")?;
        writeln!(self.writer)?;
        self.documents += 1;
        self.document_tokens = 0;
        Ok(())
    }

    fn format_token(&mut self, token: &TaggedToken<'_>) -> Result<()> {
        self.document_tokens += 1;
        self.total_tokens += 1;
        writeln!(
            self.writer,
            "{}. `{:?}` ({})",
            self.document_tokens, token.text, token.rule
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total tokens: {}*", self.total_tokens)?;
        self.writer.flush()?;
        Ok(())
    }
}
