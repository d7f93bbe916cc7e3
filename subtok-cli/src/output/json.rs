//! JSON output formatter

use super::TokenFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::io::Write;
use subtok_core::TaggedToken;

/// JSON formatter - outputs documents and their tokens as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    documents: Vec<DocumentData>,
}

/// Tokens of one input document
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentData {
    /// Where the text came from
    pub source: String,
    /// Number of tokens
    pub token_count: usize,
    /// The tokens in order
    pub tokens: Vec<TokenData>,
}

/// Data structure for one token
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenData {
    /// The token text
    pub text: String,
    /// Byte offset in the original text
    pub offset: usize,
    /// Byte length of the token
    pub length: usize,
    /// Name of the rule that produced the token
    pub rule: String,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            documents: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> TokenFormatter for JsonFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        self.documents.push(DocumentData {
            source: name.to_string(),
            token_count: 0,
            tokens: Vec::new(),
        });
        Ok(())
    }

    fn format_token(&mut self, token: &TaggedToken<'_>) -> Result<()> {
        if self.documents.is_empty() {
            self.begin_document("<text>")?;
        }
        if let Some(document) = self.documents.last_mut() {
            document.token_count += 1;
            document.tokens.push(TokenData {
                text: token.text.to_string(),
                offset: token.offset,
                length: token.text.len(),
                rule: token.rule.name().to_string(),
            });
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        serde_json::to_writer_pretty(&mut self.writer, &self.documents)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
