//! Plain text output formatter

use super::TokenFormatter;
use anyhow::Result;
use std::io::Write;
use subtok_core::TaggedToken;

/// Plain text formatter - outputs one quoted token per line
///
/// Tokens are written with Rust string escaping so whitespace tokens stay
/// visible.
pub struct TextFormatter<W: Write> {
    writer: W,
    headers: bool,
    documents: usize,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            headers: false,
            documents: 0,
        }
    }

    /// Print a `==> name <==` line before each document
    pub fn with_headers(mut self, headers: bool) -> Self {
        self.headers = headers;
        self
    }
}

impl<W: Write + Send + Sync> TokenFormatter for TextFormatter<W> {
    fn begin_document(&mut self, name: &str) -> Result<()> {
        if self.headers {
            if self.documents > 0 {
                writeln!(self.writer)?;
            }
            writeln!(self.writer, "==> {name} <==")?;
        }
        self.documents += 1;
        Ok(())
    }

    fn format_token(&mut self, token: &TaggedToken<'_>) -> Result<()> {
        writeln!(self.writer, "{:?}", token.text)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::test_support::SharedBuffer;
    use subtok_core::Segmenter;

    fn render(headers: bool, docs: &[(&str, &str)]) -> String {
        let buffer = SharedBuffer::default();
        let mut formatter = TextFormatter::new(buffer.clone()).with_headers(headers);
        let segmenter = Segmenter::default();
        for (name, text) in docs {
            formatter.begin_document(name).unwrap();
            for token in segmenter.tagged_tokens(text) {
                formatter.format_token(&token).unwrap();
            }
        }
        formatter.finish().unwrap();
        buffer.contents()
    }

    #[test]
    fn test_tokens_are_quoted() {
        assert_eq!(
            render(false, &[("<text>", "a\n bo")]),
            "\"a\"\n\"\\n\"\n\" bo\"\n"
        );
    }

    #[test]
    fn test_headers_between_documents() {
        let output = render(true, &[("one.txt", "x"), ("two.txt", "y")]);
        assert_eq!(
            output,
            "==> one.txt <==\n\"x\"\n\n==> two.txt <==\n\"y\"\n"
        );
    }
}
