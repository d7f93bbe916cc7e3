//! Token budgets: counting and truncation
//!
//! Both operations are thin consumers of the token stream. Truncation keeps a
//! prefix of whole tokens; since tokens are contiguous slices, the prefix is a
//! slice of the input ending where the last kept token ends.

use crate::segmenter::Segmenter;
use serde::Serialize;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Result of truncating text to a token budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Truncation<'a> {
    /// The kept prefix of the input
    #[serde(rename = "truncated_text")]
    pub text: &'a str,
    /// Number of tokens in `text`
    #[serde(rename = "truncated_token_count")]
    pub token_count: usize,
}

impl Segmenter {
    /// Number of tokens in `text`
    pub fn count(&self, text: &str) -> usize {
        self.tokens(text).count()
    }

    /// Keep at most `max_tokens` leading tokens of `text`.
    ///
    /// When the text already fits, it is returned whole with its real count.
    pub fn truncate<'a>(&self, text: &'a str, max_tokens: usize) -> Truncation<'a> {
        let mut tokens = self.tokens(text);
        let token_count = tokens.by_ref().take(max_tokens).count();
        let end = tokens.offset();
        log::trace!(
            "truncated {} bytes to {} bytes ({} tokens)",
            text.len(),
            end,
            token_count
        );
        Truncation {
            text: &text[..end],
            token_count,
        }
    }

    /// Count tokens of many texts, in parallel when the `parallel` feature is on
    #[cfg(feature = "parallel")]
    pub fn count_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<usize> {
        texts.par_iter().map(|t| self.count(t.as_ref())).collect()
    }

    /// Count tokens of many texts
    #[cfg(not(feature = "parallel"))]
    pub fn count_batch<S: AsRef<str>>(&self, texts: &[S]) -> Vec<usize> {
        texts.iter().map(|t| self.count(t.as_ref())).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_count_matches_tokenize() {
        let segmenter = Segmenter::default();
        for text in ["", "Hello, world!", "aaaaaaaaaaa", "\n\n\t  x"] {
            assert_eq!(segmenter.count(text), segmenter.tokenize(text).len());
        }
    }

    #[test]
    fn test_truncate_to_two() {
        let result = Segmenter::default().truncate("Hello, world!", 2);
        assert_eq!(result.text, "Hello,");
        assert_eq!(result.token_count, 2);
    }

    #[test]
    fn test_truncate_at_or_beyond_total() {
        let segmenter = Segmenter::default();
        for max in [4, 5, usize::MAX] {
            let result = segmenter.truncate("Hello, world!", max);
            assert_eq!(result.text, "Hello, world!");
            assert_eq!(result.token_count, 4);
        }
    }

    #[test]
    fn test_truncate_to_zero() {
        let result = Segmenter::default().truncate("Hello, world!", 0);
        assert_eq!(result.text, "");
        assert_eq!(result.token_count, 0);
    }

    #[test]
    fn test_truncate_empty_text() {
        let result = Segmenter::default().truncate("", 3);
        assert_eq!(result.text, "");
        assert_eq!(result.token_count, 0);
    }

    #[test]
    fn test_truncation_serializes_with_wire_names() {
        let result = Segmenter::default().truncate("Hello, world!", 2);
        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"truncated_text":"Hello,","truncated_token_count":2}"#
        );
    }

    #[test]
    fn test_count_batch_preserves_order() {
        let segmenter = Segmenter::default();
        let texts = vec!["123456".to_string(), String::new(), "foo bar".to_string()];
        assert_eq!(segmenter.count_batch(&texts), vec![6, 0, 2]);
    }
}
