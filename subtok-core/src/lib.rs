//! Vocabulary-free approximation of a subword tokenizer
//!
//! This crate estimates how a large language model would split text into
//! tokens without loading any vocabulary or merge table. It is meant for
//! budgeting: counting tokens before a request and trimming text to fit a
//! context window.
//!
//! # Architecture
//!
//! - **Tables**: immutable character classes (vowels, consonants, symbols)
//! - **Rules**: an ordered table of bounded matchers, first match wins
//! - **Segmenter**: a left-to-right scan applying the rule table
//! - **Budget**: counting and truncation on top of the scan
//!
//! The scan always produces a lossless partition: joining the tokens gives
//! back the input exactly, and every token is non-empty.
//!
//! # Example
//!
//! ```rust
//! use subtok_core::{token_count, tokenize, truncate_to_max_tokens};
//!
//! assert_eq!(tokenize("123456"), vec!["1", "2", "3", "4", "5", "6"]);
//! assert_eq!(token_count("Hello, world!"), 4);
//!
//! let truncated = truncate_to_max_tokens("Hello, world!", 2);
//! assert_eq!(truncated.text, "Hello,");
//! assert_eq!(truncated.token_count, 2);
//! ```

#![warn(missing_docs)]

pub mod budget;
pub mod config;
pub mod error;
pub mod rules;
pub mod segmenter;
pub mod tables;

pub use budget::Truncation;
pub use config::{SegmenterConfig, SegmenterConfigBuilder};
pub use error::{ConfigError, Result};
pub use rules::Rule;
pub use segmenter::{Segmenter, TaggedToken, TaggedTokens, Tokens};

/// Split `text` with the default segmenter
pub fn tokenize(text: &str) -> Vec<&str> {
    Segmenter::shared().tokenize(text)
}

/// Count tokens of `text` with the default segmenter
pub fn token_count(text: &str) -> usize {
    Segmenter::shared().count(text)
}

/// Keep at most `max_tokens` leading tokens of `text` with the default segmenter
pub fn truncate_to_max_tokens(text: &str, max_tokens: usize) -> Truncation<'_> {
    Segmenter::shared().truncate(text, max_tokens)
}
