//! The segmentation engine
//!
//! [`Segmenter`] owns a rule table and scans text left to right, emitting one
//! token per rule match. Tokens are borrowed slices of the input, so the
//! partition is lossless by construction: consecutive tokens share their
//! boundaries and together span the whole input.

use crate::config::SegmenterConfig;
use crate::error::Result;
use crate::rules::{Rule, RuleSet};
use std::iter::FusedIterator;
use std::sync::OnceLock;

static SHARED: OnceLock<Segmenter> = OnceLock::new();

/// Approximate subword segmenter
///
/// Immutable after construction and `Send + Sync`, so one instance can serve
/// any number of threads.
///
/// # Example
///
/// ```rust
/// use subtok_core::Segmenter;
///
/// let segmenter = Segmenter::default();
/// let tokens = segmenter.tokenize("Hello, world!");
/// assert_eq!(tokens, vec!["Hello", ",", " world", "!"]);
/// ```
#[derive(Debug, Clone)]
pub struct Segmenter {
    rules: RuleSet,
}

/// A token together with where it came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedToken<'a> {
    /// The token text
    pub text: &'a str,
    /// Byte offset of the token in the input
    pub offset: usize,
    /// Rule that produced the token
    pub rule: Rule,
}

impl Segmenter {
    /// Build a segmenter after validating `config`
    pub fn new(config: SegmenterConfig) -> Result<Self> {
        config.validate()?;
        let rules = RuleSet::new(config);
        log::debug!(
            "segmenter ready: {} rules, {} abbreviations",
            Rule::ORDER.len(),
            rules.abbreviation_count()
        );
        Ok(Self { rules })
    }

    /// Process-wide segmenter with the default configuration
    pub fn shared() -> &'static Segmenter {
        SHARED.get_or_init(Segmenter::default)
    }

    /// Configuration in use
    pub fn config(&self) -> &SegmenterConfig {
        self.rules.config()
    }

    /// Lazily iterate over the tokens of `text`
    pub fn tokens<'s, 'a>(&'s self, text: &'a str) -> Tokens<'s, 'a> {
        Tokens {
            inner: self.tagged_tokens(text),
        }
    }

    /// Lazily iterate over tokens with their offsets and producing rules
    pub fn tagged_tokens<'s, 'a>(&'s self, text: &'a str) -> TaggedTokens<'s, 'a> {
        TaggedTokens {
            rules: &self.rules,
            text,
            cursor: 0,
        }
    }

    /// Split `text` into tokens
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let tokens: Vec<&'a str> = self.tokens(text).collect();
        log::trace!("scanned {} bytes into {} tokens", text.len(), tokens.len());
        tokens
    }
}

impl Default for Segmenter {
    fn default() -> Self {
        // The default configuration always validates; see config tests.
        Self {
            rules: RuleSet::new(SegmenterConfig::default()),
        }
    }
}

/// Iterator over tokens of a text
#[derive(Debug, Clone)]
pub struct Tokens<'s, 'a> {
    inner: TaggedTokens<'s, 'a>,
}

impl<'a> Iterator for Tokens<'_, 'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|token| token.text)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl FusedIterator for Tokens<'_, '_> {}

impl Tokens<'_, '_> {
    /// Byte offset of the next token, equal to the input length once exhausted
    pub fn offset(&self) -> usize {
        self.inner.cursor
    }
}

/// Iterator over [`TaggedToken`]s of a text
#[derive(Debug, Clone)]
pub struct TaggedTokens<'s, 'a> {
    rules: &'s RuleSet,
    text: &'a str,
    cursor: usize,
}

impl<'a> Iterator for TaggedTokens<'_, 'a> {
    type Item = TaggedToken<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.cursor..];
        if rest.is_empty() {
            return None;
        }
        let (rule, len) = self.rules.next_token(rest);
        let offset = self.cursor;
        self.cursor += len;
        Some(TaggedToken {
            text: &rest[..len],
            offset,
            rule,
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.text.len() - self.cursor;
        // tokens are never empty
        (usize::from(remaining > 0), Some(remaining))
    }
}

impl FusedIterator for TaggedTokens<'_, '_> {}
