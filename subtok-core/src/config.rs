//! Segmenter configuration
//!
//! The chunk sizes used by the rule table are heuristics tuned against a
//! particular model's subword statistics. They are exposed here so they can be
//! retuned without touching the scan algorithm. The TOML schema mirrors the
//! struct fields one to one; see `configs/default.toml`.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Embedded copy of the default configuration file
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../configs/default.toml");

/// Abbreviations emitted as single tokens unless configured otherwise
pub const DEFAULT_ABBREVIATIONS: [&str; 12] = [
    "pdf", "png", "http", "https", "rfp", "www", "PDF", "PNG", "HTTP", "HTTPS", "RFP", "WWW",
];

/// Tunable bounds for the segmentation rules
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SegmenterConfig {
    /// Maximum consonant/vowel groups in one word-shape token
    pub word_groups: usize,
    /// Maximum consonants on each side of a group's vowels
    pub consonant_run: usize,
    /// Maximum vowels in one group
    pub vowel_run: usize,
    /// Maximum lowercase letters after a titlecase capital
    pub titlecase_tail: usize,
    /// Maximum consonants in a stand-alone cluster token
    pub consonant_cluster: usize,
    /// Maximum characters per non-Latin chunk
    pub non_latin_run: usize,
    /// Maximum characters per repeated-special token
    pub repeat_run: usize,
    /// Maximum symbols per punctuation token
    pub symbol_run: usize,
    /// Case-sensitive literals matched whole before word shapes
    pub abbreviations: Vec<String>,
}

impl Default for SegmenterConfig {
    fn default() -> Self {
        Self {
            word_groups: 3,
            consonant_run: 3,
            vowel_run: 3,
            titlecase_tail: 8,
            consonant_cluster: 2,
            non_latin_run: 5,
            repeat_run: 16,
            symbol_run: 3,
            abbreviations: DEFAULT_ABBREVIATIONS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

impl SegmenterConfig {
    /// Create a builder starting from the defaults
    pub fn builder() -> SegmenterConfigBuilder {
        SegmenterConfigBuilder::default()
    }

    /// Parse and validate a TOML document
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        log::debug!("loading segmenter config from {}", path.display());
        Self::from_toml_str(&source)
    }

    /// Render as TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check every bound and abbreviation
    pub fn validate(&self) -> Result<()> {
        let bounds = [
            ("word_groups", self.word_groups, 1),
            ("vowel_run", self.vowel_run, 1),
            ("titlecase_tail", self.titlecase_tail, 1),
            ("consonant_cluster", self.consonant_cluster, 1),
            ("non_latin_run", self.non_latin_run, 1),
            ("repeat_run", self.repeat_run, 2),
            ("symbol_run", self.symbol_run, 1),
        ];
        for (field, value, min) in bounds {
            if value < min {
                return Err(ConfigError::InvalidBound { field, value, min });
            }
        }

        for literal in &self.abbreviations {
            if literal.is_empty() {
                return Err(ConfigError::InvalidAbbreviation {
                    literal: literal.clone(),
                    reason: "literal is empty",
                });
            }
            if literal.chars().any(char::is_whitespace) {
                return Err(ConfigError::InvalidAbbreviation {
                    literal: literal.clone(),
                    reason: "literal contains whitespace",
                });
            }
        }

        Ok(())
    }
}

/// Fluent builder for [`SegmenterConfig`]
#[derive(Debug, Default)]
pub struct SegmenterConfigBuilder {
    config: SegmenterConfig,
}

impl SegmenterConfigBuilder {
    /// Set the number of groups per word-shape token
    pub fn word_groups(mut self, groups: usize) -> Self {
        self.config.word_groups = groups;
        self
    }

    /// Set the consonant bound on each side of a group
    pub fn consonant_run(mut self, run: usize) -> Self {
        self.config.consonant_run = run;
        self
    }

    /// Set the vowel bound of a group
    pub fn vowel_run(mut self, run: usize) -> Self {
        self.config.vowel_run = run;
        self
    }

    /// Set the titlecase tail bound
    pub fn titlecase_tail(mut self, tail: usize) -> Self {
        self.config.titlecase_tail = tail;
        self
    }

    /// Set the consonant cluster bound
    pub fn consonant_cluster(mut self, run: usize) -> Self {
        self.config.consonant_cluster = run;
        self
    }

    /// Set the non-Latin chunk size
    pub fn non_latin_run(mut self, run: usize) -> Self {
        self.config.non_latin_run = run;
        self
    }

    /// Set the repeated-special chunk size
    pub fn repeat_run(mut self, run: usize) -> Self {
        self.config.repeat_run = run;
        self
    }

    /// Set the symbol run bound
    pub fn symbol_run(mut self, run: usize) -> Self {
        self.config.symbol_run = run;
        self
    }

    /// Replace the abbreviation list
    pub fn abbreviations<I, S>(mut self, literals: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.abbreviations = literals.into_iter().map(Into::into).collect();
        self
    }

    /// Add one abbreviation to the list
    pub fn abbreviation(mut self, literal: impl Into<String>) -> Self {
        self.config.abbreviations.push(literal.into());
        self
    }

    /// Validate and return the configuration
    pub fn build(self) -> Result<SegmenterConfig> {
        self.config.validate()?;
        Ok(self.config)
    }
}
