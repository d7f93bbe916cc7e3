//! Configuration error types
//!
//! Segmentation itself cannot fail. Errors only arise while building a
//! segmenter from a configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a [`SegmenterConfig`](crate::SegmenterConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A numeric bound is below its minimum
    #[error("invalid bound `{field}` = {value} (minimum is {min})")]
    InvalidBound {
        /// Name of the configuration field
        field: &'static str,
        /// The rejected value
        value: usize,
        /// Smallest accepted value
        min: usize,
    },

    /// An abbreviation literal cannot be used as a token
    #[error("invalid abbreviation {literal:?}: {reason}")]
    InvalidAbbreviation {
        /// The rejected literal
        literal: String,
        /// Why it was rejected
        reason: &'static str,
    },

    /// TOML could not be parsed into a configuration
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] toml::de::Error),

    /// Configuration could not be rendered as TOML
    #[error("failed to serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Configuration file could not be read
    #[error("failed to read configuration file {path}: {source}")]
    Io {
        /// Path of the file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}

/// Result type for configuration operations
pub type Result<T> = std::result::Result<T, ConfigError>;
