//! subtok CLI library
//!
//! This library provides the command-line interface for the subtok
//! approximate tokenizer.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};
