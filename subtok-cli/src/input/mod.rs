//! Input handling module
//!
//! Commands read from literal text, files and glob patterns, or stdin, in that
//! order of precedence.

pub mod file_reader;
pub mod glob_resolver;

pub use file_reader::FileReader;
pub use glob_resolver::resolve_patterns;

use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

/// Input selection shared by the processing commands
#[derive(Debug, Clone, Default, Args)]
pub struct InputArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", conflicts_with = "text")]
    pub input: Vec<String>,

    /// Literal text to process instead of files
    #[arg(short, long, value_name = "TEXT")]
    pub text: Option<String>,
}

/// Where a document came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Text given on the command line
    Text(String),
    /// Files resolved from patterns
    Files(Vec<PathBuf>),
    /// Standard input
    Stdin,
}

/// A named text to process
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Display name (file path, `<text>` or `<stdin>`)
    pub name: String,
    /// Decoded contents
    pub text: String,
}

impl InputArgs {
    /// Decide the input source without reading anything
    pub fn source(&self) -> Result<InputSource> {
        if let Some(text) = &self.text {
            return Ok(InputSource::Text(text.clone()));
        }
        if self.input.is_empty() {
            return Ok(InputSource::Stdin);
        }
        Ok(InputSource::Files(resolve_patterns(&self.input)?))
    }

    /// Read every selected document
    pub fn documents(&self) -> Result<Vec<Document>> {
        self.source()?.into_documents()
    }
}

impl InputSource {
    /// Read the documents this source names
    pub fn into_documents(self) -> Result<Vec<Document>> {
        match self {
            InputSource::Text(text) => Ok(vec![Document {
                name: "<text>".to_string(),
                text,
            }]),
            InputSource::Stdin => Ok(vec![Document {
                name: "<stdin>".to_string(),
                text: FileReader::read_stdin()?,
            }]),
            InputSource::Files(paths) => paths
                .iter()
                .map(|path| {
                    Ok(Document {
                        name: path.display().to_string(),
                        text: FileReader::read_text(path)?,
                    })
                })
                .collect(),
        }
    }
}
