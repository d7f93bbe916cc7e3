//! Count command implementation

use crate::commands::GlobalArgs;
use crate::config::load_segmenter;
use crate::input::{FileReader, InputArgs, InputSource};
use crate::output::open_output;
use crate::progress::ProgressReporter;
use anyhow::Result;
use clap::Args;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::path::PathBuf;
use subtok_core::Segmenter;

/// Arguments for the count command
#[derive(Debug, Args)]
pub struct CountArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: CountFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Output formats for counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum CountFormat {
    /// `count<TAB>source` lines, plus a total for several inputs
    Text,
    /// JSON report
    Json,
}

/// Count for one input
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputCount {
    /// Where the text came from
    pub source: String,
    /// Approximate token count
    pub tokens: usize,
    /// Size of the decoded text in bytes
    pub bytes: usize,
}

/// Counts for all inputs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountReport {
    /// Per-input counts in input order
    pub inputs: Vec<InputCount>,
    /// Sum of all token counts
    pub total: usize,
}

impl CountReport {
    fn new(inputs: Vec<InputCount>) -> Self {
        let total = inputs.iter().map(|c| c.tokens).sum();
        Self { inputs, total }
    }
}

impl CountArgs {
    /// Execute the count command
    pub fn execute(&self, global: &GlobalArgs) -> Result<()> {
        let segmenter = load_segmenter(global.config.as_deref())?;
        let report = self.collect(&segmenter, global.quiet)?;
        log::info!(
            "Counted {} tokens across {} input(s)",
            report.total,
            report.inputs.len()
        );

        let mut writer = open_output(self.output.as_deref())?;
        match self.format {
            CountFormat::Text => {
                for count in &report.inputs {
                    writeln!(writer, "{}\t{}", count.tokens, count.source)?;
                }
                if report.inputs.len() > 1 {
                    writeln!(writer, "{}\ttotal", report.total)?;
                }
            }
            CountFormat::Json => {
                serde_json::to_writer_pretty(&mut writer, &report)?;
                writeln!(writer)?;
            }
        }
        writer.flush()?;
        Ok(())
    }

    /// Count every input. Files are read and counted in parallel.
    pub fn collect(&self, segmenter: &Segmenter, quiet: bool) -> Result<CountReport> {
        let counts = match self.input.source()? {
            InputSource::Files(paths) => {
                let mut progress = ProgressReporter::new(quiet);
                progress.init_files(paths.len() as u64);

                let counts = paths
                    .par_iter()
                    .map(|path| {
                        let text = FileReader::read_text(path)?;
                        let source = path.display().to_string();
                        let count = InputCount {
                            tokens: segmenter.count(&text),
                            bytes: text.len(),
                            source,
                        };
                        progress.file_completed(&count.source);
                        Ok(count)
                    })
                    .collect::<Result<Vec<_>>>();

                progress.finish();
                counts?
            }
            source => source
                .into_documents()?
                .into_iter()
                .map(|doc| InputCount {
                    tokens: segmenter.count(&doc.text),
                    bytes: doc.text.len(),
                    source: doc.name,
                })
                .collect(),
        };

        Ok(CountReport::new(counts))
    }
}
