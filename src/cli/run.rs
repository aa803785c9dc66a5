//! Run command implementation

use super::open_source;
use crate::config::{Config, ReportFormat};
use crate::pipeline::{RecordPipeline, WordReader};
use anyhow::Context;
use clap::Args;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct RunArgs {
    /// Security list to load
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Where to write the edited list
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Average report format
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,

    /// Do not print the ticker prompt
    #[arg(long)]
    pub no_prompt: bool,
}

impl RunArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let input = self.input.as_ref().unwrap_or(&config.input.path);
        let output = self.output.as_ref().unwrap_or(&config.output.path);

        let source = open_source(input)?;
        let file = File::create(output)
            .with_context(|| format!("Failed to create {}", output.display()))?;
        let mut sink = BufWriter::new(file);

        let mut tokens = WordReader::new(io::stdin().lock());
        let mut pipeline = RecordPipeline::new(io::stdout().lock())
            .with_format(self.format.unwrap_or(config.report.format))
            .with_prompt(config.lookup.prompt && !self.no_prompt);

        let summary = pipeline.run(source, &mut tokens, &mut sink)?;
        tracing::info!(
            loaded = summary.loaded,
            skipped = summary.skipped,
            removed = summary.removed,
            lookups = summary.lookups,
            emitted = summary.emitted,
            output = %output.display(),
            "Run complete"
        );
        Ok(())
    }
}
