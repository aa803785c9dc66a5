//! Report command implementation

use super::open_source;
use crate::config::{Config, ReportFormat};
use crate::pipeline::RecordPipeline;
use clap::Args;
use std::io;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Security list to load
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output format: text or json
    #[arg(long, value_enum)]
    pub format: Option<ReportFormat>,
}

impl ReportArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let input = self.input.as_ref().unwrap_or(&config.input.path);

        let mut pipeline = RecordPipeline::new(io::stdout().lock())
            .with_format(self.format.unwrap_or(config.report.format));
        let store = pipeline.load(open_source(input)?)?;
        pipeline.report_averages(&store)?;
        Ok(())
    }
}
