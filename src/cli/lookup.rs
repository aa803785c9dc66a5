//! Lookup command implementation

use super::open_source;
use crate::config::Config;
use crate::pipeline::RecordPipeline;
use clap::Args;
use std::io;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct LookupArgs {
    /// Security list to load
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Tickers to look up
    #[arg(required = true)]
    pub tickers: Vec<String>,
}

impl LookupArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let input = self.input.as_ref().unwrap_or(&config.input.path);

        let mut pipeline = RecordPipeline::new(io::stdout().lock());
        let store = pipeline.load(open_source(input)?)?;

        let mut matches = 0;
        for ticker in &self.tickers {
            matches += pipeline.lookup(&store, ticker)?;
        }
        tracing::info!(tickers = self.tickers.len(), matches, "Lookup complete");
        Ok(())
    }
}
