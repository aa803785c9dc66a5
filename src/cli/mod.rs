//! CLI interface for secstore
//!
//! Provides subcommands for:
//! - `run`: Full pipeline with interactive lookup
//! - `lookup`: Look up tickers without modifying anything
//! - `report`: Print per-type averages
//! - `config`: Show effective configuration

mod lookup;
mod report;
mod run;

pub use lookup::LookupArgs;
pub use report::ReportArgs;
pub use run::RunArgs;

use crate::codec::RecordDecoder;
use crate::pipeline::PipelineError;
use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Exit status when the security list cannot be opened
pub const EXIT_SOURCE_UNAVAILABLE: u8 = 2;
/// Exit status for any other failure
pub const EXIT_FAILURE: u8 = 1;

#[derive(Parser, Debug)]
#[command(name = "secstore")]
#[command(about = "Sorted security list: averages, ADR purge and ticker lookup")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    pub config: String,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load, report, purge ADRs, look up tickers and write the edited list
    Run(RunArgs),
    /// Look up tickers in the security list
    Lookup(LookupArgs),
    /// Print common stock and ADR averages
    Report(ReportArgs),
    /// Show effective configuration
    Config,
}

/// Open the security list for decoding
pub fn open_source(path: &Path) -> Result<RecordDecoder<BufReader<File>>, PipelineError> {
    let file = File::open(path).map_err(|source| PipelineError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(path = %path.display(), "Opened security list");
    Ok(RecordDecoder::new(BufReader::new(file)))
}

/// Map a failed command to the process exit status
pub fn exit_status(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<PipelineError>() {
        Some(PipelineError::SourceUnavailable { .. }) => EXIT_SOURCE_UNAVAILABLE,
        _ => EXIT_FAILURE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_open_source_missing() {
        let result = open_source(Path::new("/nonexistent/StockList.csv"));
        assert!(matches!(
            result,
            Err(PipelineError::SourceUnavailable { .. })
        ));
    }

    #[test]
    fn test_open_source_decodes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Ticker, Type, Price").unwrap();
        writeln!(file, " IBM, Common Stock, $140").unwrap();

        let mut decoder = open_source(file.path()).unwrap();
        let record = decoder.decode().unwrap().unwrap();
        assert_eq!(record.ticker(), "IBM");
    }

    #[test]
    fn test_exit_status_source_unavailable() {
        let Err(err) = open_source(Path::new("/nonexistent/StockList.csv")) else {
            panic!("missing file opened");
        };
        let err = anyhow::Error::from(err);
        assert_eq!(exit_status(&err), EXIT_SOURCE_UNAVAILABLE);
    }

    #[test]
    fn test_exit_status_other_failure() {
        let err = anyhow::anyhow!("boom");
        assert_eq!(exit_status(&err), EXIT_FAILURE);
    }

    #[test]
    fn test_cli_parse_run() {
        let cli = Cli::try_parse_from([
            "secstore", "-c", "alt.toml", "run", "--input", "in.csv", "--format", "json",
        ])
        .unwrap();
        assert_eq!(cli.config, "alt.toml");
        match cli.command {
            Commands::Run(args) => {
                assert_eq!(args.input.unwrap(), Path::new("in.csv"));
                assert!(args.output.is_none());
                assert_eq!(args.format, Some(crate::config::ReportFormat::Json));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_lookup_requires_ticker() {
        assert!(Cli::try_parse_from(["secstore", "lookup"]).is_err());
        assert!(Cli::try_parse_from(["secstore", "lookup", "AAPL", "MSFT"]).is_ok());
    }
}
