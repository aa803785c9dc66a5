//! Pipeline types

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Token that ends interactive lookup
pub const QUIT_SENTINEL: &str = "!quit";

/// Pipeline errors
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The security list could not be opened
    #[error("File could not be opened: {}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The security list could not be read
    #[error("Failed to decode security list: {0}")]
    Decode(#[from] csv::Error),

    /// Console or output sink failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Averages could not be rendered as JSON
    #[error("Failed to render report: {0}")]
    Report(#[from] serde_json::Error),
}

/// Counts gathered over one pipeline run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// Records inserted during load
    pub loaded: usize,
    /// Rows the decoder dropped as incomplete
    pub skipped: usize,
    /// Records removed by the ADR purge
    pub removed: usize,
    /// Lookup attempts served, the sentinel included
    pub lookups: usize,
    /// Records written to the output sink
    pub emitted: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_unavailable_message() {
        let err = PipelineError::SourceUnavailable {
            path: PathBuf::from("StockList.csv"),
            source: io::Error::new(io::ErrorKind::NotFound, "missing"),
        };
        assert_eq!(err.to_string(), "File could not be opened: StockList.csv");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_io_error_conversion() {
        let err: PipelineError = io::Error::new(io::ErrorKind::BrokenPipe, "closed").into();
        assert!(matches!(err, PipelineError::Io(_)));
    }
}
