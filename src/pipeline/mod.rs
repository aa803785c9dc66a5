//! Record pipeline module
//!
//! Sequences one run over the store:
//! - load decoded records
//! - report common stock and ADR averages
//! - purge ADR records
//! - serve interactive ticker lookups
//! - emit the remaining records

mod ports;
mod report;
mod runner;
mod types;

pub use ports::{TokenSource, WordReader};
pub use report::{AverageReport, TypeAverage};
pub use runner::RecordPipeline;
pub use types::{PipelineError, RunSummary, QUIT_SENTINEL};
