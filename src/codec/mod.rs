//! Codec module
//!
//! Decoding of the security list and formatting of the edited list

mod decoder;
mod format;

pub use decoder::{parse_price, parse_record, RecordDecoder};
pub use format::{format_record, write_records, OUTPUT_HEADER};
