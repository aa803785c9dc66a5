//! Record store module
//!
//! Owned, ticker-ordered collection of security records

mod ordered;
mod types;

pub use ordered::{Aggregate, OrderedRecordStore};
pub use types::{Record, SecurityKind};
