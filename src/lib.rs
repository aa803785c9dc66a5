//! secstore: sorted security list tooling
//!
//! This library provides the core components for:
//! - Decoding ` TICKER, TYPE, $PRICE` security lists
//! - A ticker-ordered record store with lookup, removal and aggregation
//! - Common stock and ADR average reporting
//! - ADR purge and edited-list output
//! - Interactive ticker lookup over injected input/output ports

pub mod cli;
pub mod codec;
pub mod config;
pub mod pipeline;
pub mod store;
pub mod telemetry;
