//! tredici-core
//!
//! Core types, traits, and pipeline stages shared across the tredici
//! ecosystem.
//!
//! - `types`: the canonical domain model (tickers, raw holdings, ownership
//!   records, the ten-column output table).
//! - `connector`: the `TrediciConnector` trait and capability provider traits.
//! - `timeseries`: the immutable close-price series and its date lookups.
//! - `filter` / `normalize` / `join` / `export`: the pure stages the
//!   orchestrator runs in sequence.
#![warn(missing_docs)]

/// Connector capability traits and the primary `TrediciConnector` interface.
pub mod connector;
mod error;
/// Watchlist filtering and de-duplication of disclosure records.
pub mod filter;
/// Schema normalization: raw source rows into canonical records.
pub mod normalize;
pub mod types;

/// Price join and output-row assembly.
pub mod join;

/// CSV export of the final table.
pub mod export;
/// Date-indexed daily close series.
pub mod timeseries;

pub use connector::TrediciConnector;
pub use error::TrediciError;
pub use timeseries::PriceSeries;
pub use types::*;

pub use tredici_types::{Capability, ConnectorKey, FetchStrategy, PipelineConfig, Watchlist};
