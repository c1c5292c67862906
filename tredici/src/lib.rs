//! tredici
//!
//! High-level, pluggable institutional-ownership analysis for Rust.
//!
//! Register one or more source connectors (marketbeat scrape, SEC EDGAR
//! filings index, Yahoo holder snapshot, or your own), set a priority
//! order, and run the pipeline: close-price history is fetched first, then
//! disclosure records, which are filtered against the institution
//! watchlist, normalized into the canonical ten-column schema, de-duped,
//! joined against the price series, and handed back as a table you can
//! export as BOM-prefixed CSV.
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use tredici::{AnalysisRequest, Tredici};
//!
//! let engine = Tredici::builder()
//!     .with_connector(Arc::new(tredici_edgar::EdgarConnector::new(
//!         "Example Corp ops@example.com",
//!     )?))
//!     .with_connector(Arc::new(tredici_yahoo::YahooConnector::new_default()?))
//!     .build()?;
//!
//! let report = engine.analyze(AnalysisRequest::new("RXRX")?).await?;
//! if let Some(table) = &report.table {
//!     let bytes = tredici_core::export::to_csv_bytes(table)?;
//!     std::fs::write(tredici_core::export::suggested_filename(table), bytes)?;
//! }
//! ```
#![warn(missing_docs)]

mod core;
mod pipeline;
mod router;

pub use crate::core::{Tredici, TrediciBuilder};
pub use crate::pipeline::{AnalysisReport, AnalysisRequest, PipelineOutcome};
pub use crate::router::ownership::OwnershipReport;

pub use tredici_core::{
    Capability, ConnectorKey, FetchStrategy, PipelineConfig, PriceSeries, TrediciConnector,
    TrediciError, Watchlist,
};
