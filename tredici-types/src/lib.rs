//! Tredici-specific configuration primitives and data transfer objects.
#![warn(missing_docs)]

mod capability;
mod config;
mod connector;
mod watchlist;

pub use capability::Capability;
pub use config::{FetchStrategy, PipelineConfig};
pub use connector::ConnectorKey;
pub use watchlist::Watchlist;
