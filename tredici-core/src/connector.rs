use async_trait::async_trait;

use crate::TrediciError;
use crate::timeseries::PriceSeries;
use crate::types::{SourceOutcome, Ticker};
pub use tredici_types::{Capability, ConnectorKey};

/// Focused role trait for connectors that provide full daily close history.
#[async_trait]
pub trait CloseHistoryProvider: Send + Sync {
    /// Fetch the complete daily close series for `ticker`, from listing to
    /// present.
    ///
    /// An unknown ticker or empty history is `NotFound`; callers treat that
    /// as a hard failure for the whole run because nothing can be enriched
    /// without it.
    async fn close_history(&self, ticker: &Ticker) -> Result<PriceSeries, TrediciError>;
}

/// Focused role trait for connectors that provide ownership disclosures.
#[async_trait]
pub trait OwnershipProvider: Send + Sync {
    /// Poll the source for disclosure rows for `ticker`.
    ///
    /// Returns a typed outcome: `Records` or `NoMatchingRecords`. Transport
    /// and parse failures must surface as `Err`, never as an empty result,
    /// so the router can tell "source is down" from "source has no data".
    async fn ownership(&self, ticker: &Ticker) -> Result<SourceOutcome, TrediciError>;
}

/// Main connector trait implemented by source crates. Exposes capability
/// discovery.
pub trait TrediciConnector: Send + Sync {
    /// A stable identifier for priority lists (e.g. "tredici-marketbeat").
    fn name(&self) -> &'static str;

    /// Canonical connector key constructed from the static name.
    ///
    /// Use this helper when configuring the source priority order.
    fn key(&self) -> ConnectorKey {
        ConnectorKey::new(self.name())
    }

    /// Human-friendly vendor string.
    fn vendor(&self) -> &'static str {
        "unknown"
    }

    /// Whether the connector advertises the given capability.
    fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::CloseHistory => self.as_close_history_provider().is_some(),
            Capability::Ownership => self.as_ownership_provider().is_some(),
            _ => false,
        }
    }

    /// Advertise close-history capability by returning a usable trait object
    /// reference when supported.
    fn as_close_history_provider(&self) -> Option<&dyn CloseHistoryProvider> {
        None
    }

    /// Advertise ownership capability by returning a usable trait object
    /// reference when supported.
    fn as_ownership_provider(&self) -> Option<&dyn OwnershipProvider> {
        None
    }
}
