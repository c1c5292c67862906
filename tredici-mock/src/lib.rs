//! Mock tredici connector for CI-safe examples and orchestrator tests.
//! Serves deterministic data from static fixtures, with two magic symbols:
//! `FAIL` forces a source failure and `TIMEOUT` stalls long enough to trip
//! any reasonable per-source timeout.
#![warn(missing_docs)]

use async_trait::async_trait;
use tredici_core::connector::{CloseHistoryProvider, OwnershipProvider};
use tredici_core::types::{SourceOutcome, Ticker};
use tredici_core::{PriceSeries, TrediciConnector, TrediciError};

mod fixtures;

/// Mock connector providing deterministic data from static fixtures.
pub struct MockConnector;

impl Default for MockConnector {
    fn default() -> Self {
        Self::new()
    }
}

impl MockConnector {
    /// Create the mock connector.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    async fn maybe_fail_or_stall(symbol: &str, capability: &'static str) -> Result<(), TrediciError> {
        match symbol {
            "FAIL" => Err(TrediciError::source(
                "tredici-mock",
                format!("forced failure: {capability}"),
            )),
            "TIMEOUT" => {
                // Long enough to trip any per-source timeout a test configures.
                tokio::time::sleep(std::time::Duration::from_secs(3600)).await;
                Ok(())
            }
            _ => Ok(()),
        }
    }
}

impl TrediciConnector for MockConnector {
    fn name(&self) -> &'static str {
        "tredici-mock"
    }

    fn vendor(&self) -> &'static str {
        "Mock"
    }

    fn as_close_history_provider(&self) -> Option<&dyn CloseHistoryProvider> {
        Some(self as &dyn CloseHistoryProvider)
    }

    fn as_ownership_provider(&self) -> Option<&dyn OwnershipProvider> {
        Some(self as &dyn OwnershipProvider)
    }
}

#[async_trait]
impl CloseHistoryProvider for MockConnector {
    async fn close_history(&self, ticker: &Ticker) -> Result<PriceSeries, TrediciError> {
        let s = ticker.as_str();
        Self::maybe_fail_or_stall(s, "close_history").await?;
        fixtures::history::by_symbol(s)
            .ok_or_else(|| TrediciError::not_found(format!("price history for {s}")))
    }
}

#[async_trait]
impl OwnershipProvider for MockConnector {
    async fn ownership(&self, ticker: &Ticker) -> Result<SourceOutcome, TrediciError> {
        let s = ticker.as_str();
        Self::maybe_fail_or_stall(s, "ownership").await?;
        Ok(fixtures::holdings::by_symbol(s)
            .map_or(SourceOutcome::NoMatchingRecords, SourceOutcome::Records))
    }
}
