#![allow(dead_code)]
#![allow(clippy::type_complexity)]

use std::sync::Arc;

use async_trait::async_trait;
use tokio::time::{Duration, sleep};
use tredici_core::connector::{CloseHistoryProvider, OwnershipProvider};
use tredici_core::types::{SourceOutcome, Ticker};
use tredici_core::{PriceSeries, TrediciConnector, TrediciError};

/// Simple in-memory connector used by integration tests. Capabilities are
/// advertised only when the corresponding closure is configured.
pub struct MockConnector {
    pub name: &'static str,
    pub delay_ms: u64,
    pub history_fn:
        Option<Arc<dyn Fn(&Ticker) -> Result<PriceSeries, TrediciError> + Send + Sync>>,
    pub ownership_fn:
        Option<Arc<dyn Fn(&Ticker) -> Result<SourceOutcome, TrediciError> + Send + Sync>>,
}

pub struct MockBuilder {
    inner: MockConnector,
}

impl MockConnector {
    pub fn builder() -> MockBuilder {
        MockBuilder {
            inner: Self {
                name: "default_mock",
                delay_ms: 0,
                history_fn: None,
                ownership_fn: None,
            },
        }
    }
}

impl MockBuilder {
    pub fn name(mut self, name: &'static str) -> Self {
        self.inner.name = name;
        self
    }

    /// Delay every call; combine with a short provider timeout to force the
    /// orchestrator's timeout path.
    pub fn delay_ms(mut self, ms: u64) -> Self {
        self.inner.delay_ms = ms;
        self
    }

    pub fn returns_history_ok(mut self, series: PriceSeries) -> Self {
        self.inner.history_fn = Some(Arc::new(move |_| Ok(series.clone())));
        self
    }

    pub fn history_with(
        mut self,
        f: impl Fn(&Ticker) -> Result<PriceSeries, TrediciError> + Send + Sync + 'static,
    ) -> Self {
        self.inner.history_fn = Some(Arc::new(f));
        self
    }

    pub fn returns_ownership_ok(mut self, outcome: SourceOutcome) -> Self {
        self.inner.ownership_fn = Some(Arc::new(move |_| Ok(outcome.clone())));
        self
    }

    pub fn ownership_with(
        mut self,
        f: impl Fn(&Ticker) -> Result<SourceOutcome, TrediciError> + Send + Sync + 'static,
    ) -> Self {
        self.inner.ownership_fn = Some(Arc::new(f));
        self
    }

    pub fn ownership_unavailable(self) -> Self {
        let name = self.inner.name;
        self.ownership_with(move |_| Err(TrediciError::source(name, "connection refused")))
    }

    pub fn build(self) -> Arc<dyn TrediciConnector> {
        Arc::new(self.inner)
    }
}

impl TrediciConnector for MockConnector {
    fn name(&self) -> &'static str {
        self.name
    }

    fn as_close_history_provider(&self) -> Option<&dyn CloseHistoryProvider> {
        self.history_fn.as_ref().map(|_| self as &dyn CloseHistoryProvider)
    }

    fn as_ownership_provider(&self) -> Option<&dyn OwnershipProvider> {
        self.ownership_fn.as_ref().map(|_| self as &dyn OwnershipProvider)
    }
}

#[async_trait]
impl CloseHistoryProvider for MockConnector {
    async fn close_history(&self, ticker: &Ticker) -> Result<PriceSeries, TrediciError> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match &self.history_fn {
            Some(f) => f(ticker),
            None => Err(TrediciError::unsupported("close_history")),
        }
    }
}

#[async_trait]
impl OwnershipProvider for MockConnector {
    async fn ownership(&self, ticker: &Ticker) -> Result<SourceOutcome, TrediciError> {
        if self.delay_ms > 0 {
            sleep(Duration::from_millis(self.delay_ms)).await;
        }
        match &self.ownership_fn {
            Some(f) => f(ticker),
            None => Err(TrediciError::unsupported("ownership")),
        }
    }
}
