//! tredici-marketbeat
//!
//! Ownership connector that scrapes marketbeat's per-ticker
//! institutional-ownership pages. The page URL embeds the listing exchange,
//! which the caller rarely knows, so the connector tries NASDAQ first and
//! falls back to NYSE.
#![warn(missing_docs)]

mod parse;

use async_trait::async_trait;
use tredici_core::connector::{ConnectorKey, OwnershipProvider};
use tredici_core::types::{SourceOutcome, Ticker};
use tredici_core::{TrediciConnector, TrediciError};

const DEFAULT_BASE_URL: &str = "https://www.marketbeat.com";
// Served an interstitial instead of the table without a browser-like agent.
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";
const EXCHANGES: [&str; 2] = ["NASDAQ", "NYSE"];

/// Ownership connector backed by marketbeat's HTML ownership pages.
pub struct MarketbeatConnector {
    http: reqwest::Client,
    base_url: String,
}

/// Builder for [`MarketbeatConnector`].
pub struct Builder {
    base_url: String,
    user_agent: String,
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

impl Builder {
    /// Start from the production base URL and a browser-like user agent.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }

    /// Override the base URL (tests point this at a local mock server).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Override the user agent sent with every request.
    #[must_use]
    pub fn user_agent(mut self, ua: impl Into<String>) -> Self {
        self.user_agent = ua.into();
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `Other` when the HTTP client cannot be constructed.
    pub fn build(self) -> Result<MarketbeatConnector, TrediciError> {
        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .build()
            .map_err(|e| TrediciError::Other(format!("http client: {e}")))?;
        Ok(MarketbeatConnector {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl MarketbeatConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("marketbeat");

    /// Connector with production defaults.
    ///
    /// # Errors
    /// Returns `Other` when the HTTP client cannot be constructed.
    pub fn new_default() -> Result<Self, TrediciError> {
        Builder::new().build()
    }

    /// Start building a connector with overrides.
    #[must_use]
    pub fn builder() -> Builder {
        Builder::new()
    }

    fn page_url(&self, exchange: &str, ticker: &Ticker) -> String {
        format!(
            "{}/stocks/{exchange}/{ticker}/institutional-ownership/",
            self.base_url
        )
    }

    /// Fetch one exchange's page. `Ok(None)` means this exchange does not
    /// list the ticker (non-2xx); a transport failure is `Err`.
    async fn fetch_page(
        &self,
        exchange: &str,
        ticker: &Ticker,
    ) -> Result<Option<String>, TrediciError> {
        let url = self.page_url(exchange, ticker);
        tracing::debug!(%url, "fetching ownership page");
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| TrediciError::source("marketbeat", format!("GET {url}: {e}")))?;
        if !resp.status().is_success() {
            tracing::debug!(%url, status = %resp.status(), "exchange page rejected");
            return Ok(None);
        }
        let body = resp
            .text()
            .await
            .map_err(|e| TrediciError::source("marketbeat", format!("read {url}: {e}")))?;
        Ok(Some(body))
    }
}

impl TrediciConnector for MarketbeatConnector {
    fn name(&self) -> &'static str {
        "marketbeat"
    }

    fn vendor(&self) -> &'static str {
        "MarketBeat"
    }

    fn as_ownership_provider(&self) -> Option<&dyn OwnershipProvider> {
        Some(self as &dyn OwnershipProvider)
    }
}

#[async_trait]
impl OwnershipProvider for MarketbeatConnector {
    async fn ownership(&self, ticker: &Ticker) -> Result<SourceOutcome, TrediciError> {
        let mut last_err: Option<TrediciError> = None;
        for exchange in EXCHANGES {
            match self.fetch_page(exchange, ticker).await {
                Ok(Some(body)) => {
                    let rows = parse::holding_rows(&body);
                    tracing::debug!(exchange, rows = rows.len(), "parsed ownership table");
                    return Ok(if rows.is_empty() {
                        SourceOutcome::NoMatchingRecords
                    } else {
                        SourceOutcome::Records(rows)
                    });
                }
                Ok(None) => {}
                Err(e) => last_err = Some(e),
            }
        }
        Err(last_err.unwrap_or_else(|| {
            TrediciError::source(
                "marketbeat",
                format!("no exchange page available for {ticker}"),
            )
        }))
    }
}
