//! tredici-yahoo
//!
//! Yahoo Finance connector: full daily close history from the v8 chart API
//! and the current institutional-holder snapshot from the v10 quoteSummary
//! API. The snapshot is point-in-time only; historical disclosure rows come
//! from the scrape and EDGAR connectors.
#![warn(missing_docs)]

mod model;

use async_trait::async_trait;
use chrono::DateTime;
use rust_decimal::Decimal;
use tredici_core::PriceSeries;
use tredici_core::connector::{CloseHistoryProvider, ConnectorKey, OwnershipProvider};
use tredici_core::types::{RawHolding, SourceOutcome, Ticker};
use tredici_core::{TrediciConnector, TrediciError};

use model::{ChartEnvelope, FormattedValue, HolderEntry, SummaryEnvelope};

const DEFAULT_BASE_URL: &str = "https://query1.finance.yahoo.com";
const DEFAULT_USER_AGENT: &str = "Mozilla/5.0";

/// Yahoo Finance connector for close history and holder snapshots.
pub struct YahooConnector {
    http: reqwest::Client,
    base_url: String,
}

/// Builder for [`YahooConnector`].
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
    /// Start from the production base URL.
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
    pub fn build(self) -> Result<YahooConnector, TrediciError> {
        let http = reqwest::Client::builder()
            .user_agent(self.user_agent)
            .build()
            .map_err(|e| TrediciError::Other(format!("http client: {e}")))?;
        Ok(YahooConnector {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl YahooConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("yahoo");

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

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, TrediciError> {
        tracing::debug!(%url, "fetching");
        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| TrediciError::source("yahoo", format!("GET {url}: {e}")))?;
        if !resp.status().is_success() {
            return Err(TrediciError::source(
                "yahoo",
                format!("GET {url}: status {}", resp.status()),
            ));
        }
        resp.json::<T>()
            .await
            .map_err(|e| TrediciError::source("yahoo", format!("decode {url}: {e}")))
    }
}

impl TrediciConnector for YahooConnector {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    fn vendor(&self) -> &'static str {
        "Yahoo Finance"
    }

    fn as_close_history_provider(&self) -> Option<&dyn CloseHistoryProvider> {
        Some(self as &dyn CloseHistoryProvider)
    }

    fn as_ownership_provider(&self) -> Option<&dyn OwnershipProvider> {
        Some(self as &dyn OwnershipProvider)
    }
}

#[async_trait]
impl CloseHistoryProvider for YahooConnector {
    async fn close_history(&self, ticker: &Ticker) -> Result<PriceSeries, TrediciError> {
        let url = format!(
            "{}/v8/finance/chart/{ticker}?range=max&interval=1d",
            self.base_url
        );
        let envelope: ChartEnvelope = self.get_json(&url).await?;

        if let Some(e) = envelope.chart.error {
            return Err(TrediciError::not_found(format!(
                "price history for {ticker}: {} ({})",
                e.description, e.code
            )));
        }
        let result = envelope
            .chart
            .result
            .and_then(|mut r| if r.is_empty() { None } else { Some(r.remove(0)) })
            .ok_or_else(|| TrediciError::not_found(format!("price history for {ticker}")))?;
        let closes = result
            .indicators
            .quote
            .first()
            .map(|q| q.close.clone())
            .unwrap_or_default();

        let series = PriceSeries::new(
            ticker.clone(),
            result
                .timestamp
                .iter()
                .zip(closes)
                .filter_map(|(&ts, close)| {
                    let date = DateTime::from_timestamp(ts, 0)?.date_naive();
                    let close = Decimal::try_from(close?).ok()?;
                    Some((date, close))
                }),
        );
        if series.is_empty() {
            return Err(TrediciError::not_found(format!(
                "price history for {ticker}"
            )));
        }
        Ok(series)
    }
}

#[async_trait]
impl OwnershipProvider for YahooConnector {
    async fn ownership(&self, ticker: &Ticker) -> Result<SourceOutcome, TrediciError> {
        let url = format!(
            "{}/v10/finance/quoteSummary/{ticker}?modules=institutionOwnership",
            self.base_url
        );
        let envelope: SummaryEnvelope = self.get_json(&url).await?;

        if let Some(e) = envelope.quote_summary.error {
            // Yahoo reports unknown symbols through the error object; that is
            // a definitive answer, not an outage.
            tracing::debug!(code = %e.code, desc = %e.description, "quoteSummary error");
            return Ok(SourceOutcome::NoMatchingRecords);
        }
        let holders: Vec<HolderEntry> = envelope
            .quote_summary
            .result
            .unwrap_or_default()
            .into_iter()
            .filter_map(|r| r.institution_ownership)
            .flat_map(|o| o.ownership_list)
            .collect();

        if holders.is_empty() {
            return Ok(SourceOutcome::NoMatchingRecords);
        }
        Ok(SourceOutcome::Records(
            holders.into_iter().map(raw_from_holder).collect(),
        ))
    }
}

fn raw_from_holder(h: HolderEntry) -> RawHolding {
    RawHolding {
        institution: h.organization,
        reported: h.report_date.as_ref().and_then(formatted_date),
        transaction: None,
        filing_type: None,
        shares: h
            .position
            .as_ref()
            .and_then(|p| p.raw)
            .map(|v| format!("{v:.0}")),
        percent: h.pct_held.as_ref().and_then(formatted_percent),
        change: None,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn formatted_date(v: &FormattedValue) -> Option<String> {
    if let Some(fmt) = &v.fmt {
        return Some(fmt.clone());
    }
    let ts = v.raw? as i64;
    Some(
        DateTime::from_timestamp(ts, 0)?
            .date_naive()
            .format("%Y-%m-%d")
            .to_string(),
    )
}

/// Yahoo reports held fraction as a ratio (`0.072` for 7.2%).
fn formatted_percent(v: &FormattedValue) -> Option<String> {
    if let Some(fmt) = &v.fmt {
        return Some(fmt.clone());
    }
    v.raw.map(|r| format!("{:.2}%", r * 100.0))
}
