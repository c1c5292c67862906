//! tredici-edgar
//!
//! Ownership connector over the SEC EDGAR company filings index. Queries the
//! Atom feed of SC 13D/G filings for a ticker; each entry yields one
//! disclosure row. EDGAR rejects anonymous clients, so construction requires
//! a contact-style user agent (company name plus email), per the SEC's
//! published fair-access policy.
#![warn(missing_docs)]

mod feed;

use async_trait::async_trait;
use tredici_core::connector::{ConnectorKey, OwnershipProvider};
use tredici_core::types::{SourceOutcome, Ticker};
use tredici_core::{TrediciConnector, TrediciError};

const DEFAULT_BASE_URL: &str = "https://www.sec.gov";

/// Ownership connector backed by the EDGAR filings-index Atom feed.
pub struct EdgarConnector {
    http: reqwest::Client,
    base_url: String,
}

/// Builder for [`EdgarConnector`].
pub struct Builder {
    base_url: String,
    contact: String,
}

impl Builder {
    /// Start from the production base URL with the given contact string.
    #[must_use]
    pub fn new(contact: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            contact: contact.into(),
        }
    }

    /// Override the base URL (tests point this at a local mock server).
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Build the connector.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the contact string is blank or carries no
    /// email address, and `Other` when the HTTP client cannot be constructed.
    pub fn build(self) -> Result<EdgarConnector, TrediciError> {
        let contact = self.contact.trim();
        if contact.is_empty() || !contact.contains('@') {
            return Err(TrediciError::InvalidArg(
                "EDGAR requires a contact user agent like \"Example Corp ops@example.com\""
                    .to_string(),
            ));
        }
        let http = reqwest::Client::builder()
            .user_agent(contact)
            .build()
            .map_err(|e| TrediciError::Other(format!("http client: {e}")))?;
        Ok(EdgarConnector {
            http,
            base_url: self.base_url.trim_end_matches('/').to_string(),
        })
    }
}

impl EdgarConnector {
    /// Static connector key for orchestrator priority configuration.
    pub const KEY: ConnectorKey = ConnectorKey::new("edgar");

    /// Connector against production EDGAR with the given contact string.
    ///
    /// # Errors
    /// Propagates [`Builder::build`] validation failures.
    pub fn new(contact: impl Into<String>) -> Result<Self, TrediciError> {
        Builder::new(contact).build()
    }

    /// Start building a connector with overrides.
    #[must_use]
    pub fn builder(contact: impl Into<String>) -> Builder {
        Builder::new(contact)
    }

    fn feed_url(&self, ticker: &Ticker) -> String {
        format!(
            "{}/cgi-bin/browse-edgar?action=getcompany&CIK={ticker}&type=SC+13&dateb=&owner=include&count=40&output=atom",
            self.base_url
        )
    }
}

impl TrediciConnector for EdgarConnector {
    fn name(&self) -> &'static str {
        "edgar"
    }

    fn vendor(&self) -> &'static str {
        "U.S. Securities and Exchange Commission"
    }

    fn as_ownership_provider(&self) -> Option<&dyn OwnershipProvider> {
        Some(self as &dyn OwnershipProvider)
    }
}

#[async_trait]
impl OwnershipProvider for EdgarConnector {
    async fn ownership(&self, ticker: &Ticker) -> Result<SourceOutcome, TrediciError> {
        let url = self.feed_url(ticker);
        tracing::debug!(%url, "fetching filings index");
        let resp = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| TrediciError::source("edgar", format!("GET {url}: {e}")))?;
        if !resp.status().is_success() {
            return Err(TrediciError::source(
                "edgar",
                format!("GET {url}: status {}", resp.status()),
            ));
        }
        let body = resp
            .text()
            .await
            .map_err(|e| TrediciError::source("edgar", format!("read {url}: {e}")))?;

        let rows = feed::holding_rows(&body);
        tracing::debug!(entries = rows.len(), "parsed filings feed");
        Ok(if rows.is_empty() {
            SourceOutcome::NoMatchingRecords
        } else {
            SourceOutcome::Records(rows)
        })
    }
}
