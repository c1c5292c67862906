//! Shared plumbing for the demo programs.

/// Connector wiring for demos: fixtures in CI, live sources otherwise.
pub mod common {
    use std::sync::Arc;

    use tredici::{Tredici, TrediciError};

    /// Build an engine against live sources, or against the fixture
    /// connector when `TREDICI_DEMOS_USE_MOCK` is set (CI has no network).
    ///
    /// # Errors
    /// Propagates connector construction and builder validation failures.
    pub fn engine() -> Result<Tredici, TrediciError> {
        if std::env::var_os("TREDICI_DEMOS_USE_MOCK").is_some() {
            return Tredici::builder()
                .with_connector(Arc::new(tredici_mock::MockConnector::new()))
                .build();
        }

        let marketbeat: Arc<dyn tredici::TrediciConnector> =
            Arc::new(tredici_marketbeat::MarketbeatConnector::new_default()?);
        let edgar: Arc<dyn tredici::TrediciConnector> = Arc::new(
            tredici_edgar::EdgarConnector::new("tredici-demos demos@tredici.dev")?,
        );
        let yahoo: Arc<dyn tredici::TrediciConnector> =
            Arc::new(tredici_yahoo::YahooConnector::new_default()?);

        Tredici::builder()
            .with_connector(marketbeat.clone())
            .with_connector(edgar.clone())
            .with_connector(yahoo.clone())
            .prefer_sources(&[marketbeat, edgar, yahoo])
            .build()
    }
}
