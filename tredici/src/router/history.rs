use tredici_core::types::Ticker;
use tredici_core::{PriceSeries, TrediciError};

use crate::Tredici;
use crate::core::tag_err;

impl Tredici {
    /// Fetch the full daily close history for `ticker`.
    ///
    /// Sources advertising [`CloseHistoryProvider`] are polled in priority
    /// order; the first non-empty series wins. `NotFound` from every source
    /// collapses to a single `NotFound`; all timeouts collapse to
    /// `AllSourcesTimedOut`; a mixed bag of failures becomes
    /// `AllSourcesFailed`.
    ///
    /// [`CloseHistoryProvider`]: tredici_core::connector::CloseHistoryProvider
    ///
    /// # Errors
    /// `Unsupported` when no registered connector provides close history,
    /// otherwise the aggregated failure described above.
    pub async fn close_history(&self, ticker: &Ticker) -> Result<PriceSeries, TrediciError> {
        let mut attempted_any = false;
        let mut errors: Vec<TrediciError> = Vec::new();

        for c in self.ordered() {
            let Some(provider) = c.as_close_history_provider() else {
                continue;
            };
            attempted_any = true;
            tracing::debug!(source = c.name(), %ticker, "fetching close history");
            match Self::provider_call_with_timeout(
                c.name(),
                "close_history",
                self.cfg.provider_timeout,
                provider.close_history(ticker),
            )
            .await
            {
                Ok(series) if !series.is_empty() => return Ok(series),
                Ok(_) => {
                    errors.push(TrediciError::not_found(format!(
                        "price history for {ticker}"
                    )));
                }
                Err(e @ (TrediciError::NotFound { .. } | TrediciError::SourceTimeout { .. })) => {
                    tracing::warn!(source = c.name(), error = %e, "close history source failed");
                    errors.push(e);
                }
                Err(e) => {
                    tracing::warn!(source = c.name(), error = %e, "close history source failed");
                    errors.push(tag_err(c.name(), e));
                }
            }
        }

        if !attempted_any {
            return Err(TrediciError::unsupported("close_history"));
        }

        if errors
            .iter()
            .all(|e| matches!(e, TrediciError::NotFound { .. }))
        {
            return Err(TrediciError::not_found(format!(
                "price history for {ticker}"
            )));
        }
        if errors
            .iter()
            .all(|e| matches!(e, TrediciError::SourceTimeout { .. }))
        {
            return Err(TrediciError::AllSourcesTimedOut {
                capability: "close_history".to_string(),
            });
        }
        Err(TrediciError::AllSourcesFailed(errors))
    }
}
