use tredici_core::types::{SourceOutcome, Ticker};
use tredici_core::{ConnectorKey, TrediciError};

use crate::Tredici;
use crate::core::tag_err;

/// Result of polling the ownership source chain for one ticker.
#[derive(Debug, Clone)]
pub struct OwnershipReport {
    /// The definitive outcome from the first source that answered.
    pub outcome: SourceOutcome,
    /// Key of the connector that produced the outcome.
    pub source: ConnectorKey,
    /// One message per source skipped over because it was unavailable.
    pub warnings: Vec<String>,
}

impl Tredici {
    /// Poll ownership sources in priority order until one answers.
    ///
    /// A source answers with either records or an explicit "nothing matched";
    /// both are definitive and stop the chain. Only an unavailable source
    /// (transport failure, bad status, timeout) lets the chain advance, and
    /// each skip is recorded as a warning on the report.
    ///
    /// # Errors
    /// `Unsupported` when no registered connector provides ownership data;
    /// `AllSourcesTimedOut` when every eligible source timed out;
    /// `AllSourcesFailed` when every eligible source was unavailable.
    pub async fn ownership(&self, ticker: &Ticker) -> Result<OwnershipReport, TrediciError> {
        let mut attempted_any = false;
        let mut warnings: Vec<String> = Vec::new();
        let mut errors: Vec<TrediciError> = Vec::new();

        for c in self.ordered() {
            let Some(provider) = c.as_ownership_provider() else {
                continue;
            };
            attempted_any = true;
            tracing::debug!(source = c.name(), %ticker, "fetching ownership disclosures");
            match Self::provider_call_with_timeout(
                c.name(),
                "ownership",
                self.cfg.provider_timeout,
                provider.ownership(ticker),
            )
            .await
            {
                Ok(outcome) => {
                    return Ok(OwnershipReport {
                        outcome,
                        source: ConnectorKey::new(c.name()),
                        warnings,
                    });
                }
                Err(e) => {
                    tracing::warn!(source = c.name(), error = %e, "ownership source unavailable");
                    warnings.push(format!("{}: {e}", c.name()));
                    errors.push(match e {
                        e @ (TrediciError::NotFound { .. } | TrediciError::SourceTimeout { .. }) => {
                            e
                        }
                        other => tag_err(c.name(), other),
                    });
                }
            }
        }

        if !attempted_any {
            return Err(TrediciError::unsupported("ownership"));
        }

        if errors
            .iter()
            .all(|e| matches!(e, TrediciError::SourceTimeout { .. }))
        {
            return Err(TrediciError::AllSourcesTimedOut {
                capability: "ownership".to_string(),
            });
        }
        Err(TrediciError::AllSourcesFailed(errors))
    }
}
