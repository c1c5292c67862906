//! End-to-end analysis pipeline: prices first, then disclosures, then the
//! filter / normalize / de-dupe / join stages from `tredici-core`.

use tredici_core::types::{AnalysisTable, SourceOutcome, Ticker};
use tredici_core::{ConnectorKey, TrediciError, filter, join, normalize};

use crate::Tredici;

/// Parameters for one analysis run.
///
/// Everything else the run needs (watchlist, priorities, timeouts) lives on
/// the engine's [`PipelineConfig`]; the request only carries what varies per
/// call.
///
/// [`PipelineConfig`]: tredici_core::PipelineConfig
#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    ticker: Ticker,
}

impl AnalysisRequest {
    /// Build a request for `symbol`.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the symbol is empty or contains characters
    /// outside `[A-Za-z0-9.-]`.
    pub fn new(symbol: &str) -> Result<Self, TrediciError> {
        Ok(Self {
            ticker: Ticker::new(symbol)?,
        })
    }

    /// The validated, uppercased ticker.
    #[must_use]
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }
}

impl From<Ticker> for AnalysisRequest {
    fn from(ticker: Ticker) -> Self {
        Self { ticker }
    }
}

/// How one analysis run ended. All three variants are successful runs; a
/// failed run is a `TrediciError` instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum PipelineOutcome {
    /// Disclosure rows matched the watchlist; the report carries a table.
    Completed,
    /// A source answered definitively with zero disclosure rows.
    NoRecords,
    /// Rows were fetched but none named a watchlist institution.
    NoMatchingInstitutions,
}

/// Outcome of [`Tredici::analyze`].
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    /// Ticker the run was for.
    pub ticker: Ticker,
    /// The joined ten-column table, present only for [`PipelineOutcome::Completed`].
    pub table: Option<AnalysisTable>,
    /// How the run ended.
    pub outcome: PipelineOutcome,
    /// Connector that produced the disclosure data.
    pub source: ConnectorKey,
    /// One message per ownership source skipped as unavailable.
    pub warnings: Vec<String>,
}

impl Tredici {
    /// Run the full analysis pipeline for one ticker.
    ///
    /// Close-price history is fetched first and a failure there aborts the
    /// run before any disclosure source is contacted. Disclosure rows are
    /// then fetched through the source chain, filtered against the
    /// watchlist, normalized, optionally de-duplicated, and joined against
    /// the price series.
    ///
    /// An empty result is not an error: a run that finds no rows, or no
    /// watchlist rows, completes with the corresponding [`PipelineOutcome`]
    /// and no table.
    ///
    /// # Errors
    /// Propagates [`close_history`] and [`ownership`] failures, plus
    /// `RequestTimeout` when an overall deadline is configured and exceeded.
    ///
    /// [`close_history`]: Tredici::close_history
    /// [`ownership`]: Tredici::ownership
    pub async fn analyze(&self, req: AnalysisRequest) -> Result<AnalysisReport, TrediciError> {
        if let Some(deadline) = self.cfg.request_timeout {
            (tokio::time::timeout(deadline, self.analyze_inner(&req)).await)
                .map_or_else(|_| Err(TrediciError::request_timeout("analyze")), |r| r)
        } else {
            self.analyze_inner(&req).await
        }
    }

    async fn analyze_inner(&self, req: &AnalysisRequest) -> Result<AnalysisReport, TrediciError> {
        let ticker = req.ticker();
        let series = self.close_history(ticker).await?;
        tracing::debug!(%ticker, points = series.len(), "close history loaded");

        let ownership = self.ownership(ticker).await?;
        let raw = match ownership.outcome {
            SourceOutcome::Records(rows) => rows,
            SourceOutcome::NoMatchingRecords => {
                tracing::info!(%ticker, source = ownership.source.as_str(), "no disclosure rows");
                return Ok(AnalysisReport {
                    ticker: ticker.clone(),
                    table: None,
                    outcome: PipelineOutcome::NoRecords,
                    source: ownership.source,
                    warnings: ownership.warnings,
                });
            }
        };

        let kept = filter::retain_watchlist(raw, &self.cfg.watchlist);
        if kept.is_empty() {
            tracing::info!(%ticker, "no rows matched the watchlist");
            return Ok(AnalysisReport {
                ticker: ticker.clone(),
                table: None,
                outcome: PipelineOutcome::NoMatchingInstitutions,
                source: ownership.source,
                warnings: ownership.warnings,
            });
        }

        let mut records = normalize::normalize_rows(&kept);
        if self.cfg.dedupe {
            records = filter::dedupe_records(records);
        }
        let rows = join::build_rows(ticker, &self.cfg.company_suffix, records, &series);

        Ok(AnalysisReport {
            ticker: ticker.clone(),
            table: Some(AnalysisTable {
                ticker: ticker.clone(),
                rows,
            }),
            outcome: PipelineOutcome::Completed,
            source: ownership.source,
            warnings: ownership.warnings,
        })
    }
}
