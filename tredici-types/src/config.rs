//! Configuration types shared across the orchestrator and connectors.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::watchlist::Watchlist;

/// Strategy for selecting among eligible ownership sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[non_exhaustive]
pub enum FetchStrategy {
    /// Poll sources in priority order, advancing only past an unavailable
    /// source. The first definitive outcome (records or a confirmed empty
    /// match set) ends the poll.
    #[default]
    PriorityWithFallback,
}

/// Global configuration for the `Tredici` orchestrator and pipeline.
///
/// Everything a run needs besides the ticker lives here; the pipeline entry
/// point takes the ticker in an explicit request object and reads the rest
/// from this one value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Ordered source priority. Connectors not listed keep registration
    /// order after the listed ones; unknown keys are dropped at build time.
    #[serde(skip)]
    pub source_priority: Vec<crate::ConnectorKey>,
    /// Target-institution keywords consumed by the filter stage.
    pub watchlist: Watchlist,
    /// Suffix appended to the ticker to synthesize the company-name column.
    pub company_suffix: String,
    /// Strategy for polling ownership sources.
    pub fetch_strategy: FetchStrategy,
    /// Timeout for individual source requests.
    pub provider_timeout: Duration,
    /// Optional overall deadline for one pipeline run.
    pub request_timeout: Option<Duration>,
    /// Drop repeated (reported date, institution) pairs, first wins.
    pub dedupe: bool,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            source_priority: vec![],
            watchlist: Watchlist::default(),
            company_suffix: " Corp.".to_string(),
            fetch_strategy: FetchStrategy::default(),
            provider_timeout: Duration::from_secs(10),
            request_timeout: None,
            dedupe: true,
        }
    }
}
