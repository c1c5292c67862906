use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use tredici_core::{
    ConnectorKey, FetchStrategy, PipelineConfig, TrediciConnector, TrediciError, Watchlist,
};

/// Orchestrator that routes requests across registered source connectors.
pub struct Tredici {
    pub(crate) connectors: Vec<Arc<dyn TrediciConnector>>,
    pub(crate) cfg: PipelineConfig,
}

/// Builder for constructing a `Tredici` orchestrator with custom configuration.
pub struct TrediciBuilder {
    connectors: Vec<Arc<dyn TrediciConnector>>,
    cfg: PipelineConfig,
}

// Connector trait objects are not Debug; print their names instead.
impl fmt::Debug for Tredici {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tredici")
            .field(
                "connectors",
                &self.connectors.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("cfg", &self.cfg)
            .finish()
    }
}

impl fmt::Debug for TrediciBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TrediciBuilder")
            .field(
                "connectors",
                &self.connectors.iter().map(|c| c.name()).collect::<Vec<_>>(),
            )
            .field("cfg", &self.cfg)
            .finish()
    }
}

impl Default for TrediciBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TrediciBuilder {
    /// Create a new builder with sensible defaults.
    ///
    /// Behavior and trade-offs:
    /// - Starts with no connectors; register at least one via [`with_connector`].
    /// - Defaults come from [`PipelineConfig::default`]: the standard watchlist
    ///   (BlackRock, Vanguard, ARK), `" Corp."` company suffix, 10s per-source
    ///   timeout, de-duplication on.
    ///
    /// [`with_connector`]: TrediciBuilder::with_connector
    #[must_use]
    pub fn new() -> Self {
        Self {
            connectors: vec![],
            cfg: PipelineConfig::default(),
        }
    }

    /// Register a source connector.
    ///
    /// Behavior and trade-offs:
    /// - Registration order is the polling order when no explicit priority is
    ///   set via [`prefer_sources`].
    /// - Multiple connectors can advertise the same capability; the router
    ///   walks them in order and stops at the first definitive outcome.
    /// - Duplicates are not deduplicated; avoid registering a connector twice.
    ///
    /// [`prefer_sources`]: TrediciBuilder::prefer_sources
    #[must_use]
    pub fn with_connector(mut self, c: Arc<dyn TrediciConnector>) -> Self {
        self.connectors.push(c);
        self
    }

    /// Set the source polling priority using connector instances.
    ///
    /// Behavior and trade-offs:
    /// - An ordering hint, not a filter: unlisted but registered connectors
    ///   remain eligible after the listed ones, in registration order.
    /// - Type-safe and ergonomic: eliminates the possibility of typos and
    ///   makes refactoring safer.
    #[must_use]
    pub fn prefer_sources(mut self, connectors_desc: &[Arc<dyn TrediciConnector>]) -> Self {
        self.cfg.source_priority = connectors_desc
            .iter()
            .map(|c| ConnectorKey::new(c.name()))
            .collect();
        self
    }

    /// Replace the institution watchlist used to filter disclosure rows.
    #[must_use]
    pub fn watchlist(mut self, watchlist: Watchlist) -> Self {
        self.cfg.watchlist = watchlist;
        self
    }

    /// Set the suffix appended to the ticker to synthesize the company column.
    #[must_use]
    pub fn company_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.cfg.company_suffix = suffix.into();
        self
    }

    /// Select the fetch strategy for multi-source requests.
    ///
    /// Behavior and trade-offs:
    /// - `PriorityWithFallback`: deterministic order, applies the per-source
    ///   timeout, aggregates errors; predictable and economical on rate limits.
    #[must_use]
    pub const fn fetch_strategy(mut self, strategy: FetchStrategy) -> Self {
        self.cfg.fetch_strategy = strategy;
        self
    }

    /// Set the per-source request timeout.
    #[must_use]
    pub const fn provider_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.provider_timeout = timeout;
        self
    }

    /// Set an overall deadline for one pipeline run.
    ///
    /// Behavior and trade-offs:
    /// - Bounds total latency even when several sources time out sequentially.
    /// - When exceeded, the run fails with `RequestTimeout`.
    #[must_use]
    pub const fn request_timeout(mut self, timeout: Duration) -> Self {
        self.cfg.request_timeout = Some(timeout);
        self
    }

    /// Toggle de-duplication of normalized records on (reported date,
    /// institution).
    #[must_use]
    pub const fn dedupe(mut self, yes: bool) -> Self {
        self.cfg.dedupe = yes;
        self
    }

    /// Build the `Tredici` orchestrator.
    ///
    /// # Errors
    /// Returns `InvalidArg` if no connectors have been registered via
    /// [`with_connector`].
    ///
    /// [`with_connector`]: TrediciBuilder::with_connector
    pub fn build(mut self) -> Result<Tredici, TrediciError> {
        // Validate priority keys against registered connectors; drop unknowns and dedup.
        let known: HashSet<&'static str> = self.connectors.iter().map(|c| c.name()).collect();

        let mut out: Vec<ConnectorKey> = Vec::new();
        let mut seen: HashSet<&'static str> = HashSet::new();
        for k in self.cfg.source_priority.iter().copied() {
            let n = k.as_str();
            if known.contains(n) && seen.insert(n) {
                out.push(k);
            }
        }
        self.cfg.source_priority = out;

        if self.connectors.is_empty() {
            return Err(TrediciError::InvalidArg(
                "no connectors registered; add at least one via with_connector(...)".to_string(),
            ));
        }

        Ok(Tredici {
            connectors: self.connectors,
            cfg: self.cfg,
        })
    }
}

pub(crate) fn tag_err(connector: &str, e: TrediciError) -> TrediciError {
    match e {
        e @ (TrediciError::NotFound { .. }
        | TrediciError::SourceTimeout { .. }
        | TrediciError::Source { .. }
        | TrediciError::RequestTimeout { .. }
        | TrediciError::AllSourcesTimedOut { .. }
        | TrediciError::AllSourcesFailed(_)) => e,
        other => TrediciError::Source {
            connector: connector.to_string(),
            msg: other.to_string(),
        },
    }
}

impl Tredici {
    /// Start building a new `Tredici` instance.
    ///
    /// Typical usage chains connector registration and preferences, e.g.:
    ///
    /// ```rust,ignore
    /// use std::sync::Arc;
    ///
    /// let mb = Arc::new(tredici_marketbeat::MarketbeatConnector::new_default());
    /// let ed = Arc::new(tredici_edgar::EdgarConnector::new("ops@example.com")?);
    ///
    /// let engine = tredici::Tredici::builder()
    ///     .with_connector(mb.clone())
    ///     .with_connector(ed.clone())
    ///     .prefer_sources(&[mb, ed])
    ///     .build()?;
    /// ```
    #[must_use]
    pub fn builder() -> TrediciBuilder {
        TrediciBuilder::new()
    }

    /// Wrap a source call with a timeout and standardized timeout error mapping.
    pub(crate) async fn provider_call_with_timeout<T, Fut>(
        connector_name: &'static str,
        capability: &'static str,
        timeout: Duration,
        fut: Fut,
    ) -> Result<T, TrediciError>
    where
        Fut: core::future::Future<Output = Result<T, TrediciError>>,
    {
        (tokio::time::timeout(timeout, fut).await)
            .unwrap_or_else(|_| Err(TrediciError::source_timeout(connector_name, capability)))
    }

    /// Registered connectors in polling order: explicit priority first, then
    /// the rest in registration order.
    pub(crate) fn ordered(&self) -> Vec<Arc<dyn TrediciConnector>> {
        let out: Vec<(usize, Arc<dyn TrediciConnector>)> =
            self.connectors.iter().cloned().enumerate().collect();

        if self.cfg.source_priority.is_empty() {
            return out.into_iter().map(|(_, c)| c).collect();
        }

        let pos: HashMap<_, _> = self
            .cfg
            .source_priority
            .iter()
            .enumerate()
            .map(|(i, n)| (n.as_str(), i))
            .collect();
        let mut v = out;
        v.sort_by_key(|(orig_i, c)| (pos.get(c.name()).copied().unwrap_or(usize::MAX), *orig_i));
        v.into_iter().map(|(_, c)| c).collect()
    }
}
