use thiserror::Error;

/// Unified error type for the tredici workspace.
///
/// This wraps capability mismatches, argument validation errors,
/// source-tagged failures, not-found conditions, and an aggregate for
/// multi-source attempts. A source that is down is an error; a source that
/// answered with no matching data is not (see
/// [`crate::types::SourceOutcome`]).
#[derive(Debug, Error)]
pub enum TrediciError {
    /// The requested capability is not implemented by any registered connector.
    #[error("unsupported capability: {capability}")]
    Unsupported {
        /// A capability string describing what was requested (e.g. "ownership").
        capability: String,
    },

    /// Issues with the returned or expected data (missing fields, bad shapes, etc.).
    #[error("data issue: {0}")]
    Data(String),

    /// Invalid input argument.
    #[error("invalid argument: {0}")]
    InvalidArg(String),

    /// An individual source returned an error (transport failure, non-2xx,
    /// unparseable payload). Distinct from "no matching records".
    #[error("{connector} failed: {msg}")]
    Source {
        /// Connector name that failed.
        connector: String,
        /// Human-readable error message.
        msg: String,
    },

    /// Unknown/opaque error.
    #[error("unknown error: {0}")]
    Other(String),

    /// A resource or symbol could not be found.
    #[error("not found: {what}")]
    NotFound {
        /// Description of the missing resource, e.g. "price history for RXRX".
        what: String,
    },

    /// All polled sources failed; contains the individual failures.
    #[error("all sources failed: {0:?}")]
    AllSourcesFailed(Vec<TrediciError>),

    /// An individual source call exceeded the configured timeout.
    #[error("source timed out: {capability} via {connector}")]
    SourceTimeout {
        /// Connector name that timed out.
        connector: String,
        /// Capability label (e.g. "close_history", "ownership").
        capability: String,
    },

    /// The overall pipeline run exceeded the configured deadline.
    #[error("request timed out: {capability}")]
    RequestTimeout {
        /// Capability label for which the request timed out.
        capability: String,
    },

    /// All attempted sources timed out for the requested capability.
    #[error("all sources timed out: {capability}")]
    AllSourcesTimedOut {
        /// Capability label that timed out across all sources.
        capability: String,
    },
}

impl TrediciError {
    /// Helper: build an `Unsupported` error for a capability string.
    pub fn unsupported(cap: impl Into<String>) -> Self {
        Self::Unsupported {
            capability: cap.into(),
        }
    }

    /// Helper: build a `Source` error with the connector name and message.
    pub fn source(connector: impl Into<String>, msg: impl Into<String>) -> Self {
        Self::Source {
            connector: connector.into(),
            msg: msg.into(),
        }
    }

    /// Helper: build a `NotFound` error for a description of the missing resource.
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound { what: what.into() }
    }

    /// Helper: build a `SourceTimeout` error.
    pub fn source_timeout(connector: impl Into<String>, capability: impl Into<String>) -> Self {
        Self::SourceTimeout {
            connector: connector.into(),
            capability: capability.into(),
        }
    }

    /// Helper: build a `RequestTimeout` error.
    pub fn request_timeout(capability: impl Into<String>) -> Self {
        Self::RequestTimeout {
            capability: capability.into(),
        }
    }
}
