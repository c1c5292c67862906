use core::fmt;
use serde::{Deserialize, Serialize};

/// High-level capability labels for routing, errors, and telemetry.
///
/// These map one-to-one with router endpoints and allow consistent
/// Display formatting and match-exhaustive handling when adding
/// new capabilities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Capability {
    /// Full daily closing-price history for a ticker.
    CloseHistory,
    /// Institutional-ownership disclosure records for a ticker.
    Ownership,
}

impl Capability {
    /// Stable lowercase label used in error messages and spans.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CloseHistory => "close_history",
            Self::Ownership => "ownership",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
