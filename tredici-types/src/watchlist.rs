use serde::{Deserialize, Serialize};

/// Shared list of target-institution keywords consumed by the filter stage.
///
/// Matching is a case-folded substring test against the institution display
/// name, exactly as disclosed. There is no fuzzy matching or alias table;
/// one spelling variant per institution is one keyword. The list lives in
/// configuration so every stage sees the same version of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Watchlist {
    keywords: Vec<String>,
}

impl Watchlist {
    /// Build a watchlist from keyword strings. Keywords are case-folded and
    /// blank entries are dropped.
    #[must_use]
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty())
                .collect(),
        }
    }

    /// The configured keywords, case-folded.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Case-insensitive substring match against an institution display name.
    #[must_use]
    pub fn matches(&self, institution: &str) -> bool {
        let folded = institution.to_lowercase();
        self.keywords.iter().any(|k| folded.contains(k))
    }

    /// Whether the watchlist has no keywords (matches nothing).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

impl Default for Watchlist {
    /// The three institutions the analysis targets.
    fn default() -> Self {
        Self::new(["blackrock", "vanguard", "ark"])
    }
}
