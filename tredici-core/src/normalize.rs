//! Schema normalization: one pure mapping from whatever a source produced
//! into the canonical [`OwnershipRecord`].
//!
//! Every adapter goes through [`record_from_raw`]; there is no per-source
//! column gluing anywhere else. Missing fields get fixed placeholders, and
//! numeric-looking text gets best-effort coercion (comma stripping, `%`
//! trimming) and nothing stronger, because the sources themselves promise
//! nothing stronger.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::{NOT_AVAILABLE, OwnershipRecord, RawHolding};

/// Filing-type label used when a source carries no form code.
pub const DEFAULT_FILING_TYPE: &str = "13G/F";

/// Date formats the sources are known to emit. `%m/%d/%y` must come before
/// `%m/%d/%Y`: chrono's `%Y` accepts "23" as the literal year 23, while `%y`
/// rejects four-digit input outright.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%b %d, %Y", "%B %d, %Y"];

/// Best-effort date parse across the known source formats.
#[must_use]
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Comma-stripped share-count parse ("1,200,000" → 1200000).
#[must_use]
pub fn parse_shares(raw: &str) -> Option<u64> {
    let s: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if s.is_empty() {
        return None;
    }
    s.parse().ok()
}

/// Percent parse, tolerating a trailing `%` and comma grouping.
#[must_use]
pub fn parse_percent(raw: &str) -> Option<Decimal> {
    let s: String = raw
        .trim()
        .trim_end_matches('%')
        .chars()
        .filter(|c| *c != ',')
        .collect();
    s.trim().parse().ok()
}

/// Map one raw source row to the canonical record.
///
/// - transaction date defaults to the reported date when absent;
/// - filing type defaults to [`DEFAULT_FILING_TYPE`];
/// - change defaults to the `N/A` sentinel;
/// - shares/percent that fail coercion become `None` (rendered as `N/A`).
#[must_use]
pub fn record_from_raw(raw: &RawHolding) -> OwnershipRecord {
    let reported = raw.reported.as_deref().and_then(parse_date);
    let transaction = raw
        .transaction
        .as_deref()
        .and_then(parse_date)
        .or(reported);
    OwnershipRecord {
        reported,
        transaction,
        filing_type: raw
            .filing_type
            .clone()
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_FILING_TYPE.to_string()),
        institution: raw.institution.trim().to_string(),
        shares: raw.shares.as_deref().and_then(parse_shares),
        percent: raw.percent.as_deref().and_then(parse_percent),
        change: raw
            .change
            .clone()
            .filter(|c| !c.trim().is_empty())
            .map_or_else(|| NOT_AVAILABLE.to_string(), |c| c.trim().to_string()),
    }
}

/// Normalize a batch, preserving source order.
#[must_use]
pub fn normalize_rows(raw: &[RawHolding]) -> Vec<OwnershipRecord> {
    raw.iter().map(record_from_raw).collect()
}
