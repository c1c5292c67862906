//! Watchlist filtering and (reported date, institution) de-duplication.

use std::collections::HashSet;

use tredici_types::Watchlist;

use crate::types::{OwnershipRecord, RawHolding};

/// Keep only rows whose institution name matches the watchlist.
///
/// This is the single filter stage; adapters hand over everything they
/// scraped and do not carry their own keyword lists.
#[must_use]
pub fn retain_watchlist(rows: Vec<RawHolding>, watchlist: &Watchlist) -> Vec<RawHolding> {
    rows.into_iter()
        .filter(|r| watchlist.matches(&r.institution))
        .collect()
}

/// Drop repeated (reported date, case-folded institution) pairs, first
/// occurrence wins. Records with no parseable reported date are never
/// merged with each other.
#[must_use]
pub fn dedupe_records(records: Vec<OwnershipRecord>) -> Vec<OwnershipRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| match r.reported {
            Some(date) => seen.insert((date, r.institution.to_lowercase())),
            None => true,
        })
        .collect()
}
