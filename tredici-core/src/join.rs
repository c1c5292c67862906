//! Price join: attach the closing price for each record's reference date
//! and assemble the final output rows.

use crate::timeseries::PriceSeries;
use crate::types::{AnalysisRow, ClosePrice, OwnershipRecord, Ticker};

/// Look up the close for one record.
///
/// The transaction date is the reference date (it equals the reported date
/// when the source does not distinguish them). Exact trading days match
/// directly; non-trading days fall back to the nearest prior trading day
/// within the series; a missing or pre-listing date is the sentinel.
#[must_use]
pub fn close_for(record: &OwnershipRecord, series: &PriceSeries) -> ClosePrice {
    record
        .transaction
        .and_then(|date| series.close_on_or_before(date))
        .map_or(ClosePrice::NotAvailable, |p| {
            ClosePrice::Price(p.round_dp(2))
        })
}

/// Join a batch of records against the price series, synthesizing the
/// company and symbol columns.
#[must_use]
pub fn build_rows(
    ticker: &Ticker,
    company_suffix: &str,
    records: Vec<OwnershipRecord>,
    series: &PriceSeries,
) -> Vec<AnalysisRow> {
    let company = format!("{ticker}{company_suffix}");
    records
        .into_iter()
        .map(|record| {
            let close = close_for(&record, series);
            AnalysisRow {
                record,
                company: company.clone(),
                symbol: ticker.to_string(),
                close,
            }
        })
        .collect()
}
