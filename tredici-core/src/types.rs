//! The canonical domain model: validated tickers, raw source rows, the
//! normalized ownership record, and the ten-column output table.

use core::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::TrediciError;

/// Literal sentinel for any cell whose value the source did not provide.
pub const NOT_AVAILABLE: &str = "N/A";

/// Validated exchange trading symbol.
///
/// Construction trims whitespace, upper-cases, and rejects anything that is
/// not ASCII alphanumeric plus `.` or `-`. The pipeline takes the ticker
/// through an explicit request object rather than ambient state.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Parse and validate a ticker string.
    ///
    /// # Errors
    /// Returns `InvalidArg` when the trimmed input is empty or contains
    /// characters outside `[A-Za-z0-9.-]`.
    pub fn new(raw: &str) -> Result<Self, TrediciError> {
        let s = raw.trim().to_uppercase();
        if s.is_empty() {
            return Err(TrediciError::InvalidArg("empty ticker".to_string()));
        }
        if !s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
        {
            return Err(TrediciError::InvalidArg(format!("invalid ticker: {raw:?}")));
        }
        Ok(Self(s))
    }

    /// The validated symbol.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ticker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Ticker {
    type Err = TrediciError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Ticker {
    type Error = TrediciError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(&s)
    }
}

impl From<Ticker> for String {
    fn from(t: Ticker) -> Self {
        t.0
    }
}

/// One disclosure row exactly as a source produced it.
///
/// Everything except the institution display name is optional raw text;
/// sources differ wildly in what they populate. Dates stay unparsed here:
/// an unparseable date is data, and the join stage turns it into the `N/A`
/// sentinel rather than dropping the row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawHolding {
    /// Institution display name, as disclosed.
    pub institution: String,
    /// Reported date text, source format.
    pub reported: Option<String>,
    /// Transaction date text, when the source distinguishes it.
    pub transaction: Option<String>,
    /// Filing form code (e.g. "SC 13G/A"), when known.
    pub filing_type: Option<String>,
    /// Shares owned, possibly comma-grouped ("1,200,000").
    pub shares: Option<String>,
    /// Percent of outstanding shares, possibly suffixed ("7.2%").
    pub percent: Option<String>,
    /// Change vs the previous disclosure, free text.
    pub change: Option<String>,
}

/// Typed outcome of one ownership source poll.
///
/// The distinction between an unavailable source (an `Err` from the
/// provider) and a source that answered with nothing relevant is the whole
/// point: the router only advances the fallback chain on the former.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceOutcome {
    /// The source answered with disclosure rows.
    Records(Vec<RawHolding>),
    /// The source answered and positively has no relevant rows.
    NoMatchingRecords,
}

/// Canonical disclosed-holding event, produced by
/// [`crate::normalize::record_from_raw`] and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnershipRecord {
    /// Reported (filing) date, when parseable.
    pub reported: Option<NaiveDate>,
    /// Transaction date; equals the reported date when the source does not
    /// distinguish the two.
    pub transaction: Option<NaiveDate>,
    /// Filing form code, placeholder-filled when the source has none.
    pub filing_type: String,
    /// Institution display name.
    pub institution: String,
    /// Shares owned, comma-stripped.
    pub shares: Option<u64>,
    /// Percent of outstanding shares.
    pub percent: Option<Decimal>,
    /// Change vs previous disclosure, free text or placeholder.
    pub change: String,
}

/// Closing price joined onto a record: a two-decimal value or an explicit
/// sentinel, never blank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClosePrice {
    /// Close on (or nearest prior trading day before) the reference date.
    Price(Decimal),
    /// No usable date, or the date precedes the price history.
    NotAvailable,
}

impl fmt::Display for ClosePrice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Price(p) => write!(f, "{:.2}", p.round_dp(2)),
            Self::NotAvailable => f.write_str(NOT_AVAILABLE),
        }
    }
}

/// One row of the final table: a normalized record plus the synthesized
/// company/symbol columns and the joined close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisRow {
    /// The normalized disclosure event.
    pub record: OwnershipRecord,
    /// Synthesized company name (`{TICKER}{suffix}`).
    pub company: String,
    /// The ticker under analysis.
    pub symbol: String,
    /// Joined closing price for the record's reference date.
    pub close: ClosePrice,
}

impl AnalysisRow {
    /// Render the row as the ten fixed cells, in column order.
    #[must_use]
    pub fn cells(&self) -> [String; 10] {
        let date = |d: &Option<NaiveDate>| {
            d.map_or_else(
                || NOT_AVAILABLE.to_string(),
                |d| d.format("%Y-%m-%d").to_string(),
            )
        };
        [
            date(&self.record.reported),
            date(&self.record.transaction),
            self.record.filing_type.clone(),
            self.company.clone(),
            self.symbol.clone(),
            self.record.institution.clone(),
            self.record
                .shares
                .map_or_else(|| NOT_AVAILABLE.to_string(), |s| s.to_string()),
            self.record
                .percent
                .map_or_else(|| NOT_AVAILABLE.to_string(), |p| p.to_string()),
            self.record.change.clone(),
            self.close.to_string(),
        ]
    }
}

/// The external contract: exactly ten named columns in fixed order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisTable {
    /// Ticker the table was built for (names the last column).
    pub ticker: Ticker,
    /// Output rows, source order after filtering and de-duplication.
    pub rows: Vec<AnalysisRow>,
}

impl AnalysisTable {
    /// The ten column headers, in order. The last one is ticker-dependent.
    #[must_use]
    pub fn headers(&self) -> [String; 10] {
        [
            "Reported Date".to_string(),
            "Transaction Date".to_string(),
            "Type".to_string(),
            "Company".to_string(),
            "Symbol".to_string(),
            "Filed By".to_string(),
            "Shares Owned".to_string(),
            "% Owned".to_string(),
            "Change vs Prev".to_string(),
            format!("{} Close Price", self.ticker),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticker_normalizes_case_and_whitespace() {
        let t = Ticker::new("  rxrx ").unwrap();
        assert_eq!(t.as_str(), "RXRX");
    }

    #[test]
    fn ticker_rejects_empty_and_garbage() {
        assert!(Ticker::new("   ").is_err());
        assert!(Ticker::new("RX RX").is_err());
        assert!(Ticker::new("RX$").is_err());
        assert!(Ticker::new("BRK.B").is_ok());
        assert!(Ticker::new("BTC-USD").is_ok());
    }

    #[test]
    fn close_price_renders_two_decimals_or_sentinel() {
        let p = ClosePrice::Price(Decimal::new(543, 2));
        assert_eq!(p.to_string(), "5.43");
        let p = ClosePrice::Price(Decimal::new(5, 0));
        assert_eq!(p.to_string(), "5.00");
        let p = ClosePrice::Price(Decimal::new(54321, 4));
        assert_eq!(p.to_string(), "5.43");
        assert_eq!(ClosePrice::NotAvailable.to_string(), "N/A");
    }

    #[test]
    fn table_has_ten_headers_with_ticker_close_column() {
        let table = AnalysisTable {
            ticker: Ticker::new("RXRX").unwrap(),
            rows: vec![],
        };
        let headers = table.headers();
        assert_eq!(headers.len(), 10);
        assert_eq!(headers[0], "Reported Date");
        assert_eq!(headers[9], "RXRX Close Price");
    }
}
