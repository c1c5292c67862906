#![allow(dead_code)]

// Re-export helpers so tests can `use crate::helpers::*;`
pub mod mock_connector;

pub use mock_connector::MockConnector;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tredici_core::PriceSeries;
use tredici_core::types::{RawHolding, Ticker};

pub fn ticker(s: &str) -> Ticker {
    Ticker::new(s).unwrap()
}

pub fn d(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

/// Build a price series from `(date, close)` string pairs without unwrap
/// noise in tests.
pub fn series(symbol: &str, points: &[(&str, &str)]) -> PriceSeries {
    PriceSeries::new(
        ticker(symbol),
        points
            .iter()
            .map(|(date, close)| (d(date), close.parse::<Decimal>().unwrap())),
    )
}

/// A disclosure row the way the scrape source would hand it over.
pub fn raw(institution: &str, reported: &str, shares: &str) -> RawHolding {
    RawHolding {
        institution: institution.to_string(),
        reported: Some(reported.to_string()),
        shares: Some(shares.to_string()),
        ..RawHolding::default()
    }
}
