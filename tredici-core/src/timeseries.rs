//! The immutable daily close series and its date lookups.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::types::Ticker;

/// Date-indexed daily closing prices for one ticker, spanning listing to
/// present. Immutable once fetched for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceSeries {
    ticker: Ticker,
    closes: BTreeMap<NaiveDate, Decimal>,
}

impl PriceSeries {
    /// Build a series from (date, close) pairs. Duplicate dates keep the
    /// last value seen.
    #[must_use]
    pub fn new<I>(ticker: Ticker, closes: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, Decimal)>,
    {
        Self {
            ticker,
            closes: closes.into_iter().collect(),
        }
    }

    /// Ticker the series belongs to.
    #[must_use]
    pub fn ticker(&self) -> &Ticker {
        &self.ticker
    }

    /// Number of trading days in the series.
    #[must_use]
    pub fn len(&self) -> usize {
        self.closes.len()
    }

    /// Whether the series holds no trading days at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.closes.is_empty()
    }

    /// First trading date in the series, if any.
    #[must_use]
    pub fn first_date(&self) -> Option<NaiveDate> {
        self.closes.keys().next().copied()
    }

    /// Last trading date in the series, if any.
    #[must_use]
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.closes.keys().next_back().copied()
    }

    /// Exact-date close lookup.
    #[must_use]
    pub fn close_on(&self, date: NaiveDate) -> Option<Decimal> {
        self.closes.get(&date).copied()
    }

    /// Close on `date`, or on the nearest prior trading day.
    ///
    /// Reported dates are frequently weekends or holidays; an exact-only
    /// lookup would resolve most of them to nothing. The backward search is
    /// bounded by the series: a date before the first trade yields `None`.
    #[must_use]
    pub fn close_on_or_before(&self, date: NaiveDate) -> Option<Decimal> {
        self.closes.range(..=date).next_back().map(|(_, c)| *c)
    }
}
