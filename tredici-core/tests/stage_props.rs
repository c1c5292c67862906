use chrono::NaiveDate;
use proptest::prelude::*;
use rust_decimal::Decimal;
use std::collections::HashSet;

use tredici_core::filter::{dedupe_records, retain_watchlist};
use tredici_core::join::close_for;
use tredici_core::normalize::record_from_raw;
use tredici_core::types::{ClosePrice, RawHolding, Ticker};
use tredici_core::{PriceSeries, Watchlist};

fn arb_institution() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("BlackRock Inc.".to_string()),
        Just("BLACKROCK FUND ADVISORS".to_string()),
        Just("Vanguard Group Inc".to_string()),
        Just("ARK Investment Management LLC".to_string()),
        Just("State Street Corp".to_string()),
        Just("Fidelity Management".to_string()),
    ]
}

fn arb_raw() -> impl Strategy<Value = RawHolding> {
    (
        arb_institution(),
        proptest::option::of(0u32..2000u32),
        proptest::option::of(1u64..10_000_000u64),
    )
        .prop_map(|(institution, day_offset, shares)| RawHolding {
            institution,
            reported: day_offset.map(|off| {
                let base = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
                (base + chrono::Days::new(u64::from(off)))
                    .format("%Y-%m-%d")
                    .to_string()
            }),
            shares: shares.map(|s| s.to_string()),
            ..RawHolding::default()
        })
}

proptest! {
    #[test]
    fn filtered_rows_all_match_watchlist(rows in proptest::collection::vec(arb_raw(), 0..40)) {
        let watchlist = Watchlist::default();
        let kept = retain_watchlist(rows, &watchlist);
        prop_assert!(kept.iter().all(|r| watchlist.matches(&r.institution)));
    }

    #[test]
    fn dedupe_output_has_unique_keys(rows in proptest::collection::vec(arb_raw(), 0..40)) {
        let records: Vec<_> = rows.iter().map(record_from_raw).collect();
        let deduped = dedupe_records(records);
        let mut seen = HashSet::new();
        for r in &deduped {
            if let Some(date) = r.reported {
                prop_assert!(seen.insert((date, r.institution.to_lowercase())));
            }
        }
    }

    #[test]
    fn dedupe_is_idempotent(rows in proptest::collection::vec(arb_raw(), 0..40)) {
        let records: Vec<_> = rows.iter().map(record_from_raw).collect();
        let once = dedupe_records(records);
        let twice = dedupe_records(once.clone());
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn join_never_yields_blank(rows in proptest::collection::vec(arb_raw(), 0..20)) {
        let ticker = Ticker::new("RXRX").unwrap();
        let series = PriceSeries::new(
            ticker,
            vec![
                (NaiveDate::from_ymd_opt(2021, 6, 1).unwrap(), Decimal::new(1000, 2)),
                (NaiveDate::from_ymd_opt(2021, 6, 2).unwrap(), Decimal::new(1010, 2)),
            ],
        );
        for raw in &rows {
            let record = record_from_raw(raw);
            match close_for(&record, &series) {
                ClosePrice::Price(p) => {
                    // Two-decimal rendering, and the value came from the series.
                    prop_assert!(p == Decimal::new(1000, 2) || p == Decimal::new(1010, 2));
                }
                ClosePrice::NotAvailable => {
                    let date = record.transaction;
                    prop_assert!(
                        date.is_none()
                            || date.unwrap() < NaiveDate::from_ymd_opt(2021, 6, 1).unwrap()
                    );
                }
            }
        }
    }
}
