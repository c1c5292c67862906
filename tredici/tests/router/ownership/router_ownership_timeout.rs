use std::time::Duration;

use tredici::{Tredici, TrediciError};
use tredici_core::types::SourceOutcome;

use crate::helpers::{MockConnector, raw, ticker};

#[tokio::test(start_paused = true)]
async fn all_sources_timing_out_collapses_to_one_error() {
    let slow_a = MockConnector::builder()
        .name("slow_a")
        .delay_ms(5_000)
        .returns_ownership_ok(SourceOutcome::NoMatchingRecords)
        .build();
    let slow_b = MockConnector::builder()
        .name("slow_b")
        .delay_ms(5_000)
        .returns_ownership_ok(SourceOutcome::NoMatchingRecords)
        .build();

    let engine = Tredici::builder()
        .with_connector(slow_a)
        .with_connector(slow_b)
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let err = engine.ownership(&ticker("RXRX")).await.unwrap_err();
    assert!(matches!(err, TrediciError::AllSourcesTimedOut { .. }));
}

#[tokio::test(start_paused = true)]
async fn timed_out_source_is_skipped_like_any_outage() {
    let slow = MockConnector::builder()
        .name("slow")
        .delay_ms(5_000)
        .returns_ownership_ok(SourceOutcome::NoMatchingRecords)
        .build();
    let fast = MockConnector::builder()
        .name("fast")
        .returns_ownership_ok(SourceOutcome::Records(vec![raw(
            "ARK Investment Management LLC",
            "2023-05-13",
            "310,250",
        )]))
        .build();

    let engine = Tredici::builder()
        .with_connector(slow)
        .with_connector(fast)
        .provider_timeout(Duration::from_millis(100))
        .build()
        .unwrap();

    let report = engine.ownership(&ticker("RXRX")).await.unwrap();
    assert_eq!(report.source.as_str(), "fast");
    assert_eq!(report.warnings.len(), 1);
}
