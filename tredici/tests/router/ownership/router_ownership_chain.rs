use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use tredici::Tredici;
use tredici_core::types::SourceOutcome;

use crate::helpers::{MockConnector, raw, ticker};

#[tokio::test]
async fn chain_advances_past_unavailable_source_with_warning() {
    let down = MockConnector::builder()
        .name("down")
        .ownership_unavailable()
        .build();
    let up = MockConnector::builder()
        .name("up")
        .returns_ownership_ok(SourceOutcome::Records(vec![raw(
            "BlackRock Inc.",
            "2023-05-10",
            "1,200,000",
        )]))
        .build();

    let engine = Tredici::builder()
        .with_connector(down)
        .with_connector(up)
        .build()
        .unwrap();

    let report = engine.ownership(&ticker("RXRX")).await.unwrap();
    assert_eq!(report.source.as_str(), "up");
    assert!(matches!(report.outcome, SourceOutcome::Records(_)));
    assert_eq!(report.warnings.len(), 1);
    assert!(report.warnings[0].starts_with("down:"));
}

#[tokio::test]
async fn definitive_empty_answer_stops_the_chain() {
    let calls = Arc::new(AtomicUsize::new(0));
    let calls_probe = calls.clone();

    let empty = MockConnector::builder()
        .name("empty")
        .returns_ownership_ok(SourceOutcome::NoMatchingRecords)
        .build();
    let counted = MockConnector::builder()
        .name("counted")
        .ownership_with(move |_| {
            calls_probe.fetch_add(1, Ordering::SeqCst);
            Ok(SourceOutcome::Records(vec![raw(
                "Vanguard Group Inc",
                "2023-05-12",
                "950,500",
            )]))
        })
        .build();

    let engine = Tredici::builder()
        .with_connector(empty)
        .with_connector(counted)
        .build()
        .unwrap();

    let report = engine.ownership(&ticker("RXRX")).await.unwrap();
    assert_eq!(report.outcome, SourceOutcome::NoMatchingRecords);
    // "No relevant rows" is an answer; the fallback source is never polled.
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
