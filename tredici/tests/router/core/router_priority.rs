use tredici::Tredici;
use tredici_core::types::SourceOutcome;

use crate::helpers::{MockConnector, raw, ticker};

#[tokio::test]
async fn explicit_priority_overrides_registration_order() {
    let scrape = MockConnector::builder()
        .name("scrape")
        .returns_ownership_ok(SourceOutcome::Records(vec![raw(
            "BlackRock Inc.",
            "2023-05-10",
            "1,200,000",
        )]))
        .build();
    let feed = MockConnector::builder()
        .name("feed")
        .returns_ownership_ok(SourceOutcome::Records(vec![raw(
            "Vanguard Group Inc",
            "2023-05-12",
            "950,500",
        )]))
        .build();

    // Registered scrape-first, but the priority list says feed wins.
    let engine = Tredici::builder()
        .with_connector(scrape.clone())
        .with_connector(feed.clone())
        .prefer_sources(&[feed, scrape])
        .build()
        .unwrap();

    let report = engine.ownership(&ticker("RXRX")).await.unwrap();
    assert_eq!(report.source.as_str(), "feed");
    assert!(report.warnings.is_empty());
}

#[tokio::test]
async fn registration_order_is_the_default_priority() {
    let first = MockConnector::builder()
        .name("first")
        .returns_ownership_ok(SourceOutcome::NoMatchingRecords)
        .build();
    let second = MockConnector::builder()
        .name("second")
        .returns_ownership_ok(SourceOutcome::Records(vec![raw(
            "BlackRock Inc.",
            "2023-05-10",
            "1,200,000",
        )]))
        .build();

    let engine = Tredici::builder()
        .with_connector(first)
        .with_connector(second)
        .build()
        .unwrap();

    // The first source answered definitively, so the second is never asked.
    let report = engine.ownership(&ticker("RXRX")).await.unwrap();
    assert_eq!(report.source.as_str(), "first");
    assert_eq!(report.outcome, SourceOutcome::NoMatchingRecords);
}
