use tredici::{Tredici, TrediciError};

use crate::helpers::{MockConnector, series, ticker};

#[tokio::test]
async fn all_sources_unavailable_aggregates_errors() {
    let a = MockConnector::builder().name("a").ownership_unavailable().build();
    let b = MockConnector::builder().name("b").ownership_unavailable().build();

    let engine = Tredici::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = engine.ownership(&ticker("RXRX")).await.unwrap_err();
    let TrediciError::AllSourcesFailed(errors) = err else {
        panic!("expected AllSourcesFailed, got {err}");
    };
    assert_eq!(errors.len(), 2);
}

#[tokio::test]
async fn no_ownership_capability_is_unsupported() {
    // History-only connector: registered, but never eligible for ownership.
    let prices_only = MockConnector::builder()
        .name("prices")
        .returns_history_ok(series("RXRX", &[("2023-05-10", "5.43")]))
        .build();

    let engine = Tredici::builder()
        .with_connector(prices_only)
        .build()
        .unwrap();

    let err = engine.ownership(&ticker("RXRX")).await.unwrap_err();
    assert!(matches!(err, TrediciError::Unsupported { .. }));
}
