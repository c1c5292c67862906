use tredici::{Tredici, TrediciError};

use crate::helpers::{MockConnector, ticker};

#[tokio::test]
async fn all_not_found_collapses_to_single_not_found() {
    let a = MockConnector::builder()
        .name("a")
        .history_with(|t| Err(TrediciError::not_found(format!("price history for {t}"))))
        .build();
    let b = MockConnector::builder()
        .name("b")
        .history_with(|t| Err(TrediciError::not_found(format!("price history for {t}"))))
        .build();

    let engine = Tredici::builder()
        .with_connector(a)
        .with_connector(b)
        .build()
        .unwrap();

    let err = engine.close_history(&ticker("ZZZZ")).await.unwrap_err();
    let TrediciError::NotFound { what } = err else {
        panic!("expected NotFound, got {err}");
    };
    assert_eq!(what, "price history for ZZZZ");
}

#[tokio::test]
async fn mixed_failures_aggregate() {
    let nf = MockConnector::builder()
        .name("nf")
        .history_with(|t| Err(TrediciError::not_found(format!("price history for {t}"))))
        .build();
    let down = MockConnector::builder()
        .name("down")
        .history_with(|_| Err(TrediciError::source("down", "connection refused")))
        .build();

    let engine = Tredici::builder()
        .with_connector(nf)
        .with_connector(down)
        .build()
        .unwrap();

    let err = engine.close_history(&ticker("RXRX")).await.unwrap_err();
    assert!(matches!(err, TrediciError::AllSourcesFailed(_)));
}

#[tokio::test]
async fn no_history_capability_is_unsupported() {
    let ownership_only = MockConnector::builder()
        .name("scrape")
        .ownership_unavailable()
        .build();

    let engine = Tredici::builder()
        .with_connector(ownership_only)
        .build()
        .unwrap();

    let err = engine.close_history(&ticker("RXRX")).await.unwrap_err();
    assert!(matches!(err, TrediciError::Unsupported { .. }));
}
