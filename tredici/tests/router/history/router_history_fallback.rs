use tredici::Tredici;
use tredici_core::TrediciError;

use crate::helpers::{MockConnector, series, ticker};

#[tokio::test]
async fn history_falls_back_when_first_errors() {
    let err = MockConnector::builder()
        .name("err")
        .history_with(|_| Err(TrediciError::source("err", "connection refused")))
        .build();
    let ok = MockConnector::builder()
        .name("ok")
        .returns_history_ok(series(
            "RXRX",
            &[("2023-05-10", "5.43"), ("2023-05-12", "5.60")],
        ))
        .build();

    let engine = Tredici::builder()
        .with_connector(err)
        .with_connector(ok)
        .build()
        .unwrap();

    let out = engine.close_history(&ticker("RXRX")).await.unwrap();
    assert_eq!(out.len(), 2);
}

#[tokio::test]
async fn empty_series_is_skipped_like_not_found() {
    let empty = MockConnector::builder()
        .name("empty")
        .returns_history_ok(series("RXRX", &[]))
        .build();
    let full = MockConnector::builder()
        .name("full")
        .returns_history_ok(series("RXRX", &[("2023-05-10", "5.43")]))
        .build();

    let engine = Tredici::builder()
        .with_connector(empty)
        .with_connector(full)
        .build()
        .unwrap();

    let out = engine.close_history(&ticker("RXRX")).await.unwrap();
    assert_eq!(out.len(), 1);
}
