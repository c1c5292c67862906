use tredici::{Tredici, TrediciError};

use crate::helpers::MockConnector;
use crate::helpers::series;

#[test]
fn build_requires_at_least_one_connector() {
    let err = Tredici::builder().build().unwrap_err();
    assert!(matches!(err, TrediciError::InvalidArg(_)));
}

#[test]
fn debug_output_names_registered_connectors() {
    let a = MockConnector::builder()
        .name("a")
        .returns_history_ok(series("RXRX", &[("2023-05-10", "5.43")]))
        .build();
    let engine = Tredici::builder().with_connector(a).build().unwrap();
    let dump = format!("{engine:?}");
    assert!(dump.contains("\"a\""), "missing connector name: {dump}");
}

#[tokio::test]
async fn unknown_and_duplicate_priority_keys_are_dropped() {
    let a = MockConnector::builder()
        .name("a")
        .returns_history_ok(series("RXRX", &[("2023-05-10", "5.43")]))
        .build();
    let ghost = MockConnector::builder().name("ghost").build();

    // "ghost" is listed in the priority but never registered; "a" twice.
    // Neither poisons the build or the routing afterwards.
    let engine = Tredici::builder()
        .with_connector(a.clone())
        .prefer_sources(&[ghost, a.clone(), a])
        .build()
        .unwrap();

    let series = engine
        .close_history(&crate::helpers::ticker("RXRX"))
        .await
        .unwrap();
    assert_eq!(series.len(), 1);
}
