use std::sync::Arc;

use tredici::{AnalysisRequest, Tredici, TrediciConnector, Watchlist};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();

    // Two registered sources; the priority list says the feed goes first.
    // A custom watchlist replaces the default three institutions.
    let fixtures: Arc<dyn TrediciConnector> = Arc::new(tredici_mock::MockConnector::new());
    let yahoo: Arc<dyn TrediciConnector> =
        Arc::new(tredici_yahoo::YahooConnector::new_default()?);

    let engine = Tredici::builder()
        .with_connector(yahoo.clone())
        .with_connector(fixtures.clone())
        .prefer_sources(&[fixtures, yahoo])
        .watchlist(Watchlist::new(["blackrock", "state street"]))
        .build()?;

    let report = engine.analyze(AnalysisRequest::new("RXRX")?).await?;
    println!(
        "answered by {} with outcome {:?} ({} warnings)",
        report.source.as_str(),
        report.outcome,
        report.warnings.len()
    );

    Ok(())
}
