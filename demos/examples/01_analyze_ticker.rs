use tredici::{AnalysisRequest, PipelineOutcome};
use tredici_core::export;
use tredici_demos::common;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Human-friendly tracing with env-based filtering.
    // Suggested: RUST_LOG=info,tredici=debug
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .try_init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "RXRX".to_string());

    let engine = common::engine()?;
    let report = engine.analyze(AnalysisRequest::new(&symbol)?).await?;

    for w in &report.warnings {
        eprintln!("warning: skipped source {w}");
    }

    match report.outcome {
        PipelineOutcome::Completed => {
            let table = report.table.expect("completed run carries a table");
            let path = export::suggested_filename(&table);
            std::fs::write(&path, export::to_csv_bytes(&table)?)?;
            println!(
                "{} rows from {} -> {path}",
                table.rows.len(),
                report.source.as_str()
            );
        }
        PipelineOutcome::NoRecords => {
            println!("{symbol}: source answered, no disclosure rows on file");
        }
        PipelineOutcome::NoMatchingInstitutions => {
            println!("{symbol}: disclosures found, none from watchlist institutions");
        }
        // PipelineOutcome is non_exhaustive.
        outcome => println!("{symbol}: {outcome:?}, nothing to export"),
    }

    Ok(())
}
