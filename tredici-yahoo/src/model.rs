//! Wire types for the two Yahoo endpoints, kept to the fields we read.

use serde::Deserialize;

// v8 chart

#[derive(Debug, Deserialize)]
pub(crate) struct ChartEnvelope {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ChartResult {
    #[serde(default)]
    pub timestamp: Vec<i64>,
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Indicators {
    #[serde(default)]
    pub quote: Vec<QuoteBlock>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteBlock {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

// v10 quoteSummary, institutionOwnership module

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryEnvelope {
    #[serde(rename = "quoteSummary")]
    pub quote_summary: QuoteSummary,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuoteSummary {
    pub result: Option<Vec<SummaryResult>>,
    pub error: Option<ApiError>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SummaryResult {
    #[serde(rename = "institutionOwnership")]
    pub institution_ownership: Option<InstitutionOwnership>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct InstitutionOwnership {
    #[serde(rename = "ownershipList", default)]
    pub ownership_list: Vec<HolderEntry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct HolderEntry {
    pub organization: String,
    #[serde(rename = "reportDate")]
    pub report_date: Option<FormattedValue>,
    #[serde(rename = "pctHeld")]
    pub pct_held: Option<FormattedValue>,
    pub position: Option<FormattedValue>,
}

/// Yahoo's `{raw, fmt}` wrapper around scalars.
#[derive(Debug, Deserialize)]
pub(crate) struct FormattedValue {
    pub raw: Option<f64>,
    pub fmt: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApiError {
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub description: String,
}
