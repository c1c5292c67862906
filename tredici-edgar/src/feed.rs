//! Atom feed extraction.
//!
//! The filings index is Atom XML, but it is simple enough that the lenient
//! HTML parser handles it: `entry` elements with `title` and `updated`
//! children. Titles carry `"{FORM} - {FILER} (Filer)"`; the updated
//! timestamp supplies the reported date. Shares and percentages are not in
//! the feed, so those columns stay empty and the change column points the
//! reader at the filing itself.

use scraper::{Html, Selector};
use tredici_core::types::RawHolding;

const CHANGE_PLACEHOLDER: &str = "See filing";

/// One row per feed entry whose title parses as a filing.
pub(crate) fn holding_rows(body: &str) -> Vec<RawHolding> {
    let doc = Html::parse_document(body);
    let entry_sel = Selector::parse("entry").unwrap();
    let title_sel = Selector::parse("title").unwrap();
    let updated_sel = Selector::parse("updated").unwrap();

    let mut rows = Vec::new();
    for entry in doc.select(&entry_sel) {
        let title = entry
            .select(&title_sel)
            .next()
            .map(|t| t.text().collect::<String>());
        let Some((form, filer)) = title.as_deref().and_then(split_title) else {
            continue;
        };
        let updated = entry
            .select(&updated_sel)
            .next()
            .map(|u| u.text().collect::<String>());
        rows.push(RawHolding {
            institution: filer,
            reported: updated.as_deref().map(date_prefix),
            transaction: None,
            filing_type: Some(form),
            shares: None,
            percent: None,
            change: Some(CHANGE_PLACEHOLDER.to_string()),
        });
    }
    rows
}

/// `"SC 13G/A - BlackRock Inc. (Filer)"` → `("SC 13G/A", "BlackRock Inc.")`.
fn split_title(title: &str) -> Option<(String, String)> {
    let (form, rest) = title.split_once(" - ")?;
    let filer = rest
        .trim()
        .trim_end_matches("(Filer)")
        .trim_end_matches("(Filed by)")
        .trim();
    if form.trim().is_empty() || filer.is_empty() {
        return None;
    }
    Some((form.trim().to_string(), filer.to_string()))
}

/// `"2023-05-10T14:02:11-04:00"` → `"2023-05-10"`.
fn date_prefix(updated: &str) -> String {
    updated.trim().chars().take(10).collect()
}
