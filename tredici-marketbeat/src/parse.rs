//! HTML extraction for the ownership table.
//!
//! Marketbeat reshuffles columns now and then, so the parser maps columns by
//! header keywords and only falls back to the historical positional layout
//! (date, institution, shares) when a table has no header row.

use scraper::{ElementRef, Html, Selector};
use tredici_core::types::RawHolding;

#[derive(Default)]
struct ColumnMap {
    reported: Option<usize>,
    institution: Option<usize>,
    filing_type: Option<usize>,
    shares: Option<usize>,
    percent: Option<usize>,
    change: Option<usize>,
}

impl ColumnMap {
    fn from_headers(headers: &[String]) -> Self {
        let mut map = Self::default();
        for (i, h) in headers.iter().enumerate() {
            let h = h.to_lowercase();
            if map.reported.is_none() && h.contains("date") {
                map.reported = Some(i);
            } else if map.institution.is_none()
                && (h.contains("institution")
                    || h.contains("investor")
                    || h.contains("hedge fund")
                    || h.contains("owner"))
            {
                map.institution = Some(i);
            } else if map.filing_type.is_none() && h.contains("type") {
                map.filing_type = Some(i);
            // Percent first: "% of Shares Outstanding" also contains "shares".
            } else if map.percent.is_none() && h.contains('%') && !h.contains("change") {
                map.percent = Some(i);
            } else if map.shares.is_none() && h.contains("shares") {
                map.shares = Some(i);
            } else if map.change.is_none() && h.contains("change") {
                map.change = Some(i);
            }
        }
        map
    }

    const fn positional() -> Self {
        Self {
            reported: Some(0),
            institution: Some(1),
            filing_type: None,
            shares: Some(2),
            percent: None,
            change: None,
        }
    }

    fn usable(&self) -> bool {
        self.institution.is_some()
    }
}

/// Extract disclosure rows from an ownership page. An empty vec means the
/// page rendered without a recognizable table, which the connector reports
/// as a definitive no-data outcome.
pub(crate) fn holding_rows(body: &str) -> Vec<RawHolding> {
    let doc = Html::parse_document(body);
    let table_sel = Selector::parse("table").unwrap();
    let th_sel = Selector::parse("th").unwrap();
    let tr_sel = Selector::parse("tr").unwrap();
    let td_sel = Selector::parse("td").unwrap();

    for table in doc.select(&table_sel) {
        let headers: Vec<String> = table.select(&th_sel).map(|th| cell_text(&th)).collect();
        let map = if headers.is_empty() {
            ColumnMap::positional()
        } else {
            ColumnMap::from_headers(&headers)
        };
        if !map.usable() {
            continue;
        }

        let mut rows = Vec::new();
        for tr in table.select(&tr_sel) {
            let cells: Vec<String> = tr.select(&td_sel).map(|td| cell_text(&td)).collect();
            if cells.is_empty() {
                continue; // header row
            }
            let Some(institution) = pick(&cells, map.institution).filter(|s| !s.is_empty()) else {
                continue;
            };
            rows.push(RawHolding {
                institution,
                reported: pick(&cells, map.reported),
                transaction: None,
                filing_type: pick(&cells, map.filing_type),
                shares: pick(&cells, map.shares),
                percent: pick(&cells, map.percent),
                change: pick(&cells, map.change),
            });
        }
        if !rows.is_empty() {
            return rows;
        }
    }
    Vec::new()
}

fn pick(cells: &[String], idx: Option<usize>) -> Option<String> {
    idx.and_then(|i| cells.get(i))
        .map(String::as_str)
        .filter(|s| !s.is_empty() && *s != "-")
        .map(str::to_string)
}

fn cell_text(el: &ElementRef<'_>) -> String {
    el.text().collect::<String>().split_whitespace().collect::<Vec<_>>().join(" ")
}
