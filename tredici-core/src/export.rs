//! CSV export of the final table.
//!
//! The file is UTF-8 with a byte-order mark so spreadsheet tools pick the
//! encoding up without prompting.

use std::io::Write;

use crate::TrediciError;
use crate::types::AnalysisTable;

const UTF8_BOM: &[u8] = b"\xef\xbb\xbf";

/// Serialize the table as BOM-prefixed CSV: the ten-column header followed
/// by one line per row.
///
/// # Errors
/// Returns `Data` on any I/O or serialization failure of the underlying
/// writer.
pub fn write_csv<W: Write>(table: &AnalysisTable, mut out: W) -> Result<(), TrediciError> {
    out.write_all(UTF8_BOM)
        .map_err(|e| TrediciError::Data(format!("csv write: {e}")))?;
    let mut w = csv::Writer::from_writer(out);
    w.write_record(table.headers())
        .map_err(|e| TrediciError::Data(format!("csv write: {e}")))?;
    for row in &table.rows {
        w.write_record(row.cells())
            .map_err(|e| TrediciError::Data(format!("csv write: {e}")))?;
    }
    w.flush()
        .map_err(|e| TrediciError::Data(format!("csv write: {e}")))?;
    Ok(())
}

/// Serialize to an in-memory buffer.
///
/// # Errors
/// Propagates [`write_csv`] failures.
pub fn to_csv_bytes(table: &AnalysisTable) -> Result<Vec<u8>, TrediciError> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    Ok(buf)
}

/// Download filename for a table: `{TICKER}_analysis.csv`.
#[must_use]
pub fn suggested_filename(table: &AnalysisTable) -> String {
    format!("{}_analysis.csv", table.ticker)
}
