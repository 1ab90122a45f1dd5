//! Choice-table CSV parsing.
//!
//! Each file has a `code,label` header. Values are trimmed; a leading BOM
//! on the header is ignored. Blank lines are skipped.

use std::path::Path;

use csv::ReaderBuilder;

use census_model::ChoiceTable;

use crate::error::StandardsError;

const CODE_COLUMN: &str = "code";
const LABEL_COLUMN: &str = "label";

/// Parse one choice table named `name` from CSV bytes.
pub fn parse_choice_csv(name: &str, path: &Path, bytes: &[u8]) -> Result<ChoiceTable, StandardsError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| StandardsError::csv(path, e.to_string()))?
        .clone();
    let column = |wanted: &str| {
        headers
            .iter()
            .position(|h| h.trim_matches('\u{feff}').eq_ignore_ascii_case(wanted))
            .ok_or_else(|| StandardsError::csv(path, format!("missing `{wanted}` column")))
    };
    let code_idx = column(CODE_COLUMN)?;
    let label_idx = column(LABEL_COLUMN)?;

    let mut table = ChoiceTable::new(name);
    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(|e| StandardsError::csv(path, e.to_string()))?;
        let code = record.get(code_idx).unwrap_or("");
        let label = record.get(label_idx).unwrap_or("");
        if code.is_empty() {
            if label.is_empty() {
                continue;
            }
            return Err(StandardsError::csv(
                path,
                format!("row {}: empty code for label `{label}`", row + 2),
            ));
        }
        if table.contains(code) {
            return Err(StandardsError::csv(
                path,
                format!("row {}: duplicate code `{code}`", row + 2),
            ));
        }
        table.insert(code, label);
    }
    Ok(table)
}
