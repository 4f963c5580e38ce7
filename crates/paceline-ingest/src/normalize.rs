//! Row cleaning helpers.

use paceline_model::{RawRow, RawValue};

/// Trim header keys and text values of a raw row. Numeric values pass
/// through unchanged. Never fails; an empty row stays empty.
///
/// # Examples
///
/// ```
/// use paceline_ingest::clean_row;
/// use paceline_model::{RawRow, RawValue};
///
/// let row = RawRow::new().with("  Name ", " Ada  ");
/// let cleaned = clean_row(&row);
/// assert_eq!(cleaned.get("Name"), Some(&RawValue::Text("Ada".to_string())));
/// ```
pub fn clean_row(row: &RawRow) -> RawRow {
    row.iter()
        .map(|(header, value)| (header.trim().to_string(), value.trimmed()))
        .collect()
}

/// Render a cell as trimmed display text. Numbers format without a
/// trailing `.0` so they line up with values that arrived as text.
pub fn display_text(value: &RawValue) -> String {
    match value {
        RawValue::Text(text) => text.trim().to_string(),
        RawValue::Number(number) => paceline_model::format_km(*number),
    }
}
