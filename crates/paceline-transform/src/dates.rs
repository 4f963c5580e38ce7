//! Date label normalization for the time-series axis.

use chrono::{NaiveDate, NaiveDateTime};

/// Normalize a raw date cell into a grouping label.
///
/// Parseable dates format to ISO `YYYY-MM-DD` so the axis sorts correctly
/// lexically; unparseable text is preserved verbatim as its own label.
/// Empty input is `None`, letting the caller fall back to a synthetic
/// per-row label.
pub fn resolve_date_label(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match parse_date(trimmed) {
        Some(date) => Some(date.format("%Y-%m-%d").to_string()),
        None => Some(trimmed.to_string()),
    }
}

/// Multi-format date attempt over the forms that show up in run-log
/// spreadsheets. A datetime value keeps its date part.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    const DATE_FORMATS: [&str; 8] = [
        "%Y-%m-%d",
        "%Y/%m/%d",
        "%d/%m/%Y",  // European: 15/01/2024
        "%m/%d/%Y",  // US: 01/15/2024
        "%d.%m.%Y",  // German: 15.01.2024
        "%d-%b-%Y",  // 15-Jan-2024
        "%b %d, %Y", // Jan 15, 2024
        "%d %b %Y",  // 15 Jan 2024
    ];

    for format in &DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return Some(date);
        }
    }

    const DATETIME_FORMATS: [&str; 3] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ];

    for format in &DATETIME_FORMATS {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(value, format) {
            return Some(datetime.date());
        }
    }

    None
}
