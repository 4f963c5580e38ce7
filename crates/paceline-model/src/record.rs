//! Raw source rows and the normalized record that flows through the pipeline.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fallback athlete name when no name field is populated.
pub const UNKNOWN_ATHLETE: &str = "Unknown";

/// Fallback distance grouping key when no distance information is usable.
pub const UNKNOWN_DISTANCE: &str = "unknown";

/// A single loosely-typed cell value from the source spreadsheet.
///
/// Exported sheets carry numbers and text interchangeably in the same
/// column, so both shapes must survive deserialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// The text content, if this is a text cell.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(text) => Some(text),
            RawValue::Number(_) => None,
        }
    }

    /// The numeric content, if this is a numeric cell.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            RawValue::Number(value) => Some(*value),
            RawValue::Text(_) => None,
        }
    }

    /// The value with incidental whitespace removed. Numbers pass through
    /// unchanged.
    pub fn trimmed(&self) -> RawValue {
        match self {
            RawValue::Text(text) => RawValue::Text(text.trim().to_string()),
            RawValue::Number(value) => RawValue::Number(*value),
        }
    }

    /// Whether the cell holds no usable content (blank text).
    pub fn is_blank(&self) -> bool {
        match self {
            RawValue::Text(text) => text.trim().is_empty(),
            RawValue::Number(_) => false,
        }
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Number(value)
    }
}

/// One raw row as exported from the spreadsheet source: an arbitrary
/// string-keyed mapping. Headers and values may carry incidental whitespace
/// and header names vary across synonyms (`Name`/`Runner`/`Athlete`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RawRow {
    pub cells: BTreeMap<String, RawValue>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insertion, mostly for constructing fixtures.
    pub fn with(mut self, header: &str, value: impl Into<RawValue>) -> Self {
        self.cells.insert(header.to_string(), value.into());
        self
    }

    /// Look up a cell by exact header.
    pub fn get(&self, header: &str) -> Option<&RawValue> {
        self.cells.get(header)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &RawValue)> {
        self.cells.iter()
    }
}

impl FromIterator<(String, RawValue)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, RawValue)>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().collect(),
        }
    }
}

/// The canonical unit flowing through ranking and aggregation.
///
/// Every raw row produces exactly one record. Per-field parse failures
/// degrade to `None` (or the `"Unknown"`/`"unknown"` sentinels) instead of
/// dropping the row, so malformed input still participates in grouping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    /// Athlete name from the first populated synonym field, trimmed.
    pub name: String,
    /// Canonical distance in kilometers, when parseable.
    pub distance_km: Option<f64>,
    /// Grouping key for the race distance. Never empty: verbatim source
    /// label, synthesized `"{km}km"`, or the `"unknown"` sentinel.
    pub distance_label: String,
    /// Canonical elapsed time in seconds, when parseable.
    pub time_seconds: Option<f64>,
    /// Canonical date label (ISO when parseable, original text otherwise);
    /// `None` when the source row had no date at all.
    pub date: Option<String>,
    /// Minutes per kilometer, derived from canonical time and distance.
    pub pace_min_per_km: Option<f64>,
    /// Kilometers per hour, derived from canonical time and distance.
    pub avg_speed_km_h: Option<f64>,
}

impl NormalizedRecord {
    /// The `"{km}km"` label equivalent of the canonical distance, used for
    /// numeric-equivalent filter matching alongside `distance_label`.
    pub fn km_label(&self) -> Option<String> {
        self.distance_km.map(|km| format!("{}km", format_km(km)))
    }
}

/// Format kilometers without trailing zeros, so `5.0` renders as `"5"` and
/// synthesized labels line up with labels that arrived as text.
pub fn format_km(value: f64) -> String {
    let formatted = format!("{value}");
    if formatted.contains('.') {
        formatted
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    } else {
        formatted
    }
}
