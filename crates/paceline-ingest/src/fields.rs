//! Canonical field resolution through a declarative header-synonym table.
//!
//! Each canonical field carries an ordered list of recognized header
//! synonyms; resolution takes the first populated match. Header comparison
//! folds casing and separator variants so `best_time`, `Best Time` and
//! `BEST-TIME` all resolve the same way.

use paceline_model::{RawRow, RawValue};
use tracing::debug;

use crate::normalize::{clean_row, display_text};

/// Canonical fields the rest of the pipeline consumes from a raw row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    Name,
    Time,
    Distance,
    DistanceKm,
    Date,
}

impl CanonicalField {
    /// Recognized header synonyms, in resolution priority order.
    pub fn synonyms(self) -> &'static [&'static str] {
        match self {
            CanonicalField::Name => &["Name", "Runner", "Athlete"],
            CanonicalField::Time => &["Time", "Best Time", "Time(s)"],
            CanonicalField::Distance => &["Distance"],
            CanonicalField::DistanceKm => &["DistanceKm"],
            CanonicalField::Date => &["Date", "DateString"],
        }
    }
}

/// Fold a header for comparison: lowercase, separators collapsed to single
/// spaces, outer whitespace removed.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Resolve one canonical field from a row: the first synonym (in priority
/// order) whose cell is populated. Blank cells do not count as populated.
pub fn resolve_field(row: &RawRow, field: CanonicalField) -> Option<RawValue> {
    for synonym in field.synonyms() {
        let wanted = normalize_header(synonym);
        for (header, value) in row.iter() {
            if normalize_header(header) == wanted && !value.is_blank() {
                return Some(value.trimmed());
            }
        }
    }
    None
}

/// The canonical field set resolved from one raw row. Every slot is
/// optional; a row with no usable cells resolves to an all-empty set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldSet {
    /// Athlete name, trimmed display text.
    pub name: Option<String>,
    /// Elapsed-time cell, kept loosely typed for the time parser.
    pub time: Option<RawValue>,
    /// Distance cell, kept loosely typed for the distance parser; its
    /// display text doubles as the verbatim distance label.
    pub distance: Option<RawValue>,
    /// Pre-resolved kilometer cell (`DistanceKm` header), when present.
    pub distance_km: Option<RawValue>,
    /// Date cell as trimmed display text.
    pub date: Option<String>,
}

impl FieldSet {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.time.is_none()
            && self.distance.is_none()
            && self.distance_km.is_none()
            && self.date.is_none()
    }
}

/// Clean a raw row and resolve its canonical field set.
pub fn resolve_fields(row: &RawRow) -> FieldSet {
    let cleaned = clean_row(row);
    let fields = FieldSet {
        name: resolve_field(&cleaned, CanonicalField::Name)
            .as_ref()
            .map(display_text),
        time: resolve_field(&cleaned, CanonicalField::Time),
        distance: resolve_field(&cleaned, CanonicalField::Distance),
        distance_km: resolve_field(&cleaned, CanonicalField::DistanceKm),
        date: resolve_field(&cleaned, CanonicalField::Date)
            .as_ref()
            .map(display_text),
    };
    if fields.is_empty() {
        debug!(headers = row.cells.len(), "row resolved to no usable fields");
    }
    fields
}
