//! Canonical field resolution across header variants.

use paceline_ingest::{CanonicalField, normalize_header, resolve_field, resolve_fields};
use paceline_model::{RawRow, RawValue};

#[test]
fn normalize_header_folds_case_and_separators() {
    assert_eq!(normalize_header("Best Time"), "best time");
    assert_eq!(normalize_header("best_time"), "best time");
    assert_eq!(normalize_header("  BEST-TIME "), "best time");
    assert_eq!(normalize_header("DistanceKm"), "distancekm");
}

#[test]
fn name_resolves_through_synonyms_in_order() {
    let runner = RawRow::new().with("Runner", "Bea");
    assert_eq!(
        resolve_field(&runner, CanonicalField::Name),
        Some(RawValue::Text("Bea".to_string()))
    );

    // "Name" outranks "Athlete" when both are populated.
    let both = RawRow::new().with("Athlete", "Cato").with("Name", "Ada");
    assert_eq!(
        resolve_field(&both, CanonicalField::Name),
        Some(RawValue::Text("Ada".to_string()))
    );
}

#[test]
fn blank_cells_do_not_count_as_populated() {
    let row = RawRow::new().with("Name", "   ").with("Athlete", "Cato");
    assert_eq!(
        resolve_field(&row, CanonicalField::Name),
        Some(RawValue::Text("Cato".to_string()))
    );
}

#[test]
fn header_casing_and_spacing_variants_resolve() {
    let row = RawRow::new().with("  best time ", "12:34");
    assert_eq!(
        resolve_field(&row, CanonicalField::Time),
        Some(RawValue::Text("12:34".to_string()))
    );
}

#[test]
fn resolve_fields_builds_the_canonical_set() {
    let row = RawRow::new()
        .with(" Name ", " Ada ")
        .with("Distance", "5km")
        .with("Best Time", " 20:00")
        .with("Date", "2024-03-01");
    let fields = resolve_fields(&row);
    assert_eq!(fields.name.as_deref(), Some("Ada"));
    assert_eq!(fields.time, Some(RawValue::Text("20:00".to_string())));
    assert_eq!(fields.distance, Some(RawValue::Text("5km".to_string())));
    assert_eq!(fields.distance_km, None);
    assert_eq!(fields.date.as_deref(), Some("2024-03-01"));
}

#[test]
fn unusable_row_resolves_to_empty_set_without_failing() {
    let row = RawRow::new().with("Shoes", "blue").with("Club", "  ");
    let fields = resolve_fields(&row);
    assert!(fields.is_empty());

    let empty = RawRow::new();
    assert!(resolve_fields(&empty).is_empty());
}

#[test]
fn numeric_cells_survive_resolution() {
    let row = RawRow::new().with("DistanceKm", 5.0).with("Time", 1200.0);
    let fields = resolve_fields(&row);
    assert_eq!(fields.distance_km, Some(RawValue::Number(5.0)));
    assert_eq!(fields.time, Some(RawValue::Number(1200.0)));
}
