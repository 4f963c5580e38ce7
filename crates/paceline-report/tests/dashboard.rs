//! Whole-dashboard recomputation: explicit visible-rows hand-off, the
//! empty-filter fallback, and medal-tally invariance under filtering.

use paceline_model::RawRow;
use paceline_report::{DashboardSelection, LeaderboardFilter, recompute};
use paceline_transform::build_records;

fn row(name: &str, distance: &str, time: &str) -> RawRow {
    RawRow::new()
        .with("Name", name)
        .with("Distance", distance)
        .with("Time", time)
}

fn sample_records() -> Vec<paceline_model::NormalizedRecord> {
    build_records(&[
        row("A", "5km", "20:00"),
        row("B", "5km", "20:00"),
        row("A", "10km", "45:30"),
        row("C", "10km", "44:00"),
    ])
}

#[test]
fn filtering_never_changes_the_medal_tally() {
    let records = sample_records();

    let unfiltered = recompute(&records, &DashboardSelection::default());
    let filtered = recompute(
        &records,
        &DashboardSelection {
            filter: LeaderboardFilter {
                distance_label: Some("5km".to_string()),
                name_query: None,
            },
            ..DashboardSelection::default()
        },
    );

    assert_eq!(unfiltered.medal_tally, filtered.medal_tally);
    assert_eq!(filtered.medal_tally.golds_for("A"), 1);
    assert_eq!(filtered.medal_tally.golds_for("B"), 1);
    assert_eq!(filtered.medal_tally.golds_for("C"), 1);

    // The chart projections DO follow the visible subset.
    assert!(filtered.distance_best.group("10km").is_none());
    assert!(unfiltered.distance_best.group("10km").is_some());
}

#[test]
fn empty_visible_set_falls_back_to_the_full_set_for_charts() {
    let records = sample_records();
    let view = recompute(
        &records,
        &DashboardSelection {
            filter: LeaderboardFilter {
                distance_label: Some("42km".to_string()),
                name_query: None,
            },
            ..DashboardSelection::default()
        },
    );

    assert!(view.leaderboard.is_empty());
    assert!(view.podium.is_empty());
    // Charts never go blank: they recompute over the full set instead.
    assert_eq!(view.distance_best.groups.len(), 2);
    assert!(!view.time_series.points.is_empty());
}

#[test]
fn podium_is_the_leading_slice_of_the_ranked_view() {
    let records = sample_records();
    let view = recompute(&records, &DashboardSelection::default());

    assert_eq!(view.leaderboard.len(), 4);
    assert_eq!(view.podium.len(), 3);
    assert_eq!(view.podium[0].name, "A");
    assert_eq!(view.podium[0].time_seconds, Some(1200.0));

    let two = recompute(
        &records,
        &DashboardSelection {
            podium_size: 2,
            ..DashboardSelection::default()
        },
    );
    assert_eq!(two.podium.len(), 2);
}

#[test]
fn selection_serializes_for_host_configuration() {
    let selection = DashboardSelection {
        filter: LeaderboardFilter {
            distance_label: Some("5km".to_string()),
            name_query: None,
        },
        ..DashboardSelection::default()
    };
    let json = serde_json::to_string(&selection).unwrap();
    let back: DashboardSelection = serde_json::from_str(&json).unwrap();
    assert_eq!(back, selection);
    assert!(json.contains("\"metric\":\"time\""));
}
