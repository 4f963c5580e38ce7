//! Leaderboard filtering, sorting, and podium selection.

use std::cmp::Ordering;

use paceline_model::NormalizedRecord;
use serde::{Deserialize, Serialize};

/// Sort key stand-in for records missing the selected metric, keeping the
/// ordering total without panics. Ascending sorts place these records
/// last; descending inverts the comparator sign only, which places them
/// first.
pub const MISSING_METRIC_SENTINEL: f64 = 1e9;

/// Leaderboard filter selection. Both parts are optional and compose with
/// logical AND.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardFilter {
    /// Exact match against `distance_label` or the record's synthesized
    /// `"{distance_km}km"` equivalent.
    pub distance_label: Option<String>,
    /// Case-insensitive substring match against the athlete name.
    pub name_query: Option<String>,
}

impl LeaderboardFilter {
    pub fn matches(&self, record: &NormalizedRecord) -> bool {
        if let Some(wanted) = &self.distance_label {
            let km_form = record.km_label();
            if record.distance_label != *wanted && km_form.as_deref() != Some(wanted.as_str()) {
                return false;
            }
        }
        if let Some(query) = &self.name_query {
            if !record
                .name
                .to_lowercase()
                .contains(&query.trim().to_lowercase())
            {
                return false;
            }
        }
        true
    }
}

/// The metric a leaderboard sort compares on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortMetric {
    Time,
    Pace,
    AvgSpeed,
}

impl SortMetric {
    /// Comparison key for one record; missing metrics map to the sentinel.
    fn key(self, record: &NormalizedRecord) -> f64 {
        let value = match self {
            SortMetric::Time => record.time_seconds,
            SortMetric::Pace => record.pace_min_per_km,
            SortMetric::AvgSpeed => record.avg_speed_km_h,
        };
        value.unwrap_or(MISSING_METRIC_SENTINEL)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Keep the records matching `filter`, preserving input order.
pub fn filter_records(
    records: &[NormalizedRecord],
    filter: &LeaderboardFilter,
) -> Vec<NormalizedRecord> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .cloned()
        .collect()
}

/// Sort records by the selected metric. The sort is stable, so records
/// with equal keys (including shared sentinels) keep their input order.
/// `Desc` flips the comparator sign only; sentinel placement follows.
pub fn sort_records(
    records: &[NormalizedRecord],
    metric: SortMetric,
    direction: SortDirection,
) -> Vec<NormalizedRecord> {
    let mut sorted = records.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = metric
            .key(a)
            .partial_cmp(&metric.key(b))
            .unwrap_or(Ordering::Equal);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// The first `n` records of an already-sorted view, verbatim. Fewer than
/// `n` records come back as-is; there is no padding.
pub fn top_n(sorted: &[NormalizedRecord], n: usize) -> Vec<NormalizedRecord> {
    sorted.iter().take(n).cloned().collect()
}
