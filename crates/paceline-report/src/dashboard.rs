//! Whole-dashboard recomputation.
//!
//! The presentation host calls [`recompute`] whenever the record set or
//! the selection changes; there is no internal caching or dependency
//! tracking. The "visible rows" channel is an explicit argument hand-off:
//! the ranked view feeds the chart projections, with a fallback to the
//! full set when the filter matches nothing. The medal tally always reads
//! the full set.

use paceline_model::{DistanceBestMap, MedalTally, NormalizedRecord, RankMap, TimeSeries};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::aggregate::{distance_best, medal_tally, rank_map, time_series};
use crate::leaderboard::{LeaderboardFilter, SortDirection, SortMetric, filter_records,
    sort_records, top_n};

/// Default podium size.
pub const PODIUM_SIZE: usize = 3;

/// The caller's current filter/sort selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSelection {
    pub filter: LeaderboardFilter,
    pub metric: SortMetric,
    pub direction: SortDirection,
    pub podium_size: usize,
}

impl Default for DashboardSelection {
    fn default() -> Self {
        Self {
            filter: LeaderboardFilter::default(),
            metric: SortMetric::Time,
            direction: SortDirection::Asc,
            podium_size: PODIUM_SIZE,
        }
    }
}

/// Everything the presentation surfaces consume, recomputed as one unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    /// Filtered, sorted leaderboard rows ("visible rows").
    pub leaderboard: Vec<NormalizedRecord>,
    /// First `podium_size` leaderboard rows, no padding.
    pub podium: Vec<NormalizedRecord>,
    pub distance_best: DistanceBestMap,
    pub ranks: RankMap,
    pub time_series: TimeSeries,
    pub medal_tally: MedalTally,
}

/// Pure recomputation of every projection from the full record set and
/// the current selection.
pub fn recompute(records: &[NormalizedRecord], selection: &DashboardSelection) -> DashboardView {
    let visible = filter_records(records, &selection.filter);
    let leaderboard = sort_records(&visible, selection.metric, selection.direction);
    let podium = top_n(&leaderboard, selection.podium_size);

    // Charts read the visible subset; an empty filter result falls back
    // to the full set so the charts never go blank.
    let chart_rows: &[NormalizedRecord] = if visible.is_empty() { records } else { &visible };
    let matrix = distance_best(chart_rows);
    let ranks = rank_map(&matrix);
    let series = time_series(chart_rows);

    // Always the unfiltered set: filtering must never change medal counts.
    let medals = medal_tally(records);

    debug!(
        records = records.len(),
        visible = visible.len(),
        groups = matrix.groups.len(),
        "recomputed dashboard view"
    );

    DashboardView {
        leaderboard,
        podium,
        distance_best: matrix,
        ranks,
        time_series: series,
        medal_tally: medals,
    }
}
