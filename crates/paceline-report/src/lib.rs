//! Leaderboard ranking and aggregate projections.
//!
//! Everything here is a pure recomputation over an already-built record
//! set: filtering/sorting for the leaderboard surface, and the three
//! chart projections (per-distance best matrix with ranks, per-date time
//! series, cross-distance medal tally). [`dashboard::recompute`] composes
//! them with the explicit visible-rows hand-off.

pub mod aggregate;
pub mod dashboard;
pub mod leaderboard;

pub use aggregate::{compare_distance_labels, distance_best, medal_tally, rank_map, time_series};
pub use dashboard::{DashboardSelection, DashboardView, recompute};
pub use leaderboard::{
    LeaderboardFilter, MISSING_METRIC_SENTINEL, SortDirection, SortMetric, filter_records,
    sort_records, top_n,
};
