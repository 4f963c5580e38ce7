//! Aggregate projections derived from a normalized record set.
//!
//! All of these are pure recomputations: nothing here mutates the record
//! set, and identical inputs always produce identical projections. Athlete
//! ordering inside each structure is first-seen insertion order, which is
//! what keeps positional rank assignment stable across recomputes.

use serde::{Deserialize, Serialize};

/// One athlete's best (minimum) time within a distance group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteBest {
    pub name: String,
    pub seconds: f64,
}

/// Per-athlete best times for a single distance label, in the order the
/// athletes first appeared in the source records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceGroup {
    pub label: String,
    pub best: Vec<AthleteBest>,
}

impl DistanceGroup {
    pub fn best_for(&self, name: &str) -> Option<f64> {
        self.best
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.seconds)
    }
}

/// Per-distance best-time matrix: distance label -> athlete -> best time.
///
/// Groups are ordered by the distance-label axis policy (numeric ascending
/// when both labels parse, lexical fallback otherwise); `athletes` is the
/// full roster across groups in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DistanceBestMap {
    pub athletes: Vec<String>,
    pub groups: Vec<DistanceGroup>,
}

impl DistanceBestMap {
    pub fn group(&self, label: &str) -> Option<&DistanceGroup> {
        self.groups.iter().find(|group| group.label == label)
    }

    pub fn best_for(&self, label: &str, name: &str) -> Option<f64> {
        self.group(label)?.best_for(name)
    }
}

/// An athlete's 1-based rank within one distance group (1 = fastest).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AthleteRank {
    pub name: String,
    pub rank: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DistanceRanks {
    pub label: String,
    pub ranks: Vec<AthleteRank>,
}

/// Distance label -> athlete -> integer rank, among athletes with a
/// non-null best time. Dead-heat times get distinct consecutive ranks in
/// athlete insertion order; there is no shared-rank numbering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankMap {
    pub groups: Vec<DistanceRanks>,
}

impl RankMap {
    pub fn rank_of(&self, label: &str, name: &str) -> Option<u32> {
        self.groups
            .iter()
            .find(|group| group.label == label)?
            .ranks
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.rank)
    }
}

/// One time-series sample: each athlete's best time on one date label.
/// `values` is aligned index-for-index with the parent series roster;
/// `None` means the athlete has no record on that date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: String,
    pub values: Vec<Option<f64>>,
}

/// Per-date best-time series, date labels sorted lexically (ISO dates sort
/// correctly that way; fallback labels sort by their own text).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    pub athletes: Vec<String>,
    pub points: Vec<TimeSeriesPoint>,
}

impl TimeSeries {
    pub fn value_at(&self, date: &str, name: &str) -> Option<f64> {
        let athlete_idx = self.athletes.iter().position(|a| a == name)?;
        let point = self.points.iter().find(|point| point.date == date)?;
        point.values.get(athlete_idx).copied().flatten()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MedalCount {
    pub name: String,
    pub golds: u32,
}

/// Cross-distance gold tally: for each athlete, the number of distance
/// groups whose (possibly shared) best time they hold. Unordered; callers
/// wanting display order use [`MedalTally::sorted_desc`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MedalTally {
    pub counts: Vec<MedalCount>,
}

impl MedalTally {
    /// Golds for one athlete; athletes with no gold report zero.
    pub fn golds_for(&self, name: &str) -> u32 {
        self.counts
            .iter()
            .find(|entry| entry.name == name)
            .map_or(0, |entry| entry.golds)
    }

    /// Total golds awarded across all athletes. With ties this exceeds the
    /// number of distance groups.
    pub fn total(&self) -> u32 {
        self.counts.iter().map(|entry| entry.golds).sum()
    }

    /// Display ordering: golds descending, name ascending on ties.
    pub fn sorted_desc(&self) -> Vec<MedalCount> {
        let mut sorted = self.counts.clone();
        sorted.sort_by(|a, b| b.golds.cmp(&a.golds).then_with(|| a.name.cmp(&b.name)));
        sorted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medal_tally_lookup_and_order() {
        let tally = MedalTally {
            counts: vec![
                MedalCount {
                    name: "B".to_string(),
                    golds: 1,
                },
                MedalCount {
                    name: "A".to_string(),
                    golds: 2,
                },
                MedalCount {
                    name: "C".to_string(),
                    golds: 1,
                },
            ],
        };
        assert_eq!(tally.golds_for("A"), 2);
        assert_eq!(tally.golds_for("missing"), 0);
        assert_eq!(tally.total(), 4);

        let ordered: Vec<String> = tally
            .sorted_desc()
            .into_iter()
            .map(|entry| entry.name)
            .collect();
        assert_eq!(ordered, ["A", "B", "C"]);
    }

    #[test]
    fn time_series_lookup_is_roster_aligned() {
        let series = TimeSeries {
            athletes: vec!["A".to_string(), "B".to_string()],
            points: vec![TimeSeriesPoint {
                date: "2024-03-01".to_string(),
                values: vec![Some(1200.0), None],
            }],
        };
        assert_eq!(series.value_at("2024-03-01", "A"), Some(1200.0));
        assert_eq!(series.value_at("2024-03-01", "B"), None);
        assert_eq!(series.value_at("2024-03-02", "A"), None);
    }
}
