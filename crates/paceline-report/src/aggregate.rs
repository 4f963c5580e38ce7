//! Aggregate projection builders.
//!
//! Each builder is a single pass over the record set into explicit
//! keyed accumulators with a keep-minimum merge rule, then an ordering
//! pass. Insertion order of athletes and groups is preserved during
//! accumulation; only the axes defined by the projection get sorted.

use std::cmp::Ordering;

use paceline_model::{
    AthleteBest, AthleteRank, DistanceBestMap, DistanceGroup, DistanceRanks, MedalCount,
    MedalTally, NormalizedRecord, RankMap, TimeSeries, TimeSeriesPoint,
};

/// Axis ordering for distance labels: numeric ascending when both labels
/// lead with a number, lexical comparison of the raw label text otherwise
/// (including the mixed numeric/non-numeric case). Equal numbers compare
/// equal so a stable sort keeps their insertion order.
pub fn compare_distance_labels(a: &str, b: &str) -> Ordering {
    match (leading_number(a), leading_number(b)) {
        (Some(na), Some(nb)) => na.partial_cmp(&nb).unwrap_or(Ordering::Equal),
        _ => a.cmp(b),
    }
}

/// Leading numeric literal of a label (`"5km"` -> 5.0), if any.
fn leading_number(text: &str) -> Option<f64> {
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;
    for (idx, ch) in text.char_indices() {
        match ch {
            '0'..='9' => {
                seen_digit = true;
                end = idx + 1;
            }
            '.' if seen_digit && !seen_dot => {
                seen_dot = true;
                end = idx + 1;
            }
            _ => break,
        }
    }
    if !seen_digit {
        return None;
    }
    text[..end].trim_end_matches('.').parse().ok()
}

/// Keep-minimum upsert into an insertion-ordered accumulator.
fn keep_minimum(entries: &mut Vec<AthleteBest>, name: &str, seconds: f64) {
    match entries.iter_mut().find(|entry| entry.name == name) {
        Some(entry) => {
            if seconds < entry.seconds {
                entry.seconds = seconds;
            }
        }
        None => entries.push(AthleteBest {
            name: name.to_string(),
            seconds,
        }),
    }
}

/// Per-distance best-time matrix.
///
/// Every record contributes its distance group and athlete to the axes,
/// even with no comparable time; only finite times enter the best-time
/// merge. Groups come back in distance-label axis order.
pub fn distance_best(records: &[NormalizedRecord]) -> DistanceBestMap {
    let mut athletes: Vec<String> = Vec::new();
    let mut groups: Vec<DistanceGroup> = Vec::new();

    for record in records {
        if !athletes.contains(&record.name) {
            athletes.push(record.name.clone());
        }
        let idx = match groups
            .iter()
            .position(|group| group.label == record.distance_label)
        {
            Some(idx) => idx,
            None => {
                groups.push(DistanceGroup {
                    label: record.distance_label.clone(),
                    best: Vec::new(),
                });
                groups.len() - 1
            }
        };
        if let Some(seconds) = record.time_seconds {
            if seconds.is_finite() {
                keep_minimum(&mut groups[idx].best, &record.name, seconds);
            }
        }
    }

    groups.sort_by(|a, b| compare_distance_labels(&a.label, &b.label));
    DistanceBestMap { athletes, groups }
}

/// Per-distance rank assignment over a best-time matrix.
///
/// Within each group, athletes with a best time sort ascending (stable,
/// so dead heats keep athlete insertion order) and get positional ranks
/// 1..k. No shared-rank numbering: a dead heat yields distinct
/// consecutive ranks, deterministically for identical input.
pub fn rank_map(matrix: &DistanceBestMap) -> RankMap {
    let groups = matrix
        .groups
        .iter()
        .map(|group| {
            let mut entries: Vec<&AthleteBest> = group.best.iter().collect();
            entries.sort_by(|a, b| a.seconds.partial_cmp(&b.seconds).unwrap_or(Ordering::Equal));
            DistanceRanks {
                label: group.label.clone(),
                ranks: entries
                    .iter()
                    .enumerate()
                    .map(|(position, entry)| AthleteRank {
                        name: entry.name.clone(),
                        rank: position as u32 + 1,
                    })
                    .collect(),
            }
        })
        .collect();
    RankMap { groups }
}

/// Per-date best-time series.
///
/// Records group by their resolved date label; date-less records get a
/// synthetic `run-{index}` label from their batch position, so every
/// record lands in some bucket. Date labels sort lexically.
pub fn time_series(records: &[NormalizedRecord]) -> TimeSeries {
    let mut athletes: Vec<String> = Vec::new();
    let mut buckets: Vec<(String, Vec<AthleteBest>)> = Vec::new();

    for (index, record) in records.iter().enumerate() {
        if !athletes.contains(&record.name) {
            athletes.push(record.name.clone());
        }
        let label = record
            .date
            .clone()
            .unwrap_or_else(|| format!("run-{}", index + 1));
        let bucket_idx = match buckets.iter().position(|(date, _)| *date == label) {
            Some(idx) => idx,
            None => {
                buckets.push((label, Vec::new()));
                buckets.len() - 1
            }
        };
        if let Some(seconds) = record.time_seconds {
            if seconds.is_finite() {
                keep_minimum(&mut buckets[bucket_idx].1, &record.name, seconds);
            }
        }
    }

    buckets.sort_by(|a, b| a.0.cmp(&b.0));
    let points = buckets
        .into_iter()
        .map(|(date, best)| TimeSeriesPoint {
            values: athletes
                .iter()
                .map(|name| {
                    best.iter()
                        .find(|entry| entry.name == *name)
                        .map(|entry| entry.seconds)
                })
                .collect(),
            date,
        })
        .collect();

    TimeSeries { athletes, points }
}

/// Cross-distance gold tally.
///
/// Callers must pass the FULL unfiltered record set: leaderboard filtering
/// never changes medal counts. Per distance group, every athlete whose
/// best time exactly equals the group minimum earns one gold; groups with
/// no finite time award none.
pub fn medal_tally(records: &[NormalizedRecord]) -> MedalTally {
    let matrix = distance_best(records);
    let mut counts: Vec<MedalCount> = Vec::new();

    for group in &matrix.groups {
        let minimum = group
            .best
            .iter()
            .map(|entry| entry.seconds)
            .fold(f64::INFINITY, f64::min);
        if !minimum.is_finite() {
            continue;
        }
        for entry in &group.best {
            if entry.seconds == minimum {
                match counts.iter_mut().find(|count| count.name == entry.name) {
                    Some(count) => count.golds += 1,
                    None => counts.push(MedalCount {
                        name: entry.name.clone(),
                        golds: 1,
                    }),
                }
            }
        }
    }

    MedalTally { counts }
}
