//! Record construction: normalize, parse, derive — one record per raw row.

use paceline_ingest::{display_text, resolve_fields};
use paceline_model::{NormalizedRecord, RawRow, UNKNOWN_ATHLETE, UNKNOWN_DISTANCE, format_km};
use tracing::{debug, warn};

use crate::dates::resolve_date_label;
use crate::distance::{parse_distance, parse_km};
use crate::metrics::derive_metrics;
use crate::time::parse_time;

/// Build the canonical record for one raw row.
///
/// Never drops a row: parse failures degrade field by field, so a record
/// with every derived field `None` still comes back and still groups under
/// its name and distance label.
pub fn build_record(row: &RawRow) -> NormalizedRecord {
    let fields = resolve_fields(row);

    let name = fields
        .name
        .clone()
        .unwrap_or_else(|| UNKNOWN_ATHLETE.to_string());

    let time_seconds = fields.time.as_ref().and_then(|value| {
        let parsed = parse_time(value);
        if parsed.is_none() {
            warn!(athlete = %name, cell = ?value, "unparseable time cell");
        }
        parsed
    });

    // The free-text distance column wins; the pre-resolved kilometer
    // column (already unit-qualified) is the fallback.
    let distance_km = match (&fields.distance, &fields.distance_km) {
        (Some(value), _) => {
            let parsed = parse_distance(value);
            if parsed.is_none() {
                warn!(athlete = %name, cell = ?value, "unparseable distance cell");
            }
            parsed
        }
        (None, Some(value)) => parse_km(value),
        (None, None) => None,
    };

    // Label: verbatim source text, then synthesized from kilometers, then
    // the sentinel group. Labels group records even when a parse fails.
    let distance_label = fields
        .distance
        .as_ref()
        .map(display_text)
        .filter(|label| !label.is_empty())
        .or_else(|| distance_km.map(|km| format!("{}km", format_km(km))))
        .unwrap_or_else(|| UNKNOWN_DISTANCE.to_string());

    let date = fields.date.as_deref().and_then(resolve_date_label);

    let metrics = derive_metrics(time_seconds, distance_km);

    NormalizedRecord {
        name,
        distance_km,
        distance_label,
        time_seconds,
        date,
        pace_min_per_km: metrics.pace_min_per_km,
        avg_speed_km_h: metrics.avg_speed_km_h,
    }
}

/// Build the whole batch, one record per row, preserving input order.
pub fn build_records(rows: &[RawRow]) -> Vec<NormalizedRecord> {
    let records: Vec<NormalizedRecord> = rows.iter().map(build_record).collect();
    debug!(rows = rows.len(), "built normalized record batch");
    records
}

/// Recompute the derived metrics of a record from its canonical fields.
///
/// Building is idempotent in this sense: for any record produced by
/// [`build_record`], re-deriving reproduces the identical record.
pub fn rederive_metrics(record: &NormalizedRecord) -> NormalizedRecord {
    let metrics = derive_metrics(record.time_seconds, record.distance_km);
    NormalizedRecord {
        pace_min_per_km: metrics.pace_min_per_km,
        avg_speed_km_h: metrics.avg_speed_km_h,
        ..record.clone()
    }
}
