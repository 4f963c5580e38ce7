//! Derived metrics: pace and average speed.

use serde::{Deserialize, Serialize};

/// Pace and average speed derived from canonical time and distance.
/// Both are `None` together whenever the inputs cannot support them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    pub pace_min_per_km: Option<f64>,
    pub avg_speed_km_h: Option<f64>,
}

/// Round half-away-from-zero to two decimals. Fixture-based tests depend
/// on this exact rule, so every derived metric goes through it.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Derive pace (min/km) and average speed (km/h).
///
/// Preconditions: both inputs present, finite, and `distance_km > 0`.
/// When any precondition fails or a result would be non-finite, both
/// metrics degrade to `None` together.
pub fn derive_metrics(time_seconds: Option<f64>, distance_km: Option<f64>) -> Metrics {
    let (Some(time), Some(distance)) = (time_seconds, distance_km) else {
        return Metrics::default();
    };
    if !time.is_finite() || !distance.is_finite() || distance <= 0.0 {
        return Metrics::default();
    }

    let pace = (time / 60.0) / distance;
    let speed = distance / (time / 3600.0);
    if !pace.is_finite() || !speed.is_finite() {
        return Metrics::default();
    }

    Metrics {
        pace_min_per_km: Some(round2(pace)),
        avg_speed_km_h: Some(round2(speed)),
    }
}
