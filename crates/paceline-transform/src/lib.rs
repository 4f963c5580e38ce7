//! Normalization and derivation for race-timing rows.
//!
//! This crate turns cleaned raw rows into [`paceline_model::NormalizedRecord`]s:
//! - **time**: heterogeneous elapsed-time encodings to canonical seconds
//! - **distance**: heterogeneous distance encodings to canonical kilometers
//! - **dates**: date cells to ISO (or verbatim) grouping labels
//! - **metrics**: pace and average speed derived from the canonical values
//! - **builder**: the per-row composition, exactly one record per raw row

pub mod builder;
pub mod dates;
pub mod distance;
pub mod metrics;
pub mod time;

pub use builder::{build_record, build_records, rederive_metrics};
pub use dates::{parse_date, resolve_date_label};
pub use distance::{UNITLESS_METERS_THRESHOLD_KM, parse_distance, parse_distance_text, parse_km};
pub use metrics::{Metrics, derive_metrics, round2};
pub use time::{parse_time, parse_time_text};
