pub mod aggregates;
pub mod record;

pub use aggregates::{
    AthleteBest, AthleteRank, DistanceBestMap, DistanceGroup, DistanceRanks, MedalCount,
    MedalTally, RankMap, TimeSeries, TimeSeriesPoint,
};
pub use record::{
    NormalizedRecord, RawRow, RawValue, UNKNOWN_ATHLETE, UNKNOWN_DISTANCE, format_km,
};
