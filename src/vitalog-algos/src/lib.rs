pub(crate) mod sleep_analytics;
pub use sleep_analytics::{ConsistencyTrend, QualityLevel, SleepAnalyzer, SleepSummary};

pub(crate) mod workout;
pub use workout::{ActivitySimulator, WorkoutMetrics};

pub(crate) mod geo;
pub use geo::{GeoTrack, haversine_distance};

pub mod helpers;
