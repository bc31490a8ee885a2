pub(crate) mod error;
pub use error::RecordError;

pub mod sleep;
pub use sleep::{MAX_QUALITY_RATING, MIN_QUALITY_RATING, SearchSleepRecords, SleepRecord};

pub mod workouts;
pub use workouts::{ActivityKind, SearchWorkoutSessions, TrackPoint, WorkoutSession};
