use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};

use crate::RecordError;

/// Activity categories accepted by the workout log. Stored as their string
/// form, so variants can be added without a schema change.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ActivityKind {
    Running,
    Walking,
    Cycling,
    Strength,
    Yoga,
    Meditation,
    Other,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSession {
    pub activity: ActivityKind,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub steps: Option<u32>,
    pub calories: Option<f64>,
    pub distance_meters: Option<f64>,
}

impl WorkoutSession {
    pub fn new(
        activity: ActivityKind,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, RecordError> {
        if end <= start {
            return Err(RecordError::SessionEndsBeforeStart);
        }

        Ok(Self {
            activity,
            start,
            end,
            steps: None,
            calories: None,
            distance_meters: None,
        })
    }

    pub fn duration(&self) -> TimeDelta {
        self.end - self.start
    }

    /// Minutes per kilometer, when the session covered measurable distance.
    pub fn pace_min_per_km(&self) -> Option<f64> {
        let meters = self.distance_meters?;
        if meters < 1.0 {
            return None;
        }

        let minutes = self.duration().num_seconds() as f64 / 60.0;
        (minutes > 0.0).then(|| minutes / (meters / 1000.0))
    }
}

/// A single GPS fix along a workout route.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub time: NaiveDateTime,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SearchWorkoutSessions {
    pub from: Option<NaiveDateTime>,
    pub to: Option<NaiveDateTime>,
    pub activity: Option<ActivityKind>,
}

impl SearchWorkoutSessions {
    pub fn with_activity(mut self, activity: ActivityKind) -> Self {
        self.activity = Some(activity);
        self
    }

    pub fn with_from(mut self, from: NaiveDateTime) -> Self {
        self.from = Some(from);
        self
    }

    pub fn with_to(mut self, to: NaiveDateTime) -> Self {
        self.to = Some(to);
        self
    }
}
