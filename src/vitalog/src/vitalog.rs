use chrono::NaiveDateTime;
use vitalog_algos::{ActivitySimulator, GeoTrack, SleepAnalyzer, SleepSummary, WorkoutMetrics};
use vitalog_db::DatabaseHandler;
use vitalog_types::{
    ActivityKind, SearchSleepRecords, SearchWorkoutSessions, SleepRecord, TrackPoint,
    WorkoutSession,
};

pub struct Vitalog {
    pub database: DatabaseHandler,
}

impl Vitalog {
    pub fn new(database: DatabaseHandler) -> Self {
        Self { database }
    }

    /// Stores a night of sleep and returns the summary it invalidated,
    /// freshly recomputed.
    pub async fn log_sleep(
        &self,
        user_id: &str,
        record: SleepRecord,
    ) -> anyhow::Result<SleepSummary> {
        self.database.upsert_sleep_record(user_id, record).await?;
        self.sleep_summary(user_id).await
    }

    pub async fn sleep_summary(&self, user_id: &str) -> anyhow::Result<SleepSummary> {
        debug!("recomputing sleep summary for {user_id}");
        let records = self
            .database
            .get_sleep_records(user_id, SearchSleepRecords::default())
            .await?;

        Ok(SleepAnalyzer::new(records).summary())
    }

    /// Stores a workout. Missing step counts are simulated from the session
    /// duration; calories always follow from steps. A GPS track, when given,
    /// supplies the distance.
    pub async fn log_workout(
        &self,
        user_id: &str,
        activity: ActivityKind,
        start: NaiveDateTime,
        end: NaiveDateTime,
        steps: Option<u32>,
        track: Option<Vec<TrackPoint>>,
    ) -> anyhow::Result<WorkoutSession> {
        let mut session = WorkoutSession::new(activity, start, end)?;

        let steps = steps.unwrap_or_else(|| ActivitySimulator::simulate_steps(session.duration()));
        session.steps = Some(steps);
        session.calories = Some(ActivitySimulator::calories_for(steps));

        if let Some(points) = track {
            let track = GeoTrack::new(points);
            let meters = track.total_distance_meters();
            if meters < 1.0 {
                warn!("track for {user_id} covers no distance, ignoring");
            } else {
                session.distance_meters = Some(meters);
            }
        }

        self.database
            .create_workout(user_id, session.clone())
            .await?;

        Ok(session)
    }

    pub async fn workout_metrics(
        &self,
        user_id: &str,
        options: SearchWorkoutSessions,
    ) -> anyhow::Result<WorkoutMetrics> {
        let sessions = self.database.search_workouts(user_id, options).await?;
        Ok(WorkoutMetrics::new(sessions))
    }
}
