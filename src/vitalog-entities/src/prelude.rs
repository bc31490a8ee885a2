pub use super::sleep_records::Entity as SleepRecords;
pub use super::workout_sessions::Entity as WorkoutSessions;
