use std::fmt::Display;

use chrono::TimeDelta;
use vitalog_types::WorkoutSession;

use crate::helpers::{
    format::format_hm,
    math::{mean_deltas, round_tenths, std_dev_delta},
};

/// Fills in step and calorie figures for sessions logged without a tracker.
pub struct ActivitySimulator;

impl ActivitySimulator {
    /// Fixed cadence assumed when a session carries no step count of its own.
    pub const STEPS_PER_MINUTE: f64 = 110.0;

    /// Fixed energy multiplier applied per step, simulated or recorded.
    pub const CALORIES_PER_STEP: f64 = 0.04;

    pub fn simulate_steps(duration: TimeDelta) -> u32 {
        let minutes = duration.num_seconds().max(0) as f64 / 60.0;
        (minutes * Self::STEPS_PER_MINUTE).round() as u32
    }

    pub fn calories_for(steps: u32) -> f64 {
        round_tenths(f64::from(steps) * Self::CALORIES_PER_STEP)
    }
}

#[derive(Debug, Default)]
pub struct WorkoutMetrics {
    pub count: u64,
    pub total_duration: TimeDelta,
    pub mean_duration: TimeDelta,
    pub duration_std: TimeDelta,
    pub total_steps: u64,
    pub total_calories: f64,
}

impl WorkoutMetrics {
    pub fn new(sessions: Vec<WorkoutSession>) -> Self {
        if sessions.is_empty() {
            return Self::default();
        }

        let count = sessions.len().try_into().unwrap_or(u64::MAX);
        let total_steps = sessions
            .iter()
            .filter_map(|s| s.steps)
            .map(u64::from)
            .sum();
        let total_calories = round_tenths(sessions.iter().filter_map(|s| s.calories).sum());

        let durations = sessions
            .into_iter()
            .map(|s| s.duration())
            .collect::<Vec<_>>();
        let mean_duration = mean_deltas(&durations);

        Self {
            count,
            mean_duration,
            duration_std: std_dev_delta(&durations, mean_duration),
            total_duration: durations.into_iter().sum(),
            total_steps,
            total_calories,
        }
    }
}

impl Display for WorkoutMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "Sessions: {}\nTotal time: {}\nMean duration: {}\nDuration std: {}\nSteps: {}\nCalories: {:.1}",
            self.count,
            format_hm(self.total_duration),
            format_hm(self.mean_duration),
            format_hm(self.duration_std),
            self.total_steps,
            self.total_calories,
        ))
    }
}
