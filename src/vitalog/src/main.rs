use std::path::PathBuf;

use chrono::{NaiveDate, NaiveDateTime};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use dotenv::dotenv;
use vitalog::Vitalog;
use vitalog_algos::helpers::format::{format_hm, format_pace};
use vitalog_db::DatabaseHandler;
use vitalog_types::{ActivityKind, SearchWorkoutSessions, SleepRecord, TrackPoint};

#[derive(Parser)]
pub struct VitalogCli {
    #[arg(env, long)]
    pub database_url: String,
    #[clap(subcommand)]
    pub subcommand: VitalogCommand,
}

#[derive(Subcommand)]
pub enum VitalogCommand {
    ///
    /// Log (or correct) a night of sleep and print the updated summary
    ///
    LogSleep {
        #[arg(long)]
        user: String,
        #[arg(long)]
        date: NaiveDate,
        #[arg(long)]
        hours: f64,
        #[arg(long)]
        quality: Option<u8>,
        #[arg(long)]
        notes: Option<String>,
    },
    ///
    /// Print sleep analytics for a user
    ///
    SleepStats {
        #[arg(long)]
        user: String,
        #[arg(long)]
        json: bool,
    },
    ///
    /// Log a workout session; steps and calories are simulated when absent
    ///
    LogWorkout {
        #[arg(long)]
        user: String,
        #[arg(long)]
        activity: ActivityKind,
        #[arg(long)]
        start: NaiveDateTime,
        #[arg(long)]
        end: NaiveDateTime,
        #[arg(long)]
        steps: Option<u32>,
        ///
        /// JSON file with the session's GPS fixes
        ///
        #[arg(long)]
        track: Option<PathBuf>,
    },
    ///
    /// Print workout statistics for all time and the last 7 sessions
    ///
    WorkoutStats {
        #[arg(long)]
        user: String,
        #[arg(long)]
        activity: Option<ActivityKind>,
    },
    ///
    /// Import sleep records from a CSV export (date,hours,quality,notes)
    ///
    ImportSleep {
        #[arg(long)]
        user: String,
        path: PathBuf,
    },
    ///
    /// Generate shell completions
    ///
    Completions {
        shell: Shell,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if let Err(error) = dotenv() {
        println!("{}", error);
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .filter_module("sqlx::query", log::LevelFilter::Off)
        .filter_module("sea_orm_migration::migrator", log::LevelFilter::Off)
        .init();

    let cli = VitalogCli::parse();

    if let VitalogCommand::Completions { shell } = &cli.subcommand {
        clap_complete::generate(
            *shell,
            &mut VitalogCli::command(),
            "vitalog",
            &mut std::io::stdout(),
        );
        return Ok(());
    }

    let db_handler = DatabaseHandler::new(cli.database_url).await;
    let vitalog = Vitalog::new(db_handler);

    match cli.subcommand {
        VitalogCommand::LogSleep {
            user,
            date,
            hours,
            quality,
            notes,
        } => {
            let record = SleepRecord::new(date, hours, quality, notes)?;
            let summary = vitalog.log_sleep(&user, record).await?;
            println!("{}", summary);
            Ok(())
        }
        VitalogCommand::SleepStats { user, json } => {
            let summary = vitalog.sleep_summary(&user).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", summary);
            }
            Ok(())
        }
        VitalogCommand::LogWorkout {
            user,
            activity,
            start,
            end,
            steps,
            track,
        } => {
            let track = match track {
                Some(path) => {
                    let contents = std::fs::read_to_string(path)?;
                    Some(serde_json::from_str::<Vec<TrackPoint>>(&contents)?)
                }
                None => None,
            };

            let session = vitalog
                .log_workout(&user, activity, start, end, steps, track)
                .await?;

            println!("Logged {}: {}", session.activity, format_hm(session.duration()));
            if let Some(steps) = session.steps {
                println!("Steps: {}", steps);
            }
            if let Some(calories) = session.calories {
                println!("Calories: {:.1}", calories);
            }
            if let (Some(meters), Some(pace)) =
                (session.distance_meters, session.pace_min_per_km())
            {
                println!("Distance: {:.2}km ({})", meters / 1000.0, format_pace(pace));
            }
            Ok(())
        }
        VitalogCommand::WorkoutStats { user, activity } => {
            let mut options = SearchWorkoutSessions::default();
            if let Some(activity) = activity {
                options = options.with_activity(activity);
            }

            let sessions = vitalog.database.search_workouts(&user, options).await?;
            let last_week = sessions
                .iter()
                .rev()
                .take(7)
                .cloned()
                .rev()
                .collect::<Vec<_>>();

            let metrics = vitalog_algos::WorkoutMetrics::new(sessions);
            let last_week = vitalog_algos::WorkoutMetrics::new(last_week);

            println!("All time: \n{}", metrics);
            println!("\nLast 7 sessions: \n{}", last_week);
            Ok(())
        }
        VitalogCommand::ImportSleep { user, path } => {
            let report = vitalog.database.import_sleep_csv(&user, &path).await?;
            println!("{}", report);
            Ok(())
        }
        VitalogCommand::Completions { .. } => unreachable!(),
    }
}
