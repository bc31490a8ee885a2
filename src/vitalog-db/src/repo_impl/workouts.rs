use std::str::FromStr;

use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;
use vitalog_entities::workout_sessions;
use vitalog_types::{ActivityKind, SearchWorkoutSessions, WorkoutSession};

use crate::DatabaseHandler;

impl DatabaseHandler {
    pub async fn create_workout(
        &self,
        user_id: &str,
        session: WorkoutSession,
    ) -> anyhow::Result<()> {
        let model = workout_sessions::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id.to_owned()),
            activity: Set(session.activity.to_string()),
            start: Set(session.start),
            end: Set(session.end),
            steps: Set(session.steps.map(i64::from)),
            calories: Set(session.calories),
            distance_meters: Set(session.distance_meters),
        };

        workout_sessions::Entity::insert(model).exec(&self.db).await?;

        Ok(())
    }

    pub async fn search_workouts(
        &self,
        user_id: &str,
        options: SearchWorkoutSessions,
    ) -> anyhow::Result<Vec<WorkoutSession>> {
        let sessions = workout_sessions::Entity::find()
            .filter(search_workouts_query(user_id, options))
            .order_by_asc(workout_sessions::Column::Start)
            .all(&self.db)
            .await?
            .into_iter()
            .map(map_workout_session)
            .collect();

        Ok(sessions)
    }

    pub async fn get_latest_workout(
        &self,
        user_id: &str,
    ) -> anyhow::Result<Option<WorkoutSession>> {
        Ok(workout_sessions::Entity::find()
            .filter(workout_sessions::Column::UserId.eq(user_id))
            .order_by_desc(workout_sessions::Column::End)
            .one(&self.db)
            .await?
            .map(map_workout_session))
    }
}

fn map_workout_session(model: workout_sessions::Model) -> WorkoutSession {
    WorkoutSession {
        activity: ActivityKind::from_str(&model.activity).unwrap_or(ActivityKind::Other),
        start: model.start,
        end: model.end,
        steps: model.steps.and_then(|s| u32::try_from(s).ok()),
        calories: model.calories,
        distance_meters: model.distance_meters,
    }
}

fn search_workouts_query(user_id: &str, query: SearchWorkoutSessions) -> Condition {
    Condition::all()
        .add(workout_sessions::Column::UserId.eq(user_id))
        .add_option(query.from.map(|from| workout_sessions::Column::Start.gte(from)))
        .add_option(query.to.map(|to| workout_sessions::Column::End.lte(to)))
        .add_option(
            query
                .activity
                .map(|activity| workout_sessions::Column::Activity.eq(activity.to_string())),
        )
}
