use sea_orm::{
    ActiveValue::Set, ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder,
};
use uuid::Uuid;
use vitalog_entities::sleep_records;
use vitalog_migration::OnConflict;
use vitalog_types::{SearchSleepRecords, SleepRecord};

use crate::DatabaseHandler;

impl DatabaseHandler {
    /// Inserts a night of sleep, replacing any record already logged for the
    /// same user and date.
    pub async fn upsert_sleep_record(
        &self,
        user_id: &str,
        record: SleepRecord,
    ) -> anyhow::Result<()> {
        let model = sleep_records::ActiveModel {
            id: Set(Uuid::new_v4()),
            user_id: Set(user_id.to_owned()),
            date: Set(record.date),
            hours: Set(record.hours),
            quality: Set(record.quality.map(i16::from)),
            notes: Set(record.notes),
        };

        sleep_records::Entity::insert(model)
            .on_conflict(
                OnConflict::columns([
                    sleep_records::Column::UserId,
                    sleep_records::Column::Date,
                ])
                .update_columns([
                    sleep_records::Column::Hours,
                    sleep_records::Column::Quality,
                    sleep_records::Column::Notes,
                ])
                .to_owned(),
            )
            .exec(&self.db)
            .await?;

        Ok(())
    }

    /// Most-recent-first, optionally bounded by date.
    pub async fn get_sleep_records(
        &self,
        user_id: &str,
        search: SearchSleepRecords,
    ) -> anyhow::Result<Vec<SleepRecord>> {
        let filter = Condition::all()
            .add(sleep_records::Column::UserId.eq(user_id))
            .add_option(search.from.map(|d| sleep_records::Column::Date.gte(d)))
            .add_option(search.to.map(|d| sleep_records::Column::Date.lte(d)));

        Ok(sleep_records::Entity::find()
            .filter(filter)
            .order_by_desc(sleep_records::Column::Date)
            .all(&self.db)
            .await?
            .into_iter()
            .map(map_sleep_record)
            .collect())
    }

    pub async fn get_latest_sleep_record(
        &self,
        user_id: &str,
    ) -> anyhow::Result<Option<SleepRecord>> {
        Ok(sleep_records::Entity::find()
            .filter(sleep_records::Column::UserId.eq(user_id))
            .order_by_desc(sleep_records::Column::Date)
            .one(&self.db)
            .await?
            .map(map_sleep_record))
    }
}

fn map_sleep_record(model: sleep_records::Model) -> SleepRecord {
    SleepRecord {
        date: model.date,
        hours: model.hours,
        quality: model.quality.and_then(|q| u8::try_from(q).ok()),
        notes: model.notes,
    }
}
