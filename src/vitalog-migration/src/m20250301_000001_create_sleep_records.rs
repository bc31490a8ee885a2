use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SleepRecords::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SleepRecords::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SleepRecords::UserId).string().not_null())
                    .col(ColumnDef::new(SleepRecords::Date).date().not_null())
                    .col(ColumnDef::new(SleepRecords::Hours).double().not_null())
                    .col(
                        ColumnDef::new(SleepRecords::Quality)
                            .small_integer()
                            .null(),
                    )
                    .col(ColumnDef::new(SleepRecords::Notes).text().null())
                    .to_owned(),
            )
            .await?;

        // One record per user per night; re-logging a night replaces it.
        manager
            .create_index(
                Index::create()
                    .name("idx_sleep_records_user_date")
                    .table(SleepRecords::Table)
                    .col(SleepRecords::UserId)
                    .col(SleepRecords::Date)
                    .unique()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SleepRecords::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum SleepRecords {
    Table,
    Id,
    UserId,
    Date,
    Hours,
    Quality,
    Notes,
}
