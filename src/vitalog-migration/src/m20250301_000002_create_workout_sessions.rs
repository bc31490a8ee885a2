use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(WorkoutSessions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(WorkoutSessions::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(WorkoutSessions::UserId).string().not_null())
                    .col(
                        ColumnDef::new(WorkoutSessions::Activity)
                            .string()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(WorkoutSessions::Start)
                            .date_time()
                            .not_null(),
                    )
                    .col(ColumnDef::new(WorkoutSessions::End).date_time().not_null())
                    .col(ColumnDef::new(WorkoutSessions::Steps).big_integer().null())
                    .col(ColumnDef::new(WorkoutSessions::Calories).double().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_workout_sessions_user_start")
                    .table(WorkoutSessions::Table)
                    .col(WorkoutSessions::UserId)
                    .col(WorkoutSessions::Start)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(WorkoutSessions::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum WorkoutSessions {
    Table,
    Id,
    UserId,
    Activity,
    Start,
    End,
    Steps,
    Calories,
}
