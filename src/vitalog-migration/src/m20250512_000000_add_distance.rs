use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(WorkoutSessions::Table)
                    .add_column(
                        ColumnDef::new(WorkoutSessions::DistanceMeters)
                            .double()
                            .null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(WorkoutSessions::Table)
                    .drop_column(WorkoutSessions::DistanceMeters)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum WorkoutSessions {
    Table,
    DistanceMeters,
}
