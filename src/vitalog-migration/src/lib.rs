pub use sea_orm_migration::prelude::*;

mod m20250301_000001_create_sleep_records;
mod m20250301_000002_create_workout_sessions;
mod m20250512_000000_add_distance;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250301_000001_create_sleep_records::Migration),
            Box::new(m20250301_000002_create_workout_sessions::Migration),
            Box::new(m20250512_000000_add_distance::Migration),
        ]
    }
}
