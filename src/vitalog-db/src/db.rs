use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use vitalog_migration::{Migrator, MigratorTrait};

#[derive(Clone)]
pub struct DatabaseHandler {
    pub(crate) db: DatabaseConnection,
}

impl DatabaseHandler {
    pub async fn new<C>(url: C) -> Self
    where
        C: Into<ConnectOptions>,
    {
        let db = Database::connect(url)
            .await
            .expect("Unable to connect to db");

        Migrator::up(&db, None)
            .await
            .expect("Error running migrations");

        Self { db }
    }

    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }
}
