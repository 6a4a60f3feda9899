use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Pooled handle to the relational store. Every repository operation is an
/// `impl DatabaseService` method in a sibling module.
#[derive(Clone)]
pub struct DatabaseService {
    pub(crate) database_connection: DatabaseConnection,
}

impl DatabaseService {
    pub async fn connect(uri: &str) -> Result<Self, DbErr> {
        Self::connect_with(ConnectOptions::new(uri)).await
    }

    /// Connects and brings the schema up to date.
    pub async fn connect_with(options: ConnectOptions) -> Result<Self, DbErr> {
        info!("Connecting to database...");
        let db = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&db, None).await?;
        info!("Database ready.");
        Ok(Self { database_connection: db })
    }
}
