use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use tracing::info;

/// Owns the user table. Works against Postgres in production and SQLite in tests.
#[derive(Clone)]
pub struct CredentialStore {
    pub(crate) database_connection: DatabaseConnection,
}

impl CredentialStore {
    pub async fn new(uri: &str) -> Result<Self, DbErr> {
        let mut options = ConnectOptions::new(uri);
        options.sqlx_logging(false);
        if uri.starts_with("sqlite") {
            // every pooled connection to :memory: would be its own database
            options.max_connections(1);
        }

        info!("Connecting to database...");
        let database_connection = Database::connect(options).await?;
        info!("Running migrations...");
        Migrator::up(&database_connection, None).await?;
        info!("Database ready.");
        Ok(Self { database_connection })
    }
}
