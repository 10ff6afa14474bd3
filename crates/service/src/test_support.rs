#![cfg(test)]
use sea_orm::DatabaseConnection;
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};

/// Fresh, migrated database for the current test.
///
/// Each call opens its own in-memory SQLite database, so tests never observe
/// each other's rows.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::in_memory_sqlite()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
