/// Database connection and configuration tests
pub mod db_tests;


use migration::MigratorTrait;
use sea_orm::DatabaseConnection;

use crate::db::{connect_with_config, DatabaseConfig};

/// Fresh in-memory SQLite database with the schema applied.
pub(crate) async fn migrated_sqlite() -> anyhow::Result<DatabaseConnection> {
    let db = connect_with_config(&DatabaseConfig::in_memory_sqlite()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}
