#![cfg(test)]
use migration::MigratorTrait;
use models::db::{connect_with_config, DatabaseConfig};
use sea_orm::DatabaseConnection;

use crate::fixtures;

/// Empty in-memory store with the schema applied.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = connect_with_config(&DatabaseConfig::in_memory()).await?;
    migration::Migrator::up(&db, None).await?;
    Ok(db)
}

/// In-memory store holding the `fixtures` rows.
pub async fn get_seeded_db() -> Result<DatabaseConnection, anyhow::Error> {
    let db = get_db().await?;
    fixtures::seed(&db).await?;
    Ok(db)
}
