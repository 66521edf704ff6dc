use std::str::FromStr;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

use crate::config::Config;

/// Create a new database connection pool.
///
/// This is a simple factory - it creates a new pool instance every time.
/// The caller is responsible for managing the pool lifecycle.
///
/// Foreign-key enforcement is switched on for every connection; referential
/// validation on insert depends on it.
pub async fn create_pool(config: &Config) -> Result<SqlitePool> {
    let options = SqliteConnectOptions::from_str(&config.database_url)
        .with_context(|| format!("Invalid database url: {}", config.database_url))?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .context("Failed to connect to database")?;

    Ok(pool)
}

/// Run database migrations.
pub async fn migrate(pool: &SqlitePool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run migrations")?;

    Ok(())
}

/// Check that the schema has been applied.
pub async fn check_initialized(pool: &SqlitePool) -> Result<()> {
    sqlx::query("SELECT 1 FROM batches LIMIT 1")
        .fetch_optional(pool)
        .await
        .context("Database has not been initialized")?;

    Ok(())
}
