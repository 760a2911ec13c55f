/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration,
 * focusing on the optional SQLite database connection.
 *
 * # Configuration Sources
 *
 * Configuration is loaded from environment variables, with sensible
 * defaults for local development when possible:
 *
 * - `DATABASE_URL` - SQLite connection string (e.g. `sqlite://xfinvoice.db`)
 * - `SERVER_PORT` - Listen port, defaults to 3000
 *
 * # Error Handling
 *
 * Configuration errors are logged but do not prevent server startup.
 * When the database fails to initialize the pool is set to `None` and
 * the server runs without it; handlers answer 503 for database-backed
 * operations.
 */

use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Database configuration result
///
/// Contains the database connection pool if successfully configured,
/// or `None` if the database is not available.
pub type DatabaseConfig = Option<SqlitePool>;

/// Listen port used when `SERVER_PORT` is unset or unparseable
pub const DEFAULT_PORT: u16 = 3000;

/// Resolve the listen port from `SERVER_PORT`
pub fn server_port() -> u16 {
    std::env::var("SERVER_PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

/// Apply the application schema to a pool
///
/// The schema file only contains idempotent statements, so this is safe
/// to run on every startup.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::raw_sql(include_str!("schema.sql")).execute(pool).await?;
    Ok(())
}

/// Load and initialize the database connection pool
///
/// This function:
/// 1. Reads `DATABASE_URL` from the environment
/// 2. Creates a SQLite connection pool (creating the file if missing)
/// 3. Applies the application schema
///
/// # Returns
///
/// - `Some(SqlitePool)` if the database is successfully configured
/// - `None` if `DATABASE_URL` is not set or any step fails
///
/// # Errors
///
/// Errors are logged but do not prevent server startup. The function
/// returns `None` on any error, allowing the server to run without
/// database features.
pub async fn load_database() -> DatabaseConfig {
    let database_url = match std::env::var("DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            tracing::warn!("DATABASE_URL not set. Database features will be disabled.");
            return None;
        }
    };

    tracing::info!("Connecting to database...");

    let options = match SqliteConnectOptions::from_str(&database_url) {
        Ok(options) => options
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal),
        Err(err) => {
            tracing::error!("Invalid DATABASE_URL: {}", err);
            return None;
        }
    };

    let pool = match SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
    {
        Ok(pool) => pool,
        Err(err) => {
            tracing::error!("Failed to connect to database: {}", err);
            return None;
        }
    };

    if let Err(err) = init_schema(&pool).await {
        tracing::error!("Failed to apply database schema: {}", err);
        return None;
    }

    tracing::info!("Database connected and schema applied");
    Some(pool)
}
