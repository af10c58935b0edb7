//! SQLite connection pool management

use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;

use crate::config::DatabaseConfig;

/// Prevents SQLITE_BUSY errors under concurrent writers.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Connection acquire timeout.
const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(5);

/// Create a SQLite connection pool.
///
/// File databases are created on first use, parent directory included.
/// `:memory:` yields a single-connection pool that is never recycled, so
/// the database lives as long as the pool.
///
/// # Errors
///
/// Returns an error if the directory cannot be created or the connection fails.
pub async fn create_pool(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    if config.is_memory() {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);

        return SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .acquire_timeout(ACQUIRE_TIMEOUT)
            .connect_with(options)
            .await;
    }

    let path = Path::new(&config.path);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    let options = SqliteConnectOptions::new()
        .filename(path)
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .synchronous(SqliteSynchronous::Normal)
        .busy_timeout(BUSY_TIMEOUT)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_with(options)
        .await?;

    tracing::info!(path = %path.display(), max_connections = config.max_connections, "database connected");
    Ok(pool)
}
