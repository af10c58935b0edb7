//! Database layer - connection pool, schema and repositories
//!
//! # Design Principles
//!
//! - Connection pool, no Arc<Mutex<Connection>>
//! - Foreign keys enforced on every connection; cascades live in the schema
//! - Transactions for multi-step operations, rolled back on drop

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::create_pool;
pub use repos::*;

use sqlx::SqlitePool;

use crate::config::DatabaseConfig;

/// Open the pool and make sure the tables exist.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    let pool = create_pool(config).await?;
    schema::create_tables(&pool).await?;
    Ok(pool)
}
