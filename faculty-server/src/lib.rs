//! faculty-server: teacher and course records over HTTP
//!
//! Two related record types in SQLite. A course belongs to exactly one
//! teacher and is deleted with it (`ON DELETE CASCADE`). Handlers are thin:
//! validate input, run one repository call, map the result to JSON.

pub mod config;
pub mod db;
pub mod error;
pub mod http;
pub mod models;

pub use config::FacultyConfig;
pub use error::{Error, Result};
pub use http::{router, run_server, AppState};

/// Validate the configuration, open the database and serve until shutdown.
pub async fn serve(config: FacultyConfig) -> Result<()> {
    config.validate()?;

    tracing::info!(
        broker = %config.queue.broker_url,
        "task queue configured, no tasks registered"
    );

    let pool = db::connect(&config.database).await?;
    run_server(pool, config.server).await
}
