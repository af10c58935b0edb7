//! Schema bootstrap command

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

use faculty_server::db;

/// Arguments for the init-db command
#[derive(Parser, Debug)]
pub struct InitDbArgs {
    /// SQLite database file (overrides config)
    #[arg(long, env = "FACULTY_DATABASE")]
    pub database: Option<String>,
}

/// Create the tables if they do not exist yet.
pub async fn run_init_db(config_path: Option<&Path>, args: InitDbArgs) -> Result<()> {
    let config = super::resolve_config(config_path, |c| {
        if let Some(database) = args.database {
            c.database.path = database;
        }
    })?;

    let pool = db::connect(&config.database)
        .await
        .with_context(|| format!("failed to initialise database at {}", config.database.path))?;
    pool.close().await;

    println!("✓ Database ready: {}", config.database.path);
    Ok(())
}
