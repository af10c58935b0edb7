//! HTTP server command
//!
//! Resolves configuration and hands off to `faculty_server::serve`.

use std::net::SocketAddr;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (overrides config; default: 127.0.0.1:10000)
    #[arg(long, short = 'b', env = "FACULTY_BIND")]
    pub bind: Option<SocketAddr>,

    /// SQLite database file or ":memory:" (overrides config)
    #[arg(long, env = "FACULTY_DATABASE")]
    pub database: Option<String>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,
}

/// Run the HTTP server
pub async fn run_serve(config_path: Option<&Path>, args: ServeArgs) -> Result<()> {
    let config = super::resolve_config(config_path, |c| {
        if let Some(bind) = args.bind {
            c.server.bind_addr = bind;
        }
        if let Some(database) = args.database {
            c.database.path = database;
        }
        if args.cors_permissive {
            c.server.cors_permissive = true;
        }
    })?;

    tracing::info!(
        bind = %config.server.bind_addr,
        database = %config.database.path,
        "starting faculty server"
    );
    // Blocks until shutdown
    faculty_server::serve(config).await.context("Server error")?;

    Ok(())
}
