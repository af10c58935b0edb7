//! faculty CLI - teacher and course record service
//!
//! Entry point for the `faculty` binary:
//! - `serve`: run the HTTP API
//! - `init-db`: create the database schema and exit
//! - `config`: print the effective configuration

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

use tracing_setup::{init_tracing, TracingConfig};

#[derive(Parser, Debug)]
#[command(
    name = "faculty",
    author,
    version,
    about = "Teacher and course records over HTTP, backed by SQLite"
)]
struct Cli {
    /// Enable debug logging (RUST_LOG still takes precedence)
    #[arg(long, global = true)]
    debug: bool,

    /// Config file (default: ~/.faculty/config.toml when present)
    #[arg(long, short = 'c', global = true, env = "FACULTY_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
    /// Create the database tables and exit
    InitDb(commands::init_db::InitDbArgs),
    /// Print the effective configuration as TOML
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env never overrides variables already set
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(&TracingConfig { debug: cli.debug }).ok();

    let config_path = cli.config.as_deref();
    match cli.command {
        Commands::Serve(args) => commands::run_serve(config_path, args).await?,
        Commands::InitDb(args) => commands::run_init_db(config_path, args).await?,
        Commands::Config(args) => commands::run_config(config_path, args)?,
    }
    Ok(())
}
