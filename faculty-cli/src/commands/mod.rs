//! Subcommand implementations

pub mod config;
pub mod init_db;
pub mod serve;

pub use config::run_config;
pub use init_db::run_init_db;
pub use serve::run_serve;

use std::path::Path;

use anyhow::{Context, Result};
use faculty_server::FacultyConfig;

/// Load and validate the config file, then apply command-line overrides.
pub(crate) fn resolve_config(
    path: Option<&Path>,
    apply: impl FnOnce(&mut FacultyConfig),
) -> Result<FacultyConfig> {
    let mut config = FacultyConfig::load(path).context("failed to load configuration")?;
    apply(&mut config);
    config.validate().context("invalid configuration")?;
    Ok(config)
}
