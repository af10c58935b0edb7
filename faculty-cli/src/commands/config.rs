//! Print the effective configuration

use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;

/// Arguments for the config command
#[derive(Parser, Debug)]
pub struct ConfigArgs {
    /// Show the config file path instead of its contents
    #[arg(long)]
    pub path: bool,
}

pub fn run_config(config_path: Option<&Path>, args: ConfigArgs) -> Result<()> {
    if args.path {
        let path = config_path
            .map(Path::to_path_buf)
            .or_else(faculty_server::FacultyConfig::default_path)
            .context("could not determine home directory")?;
        println!("{}", path.display());
        return Ok(());
    }

    let config = super::resolve_config(config_path, |_| {})?;
    let rendered = config.to_toml().context("failed to render configuration")?;
    print!("{rendered}");
    Ok(())
}
