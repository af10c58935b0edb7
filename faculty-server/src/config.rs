//! Service configuration loaded from TOML
//!
//! Every section has defaults, so an absent config file is valid. The CLI
//! layers flag and environment overrides on top of what is loaded here.

use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default database location, relative to the working directory
pub const DEFAULT_DATABASE_PATH: &str = "db/faculty.db";

/// Kept low; every handler holds a connection for at most two queries.
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Top-level configuration file layout
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FacultyConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub queue: QueueConfig,
}

/// HTTP listener settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (default: 127.0.0.1:10000)
    pub bind_addr: SocketAddr,

    /// Allow permissive CORS (default: false = localhost only)
    ///
    /// WARNING: Setting this to true allows any origin.
    pub cors_permissive: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 10000)),
            cors_permissive: false,
        }
    }
}

/// SQLite settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Database file, or `:memory:` for a throwaway in-process database
    pub path: String,
    pub max_connections: u32,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: DEFAULT_DATABASE_PATH.to_string(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

impl DatabaseConfig {
    /// In-memory database, used by tests and `--database :memory:`.
    pub fn in_memory() -> Self {
        Self {
            path: ":memory:".to_string(),
            max_connections: 1,
        }
    }

    pub fn is_memory(&self) -> bool {
        self.path == ":memory:"
    }
}

/// Task-queue client settings.
///
/// Declared for deployments that attach a worker later. No tasks are
/// registered and no broker connection is opened by this service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueConfig {
    pub broker_url: String,
    pub result_backend: String,
    pub serializer: String,
    pub result_serializer: String,
    pub accept_content: Vec<String>,
    pub track_started: bool,
}

impl Default for QueueConfig {
    fn default() -> Self {
        Self {
            broker_url: "redis://localhost:6379/0".to_string(),
            result_backend: "redis://localhost:6379/0".to_string(),
            serializer: "json".to_string(),
            result_serializer: "json".to_string(),
            accept_content: vec!["json".to_string()],
            track_started: true,
        }
    }
}

impl QueueConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.serializer != "json" {
            return Err(ConfigError::invalid(format!(
                "queue.serializer must be \"json\", got \"{}\"",
                self.serializer
            )));
        }
        if self.result_serializer != "json" {
            return Err(ConfigError::invalid(format!(
                "queue.result_serializer must be \"json\", got \"{}\"",
                self.result_serializer
            )));
        }
        if self.accept_content.is_empty() || self.accept_content.iter().any(|c| c != "json") {
            return Err(ConfigError::invalid(
                "queue.accept_content may only contain \"json\"",
            ));
        }
        Ok(())
    }
}

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("invalid configuration: {reason}")]
    Invalid { reason: String },
}

impl ConfigError {
    pub fn invalid(reason: impl Into<String>) -> Self {
        Self::Invalid {
            reason: reason.into(),
        }
    }
}

impl FacultyConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, `~/.faculty/config.toml`
    /// is used when present, otherwise defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(p) => p,
                None => {
                    tracing::debug!("no config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let config: Self =
            toml::from_str(&content).map_err(|source| ConfigError::Parse { path: path.clone(), source })?;

        tracing::debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Config file path: ~/.faculty/config.toml
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".faculty").join("config.toml"))
    }

    /// Check values serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::invalid("database.path cannot be empty"));
        }
        if self.database.max_connections == 0 {
            return Err(ConfigError::invalid(
                "database.max_connections must be at least 1",
            ));
        }
        self.queue.validate()
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
