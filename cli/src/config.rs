//! Configuration file handling.
//!
//! This module provides loading and parsing of `.tablewright.json` configuration
//! files. The file may name a store and a text generator:
//!
//! ```json
//! {
//!   "database": { "type": "sqlite", "path": "./tablewright.db" },
//!   "generator": { "command": "llm", "args": ["-m", "gpt-4o-mini"] }
//! }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use db::{CommandGenerator, DatabaseConfig, PostgresConfig};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the configuration file.
pub const CONFIG_FILE_NAME: &str = ".tablewright.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Store configuration
    #[serde(default)]
    pub database: Option<DatabaseConfigFile>,

    /// Command used by `generate`
    #[serde(default)]
    pub generator: Option<CommandGenerator>,
}

/// Store configuration variants.
///
/// JSON format uses "type" field with lowercase variant names.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DatabaseConfigFile {
    /// SQLite file
    Sqlite { path: PathBuf },
    /// In-memory SQLite, discarded after the command
    #[serde(rename = "memory")]
    Mem,
    /// PostgreSQL server
    #[serde(rename = "postgres")]
    Postgres(PostgresConfig),
}

impl ConfigFile {
    /// Find and load the configuration file.
    ///
    /// Looks in the current directory first, then the home directory. Returns
    /// `Ok(None)` when neither has one.
    pub fn discover() -> Result<Option<Self>, ConfigError> {
        let mut candidates = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(home_dir) = home::home_dir() {
            candidates.push(home_dir.join(CONFIG_FILE_NAME));
        }

        for path in candidates {
            if path.exists() {
                return Self::load_from(&path).map(Some);
            }
        }
        Ok(None)
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

impl DatabaseConfigFile {
    /// Convert this configuration to a DatabaseConfig.
    pub fn to_database_config(&self) -> DatabaseConfig {
        match self {
            Self::Sqlite { path } => DatabaseConfig::Sqlite { path: path.clone() },
            Self::Mem => DatabaseConfig::Memory,
            Self::Postgres(pg_config) => DatabaseConfig::Postgres(pg_config.clone()),
        }
    }
}
