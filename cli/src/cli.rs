//! CLI argument definitions.
//!
//! This module contains the top-level CLI structure and shared types.
//! Individual command definitions are in the `commands` module.

use std::error::Error;

use clap::Parser;
use db::{CommandGenerator, DatabaseConfig};

use crate::commands::Command;
use crate::config::ConfigFile;
use crate::output::OutputFormat;

/// Environment variable naming the generator command line.
pub const GENERATOR_ENV: &str = "TABLEWRIGHT_GENERATOR";

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Store to apply schemas to (file path, :memory:, sqlite://, postgres://)
    ///
    /// If not specified, uses in order:
    ///   1. the `database` entry of .tablewright.json (current dir, then home)
    ///   2. the DATABASE_URL environment variable
    ///   3. ./tablewright.db
    #[arg(long, global = true)]
    pub db: Option<String>,

    /// Output format
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,

    /// Log debug output, including emitted SQL
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log warnings and errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}

/// Settings resolved once per run and shared by all commands.
#[derive(Debug, Clone)]
pub struct Context {
    pub database: DatabaseConfig,
    pub generator: Option<CommandGenerator>,
}

impl Context {
    /// Resolve the store and generator from flags, the config file and the
    /// environment.
    pub fn resolve(db_flag: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let config = ConfigFile::discover()?;
        Ok(Self::from_sources(db_flag, config.as_ref()))
    }

    /// Combine already-loaded sources, highest precedence first.
    pub fn from_sources(db_flag: Option<&str>, config: Option<&ConfigFile>) -> Self {
        let database = resolve_database(db_flag, config);

        let generator = config
            .and_then(|c| c.generator.clone())
            .or_else(|| {
                std::env::var(GENERATOR_ENV)
                    .ok()
                    .and_then(|line| CommandGenerator::from_command_line(&line))
            });

        Self { database, generator }
    }
}

/// Pick the store: `--db` flag, then config file, then `DATABASE_URL`, then
/// the default file.
pub fn resolve_database(db_flag: Option<&str>, config: Option<&ConfigFile>) -> DatabaseConfig {
    if let Some(url) = db_flag {
        return DatabaseConfig::from_url(url);
    }

    if let Some(database) = config.and_then(|c| c.database.as_ref()) {
        return database.to_database_config();
    }

    DatabaseConfig::from_env().unwrap_or_default()
}
