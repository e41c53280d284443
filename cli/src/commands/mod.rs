//! Command definitions and implementations.
//!
//! Each command is defined in its own module with:
//! - The command struct with clap attributes for CLI parsing
//! - `execute.rs` producing a serializable result
//! - `output.rs` rendering that result as a table

pub mod apply;
mod apply_sql;
mod compile;
mod generate;
mod tables;

pub use apply::ApplyCmd;
pub use apply_sql::ApplySqlCmd;
pub use compile::CompileCmd;
pub use generate::GenerateCmd;
pub use tables::TablesCmd;

use std::error::Error;
use std::fs;
use std::path::Path;

use clap::Subcommand;

use crate::cli::Context;
use crate::output::{OutputFormat, Outputable};

/// Trait for executing commands with command-specific result types.
pub trait Execute {
    type Output: Outputable;

    fn execute(self, ctx: &Context) -> Result<Self::Output, Box<dyn Error>>;
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compile a schema file to CREATE TABLE statements without touching the store
    Compile(CompileCmd),

    /// Apply a schema file to the store, one table at a time
    Apply(ApplyCmd),

    /// Apply a SQL script to the store as a single transaction
    ApplySql(ApplySqlCmd),

    /// Generate a schema from a description and apply it
    Generate(GenerateCmd),

    /// List the tables in the store and their foreign keys
    Tables(TablesCmd),
}

impl Command {
    /// Execute the command and return formatted output
    pub fn run(self, ctx: &Context, format: OutputFormat) -> Result<String, Box<dyn Error>> {
        match self {
            Command::Compile(cmd) => Ok(cmd.execute(ctx)?.format(format)),
            Command::Apply(cmd) => Ok(cmd.execute(ctx)?.format(format)),
            Command::ApplySql(cmd) => Ok(cmd.execute(ctx)?.format(format)),
            Command::Generate(cmd) => Ok(cmd.execute(ctx)?.format(format)),
            Command::Tables(cmd) => Ok(cmd.execute(ctx)?.format(format)),
        }
    }
}

/// Read an input file, naming it in the error.
pub(crate) fn read_input(path: &Path) -> Result<String, Box<dyn Error>> {
    fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e).into())
}
