mod execute;

use std::path::PathBuf;

use clap::Args;

/// Apply a SQL script as a single transaction
#[derive(Args, Debug)]
#[command(after_help = "\
The whole script commits or nothing does: if any statement fails, every
statement before it is rolled back.

Examples:
  tablewright apply-sql -f schema.sql
  tablewright --db :memory: apply-sql -f schema.sql   # Dry check against a scratch store")]
pub struct ApplySqlCmd {
    /// SQL script file
    #[arg(short, long)]
    pub file: PathBuf,
}
