mod execute;
mod output;

pub use execute::ApplyReport;

use std::path::PathBuf;

use clap::Args;

/// Apply a schema file to the store
#[derive(Args, Debug)]
#[command(after_help = "\
Each table is created in its own transaction. A table the store rejects is
reported and the remaining tables are still created. Re-running is safe:
existing tables are left untouched.

Examples:
  tablewright apply -f schema.dbml                    # Default store (./tablewright.db)
  tablewright --db app.db apply -f schema.dbml        # Specific SQLite file
  tablewright --db postgres://localhost/app apply -f schema.dbml")]
pub struct ApplyCmd {
    /// Schema file in the table-block dialect
    #[arg(short, long)]
    pub file: PathBuf,
}
