mod execute;
mod output;

use std::path::PathBuf;

use clap::Args;

/// Compile a schema file to CREATE TABLE statements
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  tablewright compile -f schema.dbml            # Print the generated DDL
  tablewright compile -f schema.dbml -o json    # Statements and skipped input as JSON")]
pub struct CompileCmd {
    /// Schema file in the table-block dialect
    #[arg(short, long)]
    pub file: PathBuf,
}
