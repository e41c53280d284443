mod execute;
mod output;

use clap::Args;

/// List the tables in the store
#[derive(Args, Debug)]
#[command(after_help = "\
Examples:
  tablewright tables                      # Tables in the default store
  tablewright --db app.db tables -o json  # As JSON, with foreign keys")]
pub struct TablesCmd {}
