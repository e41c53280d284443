mod execute;
mod output;

use clap::builder::NonEmptyStringValueParser;
use clap::Args;

/// Generate a schema from a description and apply it
#[derive(Args, Debug)]
#[command(after_help = "\
The description is sent to an external generator command on stdin, and its
stdout is taken as the schema. Output written in the table-block dialect is
applied table by table; SQL output is applied as one script.

The generator is taken from --generator-cmd, then the `generator` entry of
.tablewright.json, then the TABLEWRIGHT_GENERATOR environment variable.

Examples:
  tablewright generate -d \"a library with books, authors and loans\"
  tablewright generate -d \"a blog\" --dry-run                 # Show output, do not apply
  tablewright generate -d \"a blog\" --generator-cmd \"llm -m gpt-4o-mini\"")]
pub struct GenerateCmd {
    /// Natural-language description of the system to model
    #[arg(short, long, value_parser = NonEmptyStringValueParser::new())]
    pub description: String,

    /// Print the generated schema without applying it
    #[arg(long, default_value_t = false)]
    pub dry_run: bool,

    /// Generator command line, e.g. "llm -m gpt-4o-mini"
    #[arg(long)]
    pub generator_cmd: Option<String>,
}
