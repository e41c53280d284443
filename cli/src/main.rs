use clap::Parser;

mod cli;
mod commands;
mod config;
mod logging;
pub mod output;
#[macro_use]
mod test_macros;

use cli::{Args, Context};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init_logging(args.log_level());

    let ctx = Context::resolve(args.db.as_deref())?;
    tracing::debug!(backend = ctx.database.backend_label(), "store resolved");

    let output = args.command.run(&ctx, args.format)?;
    println!("{}", output);
    Ok(())
}
