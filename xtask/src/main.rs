mod commands;
mod logging;

use std::time::Instant;
use clap::{Parser, Subcommand};
use crate::logging::init_logger;

#[macro_use]
extern crate log;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct XtaskArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Regenerates the placeholder modules from the backend registry.
    FixCopies(commands::fix_copies::FixCopiesCmdArgs),
}

fn main() -> anyhow::Result<()> {
    init_logger().init();
    let args = XtaskArgs::parse();

    let start = Instant::now();
    match args.command {
        Command::FixCopies(args) => commands::fix_copies::handle_command(args),
    }?;

    let duration = start.elapsed();
    info!(
        "\x1B[32;1mTime elapsed for the current execution: {:.2?}\x1B[0m",
        duration
    );

    Ok(())
}
