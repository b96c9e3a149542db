//! satchel — a minimal CommonJS module bundler.
//!
//! Entry point: parse arguments, initialize logging, dispatch the command,
//! and render failures as miette diagnostics.

use clap::Parser;
use miette::Result;

use satchel_cli::{cli, commands, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    if args.no_color {
        console::set_colors_enabled(false);
    }

    let outcome = match args.command {
        cli::Command::Build(build_args) => commands::build::execute(build_args),
        cli::Command::Watch(watch_args) => commands::watch::execute(watch_args),
    };

    outcome.map_err(Into::into)
}
