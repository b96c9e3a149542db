//! Command-line surface.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// A minimal CommonJS module bundler.
#[derive(Parser, Debug)]
#[command(name = "satchel", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Available satchel subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bundle every entry once and exit
    ///
    /// Resolves the dependency graph of each configured entry, applies the
    /// loader rules, and writes one self-contained asset per entry.
    Build(BuildArgs),

    /// Bundle, then rebuild whenever a dependency file changes
    ///
    /// Stays resident: every file that took part in the last successful
    /// build is watched, and any change re-runs the whole pipeline.
    Watch(WatchArgs),
}

/// Arguments for the build command.
#[derive(Args, Debug)]
pub struct BuildArgs {
    /// Explicit config file (skips satchel.toml / package.json discovery)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root: config discovery starts here and module ids are
    /// relative to it
    #[arg(long, value_name = "DIR")]
    pub context: Option<PathBuf>,

    /// Print the full build result as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the watch command.
#[derive(Args, Debug)]
pub struct WatchArgs {
    /// Explicit config file (skips satchel.toml / package.json discovery)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Project root: config discovery starts here and module ids are
    /// relative to it
    #[arg(long, value_name = "DIR")]
    pub context: Option<PathBuf>,
}
