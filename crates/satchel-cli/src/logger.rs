//! Logging setup for the CLI, on the `tracing` stack.
//!
//! Verbosity resolves in this order: `--verbose` (debug for satchel
//! crates), `--quiet` (errors only), the `RUST_LOG` environment variable,
//! then the default info level for satchel crates.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const SATCHEL_CRATES: [&str; 4] = [
    "satchel_graph",
    "satchel_config",
    "satchel_bundler",
    "satchel_cli",
];

fn satchel_filter(level: &str) -> EnvFilter {
    let directives = SATCHEL_CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(directives)
}

/// Initialize the global tracing subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        satchel_filter("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| satchel_filter("info"))
    };

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
