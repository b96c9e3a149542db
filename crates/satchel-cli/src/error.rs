//! CLI error type, rendered through miette.

use miette::Diagnostic;
use thiserror::Error;

/// Top-level CLI error; every command returns this.
#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    /// Configuration discovery, parsing or validation failed.
    #[error("configuration error: {0}")]
    #[diagnostic(
        code(satchel::config),
        help("check your satchel.toml or the \"satchel\" field of package.json")
    )]
    Config(#[from] satchel_config::ConfigError),

    /// The build itself failed (resolution, parse, loader, output).
    #[error(transparent)]
    #[diagnostic(code(satchel::build))]
    Build(#[from] satchel_bundler::Error),

    /// Serializing the build result failed.
    #[error("JSON error: {0}")]
    #[diagnostic(code(satchel::json))]
    Json(#[from] serde_json::Error),
}

/// Result type alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;
