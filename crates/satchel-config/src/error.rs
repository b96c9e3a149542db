use std::path::PathBuf;

use thiserror::Error;

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config file was found in the search root.
    #[error(
        "no satchel configuration found in '{}'\n\nHint: create a satchel.toml or add a \"satchel\" field to package.json",
        .0.display()
    )]
    NotFound(PathBuf),

    /// The config file could not be read.
    #[error("failed to read config file '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML/JSON.
    #[error("invalid config syntax in '{}': {message}", path.display())]
    Syntax { path: PathBuf, message: String },

    /// A config field carries an unusable value.
    #[error("invalid value for '{field}': {hint}")]
    Invalid { field: String, hint: String },

    /// A loader rule's `test` pattern failed to compile.
    #[error("invalid loader rule pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },
}

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
