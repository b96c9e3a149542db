//! # satchel-config
//!
//! Build configuration for the satchel bundler: the serde data model
//! (entries, output layout, loader rules, resolution extensions), file
//! discovery, and validation.
//!
//! Library users construct a [`Config`] programmatically or via
//! [`Config::from_value`]; the CLI goes through [`ConfigDiscovery`], which
//! searches `satchel.toml` and the `"satchel"` field of `package.json`.

mod config;
mod discovery;
mod error;

pub use config::{Config, DEFAULT_ENTRY_NAME, Entry, ModuleOptions, OutputOptions, Rule};
pub use discovery::ConfigDiscovery;
pub use error::{ConfigError, Result};
