//! The configuration data model.
//!
//! The shape mirrors the conventional bundler surface: `entry` is a single
//! path or an ordered name→path map, `output` names the destination
//! directory and a `[name]` filename pattern, `module.rules` carries
//! path-pattern→transform mappings, and `extensions` drives resolution
//! probing.

use std::path::PathBuf;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ConfigError, Result};

/// Entry name used when `entry` is a bare path.
pub const DEFAULT_ENTRY_NAME: &str = "main";

fn default_extensions() -> Vec<String> {
    vec![".js".to_string()]
}

fn default_output_path() -> PathBuf {
    PathBuf::from("dist")
}

fn default_output_filename() -> String {
    "[name].js".to_string()
}

/// Top-level build configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Project root; canonical module ids are paths relative to it.
    /// Defaults to the config file's directory (discovery) or the current
    /// directory (programmatic use).
    #[serde(default)]
    pub context: Option<PathBuf>,

    /// Entry point(s) to build one chunk each for.
    pub entry: Entry,

    #[serde(default)]
    pub output: OutputOptions,

    #[serde(default)]
    pub module: ModuleOptions,

    /// Extensions probed, in order, when a request does not exist verbatim.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Config {
    /// Build a config for a single entry with defaults everywhere else.
    pub fn with_entry(entry: impl Into<PathBuf>) -> Self {
        Self {
            context: None,
            entry: Entry::Single(entry.into()),
            output: OutputOptions::default(),
            module: ModuleOptions::default(),
            extensions: default_extensions(),
        }
    }

    /// Create from a `serde_json::Value` (programmatic config, or a file
    /// already parsed by discovery).
    pub fn from_value(value: Value) -> Result<Self> {
        serde_json::from_value(value).map_err(|err| ConfigError::Invalid {
            field: "config".to_string(),
            hint: err.to_string(),
        })
    }

    /// Check invariants that would otherwise only surface mid-build.
    ///
    /// Malformed rule patterns are configuration errors and abort here,
    /// before any file is read.
    pub fn validate(&self) -> Result<()> {
        if self.entry.is_empty() {
            return Err(ConfigError::Invalid {
                field: "entry".to_string(),
                hint: "at least one entry is required".to_string(),
            });
        }

        if self.entry.len() > 1 && !self.output.filename.contains("[name]") {
            return Err(ConfigError::Invalid {
                field: "output.filename".to_string(),
                hint: "multiple entries require a '[name]' placeholder in the filename".to_string(),
            });
        }

        for rule in &self.module.rules {
            if let Err(err) = regex::Regex::new(&rule.test) {
                return Err(ConfigError::Pattern {
                    pattern: rule.test.clone(),
                    message: err.to_string(),
                });
            }
        }

        Ok(())
    }

    /// The project root this config resolves against.
    pub fn resolved_context(&self) -> PathBuf {
        self.context.clone().unwrap_or_else(|| PathBuf::from("."))
    }
}

/// A single entry path, or an ordered map of named entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Entry {
    Single(PathBuf),
    Named(IndexMap<String, PathBuf>),
}

impl Entry {
    /// Normalize to a name→path map; a bare path becomes the
    /// [`DEFAULT_ENTRY_NAME`] entry.
    pub fn normalize(&self) -> IndexMap<String, PathBuf> {
        match self {
            Self::Single(path) => {
                let mut entries = IndexMap::new();
                entries.insert(DEFAULT_ENTRY_NAME.to_string(), path.clone());
                entries
            }
            Self::Named(entries) => entries.clone(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Named(entries) => entries.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Where assets are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputOptions {
    /// Output directory, resolved against the project root when relative.
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Filename pattern; `[name]` is replaced by the chunk name.
    #[serde(default = "default_output_filename")]
    pub filename: String,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            filename: default_output_filename(),
        }
    }
}

/// Loader configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleOptions {
    /// Ordered rules; the first rule whose `test` matches a file's path
    /// supplies the transforms for that file.
    #[serde(default)]
    pub rules: Vec<Rule>,
}

/// One path-pattern→transforms mapping.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Regex matched against the file's absolute path.
    pub test: String,

    /// Built-in transform names, applied right-to-left. An empty list is a
    /// matching no-op.
    #[serde(default, rename = "use")]
    pub transforms: Vec<String>,
}
