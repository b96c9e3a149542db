//! File-based config discovery.
//!
//! Searches the project root for `satchel.toml`, then for a `package.json`
//! carrying a `"satchel"` field. TOML files are converted to JSON values
//! before deserialization so both formats share one data model.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::debug;

use crate::config::Config;
use crate::error::{ConfigError, Result};

/// Filesystem discovery for [`Config`].
pub struct ConfigDiscovery {
    root: PathBuf,
}

impl ConfigDiscovery {
    pub fn new(root: impl AsRef<Path>) -> Self {
        Self {
            root: root.as_ref().to_path_buf(),
        }
    }

    /// Find a config file in the root directory.
    ///
    /// Search order: `satchel.toml`, then `package.json` with a non-null
    /// `"satchel"` field.
    pub fn find(&self) -> Option<PathBuf> {
        let toml_path = self.root.join("satchel.toml");
        if toml_path.exists() {
            return Some(toml_path);
        }

        let pkg_path = self.root.join("package.json");
        if pkg_path.exists() {
            if let Ok(content) = fs::read_to_string(&pkg_path) {
                if let Ok(parsed) = serde_json::from_str::<Value>(&content) {
                    if parsed.get("satchel").is_some_and(|value| !value.is_null()) {
                        return Some(pkg_path);
                    }
                }
            }
        }

        None
    }

    /// Load config from the discovered file.
    pub fn load(&self) -> Result<Config> {
        let path = self
            .find()
            .ok_or_else(|| ConfigError::NotFound(self.root.clone()))?;
        debug!(config = %path.display(), "loading configuration");
        Self::load_file(&path)
    }

    /// Load config from an explicit file path (`--config`).
    ///
    /// `package.json` is read through its `"satchel"` field; `.toml` files
    /// as TOML; anything else as plain JSON. When the config does not pin a
    /// `context`, the file's directory becomes the project root.
    pub fn load_file(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let value = if path.file_name() == Some(std::ffi::OsStr::new("package.json")) {
            let parsed: Value =
                serde_json::from_str(&content).map_err(|err| ConfigError::Syntax {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                })?;
            parsed
                .get("satchel")
                .filter(|value| !value.is_null())
                .cloned()
                .ok_or_else(|| ConfigError::Invalid {
                    field: "satchel".to_string(),
                    hint: "add a \"satchel\" field to your package.json".to_string(),
                })?
        } else if path.extension() == Some(std::ffi::OsStr::new("toml")) {
            let parsed: toml::Value =
                toml::from_str(&content).map_err(|err| ConfigError::Syntax {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                })?;
            serde_json::to_value(parsed).map_err(|err| ConfigError::Syntax {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?
        } else {
            serde_json::from_str(&content).map_err(|err| ConfigError::Syntax {
                path: path.to_path_buf(),
                message: err.to_string(),
            })?
        };

        let mut config = Config::from_value(value)?;
        if config.context.is_none() {
            config.context = path.parent().map(Path::to_path_buf);
        }
        Ok(config)
    }
}
