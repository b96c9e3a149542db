//! Command implementations.

use std::path::{Path, PathBuf};

use satchel_config::{Config, ConfigDiscovery};

use crate::error::Result;

pub mod build;
pub mod watch;

/// Load config from an explicit `--config` path or via discovery in the
/// `--context` directory (default `.`). A `--context` override also pins
/// the project root.
pub(crate) fn load_config(
    config_path: Option<&Path>,
    context: Option<&Path>,
) -> Result<Config> {
    let mut config = match config_path {
        Some(path) => ConfigDiscovery::load_file(path)?,
        None => {
            let root = context
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from("."));
            ConfigDiscovery::new(&root).load()?
        }
    };

    if let Some(context) = context {
        config.context = Some(context.to_path_buf());
    }
    Ok(config)
}
