//! Emitted assets and output-path handling.

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::{Error, Result};

/// One emitted output file. Write-once: created from a chunk, never
/// mutated afterwards.
#[derive(Debug, Clone, Serialize)]
pub struct Asset {
    /// Destination path.
    pub path: PathBuf,
    /// Fully synthesized runtime text.
    pub content: String,
}

/// Substitute the chunk name into a filename pattern.
pub fn substitute_name(pattern: &str, name: &str) -> String {
    pattern.replace("[name]", name)
}

/// Write one asset to disk.
pub fn write_asset(asset: &Asset) -> Result<()> {
    fs::write(&asset.path, &asset.content).map_err(|source| Error::WriteAsset {
        path: asset.path.clone(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_placeholder_is_substituted() {
        assert_eq!(substitute_name("[name].js", "main"), "main.js");
        assert_eq!(
            substitute_name("assets/[name].bundle.js", "admin"),
            "assets/admin.bundle.js"
        );
        assert_eq!(substitute_name("fixed.js", "main"), "fixed.js");
    }

    #[test]
    fn write_asset_reports_unwritable_paths() {
        let asset = Asset {
            path: PathBuf::from("/nonexistent-dir/out.js"),
            content: String::new(),
        };
        assert!(matches!(
            write_asset(&asset).unwrap_err(),
            Error::WriteAsset { .. }
        ));
    }
}
