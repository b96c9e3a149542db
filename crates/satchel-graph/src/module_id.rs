use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Canonical identifier for a module in the satchel graph.
///
/// The identifier is the module's path relative to the project root, with
/// `/` separators on every platform. It doubles as the runtime lookup key
/// inside emitted assets, so it must not leak absolute filesystem layout:
/// building the same tree from two different checkouts (or two working
/// directories) yields byte-identical ids.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleId(String);

impl ModuleId {
    /// Compute the canonical id of `path` relative to `root`.
    ///
    /// Both paths are expected to be absolute and lexically cleaned; the
    /// resolver takes care of that before ids are minted. A path outside
    /// the root has no stable relative spelling and is rejected.
    pub fn from_path(root: &Path, path: &Path) -> Result<Self> {
        let relative = path.strip_prefix(root).map_err(|_| Error::OutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })?;

        let mut text = String::new();
        for component in relative.components() {
            if !text.is_empty() {
                text.push('/');
            }
            text.push_str(&component.as_os_str().to_string_lossy());
        }

        Ok(Self(text))
    }

    /// Borrow the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
