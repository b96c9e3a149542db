use std::path::PathBuf;

use indexmap::IndexSet;
use serde::Serialize;

use crate::ModuleId;

/// One resolved source file.
///
/// Exactly one `Module` exists per canonical id within a single build pass,
/// no matter how many entries reach it. Rediscovery from a later entry only
/// appends to [`Module::entries`]; everything else is immutable once the
/// module is registered.
#[derive(Debug, Clone, Serialize)]
pub struct Module {
    /// Canonical id, the runtime lookup key.
    pub id: ModuleId,
    /// Resolved absolute path on disk.
    pub path: PathBuf,
    /// Names of the entries that (transitively) require this module.
    /// Grows monotonically during a build, never shrinks.
    pub entries: IndexSet<String>,
    /// Resolved absolute dependency paths, in source-traversal order.
    pub dependencies: Vec<PathBuf>,
    /// Transformed, reference-rewritten body text.
    pub source: String,
}

impl Module {
    /// Create a module owned by a single entry, with no dependencies or
    /// body yet; the builder fills those in before registration.
    pub fn new(id: ModuleId, path: PathBuf, entry: &str) -> Self {
        let mut entries = IndexSet::new();
        entries.insert(entry.to_string());
        Self {
            id,
            path,
            entries,
            dependencies: Vec::new(),
            source: String::new(),
        }
    }

    /// Record that `entry` also reaches this module.
    pub fn add_entry(&mut self, entry: &str) {
        self.entries.insert(entry.to_string());
    }

    /// Whether this module belongs to the chunk of the given entry.
    pub fn owned_by(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn module() -> Module {
        let root = PathBuf::from("/project");
        let path = PathBuf::from("/project/src/a.js");
        Module::new(ModuleId::from_path(&root, &path).unwrap(), path, "main")
    }

    #[test]
    fn entries_deduplicate() {
        let mut module = module();
        module.add_entry("main");
        module.add_entry("admin");
        module.add_entry("admin");

        assert_eq!(module.entries.len(), 2);
        assert!(module.owned_by("main"));
        assert!(module.owned_by("admin"));
        assert!(!module.owned_by("other"));
    }
}
