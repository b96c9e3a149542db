//! Recursive module-graph construction.
//!
//! One [`GraphBuilder`] serves a whole build pass: it is invoked once per
//! entry and accumulates every reachable module into a shared
//! [`ModuleGraph`], deduplicating modules that more than one entry reaches.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use tracing::debug;

use crate::loader::SourceLoader;
use crate::module::Module;
use crate::module_id::ModuleId;
use crate::{Result, extract, resolver};

/// The deduplicated set of all modules reachable from all entries, in
/// post-order discovery order (dependencies registered before dependents,
/// each entry module after its subtree).
#[derive(Debug, Default)]
pub struct ModuleGraph {
    modules: IndexMap<ModuleId, Module>,
    file_dependencies: Vec<PathBuf>,
}

impl ModuleGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: &ModuleId) -> Option<&Module> {
        self.modules.get(id)
    }

    pub fn contains(&self, id: &ModuleId) -> bool {
        self.modules.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Iterate all registered modules in discovery order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.values()
    }

    /// Every file read during the build, one entry per built module, in
    /// build order. This is what the rebuild loop watches.
    pub fn file_dependencies(&self) -> &[PathBuf] {
        &self.file_dependencies
    }
}

/// Recursive builder: loader pipeline in, registered modules out.
pub struct GraphBuilder<'a> {
    root: &'a Path,
    extensions: &'a [String],
    include_primitive: &'a str,
    loader: &'a dyn SourceLoader,
    in_progress: FxHashSet<ModuleId>,
}

impl<'a> GraphBuilder<'a> {
    pub fn new(root: &'a Path, extensions: &'a [String], loader: &'a dyn SourceLoader) -> Self {
        Self {
            root,
            extensions,
            include_primitive: crate::INCLUDE_PRIMITIVE,
            loader,
            in_progress: FxHashSet::default(),
        }
    }

    /// Build the module at `path` and everything reachable from it, on
    /// behalf of `entry`.
    ///
    /// A module already registered in `graph` is not re-parsed or
    /// re-traversed; it only learns that `entry` reaches it. A module
    /// currently being built (an inclusion cycle) is skipped entirely: the
    /// edge is already recorded in the requiring module's dependency list,
    /// and the emitted runtime's cache pre-registration resolves the
    /// reference at execution time.
    pub fn build_entry(
        &mut self,
        graph: &mut ModuleGraph,
        entry: &str,
        path: &Path,
    ) -> Result<ModuleId> {
        let id = ModuleId::from_path(self.root, path)?;

        if let Some(existing) = graph.modules.get_mut(&id) {
            existing.add_entry(entry);
            return Ok(id);
        }
        if self.in_progress.contains(&id) {
            return Ok(id);
        }
        self.in_progress.insert(id.clone());

        graph.file_dependencies.push(path.to_path_buf());

        let loaded = self.loader.load(path)?;
        let from_dir = path.parent().unwrap_or(self.root);
        let root = self.root;
        let extensions = self.extensions;
        let extract::Extraction {
            source,
            dependencies,
        } = extract::rewrite_includes(&loaded, path, self.include_primitive, |request| {
            let resolved = resolver::resolve(request, from_dir, extensions)?;
            let dep_id = ModuleId::from_path(root, &resolved)?;
            Ok((dep_id, resolved))
        })?;

        debug!(module = %id, entry, dependencies = dependencies.len(), "built module");

        for dependency in &dependencies {
            self.build_entry(graph, entry, dependency)?;
        }

        let mut module = Module::new(id.clone(), path.to_path_buf(), entry);
        module.dependencies = dependencies;
        module.source = source;
        graph.modules.insert(id.clone(), module);
        self.in_progress.remove(&id);

        Ok(id)
    }
}
