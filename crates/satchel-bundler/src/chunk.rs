//! Chunk assembly: group the entry module and everything reachable from it
//! into one deliverable unit.

use serde::Serialize;

use satchel_graph::{ModuleGraph, ModuleId};

/// The deliverable unit for one entry.
///
/// Module bodies stay in the graph; a chunk only names its members, in
/// graph discovery order. Serialization follows the conventional result
/// shape (`module`/`relativeModules`).
#[derive(Debug, Clone, Serialize)]
pub struct Chunk {
    /// Entry name this chunk was built for.
    pub name: String,
    /// The module that starts execution.
    #[serde(rename = "module")]
    pub entry: ModuleId,
    /// Every known module owned by this chunk's entry.
    #[serde(rename = "relativeModules")]
    pub modules: Vec<ModuleId>,
}

/// Pure filter: the chunk for `name` holds every module whose owning
/// entries include `name`.
pub fn assemble(name: &str, entry: ModuleId, graph: &ModuleGraph) -> Chunk {
    let modules = graph
        .modules()
        .filter(|module| module.owned_by(name))
        .map(|module| module.id.clone())
        .collect();
    Chunk {
        name: name.to_string(),
        entry,
        modules,
    }
}
