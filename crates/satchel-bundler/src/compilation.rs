//! One build pass.
//!
//! A [`Compilation`] owns the module graph, chunks and assets of a single
//! pass and is discarded when the pass ends; rebuilds start from a fresh
//! instance, so no stale ownership state survives an edit.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info};

use satchel_config::Config;
use satchel_graph::{GraphBuilder, Module, ModuleGraph, SourceLoader, resolver};

use crate::chunk::{self, Chunk};
use crate::output::{self, Asset};
use crate::runtime;
use crate::{Error, Result};

/// Transient aggregate for one build pass.
#[derive(Default)]
pub struct Compilation {
    pub graph: ModuleGraph,
    pub chunks: Vec<Chunk>,
    pub assets: Vec<Asset>,
}

impl Compilation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run the whole pass: build each entry's graph, assemble its chunk,
    /// then render and write every asset.
    ///
    /// Assets are rendered before anything is written, so a failing chunk
    /// leaves no partial output behind.
    pub fn build(
        &mut self,
        config: &Config,
        root: &Path,
        loader: &dyn SourceLoader,
    ) -> Result<BuildResult> {
        let entries = config.entry.normalize();
        let mut builder = GraphBuilder::new(root, &config.extensions, loader);

        for (name, request) in &entries {
            let entry_path = resolver::resolve(&request.to_string_lossy(), root, &config.extensions)?;
            let entry_id = builder.build_entry(&mut self.graph, name, &entry_path)?;
            let chunk = chunk::assemble(name, entry_id, &self.graph);
            info!(entry = %name, modules = chunk.modules.len(), "assembled chunk");
            self.chunks.push(chunk);
        }

        let out_dir = if config.output.path.is_absolute() {
            config.output.path.clone()
        } else {
            root.join(&config.output.path)
        };

        let mut assets = Vec::with_capacity(self.chunks.len());
        for chunk in &self.chunks {
            let content = runtime::render_chunk(chunk, &self.graph)?;
            let filename = output::substitute_name(&config.output.filename, &chunk.name);
            assets.push(Asset {
                path: out_dir.join(filename),
                content,
            });
        }

        fs::create_dir_all(&out_dir).map_err(|source| Error::OutputDir {
            path: out_dir.clone(),
            source,
        })?;
        for asset in &assets {
            output::write_asset(asset)?;
            debug!(asset = %asset.path.display(), bytes = asset.content.len(), "wrote asset");
        }
        self.assets = assets;

        Ok(BuildResult {
            assets: self.assets.clone(),
            chunks: self.chunks.clone(),
            modules: self.graph.modules().cloned().collect(),
            file_dependencies: self.graph.file_dependencies().to_vec(),
        })
    }
}

/// What one pass reports back to the caller.
#[derive(Debug, Clone, Serialize)]
pub struct BuildResult {
    pub assets: Vec<Asset>,
    pub chunks: Vec<Chunk>,
    pub modules: Vec<Module>,
    #[serde(rename = "fileDependencies")]
    pub file_dependencies: Vec<PathBuf>,
}
