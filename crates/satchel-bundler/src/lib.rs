//! # satchel-bundler
//!
//! The bundling engine: per-file transform rules, chunk assembly per entry,
//! the synthesized runtime loader, and the long-lived [`Compiler`] with its
//! lifecycle hooks and watch/rebuild loop.
//!
//! ## Quick start
//!
//! ```no_run
//! use satchel_bundler::{Compiler, Config};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let compiler = Compiler::new(Config::with_entry("src/index.js"))?;
//! let result = compiler.run()?;
//! for asset in &result.assets {
//!     println!("wrote {}", asset.path.display());
//! }
//! # Ok(()) }
//! ```
//!
//! One [`Compilation`] exists per build pass and is discarded afterwards;
//! the compiler survives across passes and owns the `run`/`done` hooks.

use std::path::PathBuf;

pub mod chunk;
pub mod compilation;
pub mod compiler;
pub mod hooks;
pub mod loader;
pub mod output;
pub mod plugin;
pub mod runtime;
pub mod transform;
pub mod watcher;

pub use chunk::{Chunk, assemble};
pub use compilation::{BuildResult, Compilation};
pub use compiler::{Compiler, create_compiler};
pub use hooks::{CompilerHooks, SyncHook};
pub use loader::{LoaderPipeline, LoaderRule};
pub use output::Asset;
pub use plugin::Plugin;
pub use transform::{FnTransform, Transform};
pub use watcher::WatchSession;

// Re-export the foundation types users touch through build results.
pub use satchel_config::Config;
pub use satchel_graph::{FsLoader, Module, ModuleGraph, ModuleId, SourceLoader};

/// Error types for bundling operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Config(#[from] satchel_config::ConfigError),

    /// Graph construction failed (resolution, parse, loader, read).
    #[error(transparent)]
    Graph(#[from] satchel_graph::Error),

    /// A loader rule names a transform the registry does not know.
    #[error("unknown transform '{name}' in rule '{pattern}'")]
    UnknownTransform { name: String, pattern: String },

    /// A transform rejected its input.
    #[error("transform '{name}' failed for '{}': {message}", path.display())]
    Transform {
        name: String,
        path: PathBuf,
        message: String,
    },

    /// The configured project root does not exist or is unreadable.
    #[error("project root '{}' is not accessible: {source}", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory could not be created.
    #[error("failed to create output directory '{}': {source}", path.display())]
    OutputDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An asset could not be written.
    #[error("failed to write asset '{}': {source}", path.display())]
    WriteAsset {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A chunk references a module id missing from the graph.
    #[error("chunk '{chunk}' references unknown module '{id}'")]
    MissingModule { chunk: String, id: ModuleId },

    /// The file watcher could not be created or subscribed.
    #[error("file watcher error: {0}")]
    Watch(#[from] notify::Error),

    /// The watcher's event channel closed unexpectedly.
    #[error("file watcher channel closed")]
    WatchClosed,

    /// Watch mode needs at least one successful pass to know which files
    /// to watch.
    #[error("cannot watch: no successful build to take the file list from")]
    NothingToWatch,
}

/// Result type alias for bundling operations.
pub type Result<T> = std::result::Result<T, Error>;
