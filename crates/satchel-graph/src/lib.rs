//! # satchel-graph
//!
//! Foundation crate for the satchel bundler: canonical module identity,
//! request resolution, dependency extraction over real JavaScript syntax,
//! and the recursive module-graph builder.
//!
//! The crate deliberately owns no policy about *how* module text is
//! produced. Callers hand the builder a [`SourceLoader`]; the bundler crate
//! plugs its transform pipeline into that seam, tests plug in plain file
//! reads or fixtures.
//!
//! ## Pipeline position
//!
//! ```text
//! entry path ──▶ SourceLoader ──▶ extract::rewrite_includes ──▶ GraphBuilder
//!                (loader seam)     (oxc parse/rewrite/print)    (dedup, recursion)
//! ```
//!
//! All work is single-threaded and synchronous: a module is fully loaded,
//! parsed and registered before its dependencies are visited.

use std::path::PathBuf;

pub mod builder;
pub mod extract;
pub mod loader;
pub mod module;
pub mod module_id;
pub mod resolver;

pub use builder::{GraphBuilder, ModuleGraph};
pub use extract::{Extraction, rewrite_includes};
pub use loader::{FsLoader, SourceLoader};
pub use module::Module;
pub use module_id::ModuleId;

/// Name of the call-expression callee treated as the module-inclusion
/// primitive. Call sites like `require('./dep')` are rewritten to reference
/// canonical ids and recorded as graph edges.
pub const INCLUDE_PRIMITIVE: &str = "require";

/// Error types for graph construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A module request could not be resolved to an existing file.
    #[error(
        "cannot resolve '{request}' from '{}' (tried extensions: {})",
        from.display(),
        extensions.join(", ")
    )]
    Resolve {
        request: String,
        from: PathBuf,
        extensions: Vec<String>,
    },

    /// A resolved file lies outside the project root and cannot be given a
    /// canonical id.
    #[error("module '{}' is outside the project root '{}'", path.display(), root.display())]
    OutsideRoot { path: PathBuf, root: PathBuf },

    /// Module text failed to parse.
    #[error("failed to parse '{}': {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// A source loader (transform pipeline) rejected the module.
    #[error("loader failure for '{}': {message}", path.display())]
    Loader { path: PathBuf, message: String },

    /// Raw module text could not be read from disk.
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for graph operations.
pub type Result<T> = std::result::Result<T, Error>;
