//! Source-loading seam between the graph builder and the bundler's
//! transform pipeline.
//!
//! The builder never reads files directly; it asks a [`SourceLoader`] for
//! the text of a module. The bundler's loader pipeline implements this
//! trait to apply per-file transform rules, while [`FsLoader`] provides the
//! untransformed default used by tests and by builds without rules.

use std::fs;
use std::path::Path;

use crate::{Error, Result};

/// Produces the (possibly transformed) text of a module file.
pub trait SourceLoader {
    /// Load the text for `path`, applying whatever transforms the
    /// implementation carries. Implementations report unreadable files as
    /// [`Error::Read`] and transform failures as [`Error::Loader`].
    fn load(&self, path: &Path) -> Result<String>;
}

/// Plain filesystem loader: reads UTF-8 text, no transforms.
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl SourceLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })
    }
}
