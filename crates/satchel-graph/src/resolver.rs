//! Request resolution: turn a relative module request into an existing
//! absolute file path.

use std::path::{Path, PathBuf};

use path_clean::PathClean;

use crate::{Error, Result};

/// Resolve `request` against `from_dir`.
///
/// The joined candidate is lexically cleaned (`./`, `../` collapsed) so the
/// same file always yields the same path regardless of how it was spelled.
/// If the candidate exists verbatim it wins; otherwise each extension in
/// `extensions` is appended in order and the first existing probe is taken.
pub fn resolve(request: &str, from_dir: &Path, extensions: &[String]) -> Result<PathBuf> {
    let candidate = from_dir.join(request).clean();
    if candidate.is_file() {
        return Ok(candidate);
    }

    for extension in extensions {
        let mut probe = candidate.clone().into_os_string();
        probe.push(extension);
        let probe = PathBuf::from(probe);
        if probe.is_file() {
            return Ok(probe);
        }
    }

    Err(Error::Resolve {
        request: request.to_string(),
        from: from_dir.to_path_buf(),
        extensions: extensions.to_vec(),
    })
}
