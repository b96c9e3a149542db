//! Source transforms and the built-in registry.
//!
//! Config files reference transforms by name (a config cannot carry a
//! function); programmatic callers can attach arbitrary implementations via
//! [`FnTransform`] or their own [`Transform`] types.

use std::path::Path;
use std::sync::Arc;

use crate::Result;

/// A text-to-text transform applied by the loader pipeline before
/// dependency extraction.
pub trait Transform {
    /// Registry/display name.
    fn name(&self) -> &str;

    /// Transform the module text. The output must still be parseable
    /// source, since extraction runs on it next.
    fn apply(&self, source: String, path: &Path) -> Result<String>;
}

/// Adapter turning a closure into a [`Transform`].
pub struct FnTransform<F> {
    name: String,
    apply: F,
}

impl<F> FnTransform<F>
where
    F: Fn(String, &Path) -> Result<String>,
{
    pub fn new(name: impl Into<String>, apply: F) -> Self {
        Self {
            name: name.into(),
            apply,
        }
    }
}

impl<F> Transform for FnTransform<F>
where
    F: Fn(String, &Path) -> Result<String>,
{
    fn name(&self) -> &str {
        &self.name
    }

    fn apply(&self, source: String, path: &Path) -> Result<String> {
        (self.apply)(source, path)
    }
}

/// Comment marker prepended by the `banner` transform.
pub const BANNER_COMMENT: &str = "/* bundled with satchel */";

struct Banner;

impl Transform for Banner {
    fn name(&self) -> &str {
        "banner"
    }

    fn apply(&self, source: String, _path: &Path) -> Result<String> {
        Ok(format!("{BANNER_COMMENT}\n{source}"))
    }
}

struct StripDebugger;

impl Transform for StripDebugger {
    fn name(&self) -> &str {
        "strip-debugger"
    }

    fn apply(&self, source: String, _path: &Path) -> Result<String> {
        let kept: Vec<&str> = source
            .lines()
            .filter(|line| {
                let trimmed = line.trim();
                trimmed != "debugger" && trimmed != "debugger;"
            })
            .collect();
        let mut out = kept.join("\n");
        if source.ends_with('\n') && !out.is_empty() {
            out.push('\n');
        }
        Ok(out)
    }
}

/// Look up a built-in transform by its config name.
pub fn builtin(name: &str) -> Option<Arc<dyn Transform>> {
    match name {
        "banner" => Some(Arc::new(Banner)),
        "strip-debugger" => Some(Arc::new(StripDebugger)),
        _ => None,
    }
}
