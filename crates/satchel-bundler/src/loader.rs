//! The loader pipeline: path-pattern rules applied to raw module text
//! before dependency extraction.
//!
//! The pipeline implements the graph crate's [`SourceLoader`] seam, so the
//! builder sees transformed text without knowing any rule exists. Matching
//! takes the **first** rule whose pattern matches (no union, no
//! fallthrough); that rule's transforms apply right-to-left, so
//! `use = [t1, t2]` runs `t1(t2(code))`.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use regex::Regex;
use tracing::trace;

use satchel_config::{ConfigError, Rule};
use satchel_graph::SourceLoader;

use crate::transform::{self, Transform};
use crate::{Error, Result};

/// One compiled path-pattern→transforms rule.
pub struct LoaderRule {
    test: Regex,
    transforms: Vec<Arc<dyn Transform>>,
}

impl LoaderRule {
    /// Rule with no transforms (a matching no-op).
    pub fn new(test: Regex) -> Self {
        Self {
            test,
            transforms: Vec::new(),
        }
    }

    /// Append a transform. Listed order is kept; application order is
    /// right-to-left.
    pub fn with_transform(mut self, transform: Arc<dyn Transform>) -> Self {
        self.transforms.push(transform);
        self
    }
}

/// Ordered rule list behind the [`SourceLoader`] seam.
#[derive(Default)]
pub struct LoaderPipeline {
    rules: Vec<LoaderRule>,
}

impl std::fmt::Debug for LoaderPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoaderPipeline")
            .field("rules", &self.rules.len())
            .finish_non_exhaustive()
    }
}

impl LoaderPipeline {
    /// Compile config rules, resolving transform names against the
    /// built-in registry. Malformed patterns and unknown names are
    /// configuration errors; nothing is read from disk yet.
    pub fn from_config(rules: &[Rule]) -> Result<Self> {
        let mut compiled = Vec::with_capacity(rules.len());
        for rule in rules {
            let test = Regex::new(&rule.test).map_err(|err| {
                Error::Config(ConfigError::Pattern {
                    pattern: rule.test.clone(),
                    message: err.to_string(),
                })
            })?;
            let mut transforms = Vec::with_capacity(rule.transforms.len());
            for name in &rule.transforms {
                let transform =
                    transform::builtin(name).ok_or_else(|| Error::UnknownTransform {
                        name: name.clone(),
                        pattern: rule.test.clone(),
                    })?;
                transforms.push(transform);
            }
            compiled.push(LoaderRule { test, transforms });
        }
        Ok(Self { rules: compiled })
    }

    /// Append a programmatic rule after the configured ones.
    pub fn push_rule(&mut self, rule: LoaderRule) {
        self.rules.push(rule);
    }
}

impl SourceLoader for LoaderPipeline {
    fn load(&self, path: &Path) -> satchel_graph::Result<String> {
        let raw = fs::read_to_string(path).map_err(|source| satchel_graph::Error::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let path_str = path.to_string_lossy();
        let Some(rule) = self.rules.iter().find(|rule| rule.test.is_match(&path_str)) else {
            return Ok(raw);
        };

        let mut code = raw;
        for transform in rule.transforms.iter().rev() {
            trace!(transform = transform.name(), path = %path_str, "applying transform");
            code = transform
                .apply(code, path)
                .map_err(|err| satchel_graph::Error::Loader {
                    path: path.to_path_buf(),
                    message: err.to_string(),
                })?;
        }
        Ok(code)
    }
}
