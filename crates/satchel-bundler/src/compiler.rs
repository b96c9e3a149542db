//! The long-lived compiler: validated options, compiled loader pipeline,
//! lifecycle hooks, and the watch/rebuild loop.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use satchel_config::Config;

use crate::compilation::{BuildResult, Compilation};
use crate::hooks::CompilerHooks;
use crate::loader::{LoaderPipeline, LoaderRule};
use crate::plugin::Plugin;
use crate::watcher::WatchSession;
use crate::{Error, Result};

/// Survives across build passes; creates a fresh [`Compilation`] per pass.
pub struct Compiler {
    config: Config,
    root: PathBuf,
    pipeline: LoaderPipeline,
    /// Lifecycle hooks, owned by this instance.
    pub hooks: CompilerHooks,
}

impl std::fmt::Debug for Compiler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compiler")
            .field("root", &self.root)
            .finish_non_exhaustive()
    }
}

impl Compiler {
    /// Validate the config, pin the project root, and compile the loader
    /// rules. All configuration errors surface here, before any build.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let context = config.resolved_context();
        let root = fs::canonicalize(&context).map_err(|source| Error::Root {
            path: context,
            source,
        })?;
        let pipeline = LoaderPipeline::from_config(&config.module.rules)?;

        Ok(Self {
            config,
            root,
            pipeline,
            hooks: CompilerHooks::default(),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Canonicalized project root all module ids are relative to.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Append a programmatic loader rule after the configured ones.
    pub fn add_rule(&mut self, rule: LoaderRule) {
        self.pipeline.push_rule(rule);
    }

    /// One build pass: `run` hook, compile, `done` hook (fired on failure
    /// too), result out.
    pub fn run(&self) -> Result<BuildResult> {
        self.hooks.run.call();
        let outcome = self.compile();
        self.hooks.done.call();
        outcome
    }

    fn compile(&self) -> Result<BuildResult> {
        let mut compilation = Compilation::new();
        compilation.build(&self.config, &self.root, &self.pipeline)
    }

    /// Build, report, then rebuild on every change to a watched file.
    ///
    /// Each successful pass re-subscribes the watcher from its own
    /// `file_dependencies`, dropping the previous generation's handles. A
    /// failed rebuild is reported through `on_build` and keeps the last
    /// successful pass's watch set, so a broken edit can be fixed and
    /// picked up. Bursts of events coalesce into one rebuild; there is no
    /// cancellation of an in-flight pass.
    pub fn watch<F>(&self, mut on_build: F) -> Result<()>
    where
        F: FnMut(&Result<BuildResult>),
    {
        let mut outcome = self.run();
        on_build(&outcome);

        let mut session: Option<WatchSession> = None;
        loop {
            if let Ok(result) = &outcome {
                session = Some(WatchSession::subscribe(&result.file_dependencies)?);
            }
            let Some(active) = session.as_ref() else {
                // nothing ever built successfully, so there is no file
                // list to watch
                return Err(Error::NothingToWatch);
            };

            let changed = active.recv()?;
            info!(path = %changed.display(), "change detected, rebuilding");
            outcome = self.run();
            on_build(&outcome);
            debug!(ok = outcome.is_ok(), "rebuild finished");
        }
    }
}

/// Construct a compiler and apply each plugin in order — the conventional
/// factory entry point.
pub fn create_compiler(config: Config, plugins: &[Box<dyn Plugin>]) -> Result<Compiler> {
    let mut compiler = Compiler::new(config)?;
    for plugin in plugins {
        plugin.apply(&mut compiler);
    }
    Ok(compiler)
}
