//! Pass-boundary reporting plugin.

use std::cell::Cell;
use std::rc::Rc;
use std::time::Instant;

use tracing::info;

use satchel_bundler::{Compiler, Plugin};

/// Taps `run`/`done` to log when a pass starts and how long it took.
#[derive(Debug, Default)]
pub struct LifecyclePlugin;

impl Plugin for LifecyclePlugin {
    fn apply(&self, compiler: &mut Compiler) {
        let started = Rc::new(Cell::new(Instant::now()));

        let mark = Rc::clone(&started);
        compiler.hooks.run.tap("satchel-cli", move || {
            mark.set(Instant::now());
            info!("build started");
        });

        compiler.hooks.done.tap("satchel-cli", move || {
            info!(elapsed = ?started.get().elapsed(), "build finished");
        });
    }
}
