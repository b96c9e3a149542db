//! `satchel watch` — stay resident, rebuild on change.

use satchel_bundler::{Plugin, create_compiler};

use crate::cli::WatchArgs;
use crate::error::Result;
use crate::lifecycle::LifecyclePlugin;
use crate::report;

pub fn execute(args: WatchArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref(), args.context.as_deref())?;

    let plugins: Vec<Box<dyn Plugin>> = vec![Box::new(LifecyclePlugin)];
    let compiler = create_compiler(config, &plugins)?;

    // a failed rebuild is reported and the loop keeps going; only watcher
    // breakage (or a never-successful first pass) ends the command
    compiler.watch(|outcome| match outcome {
        Ok(result) => report::print_summary(result),
        Err(error) => report::print_failure(error),
    })?;
    Ok(())
}
