//! `satchel build` — one pass, then exit.

use satchel_bundler::{Plugin, create_compiler};

use crate::cli::BuildArgs;
use crate::error::Result;
use crate::lifecycle::LifecyclePlugin;
use crate::report;

pub fn execute(args: BuildArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref(), args.context.as_deref())?;

    let plugins: Vec<Box<dyn Plugin>> = vec![Box::new(LifecyclePlugin)];
    let compiler = create_compiler(config, &plugins)?;
    let result = compiler.run()?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        report::print_summary(&result);
    }
    Ok(())
}
