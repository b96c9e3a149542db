//! Human-readable build reporting.

use console::style;

use satchel_bundler::BuildResult;

/// Print the per-chunk and per-asset summary of a successful pass.
pub fn print_summary(result: &BuildResult) {
    for chunk in &result.chunks {
        println!(
            "{} {} ({} modules)",
            style("chunk").green().bold(),
            chunk.name,
            chunk.modules.len()
        );
    }
    for asset in &result.assets {
        println!(
            "  {} {} ({} bytes)",
            style("emit").cyan(),
            asset.path.display(),
            asset.content.len()
        );
    }
    println!(
        "{} {} modules, {} watched files",
        style("done").green().bold(),
        result.modules.len(),
        result.file_dependencies.len()
    );
}

/// Print a failed pass without terminating (watch mode keeps going).
pub fn print_failure(error: &satchel_bundler::Error) {
    eprintln!("{} {error}", style("error").red().bold());
}
