//! build command - Generate all three artifacts from the register

use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::cli::commands::Context;
use crate::core::config;
use crate::core::paths::{ArtifactPaths, PathOverrides};
use crate::pipeline;
use crate::ui::output;

/// Build the tree and write the JSON, HTML, and report artifacts.
pub fn build(
    ctx: &Context,
    input: Option<PathBuf>,
    json: Option<PathBuf>,
    html: Option<PathBuf>,
    report: Option<PathBuf>,
) -> Result<()> {
    let dir = ctx.base_dir();
    let cli_layer = PathOverrides {
        input,
        json,
        html,
        report,
    };
    let paths = resolve_paths(&dir, cli_layer)?;

    output::debug(
        format!("reading register from {}", paths.input.display()),
        ctx.verbosity,
    );

    let summary = pipeline::run_build(&paths)?;

    output::print(
        format!("Generated {}", display_path(&paths.json)),
        ctx.verbosity,
    );
    output::print(
        format!("Generated {}", display_path(&paths.html)),
        ctx.verbosity,
    );
    output::print(
        format!(
            "Found {} discrepancies in {}",
            summary.discrepancy_count,
            display_path(&paths.report)
        ),
        ctx.verbosity,
    );
    output::debug(
        format!(
            "{} lines read, {} records, {} skipped, {} nodes",
            summary.stats.lines, summary.stats.records, summary.stats.skipped, summary.node_count
        ),
        ctx.verbosity,
    );

    Ok(())
}

/// Layer CLI flags over the optional config file and resolve all four paths.
pub(super) fn resolve_paths(dir: &Path, cli_layer: PathOverrides) -> Result<ArtifactPaths> {
    let file_layer = match config::load(dir)? {
        Some(file) => file.overrides(),
        None => PathOverrides::default(),
    };
    Ok(ArtifactPaths::resolve(dir, &cli_layer.merged_over(file_layer)))
}

/// Absolute form for display. Falls back to the path as resolved when the
/// file cannot be canonicalized.
fn display_path(path: &Path) -> String {
    path.canonicalize()
        .unwrap_or_else(|_| path.to_path_buf())
        .display()
        .to_string()
}
