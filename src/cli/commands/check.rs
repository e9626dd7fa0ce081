//! check command - Report discrepancies without writing artifacts

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::cli::commands::Context;
use crate::core::builder::BuildStats;
use crate::core::discrepancy::Discrepancy;
use crate::core::paths::PathOverrides;
use crate::pipeline;
use crate::render;
use crate::ui::output;

/// Machine-readable summary emitted by `--json`.
#[derive(Debug, Serialize)]
struct CheckPayload<'a> {
    node_count: usize,
    discrepancy_count: usize,
    stats: BuildStats,
    discrepancies: &'a [Discrepancy],
}

/// Build the tree in memory and print the discrepancy report.
pub fn check(ctx: &Context, input: Option<PathBuf>, json: bool) -> Result<()> {
    let dir = ctx.base_dir();
    let cli_layer = PathOverrides {
        input,
        ..PathOverrides::default()
    };
    let paths = super::build::resolve_paths(&dir, cli_layer)?;

    let outcome = pipeline::load(&paths.input)?;
    let summary = pipeline::summarize(&outcome);

    if json {
        let payload = CheckPayload {
            node_count: summary.node_count,
            discrepancy_count: summary.discrepancy_count,
            stats: summary.stats,
            discrepancies: &outcome.discrepancies,
        };
        println!("{}", serde_json::to_string_pretty(&payload)?);
        return Ok(());
    }

    // The report is the command's output; it prints even under --quiet.
    print!(
        "{}",
        render::report::render(&outcome.tree, &outcome.discrepancies)
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
