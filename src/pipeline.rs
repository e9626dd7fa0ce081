//! pipeline
//!
//! Orchestration of one run: read the register, build the tree, render
//! and write the artifacts.
//!
//! # Architecture
//!
//! This is the only module that performs artifact I/O. Parsing and tree
//! construction live in [`crate::core`], rendering in [`crate::render`];
//! both are pure, so everything here is a thin read-build-write wrapper
//! that the CLI commands drive. Errors carry the offending path.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::core::builder::{self, BuildOutcome, BuildStats};
use crate::core::paths::ArtifactPaths;
use crate::render;

/// Errors from a pipeline run.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("failed to read register '{path}': {source}")]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write artifact '{path}': {source}")]
    WriteArtifact {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to serialize tree: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Counts reported after a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunSummary {
    /// Nodes in the finished tree, seeds included.
    pub node_count: usize,
    /// Findings recorded during construction.
    pub discrepancy_count: usize,
    /// Input line counters.
    pub stats: BuildStats,
}

/// Read the register file and build the tree in memory.
pub fn load(input: &Path) -> Result<BuildOutcome, PipelineError> {
    let text = fs::read_to_string(input).map_err(|e| PipelineError::ReadInput {
        path: input.to_path_buf(),
        source: e,
    })?;
    Ok(builder::build(&text))
}

/// Condense a build outcome into the reported counts.
pub fn summarize(outcome: &BuildOutcome) -> RunSummary {
    RunSummary {
        node_count: outcome.tree.node_count(),
        discrepancy_count: outcome.discrepancies.len(),
        stats: outcome.stats,
    }
}

/// Build the tree and write all three artifacts.
pub fn run_build(paths: &ArtifactPaths) -> Result<RunSummary, PipelineError> {
    let outcome = load(&paths.input)?;
    let root = outcome.tree.root_node();

    write_artifact(&paths.json, &render::json::render(&root)?)?;
    write_artifact(&paths.html, &render::html::render(&root)?)?;
    write_artifact(
        &paths.report,
        &render::report::render(&outcome.tree, &outcome.discrepancies),
    )?;

    Ok(summarize(&outcome))
}

/// Write one artifact, creating parent directories as needed.
fn write_artifact(path: &Path, contents: &str) -> Result<(), PipelineError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| PipelineError::WriteArtifact {
                path: path.to_path_buf(),
                source: e,
            })?;
        }
    }
    fs::write(path, contents).map_err(|e| PipelineError::WriteArtifact {
        path: path.to_path_buf(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_register(dir: &Path, contents: &str) {
        fs::write(
            dir.join(crate::core::paths::DEFAULT_INPUT_FILE),
            contents,
        )
        .unwrap();
    }

    #[test]
    fn run_build_writes_all_three_artifacts() {
        let temp = TempDir::new().unwrap();
        write_register(temp.path(), "Bob 0-1-1-1-1-3\nAlice 0-1-1-1-1-2\n");

        let paths = ArtifactPaths::in_dir(temp.path());
        let summary = run_build(&paths).unwrap();

        assert_eq!(summary.node_count, 7);
        assert_eq!(summary.discrepancy_count, 1);
        assert_eq!(summary.stats.records, 2);

        let json = fs::read_to_string(&paths.json).unwrap();
        assert!(json.starts_with("[\n  {\n"));

        let html = fs::read_to_string(&paths.html).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));

        let report = fs::read_to_string(&paths.report).unwrap();
        assert!(report.starts_with("FAMILY TREE DISCREPANCY REPORT\n"));
        assert!(report.contains("Missing numbers: [1, 2]"));
    }

    #[test]
    fn run_build_creates_artifact_directories() {
        let temp = TempDir::new().unwrap();
        write_register(temp.path(), "Eldest 0-1-1-1-1-1\n");

        let mut paths = ArtifactPaths::in_dir(temp.path());
        paths.json = temp.path().join("out/nested/name_list.json");
        run_build(&paths).unwrap();

        assert!(paths.json.exists());
    }

    #[test]
    fn missing_register_reports_its_path() {
        let temp = TempDir::new().unwrap();
        let paths = ArtifactPaths::in_dir(temp.path());

        let err = run_build(&paths).unwrap_err();
        assert!(matches!(err, PipelineError::ReadInput { .. }));
        assert!(err.to_string().contains("combined database.txt"));
    }

    #[test]
    fn load_builds_without_writing() {
        let temp = TempDir::new().unwrap();
        write_register(temp.path(), "Zed 9-4-2\n");

        let paths = ArtifactPaths::in_dir(temp.path());
        let outcome = load(&paths.input).unwrap();

        assert_eq!(outcome.discrepancies.len(), 3);
        assert!(!paths.json.exists());
        assert!(!paths.report.exists());
    }
}
