//! Kindred - turn a flat genealogy register into a browsable family tree
//!
//! Kindred is a single-binary tool that reads a line-oriented register of
//! people (`<name> <id>` with dash-delimited hierarchical ids), assembles the
//! family tree, and emits three artifacts: a pretty-printed JSON tree, a
//! static d3 viewer page, and a plain-text report of missing sibling numbers.
//!
//! # Architecture
//!
//! The codebase follows a strict layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to pipeline)
//! - [`pipeline`] - Orchestrates read → build → render → write for one run
//! - [`core`] - Domain types, line parsing, and tree construction
//! - [`render`] - Pure artifact rendering (JSON, HTML, report)
//! - [`ui`] - Terminal output utilities
//!
//! # Correctness Invariants
//!
//! Kindred maintains the following invariants:
//!
//! 1. Every parsed id is reachable from the root of the finished tree
//! 2. A node attaches to at most one parent, and children keep input order
//! 3. Construction is a single deterministic pass; rendering never mutates
//! 4. Malformed lines are skipped, never fatal

pub mod cli;
pub mod core;
pub mod pipeline;
pub mod render;
pub mod ui;
