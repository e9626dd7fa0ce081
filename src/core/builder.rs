//! core::builder
//!
//! Turns register lines into a [`FamilyTree`] plus the gap discrepancies
//! found along the way.
//!
//! # Architecture
//!
//! Lines are processed in order, one pass, no lookahead. For each record the
//! builder upserts the node and then links it upward: every unattached
//! ancestor on the way to the tree is synthesized with an empty name and
//! attached to its own parent, so the finished tree always reaches every
//! parsed id from the root. Single-segment ids have no parent of their own
//! and hang off the deepest seed ancestor instead.
//!
//! # Gap check
//!
//! A parent is checked for missing child numbers exactly once, at the moment
//! its first input-driven child is attached. The check compares the new
//! child's rank against the ranks already present under the parent (seed
//! links included) and records every integer in between that is absent.
//! Later children of the same parent never re-trigger the check, whatever
//! their rank.
//!
//! # Example
//!
//! ```
//! use kindred::core::builder;
//!
//! let outcome = builder::build("Bob 0-1-1-1-1-3\nAlice 0-1-1-1-1-2\n");
//!
//! assert_eq!(outcome.discrepancies.len(), 1);
//! assert_eq!(outcome.discrepancies[0].missing_numbers, vec![1, 2]);
//! ```

use std::collections::HashSet;

use serde::Serialize;

use super::discrepancy::Discrepancy;
use super::record::{self, ParsedLine, Record};
use super::tree::FamilyTree;
use super::types::PersonId;

/// Line counters accumulated over one build.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BuildStats {
    /// Total input lines, blank ones included.
    pub lines: usize,
    /// Lines that parsed into a record.
    pub records: usize,
    /// Non-blank lines that did not parse and were dropped.
    pub skipped: usize,
}

/// Everything one build run produces.
#[derive(Debug)]
pub struct BuildOutcome {
    pub tree: FamilyTree,
    pub discrepancies: Vec<Discrepancy>,
    pub stats: BuildStats,
}

/// Incremental tree construction over register lines.
#[derive(Debug)]
pub struct TreeBuilder {
    tree: FamilyTree,
    /// Parents whose one-time gap check has already run.
    gap_checked: HashSet<PersonId>,
    discrepancies: Vec<Discrepancy>,
    stats: BuildStats,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self {
            tree: FamilyTree::new(),
            gap_checked: HashSet::new(),
            discrepancies: Vec::new(),
            stats: BuildStats::default(),
        }
    }

    /// Feed one raw input line.
    pub fn add_line(&mut self, line: &str) {
        self.stats.lines += 1;
        match record::parse_line(line) {
            ParsedLine::Blank => {}
            ParsedLine::Skipped => self.stats.skipped += 1,
            ParsedLine::Record(rec) => self.add_record(&rec),
        }
    }

    /// Feed one parsed record.
    pub fn add_record(&mut self, rec: &Record<'_>) {
        self.stats.records += 1;

        // Create or rename. A node that already sits in the tree keeps its
        // place and its children; the line only updates its name.
        self.tree.upsert(&rec.id, rec.name);

        let mut current = rec.id.clone();
        while !self.tree.is_attached(&current) {
            let parent = match current.parent() {
                Some(parent) => parent,
                None => self.tree.deepest_seed().clone(),
            };
            self.tree.ensure_node(&parent, "");
            self.check_gaps(&parent, current.rank(), rec.line);
            self.tree.attach(&parent, &current);
            current = parent;
        }
    }

    /// Run the once-per-parent gap check before `parent` gains a child of
    /// rank `child_rank`.
    fn check_gaps(&mut self, parent: &PersonId, child_rank: u32, source_line: &str) {
        if !self.gap_checked.insert(parent.clone()) {
            return;
        }
        let existing: HashSet<u32> = self
            .tree
            .children_of(parent)
            .iter()
            .map(PersonId::rank)
            .collect();
        let missing: Vec<u32> = (1..child_rank).filter(|n| !existing.contains(n)).collect();
        if missing.is_empty() {
            return;
        }
        self.discrepancies.push(Discrepancy {
            parent_id: parent.clone(),
            parent_name: self.tree.name(parent).unwrap_or_default().to_string(),
            missing_numbers: missing,
            source_line: source_line.to_string(),
        });
    }

    pub fn finish(self) -> BuildOutcome {
        BuildOutcome {
            tree: self.tree,
            discrepancies: self.discrepancies,
            stats: self.stats,
        }
    }
}

impl Default for TreeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Build a tree from the full register text.
pub fn build(input: &str) -> BuildOutcome {
    let mut builder = TreeBuilder::new();
    for line in input.lines() {
        builder.add_line(line);
    }
    builder.finish()
}
