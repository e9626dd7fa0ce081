//! render::report
//!
//! Pure functions for formatting the plain-text discrepancy report.
//!
//! # Design
//!
//! The report is built from immutable inputs (the finished tree and the
//! discrepancy list) and returned as one string; writing it to disk is the
//! pipeline's job. Each finding cites the input line that triggered it and
//! enumerates the parent's children as they stand in the finished tree, so
//! a reader can see which numbers did arrive.
//!
//! # Example Output
//!
//! ```text
//! FAMILY TREE DISCREPANCY REPORT
//! ============================
//!
//! Discrepancy #1:
//! --------------------------------------------------
//! MISSING CHILD NUMBERS:
//! Parent: Jayalal (ID: 0-1-1-1-1)
//! Source: Bob 0-1-1-1-1-3
//! Missing numbers: [1, 2]
//! Existing children:
//!   - #3: Bob (ID: 0-1-1-1-1-3)
//! ```

use crate::core::discrepancy::Discrepancy;
use crate::core::tree::FamilyTree;

/// Title line of the report.
pub const REPORT_TITLE: &str = "FAMILY TREE DISCREPANCY REPORT";

/// Rule under the title. Kept at 28 characters; downstream scripts match
/// the header verbatim.
const TITLE_RULE: &str = "============================";

/// Width of the rule above each finding.
const FINDING_RULE_WIDTH: usize = 50;

/// Render the full report, trailing newline included.
///
/// Findings are numbered from 1 in the order they were recorded. An empty
/// discrepancy list still yields the header, so the artifact always exists
/// and always parses the same way.
pub fn render(tree: &FamilyTree, discrepancies: &[Discrepancy]) -> String {
    let mut lines = vec![
        REPORT_TITLE.to_string(),
        TITLE_RULE.to_string(),
        String::new(),
    ];

    for (index, finding) in discrepancies.iter().enumerate() {
        lines.push(format!("Discrepancy #{}:", index + 1));
        lines.push("-".repeat(FINDING_RULE_WIDTH));
        lines.push("MISSING CHILD NUMBERS:".to_string());
        lines.push(format!(
            "Parent: {} (ID: {})",
            finding.parent_name, finding.parent_id
        ));
        lines.push(format!("Source: {}", finding.source_line));
        lines.push(format!("Missing numbers: {:?}", finding.missing_numbers));
        lines.push("Existing children:".to_string());
        for child in tree.children_of(&finding.parent_id) {
            lines.push(format!(
                "  - #{}: {} (ID: {})",
                child.rank(),
                tree.name(child).unwrap_or_default(),
                child
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n") + "\n"
}
