//! core::discrepancy
//!
//! Structural gaps detected while assembling the tree.
//!
//! A discrepancy is data, not an error: the register stays usable and the
//! build still succeeds. The collected list feeds the plain-text report and
//! the machine-readable `check --json` output.

use serde::{Deserialize, Serialize};

use super::types::PersonId;

/// A gap in sibling numbering under one parent.
///
/// Recorded when a newly referenced child's rank implies lower-numbered
/// siblings that have not been seen. All missing numbers for one detection
/// event are batched into a single entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discrepancy {
    /// Id of the parent whose children are incomplete.
    pub parent_id: PersonId,
    /// The parent's name as known at detection time (may be empty when the
    /// parent was synthesized before its own register line appeared).
    pub parent_name: String,
    /// The absent sibling ranks, ascending.
    pub missing_numbers: Vec<u32>,
    /// The register line that triggered the detection.
    pub source_line: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_stable_field_names() {
        let d = Discrepancy {
            parent_id: PersonId::new("0-1-1-1-1").unwrap(),
            parent_name: "Jayalal".to_string(),
            missing_numbers: vec![1, 2],
            source_line: "Bob 0-1-1-1-1-3".to_string(),
        };

        let json = serde_json::to_value(&d).unwrap();
        assert_eq!(json["parent_id"], "0-1-1-1-1");
        assert_eq!(json["parent_name"], "Jayalal");
        assert_eq!(json["missing_numbers"], serde_json::json!([1, 2]));
        assert_eq!(json["source_line"], "Bob 0-1-1-1-1-3");
    }

    #[test]
    fn roundtrips_through_serde() {
        let d = Discrepancy {
            parent_id: PersonId::new("9-4").unwrap(),
            parent_name: String::new(),
            missing_numbers: vec![1],
            source_line: "X 9-4-2".to_string(),
        };

        let json = serde_json::to_string(&d).unwrap();
        let parsed: Discrepancy = serde_json::from_str(&json).unwrap();
        assert_eq!(d, parsed);
    }
}
