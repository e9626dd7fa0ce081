//! core::record
//!
//! Line format of the flat genealogy register.
//!
//! # Format
//!
//! One record per line: `<free-text name> <id>`. The name may contain
//! spaces; the id is always the final whitespace-delimited token. Blank
//! lines, section headers, and lines that do not produce a valid id are
//! dropped without error; the register is hand-maintained and the policy
//! is best-effort.

use super::types::PersonId;

/// Prefix marking a section header's id token. Such lines carry no record.
pub const SECTION_MARKER: &str = "Section";

/// A successfully parsed register line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record<'a> {
    /// The person's free-text name (may contain spaces).
    pub name: &'a str,
    /// The validated hierarchical id.
    pub id: PersonId,
    /// The trimmed source line, kept for discrepancy reporting.
    pub line: &'a str,
}

/// Outcome of classifying one register line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLine<'a> {
    /// Line was empty or all whitespace.
    Blank,
    /// Line was non-blank but does not form a usable record.
    Skipped,
    /// A usable record.
    Record(Record<'a>),
}

/// Classify a register line.
///
/// A line is [`ParsedLine::Skipped`] when it has no name/id split, when
/// either part is empty after trimming, when the id token starts with
/// [`SECTION_MARKER`], or when the id token is not a valid [`PersonId`].
///
/// # Example
///
/// ```
/// use kindred::core::record::{parse_line, ParsedLine};
///
/// match parse_line("Hari Prasad Pokharel 0-1-1-2") {
///     ParsedLine::Record(record) => {
///         assert_eq!(record.name, "Hari Prasad Pokharel");
///         assert_eq!(record.id.as_str(), "0-1-1-2");
///     }
///     other => panic!("expected a record, got {:?}", other),
/// }
///
/// assert_eq!(parse_line("   "), ParsedLine::Blank);
/// assert_eq!(parse_line("Section-4"), ParsedLine::Skipped);
/// ```
pub fn parse_line(line: &str) -> ParsedLine<'_> {
    let line = line.trim();
    if line.is_empty() {
        return ParsedLine::Blank;
    }

    // The id is the final whitespace-delimited token; everything before the
    // last whitespace run is the name.
    let Some((name, id_token)) = line.rsplit_once(char::is_whitespace) else {
        return ParsedLine::Skipped;
    };
    let name = name.trim();

    if name.is_empty() || id_token.is_empty() || id_token.starts_with(SECTION_MARKER) {
        return ParsedLine::Skipped;
    }

    match PersonId::new(id_token) {
        Ok(id) => ParsedLine::Record(Record { name, id, line }),
        Err(_) => ParsedLine::Skipped,
    }
}
