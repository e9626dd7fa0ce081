//! core::types
//!
//! Strong types for core domain concepts.
//!
//! # Types
//!
//! - [`PersonId`] - Validated dash-joined hierarchical identifier
//!
//! # Validation
//!
//! A person id is one or more dash-separated segments, each a run of ASCII
//! digits that fits in a `u32`. Validation happens at construction time, so
//! an invalid id cannot be represented and every accessor below is total.
//!
//! # Examples
//!
//! ```
//! use kindred::core::types::PersonId;
//!
//! let id = PersonId::new("0-1-1-1-1-3").unwrap();
//! assert_eq!(id.rank(), 3);
//! assert_eq!(id.depth(), 6);
//! assert_eq!(id.parent().unwrap().as_str(), "0-1-1-1-1");
//!
//! // A single-segment id has no parent encoded in the id itself
//! let top = PersonId::new("7").unwrap();
//! assert!(top.parent().is_none());
//!
//! // Invalid constructions fail at creation time
//! assert!(PersonId::new("").is_err());
//! assert!(PersonId::new("1--2").is_err());
//! assert!(PersonId::new("not-a-number").is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid person id: {0}")]
    InvalidPersonId(String),
}

/// A validated hierarchical person identifier.
///
/// Ids are dash-joined sequences of integers, e.g. `"0-1-1-1-1-3"`. Each
/// segment is a 1-based sibling rank at that depth, so the id alone encodes
/// the node's position in the tree: stripping the last segment yields the
/// parent's id.
///
/// Identity is the exact string. `"01"` and `"1"` are distinct ids even
/// though their ranks agree; no numeric canonicalization is applied.
///
/// # Example
///
/// ```
/// use kindred::core::types::PersonId;
///
/// let parent = PersonId::new("0-1-1").unwrap();
/// let child = parent.child(4);
/// assert_eq!(child.as_str(), "0-1-1-4");
/// assert_eq!(child.rank(), 4);
/// assert_eq!(child.parent(), Some(parent));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct PersonId(String);

impl PersonId {
    /// Create a new validated person id.
    ///
    /// # Errors
    ///
    /// Returns `TypeError::InvalidPersonId` if the string is empty, has an
    /// empty segment, or has a segment that is not an unsigned integer.
    pub fn new(id: impl Into<String>) -> Result<Self, TypeError> {
        let id = id.into();
        Self::validate(&id)?;
        Ok(Self(id))
    }

    /// Validate an id string against the segment rules.
    fn validate(id: &str) -> Result<(), TypeError> {
        if id.is_empty() {
            return Err(TypeError::InvalidPersonId(
                "person id cannot be empty".into(),
            ));
        }

        for segment in id.split('-') {
            if segment.is_empty() {
                return Err(TypeError::InvalidPersonId(format!(
                    "empty segment in '{id}'"
                )));
            }
            if !segment.bytes().all(|b| b.is_ascii_digit()) {
                return Err(TypeError::InvalidPersonId(format!(
                    "segment '{segment}' is not a number"
                )));
            }
            if segment.parse::<u32>().is_err() {
                return Err(TypeError::InvalidPersonId(format!(
                    "segment '{segment}' is out of range"
                )));
            }
        }

        Ok(())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 1-based sibling rank: the numeric value of the last segment.
    pub fn rank(&self) -> u32 {
        self.0
            .rsplit('-')
            .next()
            .and_then(|segment| segment.parse().ok())
            .unwrap_or(0)
    }

    /// The parent id, obtained by stripping the last segment.
    ///
    /// Returns `None` for a single-segment id; where such a node attaches is
    /// a tree policy, not an id property.
    pub fn parent(&self) -> Option<PersonId> {
        let (head, _) = self.0.rsplit_once('-')?;
        Some(PersonId(head.to_string()))
    }

    /// Number of segments, i.e. the node's generation depth from the root.
    pub fn depth(&self) -> usize {
        self.0.split('-').count()
    }

    /// Iterate the numeric segment values from root-most to leaf-most.
    pub fn segments(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.split('-').filter_map(|segment| segment.parse().ok())
    }

    /// Construct the id of this node's child with the given rank.
    pub fn child(&self, rank: u32) -> PersonId {
        PersonId(format!("{}-{}", self.0, rank))
    }

    /// The reserved id of the synthetic tree root, `"0"`.
    pub fn root() -> PersonId {
        PersonId("0".to_string())
    }
}

impl TryFrom<String> for PersonId {
    type Error = TypeError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<PersonId> for String {
    fn from(id: PersonId) -> Self {
        id.0
    }
}

impl AsRef<str> for PersonId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
