//! core::tree
//!
//! The family tree: an id-keyed arena of named nodes with ordered children.
//!
//! # Architecture
//!
//! The tree is stored flat (a name per id plus an ordered child-id list per
//! id) and converted to the nested [`TreeNode`] form only when an artifact
//! needs it. Child order is insertion order, never sorted; the register's
//! own ordering is part of the output.
//!
//! # Seed chain
//!
//! Every tree starts with a synthetic root `"0"` ("Top of Family") and a
//! fixed four-generation ancestor chain `0-1` Ramananda, `0-1-1`
//! Shreekrishna, `0-1-1-1` Kantu, `0-1-1-1-1` Jayalal. These exist
//! regardless of input. Register ids with a single segment (e.g. `"7"`)
//! attach under the deepest seed ancestor, not under the root.
//!
//! # Invariants
//!
//! - Every id maps to at most one node
//! - A node is attached to at most one parent, exactly once
//! - Children lists only grow, in insertion order

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use super::types::PersonId;

/// Name of the synthetic root node.
pub const ROOT_NAME: &str = "Top of Family";

/// Names of the fixed seed ancestors, shallowest first. The matching ids are
/// the chain of first children under the root: `0-1`, `0-1-1`, `0-1-1-1`,
/// `0-1-1-1-1`.
pub const SEED_NAMES: [&str; 4] = ["Ramananda", "Shreekrishna", "Kantu", "Jayalal"];

/// A nested tree node in the shape the artifacts use.
///
/// Serializes as `{ "name": …, "id": …, "children": […] }`, the exact field
/// order the JSON artifact and the inline HTML literal carry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    /// Display name; empty for synthesized ancestors that never got a line.
    pub name: String,
    /// Hierarchical id.
    pub id: PersonId,
    /// Ordered children.
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Total number of nodes in this subtree, including `self`.
    pub fn count(&self) -> usize {
        1 + self.children.iter().map(TreeNode::count).sum::<usize>()
    }
}

/// The assembled family tree.
///
/// # Example
///
/// ```
/// use kindred::core::tree::FamilyTree;
/// use kindred::core::types::PersonId;
///
/// let mut tree = FamilyTree::new();
/// let anchor = tree.deepest_seed().clone();
/// let child = PersonId::new("7").unwrap();
///
/// tree.ensure_node(&child, "Bishnu");
/// tree.attach(&anchor, &child);
///
/// assert_eq!(tree.children_of(&anchor), &[child]);
/// ```
#[derive(Debug)]
pub struct FamilyTree {
    /// Node names keyed by id. Presence here is node existence.
    names: HashMap<PersonId, String>,
    /// Ordered children per parent id.
    children: HashMap<PersonId, Vec<PersonId>>,
    /// Ids that already sit in some parent's children list (or are seeds).
    attached: HashSet<PersonId>,
    root: PersonId,
    deepest_seed: PersonId,
}

impl FamilyTree {
    /// Create a tree holding only the root and the seed chain.
    pub fn new() -> Self {
        let root = PersonId::root();
        let mut names = HashMap::new();
        let mut children: HashMap<PersonId, Vec<PersonId>> = HashMap::new();
        let mut attached = HashSet::new();

        names.insert(root.clone(), ROOT_NAME.to_string());
        attached.insert(root.clone());

        let mut parent = root.clone();
        for name in SEED_NAMES {
            let id = parent.child(1);
            names.insert(id.clone(), name.to_string());
            children.entry(parent.clone()).or_default().push(id.clone());
            attached.insert(id.clone());
            parent = id;
        }

        Self {
            names,
            children,
            attached,
            root,
            deepest_seed: parent,
        }
    }

    /// The synthetic root id.
    pub fn root_id(&self) -> &PersonId {
        &self.root
    }

    /// The deepest seed ancestor, the attach point for single-segment ids.
    pub fn deepest_seed(&self) -> &PersonId {
        &self.deepest_seed
    }

    /// Whether a node exists for this id.
    pub fn contains(&self, id: &PersonId) -> bool {
        self.names.contains_key(id)
    }

    /// The node's current name, if the node exists.
    pub fn name(&self, id: &PersonId) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    /// Create the node if absent. Returns `true` when a node was created;
    /// an existing node is left untouched, name included.
    pub fn ensure_node(&mut self, id: &PersonId, name: &str) -> bool {
        if self.names.contains_key(id) {
            return false;
        }
        self.names.insert(id.clone(), name.to_string());
        true
    }

    /// Create the node or overwrite its name. Children are never touched.
    pub fn upsert(&mut self, id: &PersonId, name: &str) {
        self.names.insert(id.clone(), name.to_string());
    }

    /// Whether the node already sits in a parent's children list.
    pub fn is_attached(&self, id: &PersonId) -> bool {
        self.attached.contains(id)
    }

    /// Append `child` to `parent`'s ordered children.
    ///
    /// Both nodes must already exist. A child that is attached anywhere is
    /// never re-attached; returns whether the append happened.
    pub fn attach(&mut self, parent: &PersonId, child: &PersonId) -> bool {
        if self.attached.contains(child) {
            return false;
        }
        self.children
            .entry(parent.clone())
            .or_default()
            .push(child.clone());
        self.attached.insert(child.clone());
        true
    }

    /// The ordered children of a node (empty slice if none).
    pub fn children_of(&self, id: &PersonId) -> &[PersonId] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Number of nodes, seeds included.
    pub fn node_count(&self) -> usize {
        self.names.len()
    }

    /// Iterate all node ids in arbitrary order.
    pub fn ids(&self) -> impl Iterator<Item = &PersonId> {
        self.names.keys()
    }

    /// Build the nested form of one node's subtree.
    pub fn node(&self, id: &PersonId) -> TreeNode {
        TreeNode {
            name: self.name(id).unwrap_or_default().to_string(),
            id: id.clone(),
            children: self
                .children_of(id)
                .iter()
                .map(|child| self.node(child))
                .collect(),
        }
    }

    /// Build the nested form of the whole tree, rooted at `"0"`.
    pub fn root_node(&self) -> TreeNode {
        self.node(&self.root)
    }
}

impl Default for FamilyTree {
    fn default() -> Self {
        Self::new()
    }
}
