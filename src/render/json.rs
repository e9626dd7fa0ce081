//! render::json
//!
//! The JSON artifact: the root node wrapped in a one-element array,
//! pretty-printed with two-space indentation.
//!
//! Downstream viewers iterate the top level, so the artifact is always an
//! array even though there is exactly one root.

use crate::core::tree::TreeNode;

/// Render the JSON artifact text, trailing newline included.
pub fn render(root: &TreeNode) -> serde_json::Result<String> {
    let mut text = serde_json::to_string_pretty(std::slice::from_ref(root))?;
    text.push('\n');
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::FamilyTree;

    #[test]
    fn artifact_is_an_array_of_one_root() {
        let tree = FamilyTree::new();
        let text = render(&tree.root_node()).unwrap();

        let parsed: Vec<TreeNode> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "Top of Family");
    }

    #[test]
    fn uses_two_space_indentation() {
        let tree = FamilyTree::new();
        let text = render(&tree.root_node()).unwrap();

        assert!(text.starts_with("[\n  {\n    \"name\": \"Top of Family\",\n"));
    }

    #[test]
    fn ends_with_single_newline() {
        let tree = FamilyTree::new();
        let text = render(&tree.root_node()).unwrap();

        assert!(text.ends_with("]\n"));
        assert!(!text.ends_with("\n\n"));
    }

    #[test]
    fn keys_appear_in_name_id_children_order() {
        let tree = FamilyTree::new();
        let text = render(&tree.root_node()).unwrap();

        let name = text.find("\"name\"").unwrap();
        let id = text.find("\"id\"").unwrap();
        let children = text.find("\"children\"").unwrap();
        assert!(name < id && id < children);
    }
}
