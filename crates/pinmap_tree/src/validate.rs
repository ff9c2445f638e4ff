//! Structural validation of the node tree.

use std::collections::HashSet;

use indexmap::IndexMap;

use crate::aggregate::NodeMappings;
use crate::error::TreeError;
use crate::node::Node;

/// Validates the tree structure before any resolution.
///
/// Enforces globally unique node names (I1) and non-empty file lists (I2)
/// in a single depth-first pass, root before children. Fails on the first
/// violation found; the traversal order makes the reported violation
/// deterministic.
pub fn validate(root: &Node) -> Result<(), TreeError> {
    let mut seen = HashSet::new();
    check_node(root, &mut seen)
}

fn check_node(node: &Node, seen: &mut HashSet<String>) -> Result<(), TreeError> {
    if node.files.is_empty() {
        return Err(TreeError::EmptyFileList {
            node: node.name.clone(),
        });
    }
    if !seen.insert(node.name.clone()) {
        return Err(TreeError::DuplicateNodeName {
            name: node.name.clone(),
        });
    }
    for child in &node.children {
        check_node(child, seen)?;
    }
    Ok(())
}

/// Checks that nodes sharing a parent never define the same key (I4).
///
/// A key present in two siblings would make resolution ambiguous: the walk
/// could descend into either. Parents with a single child are exempt, since
/// that child's own aggregation already rejected intra-node duplicates.
/// Every conflict in the tree is collected so one run reports them all.
pub fn check_sibling_keys(root: &Node, mappings: &NodeMappings) -> Vec<TreeError> {
    let mut violations = Vec::new();
    collect_sibling_conflicts(root, mappings, &mut violations);
    violations
}

fn collect_sibling_conflicts<'a>(
    node: &'a Node,
    mappings: &'a NodeMappings,
    violations: &mut Vec<TreeError>,
) {
    if node.children.len() >= 2 {
        let mut owners: IndexMap<&'a str, &'a str> = IndexMap::new();
        for child in &node.children {
            let Some(mapping) = mappings.get(&child.name) else {
                continue;
            };
            for key in mapping.keys() {
                match owners.get(key.as_str()) {
                    Some(first) => violations.push(TreeError::SiblingKeyConflict {
                        key: key.clone(),
                        first: (*first).to_string(),
                        second: child.name.clone(),
                    }),
                    None => {
                        owners.insert(key.as_str(), child.name.as_str());
                    }
                }
            }
        }
    }

    for child in &node.children {
        collect_sibling_conflicts(child, mappings, violations);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{EndpointEntry, NodeMapping};

    fn files(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    fn mapping(keys: &[&str]) -> NodeMapping {
        keys.iter()
            .map(|k| {
                (
                    k.to_string(),
                    EndpointEntry {
                        end: format!("{k}_out"),
                        terminal: false,
                    },
                )
            })
            .collect()
    }

    #[test]
    fn valid_tree_passes() {
        let tree = Node::with_children(
            "fpga",
            files(&["fpga.toml"]),
            vec![Node::leaf("pcb", files(&["pcb.toml"]))],
        );
        assert!(validate(&tree).is_ok());
    }

    #[test]
    fn validation_is_idempotent() {
        let tree = Node::with_children(
            "fpga",
            files(&["fpga.toml"]),
            vec![Node::leaf("pcb", files(&["pcb.toml"]))],
        );
        assert!(validate(&tree).is_ok());
        assert!(validate(&tree).is_ok());
    }

    #[test]
    fn duplicate_name_anywhere_fails() {
        let tree = Node::with_children(
            "fpga",
            files(&["fpga.toml"]),
            vec![
                Node::leaf("pcb", files(&["a.toml"])),
                Node::with_children(
                    "carrier",
                    files(&["b.toml"]),
                    vec![Node::leaf("pcb", files(&["c.toml"]))],
                ),
            ],
        );
        assert_eq!(
            validate(&tree).unwrap_err(),
            TreeError::DuplicateNodeName { name: "pcb".into() }
        );
    }

    #[test]
    fn empty_file_list_fails() {
        let tree = Node::leaf("fpga", Vec::new());
        assert_eq!(
            validate(&tree).unwrap_err(),
            TreeError::EmptyFileList {
                node: "fpga".into()
            }
        );
    }

    #[test]
    fn sibling_key_conflict_detected_both_orders() {
        for (first, second) in [("left", "right"), ("right", "left")] {
            let tree = Node::with_children(
                "fpga",
                files(&["fpga.toml"]),
                vec![
                    Node::leaf(first, files(&["a.toml"])),
                    Node::leaf(second, files(&["b.toml"])),
                ],
            );
            let mut mappings = NodeMappings::new();
            mappings.insert("fpga".into(), mapping(&["pin1"]));
            mappings.insert(first.into(), mapping(&["shared"]));
            mappings.insert(second.into(), mapping(&["shared"]));

            let violations = check_sibling_keys(&tree, &mappings);
            assert_eq!(
                violations,
                vec![TreeError::SiblingKeyConflict {
                    key: "shared".into(),
                    first: first.into(),
                    second: second.into(),
                }]
            );
        }
    }

    #[test]
    fn single_child_is_exempt() {
        let tree = Node::with_children(
            "fpga",
            files(&["fpga.toml"]),
            vec![Node::leaf("pcb", files(&["a.toml"]))],
        );
        let mut mappings = NodeMappings::new();
        mappings.insert("fpga".into(), mapping(&["shared"]));
        mappings.insert("pcb".into(), mapping(&["shared"]));
        assert!(check_sibling_keys(&tree, &mappings).is_empty());
    }

    #[test]
    fn all_conflicts_collected() {
        let tree = Node::with_children(
            "fpga",
            files(&["fpga.toml"]),
            vec![
                Node::leaf("a", files(&["a.toml"])),
                Node::leaf("b", files(&["b.toml"])),
            ],
        );
        let mut mappings = NodeMappings::new();
        mappings.insert("fpga".into(), mapping(&["pin1"]));
        mappings.insert("a".into(), mapping(&["k1", "k2"]));
        mappings.insert("b".into(), mapping(&["k1", "k2"]));
        assert_eq!(check_sibling_keys(&tree, &mappings).len(), 2);
    }
}
