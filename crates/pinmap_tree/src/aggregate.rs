//! Per-node aggregation of expanded file tables.

use indexmap::IndexMap;
use pinmap_expand::RawTable;

use crate::error::TreeError;
use crate::node::Node;

/// One aggregated endpoint entry inside a node's mapping.
///
/// The raw optional shape is narrowed here: an entry surviving aggregation
/// always has a concrete `end`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EndpointEntry {
    /// The endpoint one tree level away that this key connects to.
    pub end: String,
    /// Whether the destination endpoint is a terminal resolution target.
    pub terminal: bool,
}

/// One node's aggregated endpoint table, in file then declaration order.
pub type NodeMapping = IndexMap<String, EndpointEntry>;

/// All node mappings, keyed by node name in depth-first discovery order.
pub type NodeMappings = IndexMap<String, NodeMapping>;

/// Expanded per-file tables supplied by the loader boundary, keyed by the
/// file name as written in the tree file.
pub type FileTables = IndexMap<String, RawTable>;

/// Builds the per-node mapping for every node in the tree.
///
/// Each node unions its files' tables in file-list order. A key
/// contributed twice within one node fails with
/// [`TreeError::KeyConflict`]; an entry without an `end` fails with
/// [`TreeError::MissingEnd`].
pub fn node_mappings(root: &Node, files: &FileTables) -> Result<NodeMappings, TreeError> {
    let mut mappings = NodeMappings::new();
    aggregate_node(root, files, &mut mappings)?;
    Ok(mappings)
}

fn aggregate_node(
    node: &Node,
    files: &FileTables,
    mappings: &mut NodeMappings,
) -> Result<(), TreeError> {
    let mut mapping = NodeMapping::new();

    for file in &node.files {
        let table = files.get(file).ok_or_else(|| TreeError::UnknownFile {
            file: file.clone(),
            node: node.name.clone(),
        })?;
        for (key, raw) in table {
            let end = raw.end.clone().ok_or_else(|| TreeError::MissingEnd {
                key: key.clone(),
                node: node.name.clone(),
            })?;
            if mapping.contains_key(key) {
                return Err(TreeError::KeyConflict {
                    key: key.clone(),
                    node: node.name.clone(),
                });
            }
            mapping.insert(
                key.clone(),
                EndpointEntry {
                    end,
                    terminal: raw.is_terminal(),
                },
            );
        }
    }

    mappings.insert(node.name.clone(), mapping);

    for child in &node.children {
        aggregate_node(child, files, mappings)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pinmap_expand::RawEntry;

    fn table(pairs: &[(&str, &str)]) -> RawTable {
        pairs
            .iter()
            .map(|(k, e)| {
                (
                    k.to_string(),
                    RawEntry {
                        end: Some(e.to_string()),
                        ..RawEntry::default()
                    },
                )
            })
            .collect()
    }

    #[test]
    fn unions_files_in_order() {
        let node = Node::leaf("fpga", vec!["a.toml".into(), "b.toml".into()]);
        let mut files = FileTables::new();
        files.insert("a.toml".into(), table(&[("pin1", "e1")]));
        files.insert("b.toml".into(), table(&[("pin2", "e2")]));

        let mappings = node_mappings(&node, &files).unwrap();
        let keys: Vec<_> = mappings["fpga"].keys().cloned().collect();
        assert_eq!(keys, vec!["pin1", "pin2"]);
        assert_eq!(mappings["fpga"]["pin2"].end, "e2");
    }

    #[test]
    fn duplicate_key_across_files_conflicts() {
        let node = Node::leaf("fpga", vec!["a.toml".into(), "b.toml".into()]);
        let mut files = FileTables::new();
        files.insert("a.toml".into(), table(&[("pin1", "e1")]));
        files.insert("b.toml".into(), table(&[("pin1", "e2")]));

        assert_eq!(
            node_mappings(&node, &files).unwrap_err(),
            TreeError::KeyConflict {
                key: "pin1".into(),
                node: "fpga".into(),
            }
        );
    }

    #[test]
    fn missing_file_table_fails() {
        let node = Node::leaf("fpga", vec!["a.toml".into()]);
        assert_eq!(
            node_mappings(&node, &FileTables::new()).unwrap_err(),
            TreeError::UnknownFile {
                file: "a.toml".into(),
                node: "fpga".into(),
            }
        );
    }

    #[test]
    fn entry_without_end_fails() {
        let node = Node::leaf("fpga", vec!["a.toml".into()]);
        let mut files = FileTables::new();
        let mut raw = RawTable::new();
        raw.insert("pin1".into(), RawEntry::default());
        files.insert("a.toml".into(), raw);

        assert_eq!(
            node_mappings(&node, &files).unwrap_err(),
            TreeError::MissingEnd {
                key: "pin1".into(),
                node: "fpga".into(),
            }
        );
    }

    #[test]
    fn children_aggregated_depth_first() {
        let tree = Node::with_children(
            "fpga",
            vec!["fpga.toml".into()],
            vec![Node::leaf("pcb", vec!["pcb.toml".into()])],
        );
        let mut files = FileTables::new();
        files.insert("fpga.toml".into(), table(&[("pin1", "e1")]));
        files.insert("pcb.toml".into(), table(&[("e1", "term1")]));

        let mappings = node_mappings(&tree, &files).unwrap();
        let nodes: Vec<_> = mappings.keys().cloned().collect();
        assert_eq!(nodes, vec!["fpga", "pcb"]);
    }
}
