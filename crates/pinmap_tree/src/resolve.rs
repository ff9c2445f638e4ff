//! Recursive resolution of every root pin down to its final endpoint.

use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::Serialize;

use crate::aggregate::NodeMappings;
use crate::error::TreeError;
use crate::node::Node;

/// The final destination of one pin inside one node.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ResolvedEnd {
    /// The physical FPGA pin this endpoint resolves to.
    pub pin: String,
    /// Whether the walk ended on a terminal endpoint.
    pub terminal: bool,
}

/// Resolved endpoints keyed by the node each walk stopped in, then by the
/// final endpoint name.
pub type ResolvedTree = IndexMap<String, IndexMap<String, ResolvedEnd>>;

/// The output of resolving a mapping tree: the resolved endpoints plus the
/// walk-state side table recording which mapping entries were traversed.
///
/// `touched` is kept apart from the mapping entries themselves so the
/// aggregated tables stay immutable after aggregation; the dangling-terminal
/// pass reads it once every pin has been walked.
#[derive(Debug)]
pub struct Resolution {
    /// Final destination of every pin, per node.
    pub tree: ResolvedTree,
    touched: BTreeSet<(String, String)>,
}

impl Resolution {
    /// Returns `true` if the walk traversed the entry keyed `key` in
    /// `node`'s mapping.
    pub fn is_touched(&self, node: &str, key: &str) -> bool {
        self.touched
            .contains(&(node.to_string(), key.to_string()))
    }

    /// Looks up the resolved endpoint `end` inside `node`, if any walk
    /// stopped there.
    pub fn lookup(&self, node: &str, end: &str) -> Option<&ResolvedEnd> {
        self.tree.get(node)?.get(end)
    }
}

/// A pin's walk state while it is threaded through the tree.
struct Cursor {
    pin: String,
    end: String,
    node: Option<String>,
    terminal: bool,
}

/// Resolves every key of the root node's mapping down through the tree.
///
/// Each walk starts at a root key (a physical pin), advances through every
/// node whose mapping contains the current endpoint, and stops where the
/// endpoint is found nowhere deeper. Children are visited in declaration
/// order and see the cursor as updated by earlier siblings; sibling-key
/// disjointness (I4) guarantees at most one of them advances it per level.
/// Routing past an endpoint already marked terminal is a hard error (I5).
pub fn resolve(root: &Node, mappings: &NodeMappings) -> Result<Resolution, TreeError> {
    let root_mapping = mappings
        .get(&root.name)
        .ok_or_else(|| TreeError::MissingNodeMapping {
            node: root.name.clone(),
        })?;
    let pins: Vec<String> = root_mapping.keys().cloned().collect();

    let mut tree = ResolvedTree::new();
    let mut touched = BTreeSet::new();

    for pin in pins {
        let mut cursor = Cursor {
            pin: pin.clone(),
            end: pin,
            node: None,
            terminal: false,
        };
        walk(&mut cursor, root, mappings, &mut touched)?;

        // The first step always matches, because the cursor starts on a key
        // of the root mapping.
        let node = cursor.node.unwrap_or_else(|| root.name.clone());
        tree.entry(node).or_default().insert(
            cursor.end,
            ResolvedEnd {
                pin: cursor.pin,
                terminal: cursor.terminal,
            },
        );
    }

    Ok(Resolution { tree, touched })
}

fn walk(
    cursor: &mut Cursor,
    node: &Node,
    mappings: &NodeMappings,
    touched: &mut BTreeSet<(String, String)>,
) -> Result<(), TreeError> {
    let mapping = mappings
        .get(&node.name)
        .ok_or_else(|| TreeError::MissingNodeMapping {
            node: node.name.clone(),
        })?;

    let key = cursor.end.clone();
    let Some(entry) = mapping.get(&key) else {
        // The walk simply stops here; not an error by itself.
        return Ok(());
    };

    if cursor.terminal {
        return Err(TreeError::TerminalReentry {
            pin: cursor.pin.clone(),
            end: key,
            node: node.name.clone(),
        });
    }

    cursor.end = entry.end.clone();
    cursor.node = Some(node.name.clone());
    if entry.terminal {
        cursor.terminal = true;
    }
    touched.insert((node.name.clone(), key));

    for child in &node.children {
        walk(cursor, child, mappings, touched)?;
    }
    Ok(())
}

/// Scans every terminal-flagged mapping entry after all pins were walked
/// and reports the ones no walk ever touched (I6).
///
/// Runs over the whole tree at once, never per pin: a terminal may be
/// reached by a different pin's walk than the one currently resolving.
pub fn dangling_terminals(mappings: &NodeMappings, resolution: &Resolution) -> Vec<TreeError> {
    let mut violations = Vec::new();
    for (node, mapping) in mappings {
        for (key, entry) in mapping {
            if entry.terminal && !resolution.is_touched(node, key) {
                violations.push(TreeError::DanglingTerminal {
                    end: entry.end.clone(),
                    node: node.clone(),
                });
            }
        }
    }
    violations
}
