//! Serde schemas for the three input file formats.
//!
//! The shapes are explicit and strict (`deny_unknown_fields`): a malformed
//! file is rejected with a schema error instead of being reinterpreted.

use indexmap::IndexMap;
use pinmap_expand::{RawEntry, RawTable};
use pinmap_tree::Node;
use serde::Deserialize;

use crate::error::LoadError;

/// A mapping file: an optional `defaults` record plus the `[map.*]` table.
///
/// ```toml
/// [defaults]
/// set_property = { IOSTANDARD = "LVCMOS33" }
///
/// [map.pin1]
/// end = "e1"
///
/// [map."led[0-7]"]
/// end = "d[0-7]"
/// regex = true
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MappingFile {
    /// Defaults folded into every entry of `map`.
    #[serde(default)]
    pub defaults: Option<RawEntry>,
    /// The raw endpoint table.
    #[serde(default)]
    pub map: RawTable,
}

/// One node of the tree file; the root is the file's top level.
///
/// ```toml
/// name = "fpga"
/// files = ["fpga.toml"]
///
/// [[nodes]]
/// name = "carrier"
/// files = ["carrier.toml"]
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TreeNodeSchema {
    /// Node name, unique across the whole tree.
    pub name: String,
    /// Mapping files contributing to this node's table.
    pub files: Vec<String>,
    /// Child nodes. Distinguishes "absent" from "present but empty"; the
    /// latter is a schema violation.
    #[serde(default)]
    pub nodes: Option<Vec<TreeNodeSchema>>,
}

impl TreeNodeSchema {
    /// Converts the parsed shape into the core [`Node`] model, rejecting
    /// shapes the model cannot represent.
    pub fn into_node(self, path: &str) -> Result<Node, LoadError> {
        if self.files.is_empty() {
            return Err(LoadError::Schema {
                path: path.to_string(),
                message: format!("empty 'files' list in node '{}'", self.name),
            });
        }
        let children = match self.nodes {
            None => Vec::new(),
            Some(nodes) if nodes.is_empty() => {
                return Err(LoadError::Schema {
                    path: path.to_string(),
                    message: format!("empty 'nodes' list in node '{}'", self.name),
                });
            }
            Some(nodes) => nodes
                .into_iter()
                .map(|child| child.into_node(path))
                .collect::<Result<Vec<_>, _>>()?,
        };
        Ok(Node {
            name: self.name,
            files: self.files,
            children,
        })
    }
}

/// An assignment file: global defaults, ungrouped ports, and per-node port
/// groups with their own defaults.
///
/// ```toml
/// [defaults]
/// set_property = { IOSTANDARD = "LVCMOS33" }
///
/// [ports.sys_rst]
/// node = "carrier"
/// end = "rst_btn"
///
/// [nodes.mezzanine.defaults]
/// set_property = { SLEW = "FAST" }
///
/// [nodes.mezzanine.ports."data[0-3]"]
/// end = "d[0-3]"
/// regex = true
/// ```
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AssignmentFile {
    /// Global defaults applied to every port, grouped or not.
    #[serde(default)]
    pub defaults: Option<RawEntry>,
    /// Ports with an inline `node` field.
    #[serde(default)]
    pub ports: RawTable,
    /// Port groups keyed by destination node name.
    #[serde(default)]
    pub nodes: IndexMap<String, NodeGroup>,
}

/// One per-node port group of the assignment file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NodeGroup {
    /// Group defaults; they take precedence over the global defaults and
    /// lose to the entry's own fields.
    #[serde(default)]
    pub defaults: Option<RawEntry>,
    /// Ports bound to this group's node.
    #[serde(default)]
    pub ports: RawTable,
}
