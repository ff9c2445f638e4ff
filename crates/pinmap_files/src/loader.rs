//! Loading and flattening of the three input file kinds.

use std::path::Path;

use pinmap_expand::{apply_defaults, expand_entries, expand_table, RawEntry, RawTable};
use pinmap_tree::Node;

use crate::error::LoadError;
use crate::schema::{AssignmentFile, MappingFile, TreeNodeSchema};

/// Loads a mapping file and runs it through propagation and expansion.
pub fn load_mapping_file(path: &Path) -> Result<RawTable, LoadError> {
    mapping_from_str(&read(path)?, &display(path))
}

/// Parses and expands a mapping file from a string.
pub fn mapping_from_str(content: &str, origin: &str) -> Result<RawTable, LoadError> {
    let file: MappingFile = parse(content, origin)?;
    expand_table(file.map, file.defaults.as_ref()).map_err(|source| LoadError::Expand {
        path: origin.to_string(),
        source,
    })
}

/// Loads a tree file into the core node model.
pub fn load_tree_file(path: &Path) -> Result<Node, LoadError> {
    tree_from_str(&read(path)?, &display(path))
}

/// Parses a tree file from a string.
pub fn tree_from_str(content: &str, origin: &str) -> Result<Node, LoadError> {
    let schema: TreeNodeSchema = parse(content, origin)?;
    schema.into_node(origin)
}

/// Loads an assignment file into one flat expanded port table.
pub fn load_assignment_file(path: &Path) -> Result<RawTable, LoadError> {
    assignment_from_str(&read(path)?, &display(path))
}

/// Parses, flattens, and expands an assignment file from a string.
///
/// Ungrouped ports come first, then each node group in declaration order.
/// Group ports get their `node` from the group (a conflicting inline
/// `node` is a schema error) and their group defaults before the global
/// defaults, so precedence is entry, then group, then global. Duplicate
/// port names anywhere in the file surface as a key conflict when the
/// flattened list is expanded and unioned.
pub fn assignment_from_str(content: &str, origin: &str) -> Result<RawTable, LoadError> {
    let file: AssignmentFile = parse(content, origin)?;

    let mut entries: Vec<(String, RawEntry)> = file.ports.into_iter().collect();

    for (node_name, group) in file.nodes {
        for (port, mut entry) in group.ports {
            match &entry.node {
                Some(inline) if inline != &node_name => {
                    return Err(LoadError::Schema {
                        path: origin.to_string(),
                        message: format!(
                            "port '{port}' in group '{node_name}' names a different node '{inline}'"
                        ),
                    });
                }
                _ => entry.node = Some(node_name.clone()),
            }
            if let Some(defaults) = &group.defaults {
                apply_defaults(&mut entry, defaults);
            }
            entries.push((port, entry));
        }
    }

    expand_entries(entries, file.defaults.as_ref()).map_err(|source| LoadError::Expand {
        path: origin.to_string(),
        source,
    })
}

fn read(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: display(path),
        source,
    })
}

fn display(path: &Path) -> String {
    path.display().to_string()
}

fn parse<T: serde::de::DeserializeOwned>(content: &str, origin: &str) -> Result<T, LoadError> {
    toml::from_str(content).map_err(|e| LoadError::Parse {
        path: origin.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapping_file_expands() {
        let table = mapping_from_str(
            r#"
[map.pin1]
end = "e1"

[map."led[0-1]"]
end = "d[0-1]"
regex = true
"#,
            "fpga.toml",
        )
        .unwrap();
        let keys: Vec<_> = table.keys().cloned().collect();
        assert_eq!(keys, vec!["pin1", "led0", "led1"]);
        assert_eq!(table["led1"].end.as_deref(), Some("d1"));
    }

    #[test]
    fn mapping_defaults_applied() {
        let table = mapping_from_str(
            r#"
[defaults]
terminal = true

[map.clk_out]
end = "clk_in"

[map.dbg]
end = "dbg_in"
terminal = false
"#,
            "pcb.toml",
        )
        .unwrap();
        assert!(table["clk_out"].is_terminal());
        assert!(!table["dbg"].is_terminal());
    }

    #[test]
    fn mapping_expansion_conflict_names_file() {
        let err = mapping_from_str(
            r#"
[map.clk]
end = "e1"
suffix = "_p"

[map.clk_p]
end = "e2"
"#,
            "pcb.toml",
        )
        .unwrap_err();
        assert!(format!("{err}").contains("pcb.toml"));
    }

    #[test]
    fn tree_file_loads() {
        let root = tree_from_str(
            r#"
name = "fpga"
files = ["fpga.toml"]

[[nodes]]
name = "carrier"
files = ["carrier.toml"]

[[nodes.nodes]]
name = "mezz"
files = ["mezz.toml"]
"#,
            "tree.toml",
        )
        .unwrap();
        assert_eq!(root.children[0].children[0].name, "mezz");
    }

    #[test]
    fn assignment_groups_fill_node() {
        let table = assignment_from_str(
            r#"
[ports.sys_rst]
node = "carrier"
end = "rst_btn"

[nodes.mezz.ports.clk]
end = "clk_in"
"#,
            "assign.toml",
        )
        .unwrap();
        assert_eq!(table["sys_rst"].node.as_deref(), Some("carrier"));
        assert_eq!(table["clk"].node.as_deref(), Some("mezz"));
    }

    #[test]
    fn group_defaults_win_over_global() {
        let table = assignment_from_str(
            r#"
[defaults]
set_property = { IOSTANDARD = "LVCMOS33", DRIVE = "8" }

[nodes.mezz.defaults]
set_property = { IOSTANDARD = "LVDS" }

[nodes.mezz.ports.clk]
end = "clk_in"
"#,
            "assign.toml",
        )
        .unwrap();
        let props = table["clk"].set_property.as_ref().unwrap();
        assert_eq!(props.get("IOSTANDARD"), Some(&"LVDS".to_string()));
        assert_eq!(props.get("DRIVE"), Some(&"8".to_string()));
    }

    #[test]
    fn conflicting_inline_node_rejected() {
        let err = assignment_from_str(
            r#"
[nodes.mezz.ports.clk]
node = "carrier"
end = "clk_in"
"#,
            "assign.toml",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Schema { .. }));
    }

    #[test]
    fn duplicate_port_across_groups_conflicts() {
        let err = assignment_from_str(
            r#"
[nodes.a.ports.clk]
end = "e1"

[nodes.b.ports.clk]
end = "e2"
"#,
            "assign.toml",
        )
        .unwrap_err();
        assert!(matches!(err, LoadError::Expand { .. }));
        assert!(format!("{err}").contains("'clk'"));
    }

    #[test]
    fn assignment_ports_expand() {
        let table = assignment_from_str(
            r#"
[nodes.mezz.ports."data[0-3]"]
end = "d[0-3]"
regex = true
"#,
            "assign.toml",
        )
        .unwrap();
        let keys: Vec<_> = table.keys().cloned().collect();
        assert_eq!(keys, vec!["data0", "data1", "data2", "data3"]);
        assert_eq!(table["data2"].end.as_deref(), Some("d2"));
        assert_eq!(table["data2"].node.as_deref(), Some("mezz"));
    }

    #[test]
    fn matching_inline_node_allowed() {
        let table = assignment_from_str(
            r#"
[nodes.mezz.ports.clk]
node = "mezz"
end = "clk_in"
"#,
            "assign.toml",
        )
        .unwrap();
        assert_eq!(table["clk"].node.as_deref(), Some("mezz"));
    }
}
