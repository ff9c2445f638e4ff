//! Shared pipeline orchestration for CLI commands.
//!
//! Both subcommands run the same front half: load the tree file, validate
//! it, load and expand every referenced mapping file, aggregate per node,
//! check sibling-key disjointness, resolve every pin, and detect dangling
//! terminals. `assign` then binds the port table on top.

use std::fmt::Write;
use std::path::Path;

use pinmap_files::{load_mapping_file, load_tree_file};
use pinmap_tree::{
    batch, check_sibling_keys, dangling_terminals, node_mappings, resolve, FileTables, Node,
    Resolution,
};

/// Loads, validates, and fully resolves a mapping tree.
///
/// Mapping-file paths are resolved relative to the tree file's directory.
/// Fails on the first structural violation; passes that can find several
/// independent violations report them all in one error.
pub fn resolve_tree(tree_path: &Path) -> Result<(Node, Resolution), Box<dyn std::error::Error>> {
    let root = load_tree_file(tree_path)?;
    pinmap_tree::validate(&root)?;

    let base = tree_path.parent().unwrap_or_else(|| Path::new("."));
    let mut files = FileTables::new();
    for file in root.collect_files() {
        let table = load_mapping_file(&base.join(&file))?;
        files.insert(file, table);
    }

    let mappings = node_mappings(&root, &files)?;
    batch(check_sibling_keys(&root, &mappings))?;

    let resolution = resolve(&root, &mappings)?;
    batch(dangling_terminals(&mappings, &resolution))?;

    Ok((root, resolution))
}

/// Renders a resolution as indented text, one node per block.
pub fn render_text(resolution: &Resolution) -> String {
    let mut out = String::new();
    for (node, ends) in &resolution.tree {
        let _ = writeln!(out, "node '{node}':");
        for (end, resolved) in ends {
            let marker = if resolved.terminal { " (terminal)" } else { "" };
            let _ = writeln!(out, "  {end} <- pin {}{marker}", resolved.pin);
        }
    }
    out
}
