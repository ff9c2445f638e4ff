//! `pinmap resolve` — resolve the mapping tree and print the result.

use std::path::Path;

use crate::pipeline::{render_text, resolve_tree};
use crate::{ReportFormat, ResolveArgs};

/// Runs the `pinmap resolve` command.
///
/// Resolves the whole tree and prints every node's final endpoints with
/// the pin each one traces back to. Returns exit code 0 on success.
pub fn run(args: &ResolveArgs, quiet: bool) -> Result<i32, Box<dyn std::error::Error>> {
    let (root, resolution) = resolve_tree(Path::new(&args.tree_file))?;

    match args.format {
        ReportFormat::Text => print!("{}", render_text(&resolution)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&resolution.tree)?),
    }

    if !quiet {
        eprintln!(
            "   Resolved mapping tree rooted at '{}' ({} nodes reached)",
            root.name,
            resolution.tree.len()
        );
    }
    Ok(0)
}
