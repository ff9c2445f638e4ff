//! `pinmap assign` — bind ports to pins and write a constraint file.

use std::path::Path;

use pinmap_constraints::{ConstraintWriter, Qsf, Xdc};
use pinmap_files::load_assignment_file;
use pinmap_tree::bind_ports;

use crate::pipeline::resolve_tree;
use crate::{AssignArgs, ConstraintFormat};

/// Runs the `pinmap assign` command.
///
/// Resolves the tree, binds every port of the assignment file to its pin,
/// and writes the rendered constraint file. Any structural or binding
/// violation aborts before the output file is touched.
pub fn run(args: &AssignArgs, quiet: bool) -> Result<i32, Box<dyn std::error::Error>> {
    let (_, resolution) = resolve_tree(Path::new(&args.tree_file))?;

    let ports = load_assignment_file(Path::new(&args.assignment_file))?;
    let connection = bind_ports(ports, &resolution)?;

    let writer: &dyn ConstraintWriter = match args.format {
        ConstraintFormat::Xdc => &Xdc,
        ConstraintFormat::Qsf => &Qsf,
    };
    std::fs::write(&args.output_file, writer.render(&connection))?;

    if !quiet {
        eprintln!(
            "   Assigned {} ports, constraints written to {}",
            connection.len(),
            args.output_file
        );
    }
    Ok(0)
}
