//! pinmap CLI — automatic assignment of ports to pins in FPGA designs.
//!
//! Useful when signals propagate through multiple PCBs: the mapping tree is
//! resolved from the FPGA pins down to the terminal ends, and ports are
//! bound to terminals and written out as vendor constraints. Provides
//! `pinmap resolve` to inspect the resolved tree and `pinmap assign` to
//! produce a constraint file.

#![warn(missing_docs)]

mod assign;
mod pipeline;
mod resolve;

use std::process;

use clap::{Parser, Subcommand, ValueEnum};

/// pinmap — port-to-pin assignment for FPGA designs.
#[derive(Parser, Debug)]
#[command(name = "pinmap", version, about = "Port-to-pin assignment for FPGA designs")]
pub struct Cli {
    /// Suppress all output except errors.
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve the mapping tree and print the result.
    Resolve(ResolveArgs),
    /// Assign ports to pins and write a constraint file.
    Assign(AssignArgs),
}

/// Arguments for the `pinmap resolve` subcommand.
#[derive(Parser, Debug)]
pub struct ResolveArgs {
    /// TOML file describing the mapping tree.
    pub tree_file: String,

    /// Output format for the resolved tree.
    #[arg(short, long, value_enum, default_value_t = ReportFormat::Text)]
    pub format: ReportFormat,
}

/// Arguments for the `pinmap assign` subcommand.
#[derive(Parser, Debug)]
pub struct AssignArgs {
    /// TOML file assigning ports to terminal ends defined in the mapping
    /// tree.
    pub assignment_file: String,

    /// TOML file describing the mapping tree.
    pub tree_file: String,

    /// Output constraint file destination.
    pub output_file: String,

    /// Constraint syntax to emit.
    #[arg(short, long, value_enum, default_value_t = ConstraintFormat::Xdc)]
    pub format: ConstraintFormat,
}

/// Resolved-tree output format.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Human-readable terminal output.
    Text,
    /// Machine-readable JSON output.
    Json,
}

/// Constraint-file syntax selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ConstraintFormat {
    /// Vivado XDC (`set_property PACKAGE_PIN`).
    Xdc,
    /// Quartus QSF (`set_location_assignment`).
    Qsf,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Resolve(ref args) => resolve::run(args, cli.quiet),
        Command::Assign(ref args) => assign::run(args, cli.quiet),
    };

    match result {
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}
