//! Parsing and validation of the three pinmap input file formats.
//!
//! This crate is the file-loading boundary of the core: it owns the TOML
//! schemas for mapping files, tree files, and assignment files, and turns
//! them into the in-memory tables the core operates on. Each loader has a
//! `_from_str` variant so tests never need the filesystem.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod schema;

pub use error::LoadError;
pub use loader::{
    assignment_from_str, load_assignment_file, load_mapping_file, load_tree_file,
    mapping_from_str, tree_from_str,
};
