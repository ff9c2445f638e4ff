//! The pinmap mapping-tree core: node model, structural validation,
//! per-node aggregation, recursive pin resolution, and port binding.
//!
//! The pipeline runs strictly one way: per-file raw tables (from
//! `pinmap_files` via `pinmap_expand`) are aggregated into per-node
//! mappings, the node tree is validated, every root pin is walked down to
//! its final endpoint, dangling terminals are detected, and finally the
//! assignment binder cross-checks the user's port table against the
//! resolved tree. All state lives in values created for one run; nothing
//! survives it.

#![warn(missing_docs)]

pub mod aggregate;
pub mod bind;
pub mod error;
pub mod node;
pub mod resolve;
pub mod validate;

pub use aggregate::{node_mappings, EndpointEntry, FileTables, NodeMapping, NodeMappings};
pub use bind::{bind_ports, BoundPort, Connection};
pub use error::{batch, BindError, TreeError, UnassignedTerminal};
pub use node::Node;
pub use resolve::{dangling_terminals, resolve, ResolvedEnd, ResolvedTree, Resolution};
pub use validate::{check_sibling_keys, validate};
