//! Binding of external ports to resolved terminal endpoints.

use std::collections::BTreeMap;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{BindError, UnassignedTerminal};
use crate::resolve::Resolution;

/// One port successfully bound to a physical pin.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BoundPort {
    /// The node the port's target endpoint lives in.
    pub node: String,
    /// The terminal endpoint the port was bound to.
    pub end: String,
    /// The physical FPGA pin the endpoint resolved to.
    pub fpga_pin: String,
    /// Extra tool properties for the constraint writer, in declaration
    /// order.
    pub set_property: IndexMap<String, String>,
}

/// The bound connection table handed to the constraint writer, keyed by
/// port name in assignment-file order.
pub type Connection = IndexMap<String, BoundPort>;

/// Binds every port of an expanded assignment table to its resolved pin.
///
/// Per port, in order: the entry must name a `node` and an `end`, the node
/// must exist in the resolved tree, the endpoint must exist in that node's
/// resolved mapping, the endpoint must not already carry a binding, and the
/// endpoint must be terminal. Assignment markers live in a side table; the
/// resolved tree is never mutated. After all ports are processed, every
/// terminal endpoint left unbound is collected into one
/// [`BindError::UnassignedTerminals`] batch (I7).
pub fn bind_ports(
    ports: pinmap_expand::RawTable,
    resolution: &Resolution,
) -> Result<Connection, BindError> {
    let mut connection = Connection::new();
    let mut assigned: BTreeMap<(String, String), String> = BTreeMap::new();

    for (port, entry) in ports {
        let node = match entry.node {
            Some(ref node) => node.clone(),
            None => {
                return Err(BindError::MissingField {
                    port,
                    field: "node",
                })
            }
        };
        let end = match entry.end {
            Some(ref end) => end.clone(),
            None => return Err(BindError::MissingField { port, field: "end" }),
        };

        let Some(node_tree) = resolution.tree.get(&node) else {
            return Err(BindError::UnknownNode { port, node });
        };
        let Some(resolved) = node_tree.get(&end) else {
            return Err(BindError::UnknownEndpoint { port, node, end });
        };

        if let Some(owner) = assigned.get(&(node.clone(), end.clone())) {
            return Err(BindError::DoubleAssignment {
                port,
                node,
                end,
                assigned_to: owner.clone(),
            });
        }
        if !resolved.terminal {
            return Err(BindError::NonTerminalTarget {
                port,
                node,
                end,
                pin: resolved.pin.clone(),
            });
        }

        assigned.insert((node.clone(), end.clone()), port.clone());
        connection.insert(
            port,
            BoundPort {
                node,
                end,
                fpga_pin: resolved.pin.clone(),
                set_property: entry.set_property.unwrap_or_default(),
            },
        );
    }

    let mut unassigned = Vec::new();
    for (node, ends) in &resolution.tree {
        for (end, resolved) in ends {
            if resolved.terminal && !assigned.contains_key(&(node.clone(), end.clone())) {
                unassigned.push(UnassignedTerminal {
                    node: node.clone(),
                    end: end.clone(),
                    pin: resolved.pin.clone(),
                });
            }
        }
    }
    if !unassigned.is_empty() {
        return Err(BindError::UnassignedTerminals(unassigned));
    }

    Ok(connection)
}
