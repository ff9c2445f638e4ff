//! Error types for tree validation, aggregation, resolution, and binding.

use std::fmt;

/// Errors detected while validating, aggregating, or resolving the mapping
/// tree.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TreeError {
    /// The same node name appears twice in the tree (I1).
    #[error("duplicated node name '{name}'")]
    DuplicateNodeName {
        /// The repeated node name.
        name: String,
    },

    /// A node references no mapping files (I2).
    #[error("node '{node}' has an empty file list")]
    EmptyFileList {
        /// The offending node.
        node: String,
    },

    /// A node references a file for which no table was supplied.
    #[error("no mapping table loaded for file '{file}' referenced by node '{node}'")]
    UnknownFile {
        /// The file that has no loaded table.
        file: String,
        /// The node referencing it.
        node: String,
    },

    /// No aggregated mapping exists for a node being walked.
    #[error("no aggregated mapping for node '{node}'")]
    MissingNodeMapping {
        /// The node without a mapping.
        node: String,
    },

    /// A mapping-file entry reached aggregation without an `end` field.
    #[error("entry '{key}' in node '{node}' has no 'end' field")]
    MissingEnd {
        /// The offending key.
        key: String,
        /// The node it belongs to.
        node: String,
    },

    /// Two files of the same node contribute the same key (I3).
    #[error("conflicting key '{key}' in node '{node}'")]
    KeyConflict {
        /// The duplicated key.
        key: String,
        /// The node whose file union collided.
        node: String,
    },

    /// The same key appears in two sibling nodes, making the mapping
    /// ambiguous (I4).
    #[error("key '{key}' found in sibling nodes '{first}' and '{second}'")]
    SiblingKeyConflict {
        /// The ambiguous key.
        key: String,
        /// Name of the sibling seen first.
        first: String,
        /// Name of the sibling seen second.
        second: String,
    },

    /// A walk tried to route a pin past an endpoint already marked
    /// terminal (I5).
    #[error("pin '{pin}' routed through already-terminal end '{end}' in node '{node}'")]
    TerminalReentry {
        /// The pin being walked.
        pin: String,
        /// The endpoint at which the re-entry was attempted.
        end: String,
        /// The node containing that endpoint.
        node: String,
    },

    /// A terminal endpoint was never reached by any walk from the root (I6).
    #[error("terminal end '{end}' in node '{node}' is not mapped to any pin")]
    DanglingTerminal {
        /// The unreached terminal endpoint.
        end: String,
        /// The node defining it.
        node: String,
    },

    /// A batch of independently collected violations from one pass.
    #[error("{}", render_batch(.0))]
    Violations(Vec<TreeError>),
}

/// Wraps independently collected violations into a single error, or `Ok`
/// when the pass found none.
///
/// A single violation is returned as itself so its message is not wrapped.
pub fn batch(mut violations: Vec<TreeError>) -> Result<(), TreeError> {
    match violations.len() {
        0 => Ok(()),
        1 => Err(violations.remove(0)),
        _ => Err(TreeError::Violations(violations)),
    }
}

fn render_batch(violations: &[TreeError]) -> String {
    let mut out = format!("{} violations detected:", violations.len());
    for violation in violations {
        out.push_str("\n  - ");
        out.push_str(&violation.to_string());
    }
    out
}

/// A terminal endpoint left without a port after binding (I7).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnassignedTerminal {
    /// The node defining the terminal endpoint.
    pub node: String,
    /// The terminal endpoint name.
    pub end: String,
    /// The pin the endpoint resolved to.
    pub pin: String,
}

impl fmt::Display for UnassignedTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "terminal end '{}' in node '{}', connected to pin '{}', is not mapped to any port",
            self.end, self.node, self.pin
        )
    }
}

/// Errors detected while binding ports to resolved endpoints.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum BindError {
    /// A port entry lacks a required field.
    #[error("port '{port}' is missing required field '{field}'")]
    MissingField {
        /// The port missing the field.
        port: String,
        /// The absent field name.
        field: &'static str,
    },

    /// A port targets a node absent from the resolved tree.
    #[error("port '{port}' targets unknown node '{node}'")]
    UnknownNode {
        /// The offending port.
        port: String,
        /// The unknown node name.
        node: String,
    },

    /// A port targets an endpoint absent from its node's resolved mapping.
    #[error("port '{port}' assigned to missing end '{end}' in node '{node}'")]
    UnknownEndpoint {
        /// The offending port.
        port: String,
        /// The node that was targeted.
        node: String,
        /// The endpoint that does not exist there.
        end: String,
    },

    /// Two ports target the same resolved endpoint (I7).
    #[error(
        "port '{port}' targets end '{end}' in node '{node}' already assigned to port '{assigned_to}'"
    )]
    DoubleAssignment {
        /// The port attempting the second bind.
        port: String,
        /// The contested node.
        node: String,
        /// The contested endpoint.
        end: String,
        /// The port that bound the endpoint first.
        assigned_to: String,
    },

    /// A port targets an endpoint that is not flagged terminal.
    #[error(
        "port '{port}' assigned to pin '{pin}' mapped to non-terminal end '{end}' in node '{node}'"
    )]
    NonTerminalTarget {
        /// The offending port.
        port: String,
        /// The node that was targeted.
        node: String,
        /// The non-terminal endpoint.
        end: String,
        /// The pin it resolves to.
        pin: String,
    },

    /// Terminal endpoints left unbound after all ports were processed (I7).
    #[error("{}", render_unassigned(.0))]
    UnassignedTerminals(Vec<UnassignedTerminal>),
}

fn render_unassigned(terminals: &[UnassignedTerminal]) -> String {
    let mut out = format!("{} terminal ends are not mapped to any port:", terminals.len());
    for terminal in terminals {
        out.push_str("\n  - ");
        out.push_str(&terminal.to_string());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_of_none_is_ok() {
        assert!(batch(Vec::new()).is_ok());
    }

    #[test]
    fn batch_of_one_unwraps() {
        let err = batch(vec![TreeError::DuplicateNodeName {
            name: "fpga".into(),
        }])
        .unwrap_err();
        assert_eq!(format!("{err}"), "duplicated node name 'fpga'");
    }

    #[test]
    fn batch_of_many_lists_each() {
        let err = batch(vec![
            TreeError::DanglingTerminal {
                end: "t1".into(),
                node: "pcb".into(),
            },
            TreeError::DanglingTerminal {
                end: "t2".into(),
                node: "pcb".into(),
            },
        ])
        .unwrap_err();
        let msg = format!("{err}");
        assert!(msg.starts_with("2 violations detected:"));
        assert!(msg.contains("'t1'"));
        assert!(msg.contains("'t2'"));
    }

    #[test]
    fn unassigned_terminal_display() {
        let err = BindError::UnassignedTerminals(vec![UnassignedTerminal {
            node: "pcb".into(),
            end: "term1".into(),
            pin: "pin1".into(),
        }]);
        let msg = format!("{err}");
        assert!(msg.contains("terminal end 'term1' in node 'pcb'"));
        assert!(msg.contains("pin 'pin1'"));
    }
}
