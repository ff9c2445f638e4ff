//! The raw table-entry model shared by mapping files, assignment files, and
//! `defaults` records.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered raw mapping table, keyed by endpoint key or port name.
pub type RawTable = IndexMap<String, RawEntry>;

/// One raw table entry, as written in a mapping or assignment file.
///
/// Every field is optional because the same shape serves three roles: a
/// mapping-file entry (requires `end`, filled in by defaults at the latest),
/// an assignment-file port (requires `node` and `end`), and a `defaults`
/// record (anything goes). Presence checks happen in the consumers, where
/// the missing field can be reported with useful context.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawEntry {
    /// Name of the endpoint one tree level away that this key connects to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
    /// Destination node name; only meaningful for assignment-file ports.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node: Option<String>,
    /// When `true`, the key and `end` are patterns to be enumerated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regex: Option<bool>,
    /// Marks the destination endpoint as a terminal resolution target.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terminal: Option<bool>,
    /// Prepended to the key before expansion, then discarded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    /// Appended to the key before expansion, then discarded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// Extra tool properties emitted for the port bound to this endpoint,
    /// in declaration order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub set_property: Option<IndexMap<String, String>>,
}

impl RawEntry {
    /// Returns `true` if this entry requests regex enumeration.
    pub fn is_regex(&self) -> bool {
        self.regex.unwrap_or(false)
    }

    /// Returns `true` if this entry marks a terminal endpoint.
    pub fn is_terminal(&self) -> bool {
        self.terminal.unwrap_or(false)
    }
}
