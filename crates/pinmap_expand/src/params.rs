//! Parameter propagation: defaults records and prefix/suffix key renames.

use indexmap::IndexMap;

use crate::entry::RawEntry;

/// Folds a `defaults` record into one entry.
///
/// Scalar fields are copied only when the entry does not define them.
/// `set_property` deep-merges: default pairs come first, the entry's own
/// pairs follow (or replace the default value in place), so the entry wins
/// on conflict.
pub fn apply_defaults(entry: &mut RawEntry, defaults: &RawEntry) {
    if entry.end.is_none() {
        entry.end = defaults.end.clone();
    }
    if entry.node.is_none() {
        entry.node = defaults.node.clone();
    }
    if entry.regex.is_none() {
        entry.regex = defaults.regex;
    }
    if entry.terminal.is_none() {
        entry.terminal = defaults.terminal;
    }
    if entry.prefix.is_none() {
        entry.prefix = defaults.prefix.clone();
    }
    if entry.suffix.is_none() {
        entry.suffix = defaults.suffix.clone();
    }
    if let Some(default_props) = &defaults.set_property {
        match &mut entry.set_property {
            None => entry.set_property = Some(default_props.clone()),
            Some(own) => {
                let mut merged: IndexMap<String, String> = default_props.clone();
                for (key, value) in own.drain(..) {
                    merged.insert(key, value);
                }
                *own = merged;
            }
        }
    }
}

/// Applies the `prefix` and `suffix` parameters to a key, consuming both
/// fields from the entry.
///
/// Renaming never raises on collision here; duplicate keys produced by a
/// rename are caught by the size check when the expanded entries are
/// unioned back into a table.
pub fn apply_rename(key: String, entry: &mut RawEntry) -> String {
    let mut key = key;
    if let Some(prefix) = entry.prefix.take() {
        key = format!("{prefix}{key}");
    }
    if let Some(suffix) = entry.suffix.take() {
        key = format!("{key}{suffix}");
    }
    key
}
