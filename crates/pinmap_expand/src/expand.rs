//! Entry and table expansion.
//!
//! The expander is the identity for plain entries. Regex-flagged entries
//! enumerate their key and `end` patterns, natural-sort both lists, and
//! pair them positionally; the pairing after natural sort is the semantic
//! contract of the regex feature.

use crate::entry::{RawEntry, RawTable};
use crate::enumerate::enumerate_pattern;
use crate::error::ExpandError;
use crate::natural;
use crate::params::{apply_defaults, apply_rename};

/// Expands one entry into one or many concrete key→entry pairs.
///
/// Non-regex entries pass through unchanged. Regex entries yield one pair
/// per enumerated string, each carrying a copy of the entry with `end`
/// replaced by the paired concrete string and the `regex` flag cleared.
pub fn expand_entry(key: &str, entry: &RawEntry) -> Result<Vec<(String, RawEntry)>, ExpandError> {
    if !entry.is_regex() {
        return Ok(vec![(key.to_string(), entry.clone())]);
    }

    let end_pattern = entry.end.as_deref().ok_or_else(|| ExpandError::MissingEnd {
        key: key.to_string(),
    })?;

    let mut keys = enumerate_pattern(key)?;
    let mut ends = enumerate_pattern(end_pattern)?;

    if keys.len() != ends.len() {
        return Err(ExpandError::ExpansionLengthMismatch {
            key: key.to_string(),
            end: end_pattern.to_string(),
            key_count: keys.len(),
            end_count: ends.len(),
        });
    }

    natural::sort(&mut keys);
    natural::sort(&mut ends);

    let mut expanded = Vec::with_capacity(keys.len());
    for (concrete_key, concrete_end) in keys.into_iter().zip(ends) {
        let mut concrete = entry.clone();
        concrete.end = Some(concrete_end);
        concrete.regex = None;
        expanded.push((concrete_key, concrete));
    }
    Ok(expanded)
}

/// Runs the full propagation + expansion pipeline over an ordered table.
///
/// Equivalent to [`expand_entries`] on the table's pairs; a `RawTable`
/// cannot hold duplicate keys, so pre-rename collisions are impossible
/// here.
pub fn expand_table(table: RawTable, defaults: Option<&RawEntry>) -> Result<RawTable, ExpandError> {
    expand_entries(table.into_iter().collect(), defaults)
}

/// Runs the full propagation + expansion pipeline over a list of pairs.
///
/// Order of operations per entry: defaults, then prefix rename, then suffix
/// rename, then regex expansion. Expanded pairs are unioned into the result
/// table; a before/after size mismatch means a silent overwrite happened
/// and fails with [`ExpandError::KeyConflict`] naming the pre-expansion
/// key.
pub fn expand_entries(
    entries: Vec<(String, RawEntry)>,
    defaults: Option<&RawEntry>,
) -> Result<RawTable, ExpandError> {
    let mut renamed = Vec::with_capacity(entries.len());
    for (key, mut entry) in entries {
        if let Some(defaults) = defaults {
            apply_defaults(&mut entry, defaults);
        }
        let key = apply_rename(key, &mut entry);
        renamed.push((key, entry));
    }

    let mut table = RawTable::new();
    for (key, entry) in renamed {
        let expanded = expand_entry(&key, &entry)?;
        let added = expanded.len();
        let before = table.len();
        for (concrete_key, concrete) in expanded {
            table.insert(concrete_key, concrete);
        }
        if before + added != table.len() {
            return Err(ExpandError::KeyConflict { key });
        }
    }
    Ok(table)
}
