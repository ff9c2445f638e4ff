//! Entry expansion and parameter propagation for pinmap mapping tables.
//!
//! This crate turns raw mapping tables, as written in mapping and assignment
//! files, into concrete key→entry tables: a `defaults` record is folded into
//! every entry, `prefix`/`suffix` parameters rename keys, and regex-flagged
//! entries are enumerated into one concrete pair per matched string, paired
//! by natural (human) order.

#![warn(missing_docs)]

pub mod entry;
pub mod enumerate;
pub mod error;
pub mod expand;
pub mod natural;
pub mod params;

pub use entry::{RawEntry, RawTable};
pub use enumerate::{enumerate_pattern, MAX_EXPANSION};
pub use error::ExpandError;
pub use expand::{expand_entries, expand_entry, expand_table};
pub use params::{apply_defaults, apply_rename};
