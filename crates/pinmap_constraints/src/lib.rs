//! Vendor constraint-file renderers for bound connection tables.
//!
//! Renderers are pure: they turn a [`Connection`](pinmap_tree::Connection)
//! into the textual constraint directives of one EDA tool and never touch
//! the filesystem. One location directive is emitted per bound port, plus
//! one extra directive per `set_property` pair.

#![warn(missing_docs)]

pub mod qsf;
pub mod writer;
pub mod xdc;

pub use qsf::Qsf;
pub use writer::ConstraintWriter;
pub use xdc::Xdc;
