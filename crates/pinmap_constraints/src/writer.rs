//! The constraint-renderer trait.

use pinmap_tree::Connection;

/// Renders a bound connection table into one vendor's constraint syntax.
pub trait ConstraintWriter {
    /// The conventional file extension for this format, without the dot.
    fn file_extension(&self) -> &'static str;

    /// Renders the whole connection table into a constraint file body.
    fn render(&self, connection: &Connection) -> String;
}

/// The shared generated-file banner.
pub(crate) fn banner() -> String {
    "# This file has been auto generated by the pinmap tool.\n\
     # Do not modify it by hand!\n\n"
        .to_string()
}
