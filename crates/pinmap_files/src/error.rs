//! Error types for input-file loading.

use pinmap_expand::ExpandError;

/// Errors that can occur while loading or validating an input file.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// An I/O error occurred while reading the file.
    #[error("failed to read '{path}': {source}")]
    Io {
        /// Path of the file being read.
        path: String,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed into the expected schema.
    #[error("failed to parse '{path}': {message}")]
    Parse {
        /// Path of the offending file.
        path: String,
        /// The parser's description of the problem.
        message: String,
    },

    /// The file parsed but its shape violates a schema rule.
    #[error("invalid shape in '{path}': {message}")]
    Schema {
        /// Path of the offending file.
        path: String,
        /// Description of the shape violation.
        message: String,
    },

    /// Propagation or expansion of the file's table failed.
    #[error("in '{path}': {source}")]
    Expand {
        /// Path of the offending file.
        path: String,
        /// The underlying expansion error.
        #[source]
        source: ExpandError,
    },
}
