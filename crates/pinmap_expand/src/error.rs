//! Error types for table expansion and pattern enumeration.

/// Errors that can occur while expanding a raw mapping table.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExpandError {
    /// A regex-flagged entry has no `end` pattern to enumerate.
    #[error("regex entry '{key}' has no 'end' field")]
    MissingEnd {
        /// The offending table key.
        key: String,
    },

    /// The pattern is not valid regex syntax.
    #[error("invalid pattern '{pattern}': {message}")]
    InvalidPattern {
        /// The offending pattern.
        pattern: String,
        /// The parser's description of the problem.
        message: String,
    },

    /// The pattern matches an unbounded set of strings (`*`, `+`, `{n,}`).
    #[error("pattern '{pattern}' matches an unbounded set of strings")]
    UnboundedPattern {
        /// The offending pattern.
        pattern: String,
    },

    /// The pattern uses a construct that cannot be enumerated.
    #[error("pattern '{pattern}' uses unsupported construct: {construct}")]
    UnsupportedPattern {
        /// The offending pattern.
        pattern: String,
        /// Short description of the rejected construct.
        construct: String,
    },

    /// The pattern enumerates past the hard expansion cap.
    #[error("pattern '{pattern}' expands to more than {limit} strings")]
    ExpansionLimit {
        /// The offending pattern.
        pattern: String,
        /// The cap that was exceeded.
        limit: usize,
    },

    /// The key and end patterns enumerate lists of different lengths.
    #[error(
        "different list lengths after regex expansion for key '{key}' ({key_count}) \
         and end '{end}' ({end_count})"
    )]
    ExpansionLengthMismatch {
        /// The key pattern.
        key: String,
        /// The end pattern.
        end: String,
        /// Number of strings the key pattern enumerates.
        key_count: usize,
        /// Number of strings the end pattern enumerates.
        end_count: usize,
    },

    /// Two expanded entries produced the same key.
    #[error("conflicting key names after expanding entry '{key}'")]
    KeyConflict {
        /// The pre-expansion key whose expansion collided.
        key: String,
    },
}
