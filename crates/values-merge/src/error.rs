//! Error types for the merge engine.

use thiserror::Error;

/// Result type alias for values-merge operations.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Errors that can occur while coalescing values documents.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MergeError {
    /// A document holds a mapping where the merged tree holds a leaf, or
    /// the other way around, at the same path.
    #[error("structural conflict at `{path}`: cannot merge mapping and non-mapping values")]
    Conflict {
        /// Dotted path of the conflicting node
        path: String,
    },

    /// Values nesting exceeds the recursion limit.
    #[error("values nesting too deep (max depth {max_depth}) at `{path}`")]
    TooDeep {
        /// Maximum allowed depth
        max_depth: usize,
        /// Dotted path where the limit was exceeded
        path: String,
    },
}
