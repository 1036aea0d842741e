//! Error types for reading and writing values files.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for values-yaml operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading or serializing values documents.
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be read from disk.
    #[error("failed to read values file {}", file.display())]
    Io {
        /// Path of the offending file
        file: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not syntactically valid YAML.
    #[error("failed to parse {file}: {message}")]
    Parse {
        /// Name of the offending document
        file: String,
        /// Message from the YAML scanner
        message: String,
    },

    /// The document's top level is not a mapping.
    #[error("values file {file} must contain a top-level mapping")]
    NotAMapping {
        /// Name of the offending document
        file: String,
    },

    /// A merged tree could not be serialized back to YAML.
    #[error("failed to serialize values: {0}")]
    Emit(String),
}
