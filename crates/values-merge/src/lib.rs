//! Override-merge of values documents with per-key provenance.
//!
//! This crate merges an ordered sequence of values documents (later
//! documents win per key, nested mappings merge recursively) and tracks,
//! for every key path in the merged result, which document most recently
//! set its effective value. The result is rendered as an aligned,
//! indentation-preserving report pairing each key with the file that
//! contributed it.
//!
//! # Architecture
//!
//! - [`coalesce`]: the override-merge engine for two values trees
//! - [`key_paths`]: lazy pre-order enumeration of every key path in a tree
//! - [`owns_path`]: does a single document set the value at a path?
//! - [`Ledger`]: ordered map from key path to [`Provenance`] record
//! - [`MergeSession`]: drives one merge step per document and keeps the
//!   ledger current
//! - [`render`]: walks the final merged tree and emits the report
//!
//! Attribution is presence-based: a document owns every path it mentions
//! itself, even when the value is unchanged, and never inherits ownership
//! of nodes it does not mention.
//!
//! # Example
//!
//! ```rust
//! use values_merge::{render, MergeSession, ReportOptions};
//! use values_yaml::parse_file;
//!
//! let mut session = MergeSession::new();
//! for (name, text) in [
//!     ("base.yaml", "replicas: 1\nimage:\n  tag: 1.0"),
//!     ("prod.yaml", "image:\n  tag: 2.0"),
//! ] {
//!     let doc = parse_file(text, name).unwrap();
//!     session.apply(name, doc).unwrap();
//! }
//!
//! let (merged, ledger) = session.finish().unwrap();
//! let lines = render(&merged, &ledger, &ReportOptions::default());
//! assert!(lines[0].starts_with("base.yaml"));
//! ```

mod coalesce;
mod driver;
mod error;
mod path;
mod provenance;
mod report;

pub use coalesce::coalesce;
pub use driver::MergeSession;
pub use error::{MergeError, Result};
pub use path::{key_paths, KeyPath, KeyPaths};
pub use provenance::{owns_path, Ledger, Provenance};
pub use report::{render, ReportOptions};

// Re-export for convenience
pub use values_yaml::Value;
