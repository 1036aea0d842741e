//! Ownership records for merged key paths.

use crate::path::KeyPath;
use indexmap::IndexMap;
use values_yaml::Value;

/// The most recent document responsible for a key path's effective value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Provenance {
    /// Name of the values file, as given on the command line.
    pub source_file: String,

    /// Pre-rendered `key: value` (or bare `key`) payload, indented to the
    /// path's depth.
    pub line: String,
}

/// Ordered map from dotted key path to its provenance record.
///
/// Records are overwritten in place when a later document re-asserts a
/// path; entries for keys a later merge step removed are left behind and
/// simply never consulted at render time.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    records: IndexMap<String, Provenance>,
}

impl Ledger {
    /// Create an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `record` as the provenance of `path`, replacing any
    /// previous record.
    pub fn set(&mut self, path: &KeyPath, record: Provenance) {
        self.records.insert(path.to_string(), record);
    }

    /// Look up the provenance of `path`.
    pub fn get(&self, path: &KeyPath) -> Option<&Provenance> {
        self.records.get(&path.to_string())
    }

    /// Number of recorded paths.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check whether any path has been recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Does `delta` itself set the value at `path`?
///
/// Walks the delta document segment by segment. Presence is the signal:
/// re-asserting an unchanged value still claims the path, and a document
/// owns an internal mapping node only when it carries a (possibly
/// partial) sub-mapping there itself. Ownership is never inferred from a
/// document's children.
///
/// Returns `false` when a segment is absent, or when a non-final segment
/// resolves to a leaf (the delta terminates the path early).
pub fn owns_path(delta: &Value, path: &KeyPath) -> bool {
    let mut current = delta;
    for segment in path.segments() {
        match current {
            Value::Mapping(entries) => match entries.get(segment.as_str()) {
                Some(child) => current = child,
                None => return false,
            },
            _ => return false,
        }
    }
    true
}
