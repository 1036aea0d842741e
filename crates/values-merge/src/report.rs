//! Rendering the annotated provenance report.

use crate::path::{key_paths, KeyPath};
use crate::provenance::Ledger;
use tracing::warn;
use values_yaml::Value;

/// Two spaces per nesting level, matching the input documents' indentation.
const INDENT: &str = "  ";

/// Output controls for the provenance report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportOptions {
    /// Omit the source-file column entirely.
    pub suppress_file_names: bool,

    /// Skip the annotated report; only the merged document is printed.
    pub only_coalesced: bool,
}

/// Render one aligned line per key path in `merged`, walking the tree
/// depth-first with parents before children.
///
/// Each line pairs the owning file (left-justified, padded to the longest
/// file name among the records actually rendered) with the record's
/// indented `key: value` payload. A path with no ledger record is
/// rendered with an empty file name and reported as a warning; with
/// `suppress_file_names` set, the file column and separator are omitted.
/// Returns nothing when `only_coalesced` is set.
pub fn render(merged: &Value, ledger: &Ledger, options: &ReportOptions) -> Vec<String> {
    if options.only_coalesced {
        return Vec::new();
    }

    let rows: Vec<(KeyPath, &Value)> = key_paths(merged).collect();

    let width = rows
        .iter()
        .filter_map(|(path, _)| ledger.get(path))
        .map(|record| record.source_file.len())
        .max()
        .unwrap_or(0);

    rows.into_iter()
        .map(|(path, node)| {
            let (file, payload) = match ledger.get(&path) {
                Some(record) => (record.source_file.as_str(), record.line.clone()),
                None => {
                    warn!(path = %path, "no provenance record for merged key");
                    ("", payload_line(&path, node))
                }
            };

            if options.suppress_file_names {
                payload
            } else {
                format!("{file:<width$} :  {payload}")
            }
        })
        .collect()
}

/// The `key: value` (or bare `key`) payload for one path, indented to its
/// depth.
pub(crate) fn payload_line(path: &KeyPath, node: &Value) -> String {
    let indent = INDENT.repeat(path.depth());
    match node {
        Value::Mapping(_) => format!("{indent}{}", path.key()),
        leaf => format!("{indent}{}: {}", path.key(), leaf.to_inline_string()),
    }
}
