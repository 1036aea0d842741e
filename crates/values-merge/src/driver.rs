//! One merge step at a time: coalesce, then re-attribute ownership.

use crate::coalesce::coalesce;
use crate::error::Result;
use crate::path::key_paths;
use crate::provenance::{owns_path, Ledger, Provenance};
use crate::report::payload_line;
use tracing::debug;
use values_yaml::Value;

/// Accumulates the override-merge of an ordered sequence of values
/// documents, together with the provenance ledger for the merged result.
///
/// A session is empty until the first document is applied, merging while
/// documents are applied in order, and done once [`MergeSession::finish`]
/// consumes it. Applying the first document makes every key self-owned;
/// each later document re-claims exactly the paths it mentions itself.
///
/// A failed step leaves the session untouched: the previous merged tree
/// and ledger survive, and the caller is expected to abandon the run.
#[derive(Debug, Default)]
pub struct MergeSession {
    merged: Option<Value>,
    ledger: Ledger,
}

impl MergeSession {
    /// Start a session with no documents applied.
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one values document, identified by `file_name` for
    /// attribution.
    ///
    /// The document is coalesced onto the running merged tree, then every
    /// key path of the new merged tree is tested against this document
    /// alone: paths the document sets itself get fresh provenance records,
    /// all other paths keep their previous ones.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::MergeError`] from the merge engine. No ledger
    /// mutation happens for a failed step.
    pub fn apply(&mut self, file_name: &str, document: Value) -> Result<()> {
        let (merged, owned) = match &self.merged {
            // First document: the merged tree is the document itself, and
            // every key is self-owned.
            None => {
                let merged = document;
                let owned = attribute(&mut self.ledger, file_name, &merged, &merged);
                (merged, owned)
            }
            Some(previous) => {
                let merged = coalesce(previous, &document)?;
                let owned = attribute(&mut self.ledger, file_name, &merged, &document);
                (merged, owned)
            }
        };

        debug!(file = file_name, owned_paths = owned, "applied values file");
        self.merged = Some(merged);
        Ok(())
    }

    /// The running merged tree, if any document has been applied.
    pub fn merged(&self) -> Option<&Value> {
        self.merged.as_ref()
    }

    /// The ledger accumulated so far.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Complete the run, yielding the final merged tree and its ledger.
    ///
    /// Consuming the session makes the completed state terminal. Returns
    /// `None` when no document was ever applied.
    pub fn finish(self) -> Option<(Value, Ledger)> {
        let merged = self.merged?;
        Some((merged, self.ledger))
    }
}

fn attribute(ledger: &mut Ledger, file_name: &str, merged: &Value, delta: &Value) -> usize {
    let mut owned = 0;
    for (path, node) in key_paths(merged) {
        if owns_path(delta, &path) {
            ledger.set(
                &path,
                Provenance {
                    source_file: file_name.to_string(),
                    line: payload_line(&path, node),
                },
            );
            owned += 1;
        }
    }
    owned
}
