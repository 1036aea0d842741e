//! The override-merge engine for values trees.

use crate::error::{MergeError, Result};
use indexmap::IndexMap;
use values_yaml::Value;

/// Maximum nesting depth accepted by the merge engine.
const MAX_DEPTH: usize = 256;

/// Override-merge `overlay` onto `base`, producing a new tree.
///
/// Mappings merge field-wise: overlay values win per key, base-only keys
/// are carried over unchanged, and overlay-only keys are appended in
/// overlay order. Scalars and sequences are replaced wholesale. A mapping
/// on one side and a non-mapping on the other at the same path is a
/// structural conflict.
///
/// # Errors
///
/// Returns [`MergeError::Conflict`] on a mapping/non-mapping mismatch and
/// [`MergeError::TooDeep`] when nesting exceeds the recursion limit.
pub fn coalesce(base: &Value, overlay: &Value) -> Result<Value> {
    let mut path = Vec::new();
    coalesce_at(base, overlay, &mut path, 0)
}

fn coalesce_at(
    base: &Value,
    overlay: &Value,
    path: &mut Vec<String>,
    depth: usize,
) -> Result<Value> {
    if depth > MAX_DEPTH {
        return Err(MergeError::TooDeep {
            max_depth: MAX_DEPTH,
            path: path.join("."),
        });
    }

    match (base, overlay) {
        (Value::Mapping(base_entries), Value::Mapping(overlay_entries)) => {
            let mut merged = IndexMap::with_capacity(base_entries.len());

            for (key, base_child) in base_entries {
                match overlay_entries.get(key) {
                    Some(overlay_child) => {
                        path.push(key.clone());
                        let child = coalesce_at(base_child, overlay_child, path, depth + 1)?;
                        path.pop();
                        merged.insert(key.clone(), child);
                    }
                    None => {
                        merged.insert(key.clone(), base_child.clone());
                    }
                }
            }

            for (key, overlay_child) in overlay_entries {
                if !merged.contains_key(key) {
                    merged.insert(key.clone(), overlay_child.clone());
                }
            }

            Ok(Value::Mapping(merged))
        }

        (Value::Mapping(_), _) | (_, Value::Mapping(_)) => Err(MergeError::Conflict {
            path: path.join("."),
        }),

        // Leaf over leaf: the overlay wins, sequences included.
        (_, _) => Ok(overlay.clone()),
    }
}
