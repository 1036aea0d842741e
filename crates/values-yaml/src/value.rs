//! The value tree for layered values documents.

use indexmap::IndexMap;
use yaml_rust2::Yaml;

/// One values document, or the result of merging several.
///
/// Mappings preserve document key order. Scalars reuse [`Yaml`] atoms
/// (string, integer, real, boolean, null). Sequences are leaves as far as
/// merging is concerned: they are replaced wholesale, never merged
/// element-wise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// Atomic values (String, Integer, Real, Boolean, Null).
    Scalar(Yaml),

    /// Sequence leaf.
    Sequence(Vec<Value>),

    /// Nested mapping, field-wise mergeable.
    Mapping(IndexMap<String, Value>),
}

impl Value {
    /// An empty top-level mapping, the content of an empty values file.
    pub fn empty_mapping() -> Self {
        Value::Mapping(IndexMap::new())
    }

    /// Check if this is a sequence value.
    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    /// Check if this is a mapping value.
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    /// Get as a Yaml scalar if this is a scalar.
    pub fn as_yaml(&self) -> Option<&Yaml> {
        match self {
            Value::Scalar(yaml) => Some(yaml),
            _ => None,
        }
    }

    /// Get as sequence items if this is a sequence.
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Get as mapping entries if this is a mapping.
    pub fn as_mapping(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Mapping(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up a direct child of a mapping.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_mapping().and_then(|entries| entries.get(key))
    }

    /// Render the value on a single line, flow style.
    ///
    /// Scalars print bare (`3`, `latest`, `null`), sequences as
    /// `[a, b, c]`, mappings as `{k: v}`. Used for the `key: value`
    /// payloads of the provenance report.
    pub fn to_inline_string(&self) -> String {
        match self {
            Value::Scalar(yaml) => scalar_to_string(yaml),
            Value::Sequence(items) => {
                let items: Vec<String> = items.iter().map(Value::to_inline_string).collect();
                format!("[{}]", items.join(", "))
            }
            Value::Mapping(entries) => {
                let entries: Vec<String> = entries
                    .iter()
                    .map(|(key, value)| format!("{key}: {}", value.to_inline_string()))
                    .collect();
                format!("{{{}}}", entries.join(", "))
            }
        }
    }
}

fn scalar_to_string(yaml: &Yaml) -> String {
    match yaml {
        Yaml::String(s) => s.clone(),
        Yaml::Integer(i) => i.to_string(),
        Yaml::Real(r) => r.clone(),
        Yaml::Boolean(b) => b.to_string(),
        Yaml::Null => "null".to_string(),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(s: &str) -> Value {
        Value::Scalar(Yaml::String(s.into()))
    }

    fn map(entries: Vec<(&str, Value)>) -> Value {
        Value::Mapping(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    #[test]
    fn test_kind_predicates() {
        assert!(Value::Sequence(vec![]).is_sequence());
        assert!(Value::empty_mapping().is_mapping());
        assert!(!scalar("x").is_mapping());
    }

    #[test]
    fn test_get_direct_child() {
        let tree = map(vec![("a", scalar("1"))]);
        assert_eq!(tree.get("a"), Some(&scalar("1")));
        assert_eq!(tree.get("missing"), None);
        assert_eq!(scalar("x").get("a"), None);
    }

    #[test]
    fn test_inline_scalars() {
        assert_eq!(scalar("latest").to_inline_string(), "latest");
        assert_eq!(Value::Scalar(Yaml::Integer(3)).to_inline_string(), "3");
        assert_eq!(Value::Scalar(Yaml::Boolean(true)).to_inline_string(), "true");
        assert_eq!(Value::Scalar(Yaml::Null).to_inline_string(), "null");
    }

    #[test]
    fn test_inline_sequence() {
        let seq = Value::Sequence(vec![scalar("a"), Value::Scalar(Yaml::Integer(2))]);
        assert_eq!(seq.to_inline_string(), "[a, 2]");
    }

    #[test]
    fn test_inline_mapping() {
        let tree = map(vec![("a", scalar("1")), ("b", Value::Sequence(vec![]))]);
        assert_eq!(tree.to_inline_string(), "{a: 1, b: []}");
    }
}
