//! Dotted key paths and their pre-order enumeration.

use std::fmt;
use values_yaml::Value;

/// A position in a values tree, addressed by mapping keys from the root.
///
/// Displayed with segments joined by `.`. Every prefix of a valid path
/// resolves to a mapping; only the final segment may resolve to a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPath {
    segments: Vec<String>,
}

impl KeyPath {
    /// Build a path from its segments. Must not be empty.
    pub fn new(segments: Vec<String>) -> Self {
        debug_assert!(!segments.is_empty());
        KeyPath { segments }
    }

    /// Parse a dotted path like `image.tag`.
    pub fn from_dotted(path: &str) -> Self {
        KeyPath {
            segments: path.split('.').map(str::to_string).collect(),
        }
    }

    /// Extend the path by one segment.
    pub fn child(&self, key: &str) -> KeyPath {
        let mut segments = self.segments.clone();
        segments.push(key.to_string());
        KeyPath { segments }
    }

    /// The path's segments, root first.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The final segment: the key this path names.
    pub fn key(&self) -> &str {
        self.segments.last().map_or("", String::as_str)
    }

    /// Nesting depth: 0 for top-level keys, 1 for their children, and so on.
    pub fn depth(&self) -> usize {
        self.segments.len().saturating_sub(1)
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segments.join("."))
    }
}

/// Enumerate every key path in `tree`, depth-first, parents before
/// children.
///
/// Internal mapping nodes and leaves each yield exactly one path, in the
/// tree's own key order. Sequence leaves are not descended into. The
/// iterator is lazy and recomputed fresh on every call; nothing is cached
/// between calls. A non-mapping root yields nothing.
pub fn key_paths(tree: &Value) -> KeyPaths<'_> {
    let mut stack = Vec::new();
    if let Value::Mapping(entries) = tree {
        for (key, child) in entries.iter().rev() {
            stack.push((KeyPath::new(vec![key.clone()]), child));
        }
    }
    KeyPaths { stack }
}

/// Iterator over `(path, node)` pairs of a values tree. See [`key_paths`].
pub struct KeyPaths<'a> {
    stack: Vec<(KeyPath, &'a Value)>,
}

impl<'a> Iterator for KeyPaths<'a> {
    type Item = (KeyPath, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        let (path, node) = self.stack.pop()?;
        if let Value::Mapping(entries) = node {
            for (key, child) in entries.iter().rev() {
                self.stack.push((path.child(key), child));
            }
        }
        Some((path, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use yaml_rust2::Yaml;

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

    fn dotted(tree: &Value) -> Vec<String> {
        key_paths(tree).map(|(path, _)| path.to_string()).collect()
    }

    #[test]
    fn test_depth_and_key() {
        let path = KeyPath::from_dotted("resources.limits.cpu");
        assert_eq!(path.depth(), 2);
        assert_eq!(path.key(), "cpu");
        assert_eq!(path.to_string(), "resources.limits.cpu");
    }

    #[test]
    fn test_preorder_parent_before_children() {
        let tree = map(vec![
            ("a", scalar("1")),
            (
                "b",
                map(vec![("c", scalar("2")), ("d", map(vec![("e", scalar("3"))]))]),
            ),
            ("f", scalar("4")),
        ]);

        assert_eq!(dotted(&tree), ["a", "b", "b.c", "b.d", "b.d.e", "f"]);
    }

    #[test]
    fn test_every_node_visited_exactly_once() {
        let tree = map(vec![
            ("x", map(vec![("y", scalar("1"))])),
            ("z", scalar("2")),
        ]);

        let mut paths = dotted(&tree);
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_sequences_are_not_descended() {
        let tree = map(vec![(
            "hosts",
            Value::Sequence(vec![scalar("alpha"), scalar("beta")]),
        )]);

        assert_eq!(dotted(&tree), ["hosts"]);
    }

    #[test]
    fn test_restartable() {
        let tree = map(vec![("a", map(vec![("b", scalar("1"))]))]);
        assert_eq!(dotted(&tree), dotted(&tree));
    }

    #[test]
    fn test_empty_and_non_mapping_roots() {
        assert!(dotted(&Value::empty_mapping()).is_empty());
        assert!(dotted(&scalar("x")).is_empty());
    }
}
