//! YAML parser that builds values trees.

use crate::{Error, Result, Value};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;
use yaml_rust2::parser::{Event, MarkedEventReceiver, Parser};
use yaml_rust2::scanner::Marker;
use yaml_rust2::Yaml;

/// Parse a single YAML document into a values tree.
///
/// If the input contains multiple documents, only the first one is parsed.
/// An empty or null document becomes an empty mapping.
///
/// # Errors
///
/// Returns an error if the YAML is invalid or if the top level is not a
/// mapping.
pub fn parse(content: &str) -> Result<Value> {
    parse_file(content, "values")
}

/// Parse a single YAML document, naming it for error reporting.
///
/// # Example
///
/// ```rust
/// use values_yaml::parse_file;
///
/// let doc = parse_file("replicas: 3", "values.yaml").unwrap();
/// assert!(doc.is_mapping());
/// ```
pub fn parse_file(content: &str, filename: &str) -> Result<Value> {
    let mut parser = Parser::new_from_str(content);
    let mut builder = ValueBuilder::new();

    parser
        .load(&mut builder, false) // false = single document only
        .map_err(|err| Error::Parse {
            file: filename.to_string(),
            message: err.to_string(),
        })?;

    match builder.root {
        None | Some(Value::Scalar(Yaml::Null)) => Ok(Value::empty_mapping()),
        Some(root @ Value::Mapping(_)) => Ok(root),
        Some(_) => Err(Error::NotAMapping {
            file: filename.to_string(),
        }),
    }
}

/// Load and parse one values file from disk.
///
/// The file's path is used as its name in error messages; provenance
/// attribution uses whatever name the caller passes downstream.
pub fn read_values_file(path: &Path) -> Result<Value> {
    let content = fs::read_to_string(path).map_err(|source| Error::Io {
        file: path.to_path_buf(),
        source,
    })?;
    parse_file(&content, &path.display().to_string())
}

/// Builder that implements MarkedEventReceiver to construct a Value tree.
struct ValueBuilder {
    /// Stack of containers being constructed
    stack: Vec<BuildNode>,

    /// The completed root node
    root: Option<Value>,
}

enum BuildNode {
    Sequence(Vec<Value>),
    Mapping {
        entries: IndexMap<String, Value>,
        pending_key: Option<String>,
    },
}

impl ValueBuilder {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            root: None,
        }
    }

    fn push_complete(&mut self, node: Value) {
        match self.stack.last_mut() {
            None => {
                // This is the root
                self.root = Some(node);
            }
            Some(BuildNode::Sequence(items)) => {
                items.push(node);
            }
            Some(BuildNode::Mapping {
                entries,
                pending_key,
            }) => match pending_key.take() {
                // Only container keys land here; scalar keys are captured
                // verbatim in the Scalar event.
                None => *pending_key = Some(node.to_inline_string()),
                Some(key) => {
                    entries.insert(key, node);
                }
            },
        }
    }
}

impl MarkedEventReceiver for ValueBuilder {
    fn on_event(&mut self, ev: Event, _marker: Marker) {
        match ev {
            Event::Nothing
            | Event::StreamStart
            | Event::StreamEnd
            | Event::DocumentStart
            | Event::DocumentEnd => {}

            Event::Scalar(value, _style, _anchor_id, _tag) => {
                // Mapping keys keep their source text verbatim; type
                // inference applies to values only.
                if let Some(BuildNode::Mapping { pending_key, .. }) = self.stack.last_mut() {
                    if pending_key.is_none() {
                        *pending_key = Some(value);
                        return;
                    }
                }
                let node = Value::Scalar(parse_scalar_value(&value));
                self.push_complete(node);
            }

            Event::SequenceStart(_anchor_id, _tag) => {
                self.stack.push(BuildNode::Sequence(Vec::new()));
            }

            Event::SequenceEnd => {
                let build_node = self.stack.pop().expect("SequenceEnd without SequenceStart");
                if let BuildNode::Sequence(items) = build_node {
                    self.push_complete(Value::Sequence(items));
                } else {
                    panic!("Expected Sequence build node");
                }
            }

            Event::MappingStart(_anchor_id, _tag) => {
                self.stack.push(BuildNode::Mapping {
                    entries: IndexMap::new(),
                    pending_key: None,
                });
            }

            Event::MappingEnd => {
                let build_node = self.stack.pop().expect("MappingEnd without MappingStart");
                if let BuildNode::Mapping { entries, .. } = build_node {
                    self.push_complete(Value::Mapping(entries));
                } else {
                    panic!("Expected Mapping build node");
                }
            }

            Event::Alias(_anchor_id) => {
                // Anchors are not tracked; aliases resolve to null
                self.push_complete(Value::Scalar(Yaml::Null));
            }
        }
    }
}

/// Parse a scalar string value into the appropriate Yaml type.
///
/// This handles type inference: integers, floats, booleans, null, and
/// strings, including the YAML 1.1 boolean spellings values files rely on.
fn parse_scalar_value(value: &str) -> Yaml {
    if let Ok(i) = value.parse::<i64>() {
        return Yaml::Integer(i);
    }

    if value.parse::<f64>().is_ok() {
        return Yaml::Real(value.to_string());
    }

    match value {
        "true" | "True" | "TRUE" | "yes" | "Yes" | "YES" | "on" | "On" | "ON" => {
            return Yaml::Boolean(true);
        }
        "false" | "False" | "FALSE" | "no" | "No" | "NO" | "off" | "Off" | "OFF" => {
            return Yaml::Boolean(false);
        }
        "null" | "Null" | "NULL" | "~" | "" => {
            return Yaml::Null;
        }
        _ => {}
    }

    Yaml::String(value.to_string())
}
