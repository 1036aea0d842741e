//! # values-yaml
//!
//! YAML front-end for layered values files.
//!
//! This crate loads values documents into a [`Value`] tree (an
//! insertion-ordered, tagged representation of one document's content) and
//! serializes merged trees back to YAML text. The top level of a values
//! file must be a mapping; an empty document is treated as an empty
//! mapping.
//!
//! ## Example
//!
//! ```rust
//! use values_yaml::parse;
//!
//! let doc = parse("replicas: 3\nimage:\n  tag: latest").unwrap();
//! let image = doc.get("image").unwrap();
//! assert!(image.is_mapping());
//! ```

mod emit;
mod error;
mod parser;
mod value;

pub use emit::to_yaml_string;
pub use error::{Error, Result};
pub use parser::{parse, parse_file, read_values_file};
pub use value::Value;
