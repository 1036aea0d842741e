//! Serializing values trees back to YAML text.

use crate::{Error, Result, Value};
use yaml_rust2::yaml::Hash;
use yaml_rust2::{Yaml, YamlEmitter};

/// Serialize a values tree as a YAML document.
///
/// Used for the coalesced-output mode and the trailing merged-document
/// block of the report.
pub fn to_yaml_string(value: &Value) -> Result<String> {
    let yaml = to_yaml(value);
    let mut out = String::new();
    let mut emitter = YamlEmitter::new(&mut out);
    emitter.dump(&yaml).map_err(|e| Error::Emit(e.to_string()))?;
    out.push('\n');
    Ok(out)
}

fn to_yaml(value: &Value) -> Yaml {
    match value {
        Value::Scalar(yaml) => yaml.clone(),
        Value::Sequence(items) => Yaml::Array(items.iter().map(to_yaml).collect()),
        Value::Mapping(entries) => {
            let mut hash = Hash::new();
            for (key, child) in entries {
                hash.insert(Yaml::String(key.clone()), to_yaml(child));
            }
            Yaml::Hash(hash)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    #[test]
    fn test_round_trip_preserves_structure() {
        let doc = parse(
            r#"
replicas: 3
image:
  repository: nginx
  tag: latest
hosts:
  - alpha
  - beta
"#,
        )
        .unwrap();

        let text = to_yaml_string(&doc).unwrap();
        let reparsed = parse(&text).unwrap();
        assert_eq!(reparsed, doc);
    }

    #[test]
    fn test_key_order_survives_serialization() {
        let doc = parse("zebra: 1\nalpha: 2").unwrap();
        let text = to_yaml_string(&doc).unwrap();
        let zebra = text.find("zebra").unwrap();
        let alpha = text.find("alpha").unwrap();
        assert!(zebra < alpha);
    }

    #[test]
    fn test_empty_mapping_serializes() {
        let text = to_yaml_string(&Value::empty_mapping()).unwrap();
        assert!(!text.is_empty());
    }
}
