//! # YAML Documents
//!
//! Server definition files are written in YAML but validated as JSON.
//! YAML has a richer data model (tags, non-string keys, non-finite floats);
//! definition files use only the JSON-compatible subset, and anything
//! outside it is rejected here.

use serde_json::Value;
use thiserror::Error;

/// Error while turning YAML text into a JSON value tree.
#[derive(Error, Debug)]
pub enum DocumentError {
    /// The text is not well-formed YAML.
    #[error("{0}")]
    Syntax(#[from] serde_yaml::Error),

    /// The YAML is well-formed but has no JSON equivalent.
    #[error("{0}")]
    Unrepresentable(String),
}

/// Parse YAML text into a JSON value tree.
///
/// An empty document yields `Value::Null`, which then fails schema
/// validation at the top-level element.
///
/// # Errors
///
/// Returns [`DocumentError::Syntax`] for malformed YAML and
/// [`DocumentError::Unrepresentable`] for YAML constructs without a JSON
/// counterpart.
pub fn parse_document(content: &str) -> Result<Value, DocumentError> {
    let yaml: serde_yaml::Value = serde_yaml::from_str(content)?;
    yaml_to_json_value(&yaml).map_err(DocumentError::Unrepresentable)
}

/// Convert a `serde_yaml::Value` to a `serde_json::Value`.
///
/// Mapping keys that are numbers or booleans are stringified, since JSON
/// object keys are strings. Tags are dropped and the tagged value kept.
/// Mapping order is preserved.
pub fn yaml_to_json_value(yaml: &serde_yaml::Value) -> Result<Value, String> {
    match yaml {
        serde_yaml::Value::Null => Ok(Value::Null),
        serde_yaml::Value::Bool(b) => Ok(Value::Bool(*b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Number(serde_json::Number::from(i)))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::Number(serde_json::Number::from(u)))
            } else if let Some(f) = n.as_f64() {
                serde_json::Number::from_f64(f)
                    .map(Value::Number)
                    .ok_or_else(|| format!("cannot represent float {f} in JSON"))
            } else {
                Err(format!("unsupported YAML number: {n:?}"))
            }
        }
        serde_yaml::Value::String(s) => Ok(Value::String(s.clone())),
        serde_yaml::Value::Sequence(seq) => seq
            .iter()
            .map(yaml_to_json_value)
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(map) => {
            let mut json_map = serde_json::Map::with_capacity(map.len());
            for (k, v) in map {
                let key = match k {
                    serde_yaml::Value::String(s) => s.clone(),
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    other => return Err(format!("unsupported YAML mapping key: {other:?}")),
                };
                json_map.insert(key, yaml_to_json_value(v)?);
            }
            Ok(Value::Object(json_map))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json_value(&tagged.value),
    }
}
