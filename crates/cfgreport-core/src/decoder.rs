//! Source text → [`ConfigValue`].
//!
//! YAML is the primary source format and goes through `serde_yaml`; JSON goes
//! through `serde_json` (built with `preserve_order`, so object key order
//! survives). Both decoders walk the parser's own value tree once and build
//! the cfgreport tree from it.
//!
//! # Scalar typing
//!
//! Typing follows `serde_yaml`'s YAML 1.2 core schema: `1.2.3` is a string,
//! `1.2` is a float, `8080` is an integer, `"8080"` is a string, `yes` is a
//! string. The validator's rules rely on these decisions.

use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::value::{ConfigValue, Mapping};
use serde::{Deserialize, Serialize};

/// Supported source formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFormat {
    #[default]
    Yaml,
    Json,
}

impl SourceFormat {
    /// Pick a format from a file extension: `.json` is JSON, everything else
    /// (including no extension) is YAML.
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        match path.as_ref().extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SourceFormat::Json,
            _ => SourceFormat::Yaml,
        }
    }
}

/// Decode `text` in the given format.
pub fn decode(text: &str, format: SourceFormat) -> Result<ConfigValue> {
    match format {
        SourceFormat::Yaml => decode_yaml(text),
        SourceFormat::Json => decode_json(text),
    }
}

/// Decode a YAML document.
///
/// An empty document (or one holding only `~`) decodes as an empty mapping,
/// so an empty config file produces an empty report rather than an error.
///
/// Merge keys (`<<: *defaults`) are resolved before conversion: the merged
/// fields land in the mapping itself, and keys written explicitly win.
pub fn decode_yaml(text: &str) -> Result<ConfigValue> {
    let mut raw: serde_yaml::Value = serde_yaml::from_str(text)?;
    raw.apply_merge()?;
    if raw.is_null() {
        tracing::debug!("empty YAML document, using empty mapping");
        return Ok(ConfigValue::Mapping(Mapping::new()));
    }
    from_yaml(raw)
}

/// Decode a JSON document.
pub fn decode_json(text: &str) -> Result<ConfigValue> {
    let raw: serde_json::Value = serde_json::from_str(text)?;
    Ok(from_json(raw))
}

fn from_yaml(raw: serde_yaml::Value) -> Result<ConfigValue> {
    Ok(match raw {
        serde_yaml::Value::Null => ConfigValue::Null,
        serde_yaml::Value::Bool(b) => ConfigValue::Bool(b),
        serde_yaml::Value::Number(n) => yaml_number(&n),
        serde_yaml::Value::String(s) => ConfigValue::String(s),
        serde_yaml::Value::Sequence(items) => ConfigValue::Sequence(
            items
                .into_iter()
                .map(from_yaml)
                .collect::<Result<Vec<_>>>()?,
        ),
        serde_yaml::Value::Mapping(map) => {
            let mut out = Mapping::new();
            for (key, value) in map {
                out.insert(yaml_key(key)?, from_yaml(value)?);
            }
            ConfigValue::Mapping(out)
        }
        // Tags (`!secret foo`) carry no meaning for reports; keep the value.
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value)?,
    })
}

fn yaml_number(n: &serde_yaml::Number) -> ConfigValue {
    if let Some(i) = n.as_i64() {
        return ConfigValue::Integer(i);
    }
    if let Some(u) = n.as_u64() {
        tracing::debug!(value = u, "integer exceeds i64 range, stored as float");
        return ConfigValue::Float(u as f64);
    }
    ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN))
}

/// Mapping keys must be scalars; they are stored as their text form.
fn yaml_key(key: serde_yaml::Value) -> Result<String> {
    match key {
        serde_yaml::Value::String(s) => Ok(s),
        serde_yaml::Value::Bool(b) => Ok(b.to_string()),
        serde_yaml::Value::Number(n) => Ok(n.to_string()),
        serde_yaml::Value::Null => Ok("null".to_string()),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        serde_yaml::Value::Sequence(_) | serde_yaml::Value::Mapping(_) => Err(ConfigError::Decode(
            "mapping keys must be scalars, found a sequence or mapping key".to_string(),
        )),
    }
}

fn from_json(raw: serde_json::Value) -> ConfigValue {
    match raw {
        serde_json::Value::Null => ConfigValue::Null,
        serde_json::Value::Bool(b) => ConfigValue::Bool(b),
        serde_json::Value::Number(n) => match n.as_i64() {
            Some(i) => ConfigValue::Integer(i),
            None => ConfigValue::Float(n.as_f64().unwrap_or(f64::NAN)),
        },
        serde_json::Value::String(s) => ConfigValue::String(s),
        serde_json::Value::Array(items) => {
            ConfigValue::Sequence(items.into_iter().map(from_json).collect())
        }
        serde_json::Value::Object(map) => ConfigValue::Mapping(
            map.into_iter()
                .map(|(k, v)| (k, from_json(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_from_extension() {
        assert_eq!(SourceFormat::from_path("config.json"), SourceFormat::Json);
        assert_eq!(SourceFormat::from_path("config.JSON"), SourceFormat::Json);
        assert_eq!(SourceFormat::from_path("config.yaml"), SourceFormat::Yaml);
        assert_eq!(SourceFormat::from_path("config"), SourceFormat::Yaml);
    }

    #[test]
    fn non_scalar_key_is_rejected() {
        let err = decode_yaml("? [a, b]\n: 1\n").unwrap_err();
        assert!(matches!(err, ConfigError::Decode(_)), "got {err:?}");
    }
}
