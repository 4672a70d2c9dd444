//! YAML parsing
//!
//! Produces the top-level mapping of a calibration document.

use contracts::{ConfigError, Result};
use serde_yaml::{Mapping, Value};

/// Parse YAML content into its top-level mapping.
///
/// An empty document (or one that is only `null`) yields an empty mapping.
/// Merge keys (`<<`) are resolved into their enclosing mappings.
pub fn parse_yaml(content: &str) -> Result<Mapping> {
    if content.trim().is_empty() {
        return Ok(Mapping::new());
    }

    let mut value: Value = serde_yaml::from_str(content).map_err(|e| ConfigError::Parse {
        message: format!("YAML parse error: {e}"),
        source: Some(Box::new(e)),
    })?;

    // `<<: *anchor` stays a literal key until merged
    value.apply_merge().map_err(|e| ConfigError::Parse {
        message: format!("YAML merge key error: {e}"),
        source: Some(Box::new(e)),
    })?;

    match value {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(ConfigError::parse(format!(
            "top-level YAML must be a mapping, got {}",
            value_kind(&other)
        ))),
    }
}

/// Short name of a YAML value's kind, for error messages
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
