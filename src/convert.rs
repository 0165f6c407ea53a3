//! Conversion utilities between tool arguments and HTTP request parts.
//!
//! Provides argument extraction helpers for tool dispatch and the flattening
//! of JSON query parameters into URL query pairs.

use serde_json::{Map, Value as JsonValue};

use crate::error::{McpError, Result};

/// Flatten a JSON object into URL query pairs.
///
/// Strings are sent verbatim, numbers and booleans as their JSON text, `null` as
/// an empty value, arrays as repeated keys and objects as compact JSON.
pub fn query_pairs(params: &Map<String, JsonValue>) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            JsonValue::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), query_value(item)));
                }
            }
            other => pairs.push((key.clone(), query_value(other))),
        }
    }
    pairs
}

fn query_value(value: &JsonValue) -> String {
    match value {
        JsonValue::Null => String::new(),
        JsonValue::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Helper to get a required string argument from JSON arguments.
pub fn get_string_arg(args: &Map<String, JsonValue>, name: &str) -> Result<String> {
    args.get(name)
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
        .ok_or_else(|| McpError::MissingArg(name.to_string()))
}

/// Helper to get a required object argument (a query or payload).
pub fn get_object_arg(args: &Map<String, JsonValue>, name: &str) -> Result<Map<String, JsonValue>> {
    match args.get(name) {
        Some(JsonValue::Object(obj)) => Ok(obj.clone()),
        None | Some(JsonValue::Null) => Err(McpError::MissingArg(name.to_string())),
        Some(_) => Err(McpError::InvalidArg {
            name: name.to_string(),
            reason: "Expected a JSON object".to_string(),
        }),
    }
}

/// Helper to get an optional object argument. `null` counts as absent.
pub fn get_optional_object(
    args: &Map<String, JsonValue>,
    name: &str,
) -> Result<Option<Map<String, JsonValue>>> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Ok(None),
        Some(JsonValue::Object(obj)) => Ok(Some(obj.clone())),
        Some(_) => Err(McpError::InvalidArg {
            name: name.to_string(),
            reason: "Expected a JSON object or null".to_string(),
        }),
    }
}
