//! Generic request tool for endpoints without a dedicated entry.
//!
//! Tools: raw_request

use reqwest::Method;
use serde_json::{Map, Value as JsonValue};

use crate::client::CallSpec;
use crate::convert::{get_optional_object, get_string_arg};
use crate::error::{McpError, Result};
use crate::schema;
use crate::tools::ToolDef;

/// Tool name of the generic request tool.
pub const RAW_REQUEST: &str = "raw_request";

/// Get the raw request tool definition.
pub fn tools() -> Vec<ToolDef> {
    vec![ToolDef::new(
        RAW_REQUEST,
        "Call an arbitrary Cube.js REST endpoint. 'method' is the HTTP method (GET, POST, PUT, \
         DELETE), 'endpoint' is relative to the API base (e.g. \"meta\", \"load\"), 'params' \
         are query string parameters and 'json_data' is the JSON body.",
        schema!(object {
            required: { "method": string, "endpoint": string },
            optional: { "params": object_or_null, "json_data": object_or_null }
        }),
    )]
}

/// Build the call from explicit method, endpoint, params and body.
pub fn call_spec(args: &Map<String, JsonValue>) -> Result<CallSpec> {
    let method_name = get_string_arg(args, "method")?.to_uppercase();
    let method = Method::from_bytes(method_name.as_bytes()).map_err(|_| McpError::InvalidArg {
        name: "method".to_string(),
        reason: format!("'{}' is not a valid HTTP method", method_name),
    })?;
    let endpoint = get_string_arg(args, "endpoint")?;

    let mut spec = CallSpec::new(method, endpoint);
    if let Some(params) = get_optional_object(args, "params")? {
        spec = spec.with_query(params);
    }
    if let Some(body) = get_optional_object(args, "json_data")? {
        spec = spec.with_body(JsonValue::Object(body));
    }
    Ok(spec)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::catalog;
    use serde_json::json;

    fn args(value: JsonValue) -> Map<String, JsonValue> {
        match value {
            JsonValue::Object(m) => m,
            _ => Map::new(),
        }
    }

    #[test]
    fn test_lowercase_get_meta_matches_list_cubes() {
        let raw = call_spec(&args(json!({"method": "get", "endpoint": "meta"}))).unwrap();
        let named = catalog::find("list_cubes").unwrap().call_spec(&Map::new()).unwrap();
        assert_eq!(raw, named);
    }

    #[test]
    fn test_params_and_body_forwarded() {
        let spec = call_spec(&args(json!({
            "method": "Post",
            "endpoint": "/load",
            "params": {"queryType": "multi"},
            "json_data": {"query": {"measures": ["Orders.count"]}}
        })))
        .unwrap();
        assert_eq!(spec.method, Method::POST);
        assert_eq!(spec.endpoint, "/load");
        assert_eq!(spec.query.unwrap()["queryType"], "multi");
        assert_eq!(spec.body, Some(json!({"query": {"measures": ["Orders.count"]}})));
    }

    #[test]
    fn test_null_params_ignored() {
        let spec = call_spec(&args(json!({
            "method": "delete",
            "endpoint": "cache",
            "params": null,
            "json_data": null
        })))
        .unwrap();
        assert_eq!(spec, CallSpec::new(Method::DELETE, "cache"));
    }

    #[test]
    fn test_invalid_method_rejected() {
        let err = call_spec(&args(json!({"method": "GE T", "endpoint": "meta"}))).unwrap_err();
        assert!(matches!(err, McpError::InvalidArg { ref name, .. } if name == "method"));
    }

    #[test]
    fn test_missing_endpoint_rejected() {
        let err = call_spec(&args(json!({"method": "GET"}))).unwrap_err();
        assert!(matches!(err, McpError::MissingArg(ref name) if name == "endpoint"));
    }
}
