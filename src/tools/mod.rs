//! Tool registry and dispatch.
//!
//! Standard tools come from the declarative table in [`catalog`]; `raw_request`
//! and `check_health` are the two hand-written entries.

pub mod catalog;
pub mod health;
pub mod raw;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::client::{CallResult, CubeClient, HealthStatus};
use crate::error::{McpError, Result};

/// A tool definition for the MCP tools/list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolDef {
    /// Tool name (e.g., "execute_query")
    pub name: String,
    /// Tool description
    pub description: String,
    /// JSON Schema for the input parameters
    #[serde(rename = "inputSchema")]
    pub input_schema: JsonValue,
}

impl ToolDef {
    /// Create a new tool definition.
    pub fn new(name: &str, description: &str, input_schema: JsonValue) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            input_schema,
        }
    }
}

/// What a tool hands back to the caller.
#[derive(Debug, Clone, PartialEq)]
pub enum ToolOutput {
    /// Result of an upstream API call.
    Call(CallResult),
    /// Plain status line from the health probe.
    Health(HealthStatus),
}

impl ToolOutput {
    /// Text content for the MCP response: compact JSON, or the status line.
    pub fn to_text(&self) -> String {
        match self {
            ToolOutput::Call(result) => {
                serde_json::to_string(&result.clone().into_json()).unwrap_or_else(|_| "null".to_string())
            }
            ToolOutput::Health(status) => status.to_string(),
        }
    }
}

/// Registry of all available tools.
pub struct ToolRegistry {
    tools: Vec<ToolDef>,
}

impl ToolRegistry {
    /// Create a new registry with all tools registered.
    pub fn new() -> Self {
        let mut tools = Vec::new();

        tools.extend(catalog::tools());
        tools.extend(health::tools());
        tools.extend(raw::tools());

        Self { tools }
    }

    /// Get all tool definitions.
    pub fn tools(&self) -> &[ToolDef] {
        &self.tools
    }

    /// Dispatch a tool call to the appropriate handler.
    pub async fn dispatch(
        &self,
        client: &CubeClient,
        name: &str,
        args: Map<String, JsonValue>,
    ) -> Result<ToolOutput> {
        if let Some(op) = catalog::find(name) {
            let spec = op.call_spec(&args)?;
            return client.execute(&spec).await.map(ToolOutput::Call);
        }

        match name {
            health::CHECK_HEALTH => Ok(ToolOutput::Health(client.check_health().await)),
            raw::RAW_REQUEST => {
                let spec = raw::call_spec(&args)?;
                client.execute(&spec).await.map(ToolOutput::Call)
            }
            _ => Err(McpError::UnknownTool(name.to_string())),
        }
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper macro for creating JSON Schema for tool input parameters.
#[macro_export]
macro_rules! schema {
    // Object with required and optional properties
    (object {
        required: { $($req_name:literal : $req_type:tt),* $(,)? },
        optional: { $($opt_name:literal : $opt_type:tt),* $(,)? }
    }) => {{
        let mut required: Vec<&str> = Vec::new();
        $(required.push($req_name);)*

        let mut props = serde_json::Map::new();
        $(props.insert($req_name.to_string(), schema!(@type $req_type));)*
        $(props.insert($opt_name.to_string(), schema!(@type $opt_type));)*

        serde_json::json!({
            "type": "object",
            "properties": props,
            "required": required
        })
    }};

    // Object with only required properties
    (object {
        required: { $($req_name:literal : $req_type:tt),* $(,)? }
    }) => {{
        let mut required: Vec<&str> = Vec::new();
        $(required.push($req_name);)*

        let mut props = serde_json::Map::new();
        $(props.insert($req_name.to_string(), schema!(@type $req_type));)*

        serde_json::json!({
            "type": "object",
            "properties": props,
            "required": required
        })
    }};

    // Empty object (no parameters)
    (object {}) => {{
        serde_json::json!({
            "type": "object",
            "properties": {},
            "required": []
        })
    }};

    // Type mappings
    (@type string) => { serde_json::json!({"type": "string"}) };
    (@type object) => { serde_json::json!({"type": "object"}) };
    (@type object_or_null) => { serde_json::json!({"type": ["object", "null"]}) };
}
