//! MCP server implementation.
//!
//! Handles JSON-RPC 2.0 over stdio according to the MCP protocol specification.
//! Each request line runs on its own task; responses are written in completion order.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::client::CubeClient;
use crate::error::{rpc_codes, McpError, Result};
use crate::resources;
use crate::tools::ToolRegistry;

/// MCP protocol version we support.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// Server information.
const SERVER_NAME: &str = "cube-mcp";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

/// JSON-RPC 2.0 request.
#[derive(Debug, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    pub id: Option<JsonValue>,
    pub method: String,
    #[serde(default)]
    pub params: Option<JsonValue>,
}

/// JSON-RPC 2.0 response.
#[derive(Debug, Serialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC 2.0 error object.
#[derive(Debug, Serialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<JsonValue>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<JsonValue>, result: JsonValue) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<JsonValue>, code: i32, message: String) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message,
                data: None,
            }),
        }
    }

    /// Create an error response from an McpError.
    pub fn from_error(id: Option<JsonValue>, err: McpError) -> Self {
        Self::error(id, err.rpc_code(), err.to_string())
    }
}

/// MCP server.
pub struct McpServer {
    client: CubeClient,
    registry: ToolRegistry,
}

impl McpServer {
    /// Create a new MCP server around the given executor.
    pub fn new(client: CubeClient) -> Self {
        Self {
            client,
            registry: ToolRegistry::new(),
        }
    }

    /// Run the server, reading from stdin and writing to stdout.
    ///
    /// Returns once stdin is closed and every in-flight request has answered.
    pub async fn run(self) -> Result<()> {
        let server = Arc::new(self);
        let (tx, mut rx) = mpsc::unbounded_channel::<JsonRpcResponse>();

        let writer = tokio::spawn(async move {
            let mut stdout = tokio::io::stdout();
            while let Some(response) = rx.recv().await {
                let response_json = serde_json::to_string(&response)?;
                stdout.write_all(response_json.as_bytes()).await?;
                stdout.write_all(b"\n").await?;
                stdout.flush().await?;
            }
            Ok::<(), McpError>(())
        });

        let mut reader = BufReader::new(tokio::io::stdin());
        let mut line = String::new();

        loop {
            line.clear();
            let bytes_read = reader.read_line(&mut line).await?;

            if bytes_read == 0 {
                // EOF - client disconnected
                info!("stdin closed, shutting down");
                break;
            }

            let request = line.trim().to_string();
            if request.is_empty() {
                continue;
            }

            let server = Arc::clone(&server);
            let tx = tx.clone();
            tokio::spawn(async move {
                if let Some(response) = server.handle_line(&request).await {
                    // Receiver only goes away if the writer failed.
                    let _ = tx.send(response);
                }
            });
        }

        drop(tx);
        writer
            .await
            .map_err(|e| McpError::Internal(format!("writer task failed: {}", e)))?
    }

    /// Handle one raw request line. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        match serde_json::from_str::<JsonRpcRequest>(line) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => Some(JsonRpcResponse::error(
                None,
                rpc_codes::PARSE_ERROR,
                format!("Parse error: {}", e),
            )),
        }
    }

    /// Handle a single JSON-RPC request.
    async fn handle_request(&self, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
        // Validate JSON-RPC version
        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                request.id,
                rpc_codes::INVALID_REQUEST,
                "Invalid JSON-RPC version".to_string(),
            ));
        }

        if request.id.is_none() {
            debug!(method = %request.method, "notification");
            return None;
        }

        let response = match request.method.as_str() {
            "initialize" => self.handle_initialize(request),
            "ping" => JsonRpcResponse::success(request.id, serde_json::json!({})),
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request).await,
            "resources/list" => self.handle_resources_list(request),
            "resources/read" => self.handle_resources_read(request).await,
            _ => JsonRpcResponse::error(
                request.id,
                rpc_codes::METHOD_NOT_FOUND,
                format!("Unknown method: {}", request.method),
            ),
        };
        Some(response)
    }

    /// Handle the initialize request.
    fn handle_initialize(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        JsonRpcResponse::success(
            request.id,
            serde_json::json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": {
                    "tools": {},
                    "resources": {}
                },
                "serverInfo": {
                    "name": SERVER_NAME,
                    "version": SERVER_VERSION
                }
            }),
        )
    }

    /// Handle the tools/list request.
    fn handle_tools_list(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tools: Vec<JsonValue> = self
            .registry
            .tools()
            .iter()
            .map(|t| {
                serde_json::json!({
                    "name": t.name,
                    "description": t.description,
                    "inputSchema": t.input_schema
                })
            })
            .collect();

        JsonRpcResponse::success(request.id, serde_json::json!({ "tools": tools }))
    }

    /// Handle the tools/call request.
    async fn handle_tools_call(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let params = match &request.params {
            Some(JsonValue::Object(obj)) => obj,
            _ => {
                return JsonRpcResponse::error(
                    request.id,
                    rpc_codes::INVALID_PARAMS,
                    "Missing params object".to_string(),
                )
            }
        };

        let name = match params.get("name").and_then(|v| v.as_str()) {
            Some(n) => n.to_string(),
            None => {
                return JsonRpcResponse::error(
                    request.id,
                    rpc_codes::INVALID_PARAMS,
                    "Missing 'name' in params".to_string(),
                )
            }
        };

        let arguments = match params.get("arguments") {
            Some(JsonValue::Object(obj)) => obj.clone(),
            Some(JsonValue::Null) | None => Map::new(),
            _ => {
                return JsonRpcResponse::error(
                    request.id,
                    rpc_codes::INVALID_PARAMS,
                    "'arguments' must be an object".to_string(),
                )
            }
        };

        debug!(tool = %name, "tool call");
        match self.registry.dispatch(&self.client, &name, arguments).await {
            Ok(output) => JsonRpcResponse::success(request.id, tool_content(output.to_text(), false)),
            Err(err) if err.is_tool_failure() => {
                JsonRpcResponse::success(request.id, tool_content(err.to_string(), true))
            }
            Err(err) => JsonRpcResponse::from_error(request.id, err),
        }
    }

    /// Handle the resources/list request.
    fn handle_resources_list(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        JsonRpcResponse::success(
            request.id,
            serde_json::json!({ "resources": resources::resources() }),
        )
    }

    /// Handle the resources/read request.
    async fn handle_resources_read(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let uri = match request
            .params
            .as_ref()
            .and_then(|p| p.get("uri"))
            .and_then(|v| v.as_str())
        {
            Some(uri) => uri.to_string(),
            None => {
                return JsonRpcResponse::error(
                    request.id,
                    rpc_codes::INVALID_PARAMS,
                    "Missing 'uri' in params".to_string(),
                )
            }
        };

        match resources::read(&self.client, &uri).await {
            Ok(text) => JsonRpcResponse::success(
                request.id,
                serde_json::json!({
                    "contents": [{
                        "uri": uri,
                        "mimeType": "application/json",
                        "text": text
                    }]
                }),
            ),
            Err(err) => JsonRpcResponse::from_error(request.id, err),
        }
    }
}

/// MCP tool responses are wrapped in a content array.
fn tool_content(text: String, is_error: bool) -> JsonValue {
    serde_json::json!({
        "content": [{
            "type": "text",
            "text": text
        }],
        "isError": is_error
    })
}
