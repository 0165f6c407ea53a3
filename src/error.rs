//! Error types for the MCP server.
//!
//! Upstream application errors never reach this type: they are returned as
//! data (see [`crate::client::CallResult`]). Everything here is either a
//! caller mistake or a failed request.

use serde::{Deserialize, Serialize};

/// MCP server errors.
#[derive(Debug, Clone, thiserror::Error, Serialize, Deserialize)]
pub enum McpError {
    /// The upstream call could not be completed or its error body was unreadable.
    #[error("{0}")]
    RequestFailed(String),

    /// Unknown tool requested.
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    /// Unknown resource URI requested.
    #[error("unknown resource: {0}")]
    UnknownResource(String),

    /// Missing required argument.
    #[error("missing required argument: {0}")]
    MissingArg(String),

    /// Invalid argument value.
    #[error("invalid argument '{name}': {reason}")]
    InvalidArg {
        /// Argument name
        name: String,
        /// Reason why it's invalid
        reason: String,
    },

    /// Invalid process configuration.
    #[error("invalid configuration: {0}")]
    Config(String),

    /// JSON-RPC protocol error.
    #[error("protocol error: {0}")]
    Protocol(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<std::io::Error> for McpError {
    fn from(err: std::io::Error) -> Self {
        McpError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for McpError {
    fn from(err: serde_json::Error) -> Self {
        McpError::Protocol(format!("JSON error: {}", err))
    }
}

/// JSON-RPC error codes.
pub mod rpc_codes {
    /// Parse error - Invalid JSON was received.
    pub const PARSE_ERROR: i32 = -32700;
    /// Invalid Request - The JSON sent is not a valid Request object.
    pub const INVALID_REQUEST: i32 = -32600;
    /// Method not found - The method does not exist / is not available.
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid params - Invalid method parameter(s).
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal error - Internal JSON-RPC error.
    pub const INTERNAL_ERROR: i32 = -32603;
    /// Resource not found (MCP extension range).
    pub const RESOURCE_NOT_FOUND: i32 = -32002;
}

impl McpError {
    /// Convert to JSON-RPC error code.
    pub fn rpc_code(&self) -> i32 {
        match self {
            McpError::UnknownTool(_) => rpc_codes::METHOD_NOT_FOUND,
            McpError::UnknownResource(_) => rpc_codes::RESOURCE_NOT_FOUND,
            McpError::MissingArg(_) | McpError::InvalidArg { .. } => rpc_codes::INVALID_PARAMS,
            McpError::Protocol(_) => rpc_codes::INVALID_REQUEST,
            _ => rpc_codes::INTERNAL_ERROR,
        }
    }

    /// Whether the failure belongs in a tool result (`isError: true`) rather
    /// than a JSON-RPC error: the tool ran, the upstream call did not succeed.
    pub fn is_tool_failure(&self) -> bool {
        matches!(self, McpError::RequestFailed(_))
    }
}

/// Result type for MCP operations.
pub type Result<T> = std::result::Result<T, McpError>;
