//! # cube-mcp
//!
//! MCP (Model Context Protocol) server for the Cube.js REST API.
//!
//! This crate exposes Cube.js API calls as tools for AI agents. It implements the
//! MCP protocol over stdin/stdout using JSON-RPC 2.0 and forwards each tool call
//! as one HTTP request to the configured upstream.
//!
//! ## Features
//!
//! - **10 tools**: metadata, query (GET and POST), SQL, schema, refreshes, a
//!   health probe and a generic `raw_request` for any other endpoint
//! - **Uniform results**: upstream application errors come back as `{"error": ...}`
//! - **`cube://meta` resource** with the pretty-printed metadata listing
//!
//! ## Usage
//!
//! ```json
//! {
//!   "mcpServers": {
//!     "cubejs": {
//!       "command": "/path/to/cube-mcp",
//!       "env": {
//!         "CUBEJS_API_BASE_URL": "http://localhost:4000/cubejs-api/v1",
//!         "CUBEJS_API_TOKEN": "<token>"
//!       }
//!     }
//!   }
//! }
//! ```
//!
//! ## Library Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use cube_mcp::{Config, CubeClient, ToolRegistry};
//!
//! # async fn demo() -> cube_mcp::Result<()> {
//! let config = Config::new("http://localhost:4000/cubejs-api/v1", None)?;
//! let client = CubeClient::new(Arc::new(config));
//! let registry = ToolRegistry::new();
//!
//! let output = registry.dispatch(&client, "list_cubes", Default::default()).await?;
//! println!("{}", output.to_text());
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

mod client;
mod config;
mod convert;
mod error;
mod resources;
mod server;
mod tools;

pub use client::{CallResult, CallSpec, CubeClient, HealthStatus, HEALTH_TIMEOUT, REQUEST_TIMEOUT};
pub use config::{Config, DEFAULT_BASE_URL};
pub use error::{McpError, Result};
pub use server::{JsonRpcRequest, JsonRpcResponse, McpServer};
pub use tools::{ToolDef, ToolOutput, ToolRegistry};
