//! MCP server for the Cube.js REST API.
//!
//! Run with `cube-mcp`, configured through `CUBEJS_API_BASE_URL` and `CUBEJS_API_TOKEN`.

use std::sync::Arc;

use clap::Parser;
use cube_mcp::{Config, CubeClient, McpServer, DEFAULT_BASE_URL};
use tracing_subscriber::EnvFilter;

/// MCP server for the Cube.js REST API.
///
/// Exposes Cube.js API calls as MCP tools for AI agents.
/// Communicates via JSON-RPC 2.0 over stdin/stdout.
#[derive(Parser)]
#[command(name = "cube-mcp")]
#[command(version, about, long_about = None)]
struct Args {
    /// Base URL of the Cube.js REST API.
    #[arg(long, value_name = "URL", env = "CUBEJS_API_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// API token, sent verbatim in the Authorization header.
    /// Leave empty to send no Authorization header.
    #[arg(long, env = "CUBEJS_API_TOKEN", default_value = "", hide_env_values = true)]
    token: String,

    /// Enable debug logging to stderr.
    #[arg(long, short)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Logs go to stderr; stdout carries the protocol.
    let level = if args.verbose { "cube_mcp=debug" } else { "cube_mcp=warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .init();

    let config = match Config::new(args.base_url, Some(args.token)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    tracing::info!(
        base_url = config.base_url(),
        auth = config.token().is_some(),
        "starting cube-mcp"
    );

    let server = McpServer::new(CubeClient::new(Arc::new(config)));

    if let Err(e) = server.run().await {
        eprintln!("Error: Server error: {}", e);
        std::process::exit(1);
    }
}
