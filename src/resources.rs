//! Read-only MCP resources.
//!
//! Only `cube://meta` exists: the metadata listing, pretty-printed.

use serde::{Deserialize, Serialize};

use crate::client::{CallSpec, CubeClient};
use crate::error::{McpError, Result};

/// URI of the metadata resource.
pub const META_URI: &str = "cube://meta";

/// A resource definition for the MCP resources/list response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourceDef {
    /// Resource URI
    pub uri: String,
    /// Human-readable name
    pub name: String,
    /// Resource description
    pub description: String,
    /// MIME type of the contents
    #[serde(rename = "mimeType")]
    pub mime_type: String,
}

/// Get all resource definitions.
pub fn resources() -> Vec<ResourceDef> {
    vec![ResourceDef {
        uri: META_URI.to_string(),
        name: "Cube.js metadata".to_string(),
        description: "Full metadata of the Cube.js schema: cubes, measures, dimensions and segments."
            .to_string(),
        mime_type: "application/json".to_string(),
    }]
}

/// Read a resource, returning its text contents.
pub async fn read(client: &CubeClient, uri: &str) -> Result<String> {
    match uri {
        META_URI => {
            let spec = CallSpec::new(reqwest::Method::GET, "meta");
            let data = client.execute(&spec).await?.into_json();
            Ok(serde_json::to_string_pretty(&data)?)
        }
        _ => Err(McpError::UnknownResource(uri.to_string())),
    }
}
