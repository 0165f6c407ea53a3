//! Process-wide configuration.
//!
//! Built once at startup and shared read-only; request handling never reads
//! the environment itself.

use reqwest::header::HeaderValue;
use reqwest::Url;

use crate::error::{McpError, Result};

/// Default upstream API base URL.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000/cubejs-api/v1";

/// Path marker separating the server root from the REST API prefix.
const API_PATH_MARKER: &str = "/cubejs-api";

/// Upstream connection settings.
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    token: Option<String>,
    auth_header: Option<HeaderValue>,
}

impl Config {
    /// Create a configuration, validating that the base URL has a scheme and host.
    ///
    /// An empty or blank token means no `Authorization` header is sent. A token
    /// that cannot be sent as a header value is rejected here.
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Result<Self> {
        let base_url = base_url.into().trim().to_string();
        let parsed = Url::parse(&base_url)
            .map_err(|e| McpError::Config(format!("base URL '{}': {}", base_url, e)))?;
        if !parsed.has_host() {
            return Err(McpError::Config(format!("base URL '{}' has no host", base_url)));
        }

        let token = token.filter(|t| !t.trim().is_empty());
        let auth_header = token
            .as_deref()
            .map(|t| {
                HeaderValue::from_str(t).map(|mut value| {
                    value.set_sensitive(true);
                    value
                })
            })
            .transpose()
            .map_err(|e| McpError::Config(format!("API token is not a valid header value: {}", e)))?;

        Ok(Self {
            base_url,
            token,
            auth_header,
        })
    }

    /// The configured API base URL, as given.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The authentication token, if any.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The `Authorization` header value, if a token is configured.
    pub fn auth_header(&self) -> Option<&HeaderValue> {
        self.auth_header.as_ref()
    }

    /// Join the base URL and a relative endpoint with exactly one slash.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }

    /// The server root: the base URL with the API prefix and everything after it removed.
    pub fn root_url(&self) -> &str {
        let root = match self.base_url.find(API_PATH_MARKER) {
            Some(idx) => &self.base_url[..idx],
            None => &self.base_url,
        };
        root.trim_end_matches('/')
    }

    /// The liveness endpoint, which lives outside the API prefix.
    pub fn health_url(&self) -> String {
        format!("{}/readyz", self.root_url())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            token: None,
            auth_header: None,
        }
    }
}
