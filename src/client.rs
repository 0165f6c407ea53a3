//! Request executor for the upstream Cube.js REST API.
//!
//! Every call builds its own HTTP client, so no connection outlives the call
//! that opened it. Upstream application errors (non-2xx with a JSON object
//! body) come back as [`CallResult::NormalizedError`]; transport failures and
//! unreadable bodies are [`McpError::RequestFailed`].

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::redirect::Policy;
use reqwest::{Method, StatusCode};
use serde_json::{Map, Value as JsonValue};
use tracing::{debug, warn};

use crate::config::Config;
use crate::convert::query_pairs;
use crate::error::{McpError, Result};

/// Timeout for API calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for the liveness probe.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(5);

/// The concrete shape of one upstream HTTP call.
#[derive(Debug, Clone, PartialEq)]
pub struct CallSpec {
    /// HTTP method.
    pub method: Method,
    /// Endpoint relative to the API base URL.
    pub endpoint: String,
    /// Query string parameters.
    pub query: Option<Map<String, JsonValue>>,
    /// JSON request body.
    pub body: Option<JsonValue>,
}

impl CallSpec {
    /// A call with no query parameters and no body.
    pub fn new(method: Method, endpoint: impl Into<String>) -> Self {
        Self {
            method,
            endpoint: endpoint.into(),
            query: None,
            body: None,
        }
    }

    /// Attach query string parameters.
    pub fn with_query(mut self, query: Map<String, JsonValue>) -> Self {
        self.query = Some(query);
        self
    }

    /// Attach a JSON body.
    pub fn with_body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// Outcome of a completed upstream call.
#[derive(Debug, Clone, PartialEq)]
pub enum CallResult {
    /// The upstream payload of a 2xx response.
    Success(JsonValue),
    /// The `error` value of a non-2xx response.
    NormalizedError(JsonValue),
}

impl CallResult {
    /// Collapse into the JSON value handed back to callers.
    pub fn into_json(self) -> JsonValue {
        match self {
            CallResult::Success(payload) => payload,
            CallResult::NormalizedError(error) => serde_json::json!({ "error": error }),
        }
    }
}

/// Result of probing the upstream `readyz` endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    /// The probe returned 200.
    Ok,
    /// The probe returned another status code.
    Unhealthy(u16),
    /// The probe never got a response.
    Unreachable(String),
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HealthStatus::Ok => write!(f, "OK"),
            HealthStatus::Unhealthy(code) => write!(f, "Unhealthy: {}", code),
            HealthStatus::Unreachable(cause) => write!(f, "Unreachable: {}", cause),
        }
    }
}

/// Executes calls against the configured upstream API.
#[derive(Debug, Clone)]
pub struct CubeClient {
    config: Arc<Config>,
}

impl CubeClient {
    /// Create an executor for the given configuration.
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    fn headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(value) = self.config.auth_header() {
            headers.insert(AUTHORIZATION, value.clone());
        }
        headers
    }

    /// Perform one call and normalize its outcome.
    pub async fn execute(&self, spec: &CallSpec) -> Result<CallResult> {
        let url = self.config.endpoint_url(&spec.endpoint);
        debug!(method = %spec.method, url = %url, "upstream request");

        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .redirect(Policy::none())
            .build()
            .map_err(transport_failure)?;

        let mut request = client.request(spec.method.clone(), &url).headers(self.headers());
        if let Some(query) = &spec.query {
            request = request.query(&query_pairs(query));
        }
        if let Some(body) = &spec.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(method = %spec.method, url = %url, error = %error_chain(&e), "upstream unreachable");
            transport_failure(e)
        })?;
        let status = response.status();

        if status.is_success() {
            let bytes = response.bytes().await.map_err(transport_failure)?;
            let payload = serde_json::from_slice(&bytes).map_err(|e| {
                McpError::RequestFailed(format!("Request failed: invalid JSON in response: {}", e))
            })?;
            return Ok(CallResult::Success(payload));
        }

        let body = response.text().await.map_err(transport_failure)?;
        normalize_error(status, &url, &body)
    }

    /// Probe the server root's `readyz` endpoint. Never fails.
    pub async fn check_health(&self) -> HealthStatus {
        let url = self.config.health_url();
        debug!(url = %url, "health probe");

        let client = match reqwest::Client::builder()
            .timeout(HEALTH_TIMEOUT)
            .redirect(Policy::none())
            .build()
        {
            Ok(client) => client,
            Err(e) => return HealthStatus::Unreachable(error_chain(&e)),
        };

        match client.get(&url).send().await {
            Ok(response) if response.status() == StatusCode::OK => HealthStatus::Ok,
            Ok(response) => HealthStatus::Unhealthy(response.status().as_u16()),
            Err(e) => HealthStatus::Unreachable(error_chain(&e)),
        }
    }
}

/// Map a non-2xx response body onto a result.
fn normalize_error(status: StatusCode, url: &str, body: &str) -> Result<CallResult> {
    match serde_json::from_str::<JsonValue>(body) {
        Ok(JsonValue::Object(mut obj)) => {
            let error = obj.remove("error").unwrap_or_else(|| {
                JsonValue::String(format!("HTTP {} for url '{}'", status, url))
            });
            warn!(status = status.as_u16(), url = %url, "upstream returned an error");
            Ok(CallResult::NormalizedError(error))
        }
        _ => Err(McpError::RequestFailed(format!(
            "API request failed: HTTP {} for url '{}': {}",
            status,
            url,
            body.trim()
        ))),
    }
}

fn transport_failure(err: reqwest::Error) -> McpError {
    McpError::RequestFailed(format!("Request failed: {}", error_chain(&err)))
}

/// Render an error with its full source chain.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
