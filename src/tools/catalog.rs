//! Declarative table of the standard Cube.js API tools.
//!
//! Tools: list_cubes, execute_query, execute_query_post, get_sql, get_schema,
//!        refresh, refresh_pre_aggregations, scheduled_refresh

use reqwest::Method;
use serde_json::{Map, Value as JsonValue};

use crate::client::CallSpec;
use crate::convert::get_object_arg;
use crate::error::Result;
use crate::schema;
use crate::tools::ToolDef;

/// HTTP verb of a table entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    /// GET
    Get,
    /// POST
    Post,
}

impl Verb {
    fn method(self) -> Method {
        match self {
            Verb::Get => Method::GET,
            Verb::Post => Method::POST,
        }
    }
}

/// How a tool's argument becomes part of the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgShape {
    /// No arguments.
    None,
    /// Object argument serialized to JSON text in a `query` parameter.
    QueryParam(&'static str),
    /// Object argument sent as `{"query": <object>}`.
    WrappedBody(&'static str),
    /// Object argument sent verbatim as the body.
    VerbatimBody(&'static str),
}

/// One standard tool: a fixed method and endpoint plus an argument shape.
#[derive(Debug, Clone, Copy)]
pub struct Operation {
    /// Tool name.
    pub name: &'static str,
    /// Tool description.
    pub description: &'static str,
    /// HTTP verb.
    pub verb: Verb,
    /// Endpoint relative to the API base URL.
    pub endpoint: &'static str,
    /// Argument handling.
    pub args: ArgShape,
}

/// The standard tools.
pub const OPERATIONS: &[Operation] = &[
    Operation {
        name: "list_cubes",
        description: "Retrieve the list of available cubes, including their measures, dimensions \
                      and segments. Returns the full metadata object from Cube.js.",
        verb: Verb::Get,
        endpoint: "meta",
        args: ArgShape::None,
    },
    Operation {
        name: "execute_query",
        description: "Execute a query against the Cube.js API and return the results. The query \
                      is a Cube.js query object, e.g. {\"measures\": [\"Stories.count\"], \
                      \"dimensions\": [\"Stories.category\"]}.",
        verb: Verb::Get,
        endpoint: "load",
        args: ArgShape::QueryParam("query"),
    },
    Operation {
        name: "execute_query_post",
        description: "Execute a query against the Cube.js API using POST. Recommended for large \
                      or complex query objects.",
        verb: Verb::Post,
        endpoint: "load",
        args: ArgShape::WrappedBody("query"),
    },
    Operation {
        name: "get_sql",
        description: "Return the SQL generated for a query without executing it.",
        verb: Verb::Get,
        endpoint: "sql",
        args: ArgShape::QueryParam("query"),
    },
    Operation {
        name: "get_schema",
        description: "Get the schema representation from Cube.js (GET /schema).",
        verb: Verb::Get,
        endpoint: "schema",
        args: ArgShape::None,
    },
    Operation {
        name: "refresh",
        description: "Trigger a refresh for the given query (POST /refresh).",
        verb: Verb::Post,
        endpoint: "refresh",
        args: ArgShape::WrappedBody("query"),
    },
    Operation {
        name: "refresh_pre_aggregations",
        description: "Refresh pre-aggregations (POST /pre-aggregations/refresh). The payload is \
                      sent as the request body unchanged.",
        verb: Verb::Post,
        endpoint: "pre-aggregations/refresh",
        args: ArgShape::VerbatimBody("payload"),
    },
    Operation {
        name: "scheduled_refresh",
        description: "Trigger a scheduled refresh (POST /refresh/schedule). The schedule is sent \
                      as the request body unchanged.",
        verb: Verb::Post,
        endpoint: "refresh/schedule",
        args: ArgShape::VerbatimBody("schedule"),
    },
];

/// Look up a standard tool by name.
pub fn find(name: &str) -> Option<&'static Operation> {
    OPERATIONS.iter().find(|op| op.name == name)
}

/// Get all standard tool definitions.
pub fn tools() -> Vec<ToolDef> {
    OPERATIONS
        .iter()
        .map(|op| ToolDef::new(op.name, op.description, op.input_schema()))
        .collect()
}

impl Operation {
    /// Input schema derived from the argument shape.
    pub fn input_schema(&self) -> JsonValue {
        match self.args {
            ArgShape::None => schema!(object {}),
            ArgShape::QueryParam(arg) | ArgShape::WrappedBody(arg) | ArgShape::VerbatimBody(arg) => {
                let mut props = Map::new();
                props.insert(arg.to_string(), schema!(@type object));
                serde_json::json!({
                    "type": "object",
                    "properties": props,
                    "required": [arg]
                })
            }
        }
    }

    /// Build the HTTP call for an invocation of this tool.
    pub fn call_spec(&self, args: &Map<String, JsonValue>) -> Result<CallSpec> {
        let spec = CallSpec::new(self.verb.method(), self.endpoint);
        match self.args {
            ArgShape::None => Ok(spec),
            ArgShape::QueryParam(arg) => {
                let query = get_object_arg(args, arg)?;
                let mut params = Map::new();
                params.insert(
                    "query".to_string(),
                    JsonValue::String(JsonValue::Object(query).to_string()),
                );
                Ok(spec.with_query(params))
            }
            ArgShape::WrappedBody(arg) => {
                let query = get_object_arg(args, arg)?;
                Ok(spec.with_body(serde_json::json!({ "query": query })))
            }
            ArgShape::VerbatimBody(arg) => {
                let payload = get_object_arg(args, arg)?;
                Ok(spec.with_body(JsonValue::Object(payload)))
            }
        }
    }
}
