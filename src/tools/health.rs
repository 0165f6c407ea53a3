//! Liveness probe tool.
//!
//! Tools: check_health

use crate::schema;
use crate::tools::ToolDef;

/// Tool name of the liveness probe.
pub const CHECK_HEALTH: &str = "check_health";

/// Get the health tool definition.
pub fn tools() -> Vec<ToolDef> {
    vec![ToolDef::new(
        CHECK_HEALTH,
        "Check the health of the Cube.js server via its root /readyz endpoint. \
         Returns 'OK', 'Unhealthy: <status>' or 'Unreachable: <cause>'.",
        schema!(object {}),
    )]
}
