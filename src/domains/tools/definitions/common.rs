//! Common utilities shared across the MotorAPI tools.
//!
//! This module provides the shared parameter type for identifier-based
//! lookups plus the argument-parsing and response-formatting helpers used
//! by every tool.

use rmcp::model::{CallToolResult, Content, JsonObject};
use schemars::JsonSchema;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::warn;

use crate::domains::motorapi::LookupResult;
use crate::domains::tools::ToolError;

/// Parameters shared by the three identifier-based lookup tools.
///
/// The identifier is passed through opaquely; the remote API is the sole
/// authority on validity.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct VehicleLookupParams {
    /// Registration number or VIN identifying the vehicle.
    #[schemars(description = "Vehicle registration number (e.g., 'AB12345') or VIN number")]
    pub reg_no_or_vin: String,
}

/// Parse a tool's typed parameters from the raw argument map.
///
/// A missing or mistyped required argument is a caller contract violation,
/// surfaced to the dispatcher as [`ToolError::InvalidArguments`].
pub fn parse_params<T: DeserializeOwned>(arguments: JsonObject) -> Result<T, ToolError> {
    serde_json::from_value(serde_json::Value::Object(arguments))
        .map_err(|e| ToolError::invalid_arguments(e.to_string()))
}

/// Serialize a lookup outcome as one pretty-printed JSON text unit.
///
/// `serde_json` keeps non-ASCII characters literal, so the text re-parses
/// to the exact remote payload. Failures serialize as `{"error": "..."}`;
/// the MCP-level call itself always succeeds and callers inspect the text.
pub fn lookup_response(result: &LookupResult) -> CallToolResult {
    match serde_json::to_string_pretty(result) {
        Ok(text) => CallToolResult::success(vec![Content::text(text)]),
        Err(e) => dispatch_error(&ToolError::internal(e.to_string())),
    }
}

/// Format a dispatch-level failure as a plain text unit.
pub fn dispatch_error(error: &ToolError) -> CallToolResult {
    warn!("{}", error);
    CallToolResult::success(vec![Content::text(format!("Error: {error}"))])
}

/// Response unit for a tool name outside the catalog.
///
/// A recoverable outcome, not a protocol fault.
pub fn unknown_tool(name: &str) -> CallToolResult {
    warn!("Unknown tool requested: {}", name);
    CallToolResult::success(vec![Content::text(format!("Unknown tool: {name}"))])
}
