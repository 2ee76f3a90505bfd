//! API usage statistics tool.
//!
//! The only tool in the catalog without an identifier: it reports the
//! account's request quota, not vehicle data.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use schemars::JsonSchema;
use tracing::info;

use super::common::lookup_response;
use crate::domains::motorapi::MotorApiClient;

/// Parameters for the usage tool. There are none.
#[derive(Debug, Clone, JsonSchema)]
pub struct UsageParams {}

/// API usage statistics tool implementation.
#[derive(Debug, Clone)]
pub struct GetApiUsageTool;

impl GetApiUsageTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_api_usage";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get current API usage statistics, including request count, quota limits, and remaining requests.";

    /// Run the lookup. Arguments are accepted and ignored.
    pub async fn handle(_arguments: JsonObject, client: &MotorApiClient) -> CallToolResult {
        Self::execute(client).await
    }

    /// Execute the tool logic.
    pub async fn execute(client: &MotorApiClient) -> CallToolResult {
        info!("Fetching API usage statistics");
        lookup_response(&client.usage().await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<UsageParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
