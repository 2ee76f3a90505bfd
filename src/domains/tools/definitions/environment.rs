//! Vehicle environmental data lookup tool.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::info;

use super::common::{VehicleLookupParams, dispatch_error, lookup_response, parse_params};
use crate::domains::motorapi::MotorApiClient;

/// Environmental data lookup tool implementation.
#[derive(Debug, Clone)]
pub struct GetVehicleEnvironmentTool;

impl GetVehicleEnvironmentTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_vehicle_environment";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get environmental information for a Danish vehicle, including emissions data, fuel consumption, and environmental classification.";

    /// Parse arguments and run the lookup.
    pub async fn handle(arguments: JsonObject, client: &MotorApiClient) -> CallToolResult {
        match parse_params::<VehicleLookupParams>(arguments) {
            Ok(params) => Self::execute(&params, client).await,
            Err(e) => dispatch_error(&e),
        }
    }

    /// Execute the tool logic.
    pub async fn execute(params: &VehicleLookupParams, client: &MotorApiClient) -> CallToolResult {
        info!("Looking up environmental data: {}", params.reg_no_or_vin);
        lookup_response(&client.environment(&params.reg_no_or_vin).await)
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<VehicleLookupParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
