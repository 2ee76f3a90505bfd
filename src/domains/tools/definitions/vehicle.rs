//! Vehicle details lookup tool.
//!
//! Looks up a Danish vehicle in MotorAPI.dk by registration number or VIN
//! and returns the registry record as formatted JSON.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::info;

use super::common::{VehicleLookupParams, dispatch_error, lookup_response, parse_params};
use crate::domains::motorapi::MotorApiClient;

/// Vehicle details lookup tool implementation.
#[derive(Debug, Clone)]
pub struct GetVehicleTool;

impl GetVehicleTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "get_vehicle";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get detailed information about a Danish vehicle by registration number or VIN. Returns vehicle specifications, registration details, and technical information.";

    /// Parse arguments and run the lookup.
    pub async fn handle(arguments: JsonObject, client: &MotorApiClient) -> CallToolResult {
        match parse_params::<VehicleLookupParams>(arguments) {
            Ok(params) => Self::execute(&params, client).await,
            Err(e) => dispatch_error(&e),
        }
    }

    /// Execute the tool logic.
    pub async fn execute(params: &VehicleLookupParams, client: &MotorApiClient) -> CallToolResult {
        info!("Looking up vehicle: {}", params.reg_no_or_vin);
        lookup_response(&client.vehicle(&params.reg_no_or_vin).await)
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::MotorApiConfig;
    use rmcp::model::RawContent;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_params_deserialize() {
        let json = r#"{"reg_no_or_vin": "AB12345"}"#;
        let params: VehicleLookupParams = serde_json::from_str(json).unwrap();
        assert_eq!(params.reg_no_or_vin, "AB12345");
    }

    #[test]
    fn test_to_tool_metadata() {
        let tool = GetVehicleTool::to_tool();
        assert_eq!(tool.name.as_ref(), "get_vehicle");
        assert!(tool.description.is_some());

        let required = tool.input_schema.get("required").unwrap().as_array().unwrap();
        assert_eq!(required, &vec![json!("reg_no_or_vin")]);
    }

    #[tokio::test]
    async fn test_execute_round_trips_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/vehicles/AB12345"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "registration": "AB12345",
                "make": "Toyota"
            })))
            .mount(&server)
            .await;

        let client = MotorApiClient::new(&MotorApiConfig {
            base_url: server.uri(),
            api_key: "test-key".to_string(),
        });
        let params = VehicleLookupParams {
            reg_no_or_vin: "AB12345".to_string(),
        };

        let result = GetVehicleTool::execute(&params, &client).await;
        assert_eq!(result.content.len(), 1);
        let RawContent::Text(text) = &result.content[0].raw else {
            panic!("expected text content");
        };
        let reparsed: serde_json::Value = serde_json::from_str(&text.text).unwrap();
        assert_eq!(reparsed, json!({"registration": "AB12345", "make": "Toyota"}));
    }
}
