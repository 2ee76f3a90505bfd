//! Tool Registry - central catalog and dispatch for all tools.
//!
//! This module provides:
//! - The fixed tool catalog advertised to clients
//! - Name-based dispatch of tool calls to the MotorAPI client
//!
//! The catalog is defined once and never mutated at runtime. Dispatch never
//! propagates a fault: unknown names, bad arguments, and failed lookups all
//! come back as ordinary text response units.

use rmcp::model::{CallToolResult, JsonObject, Tool};
use tracing::warn;

use crate::core::config::MotorApiConfig;
use crate::domains::motorapi::MotorApiClient;

use super::definitions::{
    GetApiUsageTool, GetVehicleEnvironmentTool, GetVehicleEquipmentTool, GetVehicleTool,
    common::unknown_tool,
};

/// Tool registry - the catalog plus the dispatcher.
pub struct ToolRegistry {
    client: MotorApiClient,
}

impl ToolRegistry {
    /// Create a new tool registry talking to the configured endpoint.
    pub fn new(config: &MotorApiConfig) -> Self {
        Self {
            client: MotorApiClient::new(config),
        }
    }

    /// Get all tool names, in catalog order.
    pub fn tool_names(&self) -> Vec<&'static str> {
        vec![
            GetVehicleTool::NAME,
            GetVehicleEnvironmentTool::NAME,
            GetVehicleEquipmentTool::NAME,
            GetApiUsageTool::NAME,
        ]
    }

    /// Get all tools as Tool models (metadata).
    ///
    /// This is the single source of truth for the catalog and is identical
    /// across calls for the process lifetime.
    pub fn get_all_tools() -> Vec<Tool> {
        vec![
            GetVehicleTool::to_tool(),
            GetVehicleEnvironmentTool::to_tool(),
            GetVehicleEquipmentTool::to_tool(),
            GetApiUsageTool::to_tool(),
        ]
    }

    /// Dispatch a tool call to the appropriate handler.
    pub async fn call_tool(&self, name: &str, arguments: Option<JsonObject>) -> CallToolResult {
        let arguments = arguments.unwrap_or_default();

        match name {
            GetVehicleTool::NAME => GetVehicleTool::handle(arguments, &self.client).await,
            GetVehicleEnvironmentTool::NAME => {
                GetVehicleEnvironmentTool::handle(arguments, &self.client).await
            }
            GetVehicleEquipmentTool::NAME => {
                GetVehicleEquipmentTool::handle(arguments, &self.client).await
            }
            GetApiUsageTool::NAME => GetApiUsageTool::handle(arguments, &self.client).await,
            _ => {
                warn!("Unknown tool requested: {}", name);
                unknown_tool(name)
            }
        }
    }
}
