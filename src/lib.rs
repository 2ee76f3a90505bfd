//! MotorAPI MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server exposing Danish
//! vehicle registration lookups from MotorAPI.dk as callable tools.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, error handling,
//!   the main server handler, and the STDIO transport
//! - **domains**: Business logic organized by bounded contexts
//!   - **motorapi**: The outbound HTTP client for MotorAPI.dk
//!   - **tools**: The MCP tool catalog and dispatch
//!
//! # Example
//!
//! ```rust,no_run
//! use motorapi_mcp_server::{core::Config, core::McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Start the server...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, McpServer, Result};
