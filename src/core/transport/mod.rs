//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output, the default transport
//! for MCP and the only one this server supports. The message framing itself
//! is owned by rmcp; this layer wires stdin/stdout to the server handler and
//! maps startup/shutdown failures.

mod error;
pub mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
