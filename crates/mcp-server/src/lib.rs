//! # mcp-server
//!
//! MCP (Model Context Protocol) server exposing Casper blockchain data from
//! CSPR.cloud as tools. Supports both stdio and HTTP/SSE transports.

pub mod protocol;
mod server;
pub mod tools;
pub mod transport;

pub use protocol::{McpError, McpMessage, RequestHandler, ServerCapabilities};
pub use server::McpServer;
pub use tools::ToolExecutor;
pub use transport::{HttpTransport, StdioTransport};
