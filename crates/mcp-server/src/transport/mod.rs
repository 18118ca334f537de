//! Transport implementations for MCP server

mod auth;
mod http;
mod stdio;

pub use auth::{require_api_key, ApiKeyAuth, API_KEY_HEADER, API_KEY_QUERY, HEALTH_PREFIX};
pub use http::HttpTransport;
pub use stdio::StdioTransport;
