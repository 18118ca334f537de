//! MCP protocol types and handling

mod capabilities;
mod handler;
mod types;

pub use capabilities::{ServerCapabilities, ToolsCapability};
pub use handler::RequestHandler;
pub use types::*;
