//! Tool catalog, argument decoding and execution

mod args;
pub mod catalog;
mod executor;
pub mod render;
pub mod reports;

pub use args::ToolArgs;
pub use catalog::{ToolDescriptor, ToolParam, TOOLS};
pub use executor::ToolExecutor;
pub use render::{conclude, ReportResult, ToolError};
