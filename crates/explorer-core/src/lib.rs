//! # explorer-core
//!
//! Shared building blocks of the Casper MCP server: process configuration,
//! locale-invariant value formatting and the Markdown report builder.

pub mod config;
mod error;
pub mod format;
mod report;

pub use config::{parse_network, ServerOptions, Transport, DEFAULT_PORT};
pub use cspr_cloud::Network;
pub use error::{ConfigError, Result};
pub use report::Report;
