//! Error types for explorer-core

use thiserror::Error;

/// Result type alias for configuration handling
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Startup configuration errors. All of them are fatal.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("API key is required. Provide via --api-key argument or CSPR_CLOUD_API_KEY environment variable.")]
    MissingApiKey,

    #[error("Invalid network: {0}")]
    InvalidNetwork(String),

    #[error("Invalid transport: {0}")]
    InvalidTransport(String),
}
