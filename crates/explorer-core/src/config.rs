//! Process configuration
//!
//! Resolved once at startup (flag, then environment, then default) and
//! immutable afterwards.

use cspr_cloud::Network;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ConfigError, Result};

/// Default listen port of the SSE transport
pub const DEFAULT_PORT: u16 = 3001;

/// How MCP clients reach the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transport {
    /// Line-delimited JSON-RPC on stdin/stdout
    #[default]
    Stdio,
    /// HTTP listener with an SSE event stream
    Sse,
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transport::Stdio => f.write_str("stdio"),
            Transport::Sse => f.write_str("sse"),
        }
    }
}

impl FromStr for Transport {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stdio" => Ok(Transport::Stdio),
            "sse" => Ok(Transport::Sse),
            other => Err(ConfigError::InvalidTransport(other.to_string())),
        }
    }
}

/// Parse a network selector, mapping failures to a configuration error
pub fn parse_network(value: &str) -> Result<Network> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidNetwork(value.trim().to_string()))
}

/// Server options
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerOptions {
    /// CSPR.cloud access key (required)
    pub api_key: String,
    pub network: Network,
    pub transport: Transport,
    /// Listen port for the SSE transport
    pub port: u16,
    /// Shared secret inbound HTTP requests must present. `None` or blank
    /// disables inbound authentication.
    pub server_api_key: Option<String>,
}

impl Default for ServerOptions {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            network: Network::Mainnet,
            transport: Transport::Stdio,
            port: DEFAULT_PORT,
            server_api_key: None,
        }
    }
}

impl ServerOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    pub fn is_testnet(&self) -> bool {
        self.network.is_testnet()
    }

    pub fn is_sse(&self) -> bool {
        self.transport == Transport::Sse
    }

    /// Configured inbound secret, if any
    pub fn server_secret(&self) -> Option<&str> {
        self.server_api_key
            .as_deref()
            .filter(|secret| !secret.trim().is_empty())
    }

    pub fn auth_enabled(&self) -> bool {
        self.server_secret().is_some()
    }

    /// Reject configurations the server cannot start with
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ServerOptions::default();
        assert_eq!(options.network, Network::Mainnet);
        assert_eq!(options.transport, Transport::Stdio);
        assert_eq!(options.port, 3001);
        assert!(!options.is_testnet());
        assert!(!options.is_sse());
        assert!(!options.auth_enabled());
    }

    #[test]
    fn test_selectors_are_case_insensitive() {
        assert_eq!(parse_network("TESTNET").unwrap(), Network::Testnet);
        assert_eq!(parse_network("Mainnet").unwrap(), Network::Mainnet);
        assert_eq!("SSE".parse::<Transport>().unwrap(), Transport::Sse);
        assert_eq!("Stdio".parse::<Transport>().unwrap(), Transport::Stdio);

        assert_eq!(
            parse_network("devnet"),
            Err(ConfigError::InvalidNetwork("devnet".to_string()))
        );
        assert!("websocket".parse::<Transport>().is_err());
    }

    #[test]
    fn test_missing_api_key() {
        assert_eq!(ServerOptions::default().validate(), Err(ConfigError::MissingApiKey));
        assert_eq!(ServerOptions::new("   ").validate(), Err(ConfigError::MissingApiKey));
        assert!(ServerOptions::new("key").validate().is_ok());

        assert_eq!(
            ConfigError::MissingApiKey.to_string(),
            "API key is required. Provide via --api-key argument or CSPR_CLOUD_API_KEY environment variable."
        );
    }

    #[test]
    fn test_blank_secret_disables_auth() {
        let mut options = ServerOptions::new("key");
        options.server_api_key = Some("  ".to_string());
        assert!(!options.auth_enabled());
        assert_eq!(options.server_secret(), None);

        options.server_api_key = Some("s3cret".to_string());
        assert!(options.auth_enabled());
        assert_eq!(options.server_secret(), Some("s3cret"));
    }

    #[test]
    fn test_transport_serde() {
        let transport: Transport = serde_json::from_str("\"sse\"").unwrap();
        assert_eq!(transport, Transport::Sse);
        assert_eq!(serde_json::to_string(&Transport::Stdio).unwrap(), "\"stdio\"");
    }
}
