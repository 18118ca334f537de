//! Casper MCP server CLI
//!
//! Serves CSPR.cloud blockchain data to MCP clients over stdio (default) or
//! HTTP/SSE.

use clap::Parser;
use cspr_cloud::{CloudConfig, Network, MAINNET_URL, TESTNET_URL};
use explorer_core::{parse_network, ServerOptions, Transport, DEFAULT_PORT};
use tracing_subscriber::EnvFilter;

use mcp_server::McpServer;

/// Casper MCP server - Casper blockchain data over the Model Context Protocol
#[derive(Parser, Debug)]
#[command(name = "casper-mcp")]
#[command(version)]
#[command(about = "Casper blockchain data from CSPR.cloud via MCP")]
struct Args {
    /// CSPR.cloud API key
    #[arg(long, env = "CSPR_CLOUD_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Network to query: mainnet or testnet
    #[arg(long, env = "CASPER_MCP_NETWORK", default_value = "mainnet", value_parser = parse_network)]
    network: Network,

    /// Transport: stdio or sse
    #[arg(long, env = "CASPER_MCP_TRANSPORT", default_value = "stdio")]
    transport: Transport,

    /// Listen port for the SSE transport
    #[arg(long, env = "CASPER_MCP_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Secret inbound HTTP requests must present (X-API-Key header or api_key query parameter)
    #[arg(long, env = "CASPER_MCP_SERVER_API_KEY", hide_env_values = true)]
    server_api_key: Option<String>,

    /// CSPR.cloud mainnet base URL
    #[arg(long, env = "CSPR_CLOUD_MAINNET_URL", default_value = MAINNET_URL)]
    mainnet_url: String,

    /// CSPR.cloud testnet base URL
    #[arg(long, env = "CSPR_CLOUD_TESTNET_URL", default_value = TESTNET_URL)]
    testnet_url: String,
}

impl Args {
    fn split(self) -> (ServerOptions, CloudConfig) {
        let api_key = self.api_key.unwrap_or_default();

        let mut cloud = CloudConfig::new(api_key.clone());
        cloud.mainnet_url = self.mainnet_url;
        cloud.testnet_url = self.testnet_url;

        let options = ServerOptions {
            api_key,
            network: self.network,
            transport: self.transport,
            port: self.port,
            server_api_key: self.server_api_key,
        };

        (options, cloud)
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let (options, cloud) = Args::parse().split();

    // stdout belongs to the protocol on stdio, so logs always go to stderr
    let default_level = if options.is_sse() { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = options.validate() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    let server = McpServer::new(options, cloud)?;
    server.run().await?;

    Ok(())
}
