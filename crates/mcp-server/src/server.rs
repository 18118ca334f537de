//! Main MCP server orchestration

use cspr_cloud::{CloudConfig, CsprCloud};
use explorer_core::{ServerOptions, Transport};
use std::sync::Arc;
use tracing::info;

use crate::protocol::RequestHandler;
use crate::tools::ToolExecutor;
use crate::transport::{HttpTransport, StdioTransport};

/// MCP server
pub struct McpServer {
    options: ServerOptions,
    handler: Arc<RequestHandler>,
}

impl McpServer {
    /// Validate the options and build the upstream client
    pub fn new(options: ServerOptions, cloud: CloudConfig) -> Result<Self, Box<dyn std::error::Error>> {
        options.validate()?;

        let cloud = CsprCloud::new(cloud)?;
        let executor = ToolExecutor::new(cloud, options.network);

        Ok(Self {
            handler: Arc::new(RequestHandler::new(executor)),
            options,
        })
    }

    pub fn options(&self) -> &ServerOptions {
        &self.options
    }

    /// Run the server
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        match self.options.transport {
            Transport::Stdio => {
                info!("Starting MCP server in stdio mode on {}", self.options.network);
                StdioTransport::new(self.handler.clone()).run().await
            }
            Transport::Sse => {
                self.log_banner();
                HttpTransport::new(self.handler.clone(), self.options.port)
                    .with_api_key(self.options.server_secret())
                    .run()
                    .await
            }
        }
    }

    fn log_banner(&self) {
        let port = self.options.port;
        info!("Casper MCP server v{}", env!("CARGO_PKG_VERSION"));
        info!("Transport: SSE");
        info!("Network: {}", self.options.network.label());
        info!(
            "Authentication: {}",
            if self.options.auth_enabled() { "enabled" } else { "disabled" }
        );
        info!("Health check: http://localhost:{}/health", port);
        info!("MCP endpoint: http://localhost:{}/sse", port);
    }
}
