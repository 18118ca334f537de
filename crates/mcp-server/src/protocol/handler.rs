//! MCP request handler

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use super::capabilities::ServerCapabilities;
use super::types::*;
use crate::tools::ToolExecutor;

/// Answers MCP requests. Holds no per-session state, so one handler serves
/// every transport and session concurrently.
pub struct RequestHandler {
    executor: ToolExecutor,
    server_info: ServerInfo,
}

impl RequestHandler {
    pub fn new(executor: ToolExecutor) -> Self {
        Self {
            executor,
            server_info: ServerInfo::default(),
        }
    }

    pub fn executor(&self) -> &ToolExecutor {
        &self.executor
    }

    /// Handle an incoming message. Notifications and stray responses yield
    /// `None`.
    pub async fn handle(&self, message: McpMessage) -> Option<McpMessage> {
        match (message.method, message.id) {
            (Some(method), Some(id)) => {
                debug!("Handling request: {}", method);

                let result = match method.as_str() {
                    "initialize" => self.handle_initialize(message.params),
                    "ping" => Ok(serde_json::json!({})),
                    "tools/list" => self.handle_tools_list(),
                    "tools/call" => self.handle_tools_call(message.params).await,
                    _ => Err(McpError::method_not_found(&method)),
                };

                Some(match result {
                    Ok(result) => McpMessage::response(id, result),
                    Err(error) => McpMessage::error_response(Some(id), error),
                })
            }
            (Some(method), None) => {
                match method.as_str() {
                    "notifications/initialized" | "initialized" => info!("Client initialized"),
                    "notifications/cancelled" => debug!("Request cancelled"),
                    _ => debug!("Unknown notification: {}", method),
                }
                None
            }
            (None, Some(id)) if message.result.is_none() && message.error.is_none() => {
                Some(McpMessage::error_response(Some(id), McpError::invalid_request()))
            }
            _ => {
                debug!("Received unexpected response");
                None
            }
        }
    }

    fn handle_initialize(&self, params: Option<Value>) -> Result<Value, McpError> {
        let params: InitializeParams = decode_params(params)?.unwrap_or_default();

        match &params.client_info {
            Some(client) => info!(
                "Initializing session with client: {} v{}",
                client.name, client.version
            ),
            None => info!("Initializing session with unnamed client"),
        }

        to_result(InitializeResult {
            protocol_version: MCP_VERSION.to_string(),
            capabilities: ServerCapabilities::with_tools(),
            server_info: self.server_info.clone(),
        })
    }

    fn handle_tools_list(&self) -> Result<Value, McpError> {
        to_result(ToolsListResult {
            tools: self.executor.tools(),
        })
    }

    async fn handle_tools_call(&self, params: Option<Value>) -> Result<Value, McpError> {
        let params: ToolCallParams =
            decode_params(params)?.ok_or_else(|| McpError::invalid_params("Missing params"))?;

        debug!("Calling tool: {}", params.name);

        let result = self.executor.execute(&params.name, params.arguments).await?;
        to_result(result)
    }
}

fn decode_params<T: DeserializeOwned>(params: Option<Value>) -> Result<Option<T>, McpError> {
    params
        .filter(|p| !p.is_null())
        .map(serde_json::from_value)
        .transpose()
        .map_err(|e| McpError::invalid_params(e.to_string()))
}

fn to_result(value: impl Serialize) -> Result<Value, McpError> {
    serde_json::to_value(value).map_err(|e| McpError::internal_error(e.to_string()))
}
