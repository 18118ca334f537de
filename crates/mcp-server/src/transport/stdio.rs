//! stdio transport for MCP (used by desktop MCP clients)

use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info};

use crate::protocol::{McpError, McpMessage, RequestHandler};

/// stdio transport for MCP protocol. stdout carries protocol messages only.
pub struct StdioTransport {
    handler: Arc<RequestHandler>,
}

impl StdioTransport {
    pub fn new(handler: Arc<RequestHandler>) -> Self {
        Self { handler }
    }

    /// Serve stdin/stdout until EOF
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        info!("Starting MCP server on stdio");
        self.serve(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
            .await
    }

    /// Line-delimited JSON-RPC over any reader/writer pair
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<(), Box<dyn std::error::Error>>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut buf = Vec::new();

        loop {
            buf.clear();

            let bytes_read = reader.read_until(b'\n', &mut buf).await?;
            if bytes_read == 0 {
                info!("EOF received, shutting down");
                break;
            }

            let line = trim_ascii(&buf);
            if line.is_empty() {
                continue;
            }

            debug!("Received: {}", String::from_utf8_lossy(line));

            // Invalid UTF-8 is a parse error for this line only
            let response = match serde_json::from_slice::<McpMessage>(line) {
                Ok(message) => self.handler.handle(message).await,
                Err(e) => {
                    error!("Failed to parse message: {}", e);
                    Some(McpMessage::error_response(None, McpError::parse_error()))
                }
            };

            if let Some(response) = response {
                write_message(&mut writer, &response).await?;
            }
        }

        Ok(())
    }
}

fn trim_ascii(bytes: &[u8]) -> &[u8] {
    let start = bytes
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(bytes.len());
    let end = bytes
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |i| i + 1);
    &bytes[start..end]
}

async fn write_message<W: AsyncWrite + Unpin>(
    writer: &mut W,
    message: &McpMessage,
) -> Result<(), Box<dyn std::error::Error>> {
    let response_line = serde_json::to_string(message)?;
    debug!("Sending: {}", response_line);
    writer.write_all(response_line.as_bytes()).await?;
    writer.write_all(b"\n").await?;
    writer.flush().await?;
    Ok(())
}
