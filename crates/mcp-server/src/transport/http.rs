//! HTTP/SSE transport for MCP
//!
//! `GET /sse` opens a session stream whose first event names the endpoint
//! to post requests to. Responses to those posts are pushed onto the stream.
//! `POST /mcp` answers a single request directly.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    middleware,
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Json, Router,
};
use futures::stream::Stream;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::convert::Infallible;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};
use uuid::Uuid;

use super::auth::{require_api_key, ApiKeyAuth};
use crate::protocol::{McpError, McpMessage, RequestHandler, SERVER_NAME};

/// Responses buffered per SSE session before senders wait
const SESSION_BUFFER: usize = 32;

type Sessions = HashMap<Uuid, mpsc::Sender<McpMessage>>;

/// Shared state for HTTP handlers
struct AppState {
    handler: Arc<RequestHandler>,
    sessions: Mutex<Sessions>,
}

impl AppState {
    fn sessions(&self) -> MutexGuard<'_, Sessions> {
        self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// HTTP transport for MCP protocol
pub struct HttpTransport {
    handler: Arc<RequestHandler>,
    port: u16,
    auth: Option<ApiKeyAuth>,
}

impl HttpTransport {
    pub fn new(handler: Arc<RequestHandler>, port: u16) -> Self {
        Self {
            handler,
            port,
            auth: None,
        }
    }

    /// Require a shared secret on every path except the health check
    pub fn with_api_key(mut self, secret: Option<&str>) -> Self {
        self.auth = secret.map(ApiKeyAuth::new);
        self
    }

    pub fn router(&self) -> Router {
        let state = Arc::new(AppState {
            handler: self.handler.clone(),
            sessions: Mutex::new(HashMap::new()),
        });

        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        let mut app = Router::new()
            .route("/health", get(health))
            .route("/sse", get(handle_sse))
            .route("/message", post(handle_message))
            .route("/mcp", post(handle_mcp_request))
            .with_state(state);

        if let Some(auth) = &self.auth {
            app = app.layer(middleware::from_fn_with_state(auth.clone(), require_api_key));
        }

        app.layer(cors).layer(TraceLayer::new_for_http())
    }

    /// Serve on all interfaces until the listener fails
    pub async fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = format!("0.0.0.0:{}", self.port);
        info!("Starting MCP HTTP server on {}", addr);

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        axum::serve(listener, self.router()).await?;

        Ok(())
    }
}

async fn health(State(state): State<Arc<AppState>>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "server": SERVER_NAME,
        "transport": "sse",
        "network": state.handler.executor().network().to_string(),
    }))
}

/// Removes the session once its stream is dropped
struct SessionGuard {
    state: Arc<AppState>,
    session_id: Uuid,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        self.state.sessions().remove(&self.session_id);
        info!("SSE session {} closed", self.session_id);
    }
}

async fn handle_sse(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let session_id = Uuid::new_v4();
    let (sender, mut receiver) = mpsc::channel::<McpMessage>(SESSION_BUFFER);
    state.sessions().insert(session_id, sender);
    info!("SSE session {} opened", session_id);

    let guard = SessionGuard { state, session_id };

    let stream = async_stream::stream! {
        let _guard = guard;

        yield Ok(Event::default()
            .event("endpoint")
            .data(format!("/message?sessionId={}", session_id)));

        while let Some(message) = receiver.recv().await {
            match serde_json::to_string(&message) {
                Ok(data) => yield Ok(Event::default().event("message").data(data)),
                Err(e) => error!("Failed to serialize response: {}", e),
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}

#[derive(Debug, Deserialize)]
struct SessionQuery {
    #[serde(rename = "sessionId")]
    session_id: Uuid,
}

/// Accept a request for an SSE session and answer it on the stream
async fn handle_message(
    State(state): State<Arc<AppState>>,
    Query(query): Query<SessionQuery>,
    body: String,
) -> StatusCode {
    let Some(sender) = state.sessions().get(&query.session_id).cloned() else {
        debug!("Message for unknown session {}", query.session_id);
        return StatusCode::NOT_FOUND;
    };

    let handler = state.handler.clone();
    tokio::spawn(async move {
        if let Some(response) = respond(&handler, &body).await {
            if sender.send(response).await.is_err() {
                debug!("Session {} closed before the response was sent", query.session_id);
            }
        }
    });

    StatusCode::ACCEPTED
}

/// Handle MCP JSON-RPC request via HTTP POST
async fn handle_mcp_request(State(state): State<Arc<AppState>>, body: String) -> Response {
    match respond(&state.handler, &body).await {
        Some(response) => Json(response).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

async fn respond(handler: &RequestHandler, body: &str) -> Option<McpMessage> {
    match serde_json::from_str::<McpMessage>(body) {
        Ok(message) => {
            debug!("HTTP request: {:?}", message.method);
            handler.handle(message).await
        }
        Err(e) => {
            error!("Failed to parse message: {}", e);
            Some(McpMessage::error_response(None, McpError::parse_error()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::ToolExecutor;
    use axum::body::{Body, BodyDataStream};
    use axum::http::{self, header};
    use cspr_cloud::{CloudConfig, CsprCloud, Network};
    use futures::StreamExt;
    use serde_json::Value;
    use std::time::Duration;
    use tower::ServiceExt;

    fn transport(secret: Option<&str>) -> HttpTransport {
        let config = CloudConfig::new("test-key").with_base_url("http://127.0.0.1:9");
        let executor = ToolExecutor::new(CsprCloud::new(config).unwrap(), Network::Testnet);
        HttpTransport::new(Arc::new(RequestHandler::new(executor)), 0).with_api_key(secret)
    }

    fn post_json(uri: &str, body: &str) -> http::Request<Body> {
        http::Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn get_request(uri: &str) -> http::Request<Body> {
        http::Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    async fn json_body(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health() {
        let response = transport(None).router().oneshot(get_request("/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            json_body(response).await,
            json!({"status": "healthy", "server": "casper-mcp", "transport": "sse", "network": "testnet"})
        );
    }

    #[tokio::test]
    async fn test_direct_request() {
        let app = transport(None).router();

        let response = app
            .clone()
            .oneshot(post_json("/mcp", r#"{"jsonrpc":"2.0","id":7,"method":"ping"}"#))
            .await
            .unwrap();
        assert_eq!(json_body(response).await, json!({"jsonrpc": "2.0", "id": 7, "result": {}}));

        let notification = app
            .clone()
            .oneshot(post_json("/mcp", r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#))
            .await
            .unwrap();
        assert_eq!(notification.status(), StatusCode::ACCEPTED);

        let garbage = app.oneshot(post_json("/mcp", "{oops")).await.unwrap();
        assert_eq!(json_body(garbage).await["error"]["code"], -32700);
    }

    #[tokio::test]
    async fn test_unknown_session() {
        let uri = format!("/message?sessionId={}", Uuid::new_v4());
        let response = transport(None)
            .router()
            .oneshot(post_json(&uri, r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    async fn next_event(events: &mut BodyDataStream) -> String {
        let chunk = tokio::time::timeout(Duration::from_secs(5), events.next())
            .await
            .unwrap()
            .unwrap()
            .unwrap();
        String::from_utf8(chunk.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_sse_session_round_trip() {
        let app = transport(None).router();

        let response = app.clone().oneshot(get_request("/sse")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "text/event-stream");

        let mut events = response.into_body().into_data_stream();
        let endpoint = next_event(&mut events).await;
        assert!(endpoint.starts_with("event: endpoint\ndata: /message?sessionId="));
        let path = endpoint
            .trim_end()
            .trim_start_matches("event: endpoint\ndata: ")
            .to_string();

        let accepted = app
            .oneshot(post_json(&path, r#"{"jsonrpc":"2.0","id":3,"method":"ping"}"#))
            .await
            .unwrap();
        assert_eq!(accepted.status(), StatusCode::ACCEPTED);

        let message = next_event(&mut events).await;
        assert_eq!(
            message,
            "event: message\ndata: {\"jsonrpc\":\"2.0\",\"id\":3,\"result\":{}}\n\n"
        );
    }

    #[tokio::test]
    async fn test_auth_layer_only_with_secret() {
        let open = transport(None)
            .router()
            .oneshot(post_json("/mcp", r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#))
            .await
            .unwrap();
        assert_eq!(open.status(), StatusCode::OK);

        let secured = transport(Some("s3cret")).router();
        let denied = secured
            .clone()
            .oneshot(post_json("/mcp", r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#))
            .await
            .unwrap();
        assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);

        let allowed = secured
            .clone()
            .oneshot(post_json("/mcp?api_key=s3cret", r#"{"jsonrpc":"2.0","id":1,"method":"ping"}"#))
            .await
            .unwrap();
        assert_eq!(allowed.status(), StatusCode::OK);

        let health = secured.oneshot(get_request("/health")).await.unwrap();
        assert_eq!(health.status(), StatusCode::OK);
    }
}
