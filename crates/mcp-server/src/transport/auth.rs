//! Shared-secret authentication for the HTTP transport

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use tracing::warn;

/// Header carrying the secret
pub const API_KEY_HEADER: &str = "x-api-key";

/// Query parameter accepted when the header is absent
pub const API_KEY_QUERY: &str = "api_key";

/// Paths under this prefix never require a secret
pub const HEALTH_PREFIX: &str = "/health";

const UNAUTHORIZED_MESSAGE: &str =
    "Unauthorized. Provide a valid API key via X-API-Key header or api_key query parameter.";

/// Expected inbound secret
#[derive(Clone)]
pub struct ApiKeyAuth {
    secret: Arc<str>,
}

impl ApiKeyAuth {
    pub fn new(secret: impl AsRef<str>) -> Self {
        Self {
            secret: Arc::from(secret.as_ref()),
        }
    }

    /// Case-sensitive comparison against the configured secret
    fn accepts(&self, presented: Option<&str>) -> bool {
        presented == Some(&*self.secret)
    }
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: &'static str,
}

fn is_health_check(path: &str) -> bool {
    path == HEALTH_PREFIX
        || path
            .strip_prefix(HEALTH_PREFIX)
            .is_some_and(|rest| rest.starts_with('/'))
}

/// Header value, falling back to the query parameter
fn presented_key(request: &Request) -> Option<String> {
    if let Some(value) = request.headers().get(API_KEY_HEADER) {
        return value.to_str().ok().map(str::to_string);
    }

    let query = request.uri().query()?;
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(name, _)| name == API_KEY_QUERY)
        .map(|(_, value)| value.into_owned())
}

pub async fn require_api_key(
    State(auth): State<ApiKeyAuth>,
    request: Request,
    next: Next,
) -> Response {
    if is_health_check(request.uri().path()) {
        return next.run(request).await;
    }

    if auth.accepts(presented_key(&request).as_deref()) {
        next.run(request).await
    } else {
        warn!("Rejected unauthenticated request to {}", request.uri().path());
        (
            StatusCode::UNAUTHORIZED,
            Json(ErrorResponse {
                error: UNAUTHORIZED_MESSAGE,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http, middleware, routing::get, Router};
    use tower::ServiceExt;

    fn app() -> Router {
        Router::new()
            .route("/health", get(|| async { "healthy" }))
            .route("/health/ready", get(|| async { "ready" }))
            .route("/mcp", get(|| async { "protected" }))
            .layer(middleware::from_fn_with_state(
                ApiKeyAuth::new("s3cret"),
                require_api_key,
            ))
    }

    async fn send(request: http::Request<Body>) -> (StatusCode, String) {
        let response = app().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    fn get_request(uri: &str) -> http::Request<Body> {
        http::Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    #[tokio::test]
    async fn test_health_bypasses_auth() {
        assert_eq!(send(get_request("/health")).await, (StatusCode::OK, "healthy".into()));
        assert_eq!(send(get_request("/health/ready")).await, (StatusCode::OK, "ready".into()));
    }

    #[tokio::test]
    async fn test_header_and_query_credentials() {
        let with_header = http::Request::builder()
            .uri("/mcp")
            .header("X-API-Key", "s3cret")
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(with_header).await.0, StatusCode::OK);

        assert_eq!(send(get_request("/mcp?api_key=s3cret")).await.0, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_or_wrong_credentials() {
        let expected = (
            StatusCode::UNAUTHORIZED,
            r#"{"error":"Unauthorized. Provide a valid API key via X-API-Key header or api_key query parameter."}"#
                .to_string(),
        );

        assert_eq!(send(get_request("/mcp")).await, expected);
        assert_eq!(send(get_request("/mcp?api_key=S3CRET")).await, expected);

        // a wrong header is not rescued by a correct query parameter
        let wrong_header = http::Request::builder()
            .uri("/mcp?api_key=s3cret")
            .header("X-API-Key", "nope")
            .body(Body::empty())
            .unwrap();
        assert_eq!(send(wrong_header).await, expected);
    }

    #[test]
    fn test_health_prefix_matches_whole_segments() {
        assert!(is_health_check("/health"));
        assert!(is_health_check("/health/live"));
        assert!(!is_health_check("/healthz"));
        assert!(!is_health_check("/mcp/health"));
    }
}
