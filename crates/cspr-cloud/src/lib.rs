//! # cspr-cloud
//!
//! Typed client for the CSPR.cloud REST API.
//! One [`CsprCloud`] holds a mainnet and a testnet [`NetworkEndpoint`]; each
//! endpoint exposes the same set of sub-resources (accounts, blocks, deploys,
//! validators, tokens, ...).

mod error;
pub mod models;
mod network;
mod resources;
mod types;

pub use error::{CloudError, CloudResult};
pub use network::{CloudConfig, CsprCloud, Network, NetworkEndpoint, MAINNET_URL, TESTNET_URL};
pub use resources::*;
pub use types::{Amount, Page, PageRequest, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        extract::{Path, Query},
        http::{HeaderMap, StatusCode},
        routing::{get, post},
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;

    async fn spawn_mock(app: Router) -> CsprCloud {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = CloudConfig::new("test-key").with_base_url(format!("http://{}", addr));
        CsprCloud::new(config).unwrap()
    }

    async fn account(headers: HeaderMap, Path(id): Path<String>) -> (StatusCode, Json<Value>) {
        if headers.get("authorization").and_then(|v| v.to_str().ok()) != Some("test-key") {
            return (
                StatusCode::UNAUTHORIZED,
                Json(json!({"error": {"code": "unauthorized", "message": "Invalid access token"}})),
            );
        }
        match id.as_str() {
            "missing" => (StatusCode::NOT_FOUND, Json(json!({}))),
            "broken" => (
                StatusCode::BAD_REQUEST,
                Json(json!({"error": {"code": "invalid_param", "message": "Invalid account identifier"}})),
            ),
            _ => (
                StatusCode::OK,
                Json(json!({"data": {"public_key": id, "balance": "1500000000000"}})),
            ),
        }
    }

    async fn blocks(Query(query): Query<HashMap<String, String>>) -> Json<Value> {
        let page_size: u64 = query.get("page_size").and_then(|v| v.parse().ok()).unwrap_or(0);
        Json(json!({
            "data": [{"block_height": 100}, {"block_height": 99}],
            "item_count": page_size,
            "page_count": 7
        }))
    }

    async fn approvals(Path(hash): Path<String>, Json(body): Json<Value>) -> Json<Value> {
        let ok = hash == "abc" && body["signer"] == "01aa" && body["signature"] == "sig";
        Json(json!({"data": ok}))
    }

    fn mock_router() -> Router {
        Router::new()
            .route("/accounts/:id", get(account))
            .route("/blocks", get(blocks))
            .route("/auction-metrics", get(|| async { Json(json!({"data": null})) }))
            .route("/awaiting-deploys/:hash/approvals", post(approvals))
    }

    #[tokio::test]
    async fn test_single_record_lookup() {
        let cloud = spawn_mock(mock_router()).await;

        let account = cloud
            .endpoint(Network::Mainnet)
            .accounts()
            .get("01abc")
            .await
            .unwrap()
            .expect("account should exist");

        assert_eq!(account.public_key.as_deref(), Some("01abc"));
        assert_eq!(account.balance.unwrap().motes(), Some(1_500_000_000_000));
    }

    #[tokio::test]
    async fn test_not_found_is_none() {
        let cloud = spawn_mock(mock_router()).await;

        let account = cloud
            .endpoint(Network::Testnet)
            .accounts()
            .get("missing")
            .await
            .unwrap();
        assert!(account.is_none());

        let metrics = cloud.endpoint(Network::Mainnet).auction().metrics().await.unwrap();
        assert!(metrics.is_none());
    }

    #[tokio::test]
    async fn test_upstream_message_is_passed_through() {
        let cloud = spawn_mock(mock_router()).await;

        let err = cloud
            .endpoint(Network::Mainnet)
            .accounts()
            .get("broken")
            .await
            .unwrap_err();

        assert_eq!(err.status(), Some(400));
        assert_eq!(err.to_string(), "Invalid account identifier");
    }

    #[tokio::test]
    async fn test_api_key_header_is_sent() {
        let app = mock_router();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = CloudConfig::new("wrong-key").with_base_url(format!("http://{}", addr));
        let cloud = CsprCloud::new(config).unwrap();

        let err = cloud
            .endpoint(Network::Mainnet)
            .accounts()
            .get("01abc")
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid access token");
    }

    #[tokio::test]
    async fn test_page_size_is_clamped_upstream() {
        let cloud = spawn_mock(mock_router()).await;

        let page = cloud
            .endpoint(Network::Mainnet)
            .blocks()
            .list(PageRequest::new(1, 500))
            .await
            .unwrap()
            .unwrap();

        // the mock echoes the received page_size as item_count
        assert_eq!(page.item_count, Some(250));
        assert_eq!(page.page_count, Some(7));
        assert_eq!(page.data.len(), 2);
        assert_eq!(page.data[0].block_height, Some(100));
    }

    #[tokio::test]
    async fn test_add_approval_posts_body() {
        let cloud = spawn_mock(mock_router()).await;
        let awaiting = cloud.endpoint(Network::Mainnet).awaiting_deploys();

        assert!(awaiting.add_approval("abc", "01aa", "sig").await.unwrap());
        assert!(!awaiting.add_approval("abc", "01aa", "other").await.unwrap());
    }
}
