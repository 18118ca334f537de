//! Report generators, one async function per tool.
//!
//! Each takes the resolved [`cspr_cloud::NetworkEndpoint`] and the decoded
//! arguments and returns a [`ReportResult`](super::render::ReportResult).

pub mod accounts;
pub mod blocks;
pub mod contracts;
pub mod deploys;
pub mod market;
pub mod names;
pub mod network;
pub mod nft;
pub mod rates;
pub mod tokens;
pub mod transfers;
pub mod validators;

#[cfg(test)]
pub(crate) mod mock {
    //! Local CSPR.cloud stand-in for report tests

    use axum::{http::StatusCode, Json, Router};
    use cspr_cloud::{CloudConfig, CsprCloud, Network, NetworkEndpoint};
    use serde_json::{json, Value};

    pub async fn spawn(app: Router) -> NetworkEndpoint {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let config = CloudConfig::new("test-key").with_base_url(format!("http://{}", addr));
        CsprCloud::new(config).unwrap().endpoint(Network::Mainnet).clone()
    }

    /// Every path answers 500 with an upstream error message
    pub async fn failing(message: &'static str) -> NetworkEndpoint {
        let app = Router::new().fallback(move || async move {
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({"error": {"message": message}})),
            )
        });
        spawn(app).await
    }

    /// Every path answers 404
    pub async fn empty() -> NetworkEndpoint {
        spawn(Router::new()).await
    }

    pub fn envelope(data: Value) -> Json<Value> {
        Json(json!({"data": data}))
    }

    pub fn paged(data: Value, item_count: u64, page_count: u64) -> Json<Value> {
        Json(json!({"data": data, "item_count": item_count, "page_count": page_count}))
    }
}
