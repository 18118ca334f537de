//! Human-readable account identities: CSPR.names and centralized accounts

use cspr_cloud::models::{CentralizedAccountInfo, CsprNameResolution};
use cspr_cloud::{NetworkEndpoint, PageRequest};
use explorer_core::format::{format_bool, format_hash, or_na, PLACEHOLDER};

use crate::tools::render::{paged, single, Listing, ReportResult};

pub async fn resolve_cspr_name(api: &NetworkEndpoint, name: &str) -> ReportResult {
    single(
        api.cspr_names().resolve(name),
        format!("CSPR.name not found: {}", name),
        |resolution: &CsprNameResolution, report| {
            report
                .heading("CSPR.name Resolution")
                .field("Name", or_na(resolution.name.as_deref()))
                .field("Token ID", or_na(resolution.name_token_id.as_deref()))
                .field("Resolved Hash", format_hash(resolution.resolved_hash.as_deref()))
                .field(
                    "Is Primary",
                    resolution.is_primary.map(format_bool).unwrap_or(PLACEHOLDER),
                )
                .field("Expires At", or_na(resolution.expires_at.as_deref()));
        },
    )
    .await
}

pub async fn centralized_account_info(api: &NetworkEndpoint, account_hash: &str) -> ReportResult {
    single(
        api.centralized_accounts().get(account_hash),
        format!("Centralized account info not found: {}", account_hash),
        |info: &CentralizedAccountInfo, report| {
            report
                .heading("Centralized Account Information")
                .field("Account Hash", format_hash(info.account_hash.as_deref()))
                .field("Name", or_na(info.name.as_deref()))
                .field("URL", or_na(info.url.as_deref()))
                .field("Avatar URL", or_na(info.avatar_url.as_deref()));
        },
    )
    .await
}

pub async fn centralized_accounts(api: &NetworkEndpoint, page: PageRequest) -> ReportResult {
    paged(
        api.centralized_accounts().list(page),
        page,
        "No centralized accounts found.".to_string(),
        Listing::new("Centralized Accounts", |report, info: &CentralizedAccountInfo| {
            report
                .field("Name", or_na(info.name.as_deref()))
                .detail("Account Hash", format_hash(info.account_hash.as_deref()))
                .detail("URL", or_na(info.url.as_deref()));
        }),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::render::conclude;
    use crate::tools::reports::mock;
    use axum::{extract::Path, routing::get, Router};
    use serde_json::json;

    #[tokio::test]
    async fn test_resolve_name() {
        let app = Router::new().route(
            "/cspr-name-resolutions/:name",
            get(|Path(name): Path<String>| async move {
                mock::envelope(json!({
                    "name": name,
                    "name_token_id": "77",
                    "resolved_hash": "account-hash-a1",
                    "is_primary": true
                }))
            }),
        );
        let api = mock::spawn(app).await;
        let text = resolve_cspr_name(&api, "alice.cspr").await.unwrap();

        assert_eq!(
            text,
            "## CSPR.name Resolution\n\
             - **Name:** alice.cspr\n\
             - **Token ID:** 77\n\
             - **Resolved Hash:** account-hash-a1\n\
             - **Is Primary:** Yes\n\
             - **Expires At:** N/A\n"
        );
    }

    #[tokio::test]
    async fn test_unknown_name() {
        let api = mock::empty().await;
        assert_eq!(
            conclude("resolving CSPR.name", resolve_cspr_name(&api, "nobody.cspr").await),
            "CSPR.name not found: nobody.cspr"
        );
        assert_eq!(
            conclude(
                "retrieving centralized account info",
                centralized_account_info(&api, "account-hash-0").await
            ),
            "Centralized account info not found: account-hash-0"
        );
    }
}
