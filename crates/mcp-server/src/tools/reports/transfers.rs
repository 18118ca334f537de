use cspr_cloud::models::Transfer;
use cspr_cloud::{NetworkEndpoint, PageRequest};
use explorer_core::format::{display_or, format_hash, format_timestamp, motes_to_cspr, PLACEHOLDER};
use explorer_core::Report;

use crate::tools::render::{paged, Listing, ReportResult};

fn transfer_details(report: &mut Report, transfer: &Transfer) {
    report
        .detail("To", format_hash(transfer.recipient()))
        .detail("Amount", motes_to_cspr(&transfer.amount))
        .line(format_args!(
            "  Block: {} | {}",
            display_or(transfer.block_height, PLACEHOLDER),
            format_timestamp(transfer.timestamp.as_ref())
        ));
}

pub async fn account_transfers(
    api: &NetworkEndpoint,
    identifier: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.transfers().by_account(identifier, page),
        page,
        format!("No transfers found for account: {}", identifier),
        Listing::new("Account Transfers", |report, transfer: &Transfer| {
            report
                .field("Deploy", format_hash(transfer.deploy_hash.as_deref()))
                .detail("From", format_hash(transfer.sender()));
            transfer_details(report, transfer);
        }),
    )
    .await
}

pub async fn deploy_transfers(
    api: &NetworkEndpoint,
    deploy_hash: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.transfers().by_deploy(deploy_hash, page),
        page,
        format!("No transfers found for deploy: {}", deploy_hash),
        Listing::new("Deploy Transfers", |report, transfer: &Transfer| {
            report.line(format_args!("- From: {}", format_hash(transfer.sender())));
            transfer_details(report, transfer);
        })
        .preamble(format!("Deploy: {}", deploy_hash)),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::render::conclude;
    use crate::tools::reports::mock;
    use axum::{routing::get, Router};
    use serde_json::json;

    #[tokio::test]
    async fn test_sender_falls_back_to_initiator_hash() {
        let app = Router::new().route(
            "/accounts/:id/transfers",
            get(|| async {
                mock::paged(
                    json!([{
                        "deploy_hash": "d7",
                        "initiator_account_hash": "account-hash-01",
                        "to_account_hash": "account-hash-02",
                        "amount": "2500000000",
                        "block_height": 12
                    }]),
                    1,
                    1,
                )
            }),
        );
        let api = mock::spawn(app).await;
        let text = account_transfers(&api, "01abc", PageRequest::default())
            .await
            .unwrap();

        assert!(text.contains(
            "- **Deploy:** d7\n  From: account-hash-01\n  To: account-hash-02\n  Amount: 2.500000000 CSPR\n  Block: 12 | N/A\n"
        ));
    }

    #[tokio::test]
    async fn test_no_transfers() {
        let api = mock::empty().await;
        let text = conclude(
            "retrieving deploy transfers",
            deploy_transfers(&api, "d0", PageRequest::default()).await,
        );
        assert_eq!(text, "No transfers found for deploy: d0");
    }
}
