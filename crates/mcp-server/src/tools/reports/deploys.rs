use cspr_cloud::models::Deploy;
use cspr_cloud::{NetworkEndpoint, PageRequest};
use serde_json::{Map, Value};
use explorer_core::format::{display_or, format_hash, format_timestamp, motes_to_cspr, or_na, PLACEHOLDER};
use explorer_core::Report;

use crate::tools::render::{paged, reference_table, single, Listing, ReportResult, ToolError};

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

pub async fn deploy(api: &NetworkEndpoint, deploy_hash: &str) -> ReportResult {
    single(
        api.deploys().get(deploy_hash),
        format!("Deploy not found: {}", deploy_hash),
        |deploy: &Deploy, report| {
            report
                .heading("Deploy Information")
                .field("Deploy Hash", format_hash(deploy.deploy_hash.as_deref()))
                .field("Block Hash", format_hash(deploy.block_hash.as_deref()))
                .field("Block Height", display_or(deploy.block_height, PLACEHOLDER))
                .field("Caller", format_hash(deploy.caller_public_key.as_deref()))
                .field("Status", or_na(deploy.status.as_deref()))
                .field("Cost", motes_to_cspr(&deploy.cost))
                .field("Payment Amount", motes_to_cspr(&deploy.payment_amount))
                .field("Timestamp", format_timestamp(deploy.timestamp.as_ref()));

            if let Some(hash) = present(&deploy.contract_hash) {
                report.field("Contract Hash", hash);
            }
            if let Some(hash) = present(&deploy.contract_package_hash) {
                report.field("Contract Package", hash);
            }
            if let Some(error) = present(&deploy.error_message) {
                report.field("Error", error);
            }

            let transfers = deploy.transfers.as_deref().unwrap_or_default();
            if !transfers.is_empty() {
                report
                    .blank()
                    .subheading(format_args!("Transfers ({})", transfers.len()));
                for transfer in transfers {
                    report.line(format_args!(
                        "- From: {} → To: {} | Amount: {}",
                        format_hash(transfer.from_purse_public_key.as_deref()),
                        format_hash(transfer.to_public_key.as_deref()),
                        motes_to_cspr(&transfer.amount)
                    ));
                }
            }
        },
    )
    .await
}

fn deploy_summary(report: &mut Report, deploy: &Deploy) {
    report
        .field("Deploy Hash", format_hash(deploy.deploy_hash.as_deref()))
        .detail("Caller", format_hash(deploy.caller_public_key.as_deref()))
        .line(format_args!(
            "  Status: {} | Cost: {}",
            or_na(deploy.status.as_deref()),
            motes_to_cspr(&deploy.cost)
        ));
}

pub async fn deploys(api: &NetworkEndpoint, page: PageRequest) -> ReportResult {
    paged(
        api.deploys().list(page),
        page,
        "No deploys found.".to_string(),
        Listing::new("Deploys", |report, deploy: &Deploy| {
            deploy_summary(report, deploy);
            report.line(format_args!(
                "  Block Height: {} | {}",
                display_or(deploy.block_height, PLACEHOLDER),
                format_timestamp(deploy.timestamp.as_ref())
            ));
        }),
    )
    .await
}

pub async fn block_deploys(
    api: &NetworkEndpoint,
    block_hash: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.deploys().by_block(block_hash, page),
        page,
        format!("No deploys found for block: {}", block_hash),
        Listing::new("Block Deploys", |report, deploy: &Deploy| {
            deploy_summary(report, deploy);
            report.detail("Timestamp", format_timestamp(deploy.timestamp.as_ref()));
        })
        .preamble(format!("Block: {}", block_hash)),
    )
    .await
}

pub async fn deploy_execution_types(api: &NetworkEndpoint) -> ReportResult {
    reference_table(
        api.deploys().execution_types(),
        "Deploy Execution Types",
        "No deploy execution types found.".to_string(),
    )
    .await
}

pub async fn awaiting_deploy(api: &NetworkEndpoint, deploy_hash: &str) -> ReportResult {
    let deploy = api
        .awaiting_deploys()
        .get(deploy_hash)
        .await?
        .and_then(|awaiting| awaiting.deploy)
        .ok_or_else(|| ToolError::NotFound(format!("Awaiting deploy not found: {}", deploy_hash)))?;

    let mut report = Report::new();
    report
        .heading("Awaiting Deploy")
        .field("Deploy Hash", deploy_hash)
        .line("- **Deploy JSON:**")
        .line("```json")
        .line(serde_json::to_string_pretty(&deploy)?)
        .line("```");
    Ok(report.finish())
}

/// Submit a deploy for multi-signature collection
pub async fn create_awaiting_deploy(api: &NetworkEndpoint, deploy_json: &str) -> ReportResult {
    let deploy: Map<String, Value> = serde_json::from_str(deploy_json)?;

    if api.awaiting_deploys().create(&Value::Object(deploy)).await? {
        Ok("Awaiting deploy created successfully.".to_string())
    } else {
        Ok("Failed to create awaiting deploy.".to_string())
    }
}

pub async fn add_awaiting_deploy_approval(
    api: &NetworkEndpoint,
    deploy_hash: &str,
    signer: &str,
    signature: &str,
) -> ReportResult {
    if api
        .awaiting_deploys()
        .add_approval(deploy_hash, signer, signature)
        .await?
    {
        Ok(format!("Approval added successfully to deploy: {}", deploy_hash))
    } else {
        Ok(format!("Failed to add approval to deploy: {}", deploy_hash))
    }
}
