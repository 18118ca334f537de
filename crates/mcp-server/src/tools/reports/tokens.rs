//! Fungible (CEP-18) tokens: metadata, holders and actions

use cspr_cloud::models::{ContractPackage, FtAction, FtOwnership};
use cspr_cloud::{NetworkEndpoint, PageRequest};
use explorer_core::format::{display_or, format_amount, format_hash, format_timestamp, or_na, PLACEHOLDER};
use explorer_core::Report;

use crate::tools::render::{paged, single, Listing, ReportResult};

pub async fn token_info(api: &NetworkEndpoint, package_hash: &str) -> ReportResult {
    single(
        api.contracts().package(package_hash),
        format!("Token contract package not found: {}", package_hash),
        |package: &ContractPackage, report| {
            report
                .heading("Fungible Token Information")
                .field("Contract Package", format_hash(package.contract_package_hash.as_deref()))
                .field("Name", or_na(package.name.as_deref()))
                .field("Description", or_na(package.description.as_deref()))
                .field("Owner", format_hash(package.owner_public_key.as_deref()))
                .field("Deploys", display_or(package.deploys_number, PLACEHOLDER))
                .field("Created", format_timestamp(package.timestamp.as_ref()));
        },
    )
    .await
}

pub async fn token_holders(
    api: &NetworkEndpoint,
    package_hash: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.ft().package_ownership(package_hash, page),
        page,
        format!("No holders found for token: {}", package_hash),
        Listing::new("Token Holders", |report, holder: &FtOwnership| {
            report
                .field("Owner", format_hash(holder.owner_hash.as_deref()))
                .detail("Balance", format_amount(holder.balance.as_ref()));
        }),
    )
    .await
}

pub async fn account_balances(
    api: &NetworkEndpoint,
    identifier: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.ft().account_ownership(identifier, page),
        page,
        format!("No fungible token balances found for account: {}", identifier),
        Listing::new("Account Fungible Token Balances", |report, token: &FtOwnership| {
            report.field("Token", format_hash(token.contract_package_hash.as_deref()));
            if let Some(package) = &token.contract_package {
                report.detail("Name", or_na(package.name.as_deref()));
            }
            report.detail("Balance", format_amount(token.balance.as_ref()));
        }),
    )
    .await
}

fn transfer_lines(report: &mut Report, action: &FtAction) {
    report
        .detail("From", format_hash(action.sender()))
        .detail("To", format_hash(action.recipient()))
        .line(format_args!(
            "  Amount: {} | {}",
            format_amount(action.amount.as_ref()),
            format_timestamp(action.timestamp.as_ref())
        ));
}

fn action_row(report: &mut Report, action: &FtAction) {
    report
        .field("Deploy", format_hash(action.deploy_hash.as_deref()))
        .detail("Token", format_hash(action.contract_package_hash.as_deref()));
    transfer_lines(report, action);
}

pub async fn actions(api: &NetworkEndpoint, page: PageRequest) -> ReportResult {
    paged(
        api.ft().actions(page),
        page,
        "No fungible token actions found.".to_string(),
        Listing::new("Fungible Token Actions", action_row),
    )
    .await
}

pub async fn account_actions(
    api: &NetworkEndpoint,
    identifier: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.ft().account_actions(identifier, page),
        page,
        format!("No fungible token actions found for account: {}", identifier),
        Listing::new("Account Fungible Token Actions", action_row),
    )
    .await
}

pub async fn package_actions(
    api: &NetworkEndpoint,
    package_hash: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.ft().package_actions(package_hash, page),
        page,
        format!("No fungible token actions found for contract package: {}", package_hash),
        Listing::new("Contract Package FT Actions", |report, action: &FtAction| {
            report.field("Deploy", format_hash(action.deploy_hash.as_deref()));
            transfer_lines(report, action);
        }),
    )
    .await
}
