//! Non-fungible tokens: collections, single tokens, actions and ownership

use cspr_cloud::models::{NftAction, NftOwnership, NftToken};
use cspr_cloud::{NetworkEndpoint, PageRequest};
use explorer_core::format::{display_or, format_bool, format_count, format_hash, format_timestamp, or_na};
use explorer_core::Report;

use crate::tools::render::{paged, reference_table, single, Listing, ReportResult};

pub async fn collection(
    api: &NetworkEndpoint,
    package_hash: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.nft().by_package(package_hash, page),
        page,
        format!("No NFTs found in collection: {}", package_hash),
        Listing::new("NFT Collection", |report, nft: &NftToken| {
            report
                .field("Token ID", or_na(nft.token_id.as_deref()))
                .detail("Owner", format_hash(nft.owner()))
                .line(format_args!(
                    "  Burned: {} | Minted at Block: {}",
                    format_bool(nft.is_burned.unwrap_or(false)),
                    display_or(nft.block_height, "")
                ))
                .detail("Created", format_timestamp(nft.timestamp.as_ref()));
        })
        .preamble(format!("Contract Package: {}", package_hash)),
    )
    .await
}

pub async fn account_nfts(
    api: &NetworkEndpoint,
    identifier: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.nft().by_account(identifier, page),
        page,
        format!("No NFTs found for account: {}", identifier),
        Listing::new("Account NFTs", |report, nft: &NftToken| {
            report
                .field("Token ID", or_na(nft.token_id.as_deref()))
                .detail("Collection", format_hash(nft.contract_package_hash.as_deref()));
            if let Some(package) = &nft.contract_package {
                report.detail("Name", or_na(package.name.as_deref()));
            }
            report
                .detail("Burned", format_bool(nft.is_burned.unwrap_or(false)))
                .detail("Created", format_timestamp(nft.timestamp.as_ref()));
        }),
    )
    .await
}

pub async fn nft(api: &NetworkEndpoint, package_hash: &str, token_id: &str) -> ReportResult {
    single(
        api.nft().get(package_hash, token_id),
        format!("NFT not found: {} / {}", package_hash, token_id),
        |nft: &NftToken, report| {
            report
                .heading("NFT Details")
                .field("Contract Package", format_hash(nft.contract_package_hash.as_deref()))
                .field("Token ID", or_na(nft.token_id.as_deref()))
                .field("Owner", format_hash(nft.owner()))
                .field("Burned", format_bool(nft.is_burned.unwrap_or(false)))
                .field("Block Height", display_or(nft.block_height, ""))
                .field("Timestamp", format_timestamp(nft.timestamp.as_ref()))
                .field("Token Standard ID", display_or(nft.token_standard_id, ""));
        },
    )
    .await
}

pub async fn standards(api: &NetworkEndpoint) -> ReportResult {
    reference_table(
        api.nft().standards(),
        "NFT Standards",
        "No NFT standards found.".to_string(),
    )
    .await
}

pub async fn metadata_statuses(api: &NetworkEndpoint) -> ReportResult {
    reference_table(
        api.nft().metadata_statuses(),
        "NFT Metadata Statuses",
        "No NFT metadata statuses found.".to_string(),
    )
    .await
}

pub async fn action_types(api: &NetworkEndpoint) -> ReportResult {
    reference_table(
        api.nft().action_types(),
        "NFT Action Types",
        "No NFT action types found.".to_string(),
    )
    .await
}

fn movement(report: &mut Report, action: &NftAction) {
    report
        .detail("From", format_hash(action.sender()))
        .detail("To", format_hash(action.recipient()))
        .line(format_args!(
            "  Action ID: {} | {}",
            display_or(action.nft_action_id, ""),
            format_timestamp(action.timestamp.as_ref())
        ));
}

fn deploy_line(report: &mut Report, action: &NftAction) {
    report.field("Deploy", format_hash(action.deploy_hash.as_deref()));
}

pub async fn token_actions(
    api: &NetworkEndpoint,
    package_hash: &str,
    token_id: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.nft().token_actions(package_hash, token_id, page),
        page,
        format!("No actions found for token {} in collection: {}", token_id, package_hash),
        Listing::new("NFT Token Actions", |report, action: &NftAction| {
            deploy_line(report, action);
            movement(report, action);
        })
        .preamble(format!("Collection: {} | Token: {}", package_hash, token_id)),
    )
    .await
}

pub async fn account_actions(
    api: &NetworkEndpoint,
    identifier: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.nft().account_actions(identifier, page),
        page,
        format!("No NFT actions found for account: {}", identifier),
        Listing::new("Account NFT Actions", |report, action: &NftAction| {
            deploy_line(report, action);
            report.line(format_args!(
                "  Token: {} | Collection: {}",
                or_na(action.token_id.as_deref()),
                format_hash(action.contract_package_hash.as_deref())
            ));
            movement(report, action);
        }),
    )
    .await
}

pub async fn package_actions(
    api: &NetworkEndpoint,
    package_hash: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.nft().package_actions(package_hash, page),
        page,
        format!("No NFT actions found for contract package: {}", package_hash),
        Listing::new("Contract Package NFT Actions", |report, action: &NftAction| {
            deploy_line(report, action);
            report.detail("Token", or_na(action.token_id.as_deref()));
            movement(report, action);
        }),
    )
    .await
}

pub async fn package_ownership(
    api: &NetworkEndpoint,
    package_hash: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.nft().package_ownership(package_hash, page),
        page,
        format!("No NFT ownership data found for contract package: {}", package_hash),
        Listing::new("NFT Ownership by Contract Package", |report, owner: &NftOwnership| {
            report
                .field("Owner", format_hash(owner.owner()))
                .detail("Tokens Owned", format_count(owner.tokens_number));
        }),
    )
    .await
}

pub async fn account_ownership(
    api: &NetworkEndpoint,
    identifier: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.nft().account_ownership(identifier, page),
        page,
        format!("No NFT ownership data found for account: {}", identifier),
        Listing::new("Account NFT Ownership", |report, ownership: &NftOwnership| {
            report.field("Collection", format_hash(ownership.contract_package_hash.as_deref()));
            if let Some(package) = &ownership.contract_package {
                report.detail("Name", or_na(package.name.as_deref()));
            }
            report.detail("Tokens Owned", format_count(ownership.tokens_number));
        }),
    )
    .await
}
