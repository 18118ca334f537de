use cspr_cloud::models::Block;
use cspr_cloud::{NetworkEndpoint, PageRequest};
use explorer_core::format::{display_or, format_bool, format_hash, format_timestamp, PLACEHOLDER};
use explorer_core::Report;

use crate::tools::render::{paged, short, single, Listing, ReportResult};

pub async fn block(api: &NetworkEndpoint, block_hash: &str) -> ReportResult {
    single(
        api.blocks().get(block_hash),
        format!("Block not found: {}", block_hash),
        |block: &Block, report| {
            report
                .heading("Block Information")
                .field("Block Height", display_or(block.block_height, PLACEHOLDER))
                .field("Block Hash", format_hash(block.block_hash.as_deref()))
                .field("Parent Hash", format_hash(block.parent_block_hash.as_deref()))
                .field("State Root Hash", format_hash(block.state_root_hash.as_deref()))
                .field("Era ID", display_or(block.era_id, PLACEHOLDER))
                .field("Proposer", format_hash(block.proposer_public_key.as_deref()))
                .field("Native Transfers", block.native_transfers_number.unwrap_or(0))
                .field("Contract Calls", block.contract_calls_number.unwrap_or(0))
                .field("Switch Block", format_bool(block.is_switch_block.unwrap_or(false)))
                .field("Timestamp", format_timestamp(block.timestamp.as_ref()));
        },
    )
    .await
}

/// Two-line summary used by block listings
fn block_row(report: &mut Report, block: &Block) {
    report
        .line(format_args!(
            "- **Height:** {} | **Hash:** {}...",
            display_or(block.block_height, PLACEHOLDER),
            short(block.block_hash.as_deref(), 16)
        ))
        .line(format_args!(
            "  Era: {} | Transfers: {} | Calls: {} | {}",
            display_or(block.era_id, ""),
            block.native_transfers_number.unwrap_or(0),
            block.contract_calls_number.unwrap_or(0),
            format_timestamp(block.timestamp.as_ref())
        ));
}

pub async fn latest_blocks(api: &NetworkEndpoint, page: PageRequest) -> ReportResult {
    paged(
        api.blocks().list(page),
        page,
        "No blocks found.".to_string(),
        Listing::new("Latest Blocks", block_row),
    )
    .await
}

pub async fn validator_blocks(
    api: &NetworkEndpoint,
    public_key: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.blocks().by_validator(public_key, page),
        page,
        format!("No blocks found for validator: {}", public_key),
        Listing::new("Validator Blocks", block_row),
    )
    .await
}
