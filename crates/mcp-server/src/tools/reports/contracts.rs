use cspr_cloud::models::{Contract, ContractPackage, EntryPointCosts};
use cspr_cloud::{NetworkEndpoint, PageRequest};
use explorer_core::format::{
    display_or, format_amount, format_bool, format_hash, format_timestamp, or_na, PLACEHOLDER,
};

use crate::tools::render::{listing, paged, reference_table, single, Listing, ReportResult};

fn disabled(contract: &Contract) -> &'static str {
    format_bool(contract.is_disabled.unwrap_or(false))
}

pub async fn contract(api: &NetworkEndpoint, contract_hash: &str) -> ReportResult {
    single(
        api.contracts().get(contract_hash),
        format!("Contract not found: {}", contract_hash),
        |contract: &Contract, report| {
            report
                .heading("Contract Information")
                .field("Contract Hash", format_hash(contract.contract_hash.as_deref()))
                .field("Package Hash", format_hash(contract.contract_package_hash.as_deref()))
                .field("Deploy Hash", format_hash(contract.deploy_hash.as_deref()))
                .field("Block Height", display_or(contract.block_height, ""))
                .field("Contract Type ID", display_or(contract.contract_type_id, PLACEHOLDER))
                .field("Version", display_or(contract.contract_version, PLACEHOLDER))
                .field("Disabled", disabled(contract))
                .field("Timestamp", format_timestamp(contract.timestamp.as_ref()));

            if let Some(package) = &contract.contract_package {
                report
                    .blank()
                    .subheading("Contract Package")
                    .field("Name", or_na(package.name.as_deref()))
                    .field("Description", or_na(package.description.as_deref()))
                    .field("Owner", format_hash(package.owner_public_key.as_deref()));
            }
        },
    )
    .await
}

pub async fn contract_entry_points(api: &NetworkEndpoint, contract_hash: &str) -> ReportResult {
    listing(
        api.contracts().entry_points(contract_hash),
        format!("No entry points found for contract: {}", contract_hash),
        |entry_points, report| {
            report
                .heading(format_args!(
                    "Contract Entry Points ({} total)",
                    display_or(entry_points.item_count, "")
                ))
                .line(format_args!("Contract: {}", contract_hash))
                .blank();
            for entry_point in &entry_points.data {
                report.line(format_args!(
                    "- **{}** (ID: {})",
                    entry_point.name.as_deref().unwrap_or("unnamed"),
                    display_or(entry_point.id, "")
                ));
            }
        },
    )
    .await
}

pub async fn contracts(api: &NetworkEndpoint, page: PageRequest) -> ReportResult {
    paged(
        api.contracts().list(page),
        page,
        "No contracts found.".to_string(),
        Listing::new("Contracts", |report, contract: &Contract| {
            report
                .field("Contract Hash", format_hash(contract.contract_hash.as_deref()))
                .detail("Package", format_hash(contract.contract_package_hash.as_deref()))
                .line(format_args!(
                    "  Version: {} | Disabled: {}",
                    display_or(contract.contract_version, PLACEHOLDER),
                    disabled(contract)
                ))
                .detail("Timestamp", format_timestamp(contract.timestamp.as_ref()));
        }),
    )
    .await
}

pub async fn contract_types(api: &NetworkEndpoint) -> ReportResult {
    reference_table(
        api.contracts().types(),
        "Contract Types",
        "No contract types found.".to_string(),
    )
    .await
}

/// Cost statistics are reported as the raw values upstream returns
pub async fn entry_point_costs(
    api: &NetworkEndpoint,
    contract_hash: &str,
    entry_point: &str,
) -> ReportResult {
    single(
        api.contracts().entry_point_costs(contract_hash, entry_point),
        format!(
            "No cost data found for entry point '{}' on contract: {}",
            entry_point, contract_hash
        ),
        |cost: &EntryPointCosts, report| {
            report
                .heading("Entry Point Cost Statistics")
                .field("Contract", contract_hash)
                .field("Entry Point", entry_point)
                .field("Deploys", display_or(cost.deploys_num, PLACEHOLDER))
                .field("Since", format_timestamp(cost.since.as_ref()))
                .field("Average Cost", format_amount(cost.avg_cost.as_ref()))
                .field("Min Cost", format_amount(cost.min_cost.as_ref()))
                .field("Max Cost", format_amount(cost.max_cost.as_ref()))
                .field("Average Payment", format_amount(cost.avg_payment_amount.as_ref()))
                .field("Min Payment", format_amount(cost.min_payment_amount.as_ref()))
                .field("Max Payment", format_amount(cost.max_payment_amount.as_ref()));
        },
    )
    .await
}

pub async fn contract_packages(api: &NetworkEndpoint, page: PageRequest) -> ReportResult {
    paged(
        api.contracts().packages(page),
        page,
        "No contract packages found.".to_string(),
        Listing::new("Contract Packages", |report, package: &ContractPackage| {
            report
                .field("Package Hash", format_hash(package.contract_package_hash.as_deref()))
                .line(format_args!(
                    "  Name: {} | Owner: {}",
                    or_na(package.name.as_deref()),
                    format_hash(package.owner_public_key.as_deref())
                ))
                .detail("Created", format_timestamp(package.timestamp.as_ref()));
        }),
    )
    .await
}

pub async fn contracts_by_package(
    api: &NetworkEndpoint,
    package_hash: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.contracts().by_package(package_hash, page),
        page,
        format!("No contracts found for package: {}", package_hash),
        Listing::new("Contracts by Package", |report, contract: &Contract| {
            report
                .field("Contract Hash", format_hash(contract.contract_hash.as_deref()))
                .line(format_args!(
                    "  Version: {} | Disabled: {}",
                    display_or(contract.contract_version, PLACEHOLDER),
                    disabled(contract)
                ))
                .line(format_args!(
                    "  Block Height: {} | Timestamp: {}",
                    display_or(contract.block_height, ""),
                    format_timestamp(contract.timestamp.as_ref())
                ));
        })
        .preamble(format!("Package: {}", package_hash)),
    )
    .await
}
