use cspr_cloud::models::{Account, ContractPackage, Delegation, Deploy, Reward};
use cspr_cloud::{NetworkEndpoint, PageRequest};
use explorer_core::format::{
    display_or, format_hash, format_timestamp, motes_to_cspr, or_na, PLACEHOLDER,
};
use explorer_core::Report;

use crate::tools::render::{paged, single, Listing, ReportResult};

pub async fn account_info(api: &NetworkEndpoint, identifier: &str) -> ReportResult {
    single(
        api.accounts().get(identifier),
        format!("Account not found: {}", identifier),
        |account: &Account, report| {
            report
                .heading("Account Information")
                .field("Public Key", format_hash(account.public_key.as_deref()))
                .field("Account Hash", format_hash(account.account_hash.as_deref()))
                .field("Balance", motes_to_cspr(&account.balance))
                .field("Staked Balance", motes_to_cspr(&account.staked_balance))
                .field("Delegated Balance", motes_to_cspr(&account.delegated_balance))
                .field("Undelegated Balance", motes_to_cspr(&account.undelegated_balance))
                .field("Auction Status", or_na(account.auction_status.as_deref()))
                .field("Main Purse", format_hash(account.main_purse_uref.as_deref()));
        },
    )
    .await
}

pub async fn account_balance(api: &NetworkEndpoint, identifier: &str) -> ReportResult {
    single(
        api.accounts().get(identifier),
        format!("Account not found: {}", identifier),
        |account: &Account, report| {
            let total: u128 = [
                &account.balance,
                &account.staked_balance,
                &account.delegated_balance,
            ]
            .iter()
            .map(|amount| amount.as_ref().and_then(|a| a.motes()).unwrap_or(0))
            .sum();

            report
                .heading("Account Balance")
                .field("Public Key", format_hash(account.public_key.as_deref()))
                .field("Liquid Balance", motes_to_cspr(&account.balance))
                .field("Staked Balance", motes_to_cspr(&account.staked_balance))
                .field("Delegated Balance", motes_to_cspr(&account.delegated_balance))
                .field("Total (liquid + staked + delegated)", motes_to_cspr(total));
        },
    )
    .await
}

fn account_deploy_row(report: &mut Report, deploy: &Deploy) {
    report
        .field("Deploy Hash", format_hash(deploy.deploy_hash.as_deref()))
        .field("Status", or_na(deploy.status.as_deref()))
        .field("Cost", motes_to_cspr(&deploy.cost))
        .field("Block Height", display_or(deploy.block_height, PLACEHOLDER))
        .field("Timestamp", format_timestamp(deploy.timestamp.as_ref()));
    if let Some(error) = deploy.error_message.as_deref().filter(|e| !e.is_empty()) {
        report.field("Error", error);
    }
}

pub async fn account_deploys(
    api: &NetworkEndpoint,
    public_key: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.deploys().by_account(public_key, page),
        page,
        format!("No deploys found for account: {}", public_key),
        Listing::new("Account Deploys", account_deploy_row),
    )
    .await
}

pub async fn account_delegations(
    api: &NetworkEndpoint,
    public_key: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.delegations().by_account(public_key, page),
        page,
        format!("No delegations found for account: {}", public_key),
        Listing::new("Account Delegations", |report, delegation: &Delegation| {
            report
                .field("Validator", format_hash(delegation.validator_public_key.as_deref()))
                .field("Staked Amount", motes_to_cspr(&delegation.stake));
        }),
    )
    .await
}

pub async fn accounts(api: &NetworkEndpoint, page: PageRequest) -> ReportResult {
    paged(
        api.accounts().list(page),
        page,
        "No accounts found.".to_string(),
        Listing::new("Accounts", |report, account: &Account| {
            report
                .field("Public Key", format_hash(account.public_key.as_deref()))
                .detail("Account Hash", format_hash(account.account_hash.as_deref()))
                .detail("Balance", motes_to_cspr(&account.balance));
        }),
    )
    .await
}

pub async fn account_contract_packages(
    api: &NetworkEndpoint,
    public_key: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.contracts().account_packages(public_key, page),
        page,
        format!("No contract packages found for account: {}", public_key),
        Listing::new("Account Contract Packages", |report, package: &ContractPackage| {
            report
                .field("Package Hash", format_hash(package.contract_package_hash.as_deref()))
                .detail("Name", or_na(package.name.as_deref()))
                .detail("Description", or_na(package.description.as_deref()))
                .detail("Owner", format_hash(package.owner_public_key.as_deref()))
                .detail("Created", format_timestamp(package.timestamp.as_ref()));
        }),
    )
    .await
}

pub async fn account_delegation_rewards(
    api: &NetworkEndpoint,
    public_key: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.delegations().account_rewards(public_key, page),
        page,
        format!("No delegation rewards found for account: {}", public_key),
        Listing::new("Account Delegation Rewards", |report, reward: &Reward| {
            report
                .field("Era", display_or(reward.era_id, PLACEHOLDER))
                .detail("Validator", format_hash(reward.validator_public_key.as_deref()))
                .detail("Amount", motes_to_cspr(&reward.amount))
                .detail("Timestamp", format_timestamp(reward.timestamp.as_ref()));
        }),
    )
    .await
}

pub async fn total_account_delegation_rewards(
    api: &NetworkEndpoint,
    public_key: &str,
) -> ReportResult {
    let total = api.delegations().account_total_rewards(public_key).await?;

    let mut report = Report::new();
    report
        .heading("Total Account Delegation Rewards")
        .field("Public Key", format_hash(Some(public_key)))
        .field("Total Rewards", motes_to_cspr(&total));
    Ok(report.finish())
}

pub async fn total_validator_delegator_rewards(
    api: &NetworkEndpoint,
    public_key: &str,
) -> ReportResult {
    let total = api.delegations().validator_total_rewards(public_key).await?;

    let mut report = Report::new();
    report
        .heading("Total Validator Delegator Rewards")
        .field("Validator Public Key", format_hash(Some(public_key)))
        .field("Total Rewards", motes_to_cspr(&total));
    Ok(report.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::render::{conclude, ToolError};
    use crate::tools::reports::mock;
    use axum::{extract::Path, routing::get, Router};
    use serde_json::json;

    fn upstream() -> Router {
        Router::new()
            .route(
                "/accounts/:id",
                get(|Path(id): Path<String>| async move {
                    mock::envelope(json!({
                        "public_key": id,
                        "account_hash": "account-hash-9f",
                        "balance": "1500000000000",
                        "staked_balance": 2000000000u64,
                        "delegated_balance": null,
                        "auction_status": "active_bid",
                    }))
                }),
            )
            .route(
                "/accounts/:id/delegations",
                get(|| async {
                    mock::paged(
                        json!([{"validator_public_key": "01validator", "stake": "5000000000"}]),
                        1,
                        1,
                    )
                }),
            )
            .route(
                "/accounts/:id/total-delegation-rewards",
                get(|| async { mock::envelope(json!("42000000000")) }),
            )
    }

    #[tokio::test]
    async fn test_account_info_layout() {
        let api = mock::spawn(upstream()).await;
        let text = account_info(&api, "01abc").await.unwrap();

        assert_eq!(
            text,
            "## Account Information\n\
             - **Public Key:** 01abc\n\
             - **Account Hash:** account-hash-9f\n\
             - **Balance:** 1,500.000000000 CSPR\n\
             - **Staked Balance:** 2.000000000 CSPR\n\
             - **Delegated Balance:** N/A\n\
             - **Undelegated Balance:** N/A\n\
             - **Auction Status:** active_bid\n\
             - **Main Purse:** N/A\n"
        );
    }

    #[tokio::test]
    async fn test_balance_total_skips_missing_parts() {
        let api = mock::spawn(upstream()).await;
        let text = account_balance(&api, "01abc").await.unwrap();

        assert!(text.contains("- **Liquid Balance:** 1,500.000000000 CSPR\n"));
        assert!(text.contains("- **Total (liquid + staked + delegated):** 1,502.000000000 CSPR\n"));
    }

    #[tokio::test]
    async fn test_delegations_page() {
        let api = mock::spawn(upstream()).await;
        let text = account_delegations(&api, "01abc", PageRequest::default())
            .await
            .unwrap();

        assert_eq!(
            text,
            "## Account Delegations (Page 1, 1 total)\n\
             ---\n\
             - **Validator:** 01validator\n\
             - **Staked Amount:** 5.000000000 CSPR\n\
             ---\n\
             Page 1 of 1\n"
        );
    }

    #[tokio::test]
    async fn test_not_found_sentences() {
        let api = mock::empty().await;

        let missing = account_info(&api, "01zz").await;
        assert!(matches!(missing, Err(ToolError::NotFound(s)) if s == "Account not found: 01zz"));

        let none = accounts(&api, PageRequest::default()).await;
        assert_eq!(conclude("retrieving accounts", none), "No accounts found.");
    }

    #[tokio::test]
    async fn test_total_rewards() {
        let api = mock::spawn(upstream()).await;
        let text = total_account_delegation_rewards(&api, "01abc").await.unwrap();
        assert_eq!(
            text,
            "## Total Account Delegation Rewards\n- **Public Key:** 01abc\n- **Total Rewards:** 42.000000000 CSPR\n"
        );
    }

    #[tokio::test]
    async fn test_upstream_failure_becomes_error_line() {
        let api = mock::failing("rate limit exceeded").await;
        let text = conclude(
            "retrieving account deploys",
            account_deploys(&api, "01abc", PageRequest::default()).await,
        );
        assert_eq!(text, "Error retrieving account deploys: rate limit exceeded");
    }
}
