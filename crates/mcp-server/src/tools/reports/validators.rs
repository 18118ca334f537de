//! Validators, bidders, delegators and rewards

use cspr_cloud::models::{Bidder, Delegation, Performance, Reward, Validator};
use cspr_cloud::{NetworkEndpoint, PageRequest};
use explorer_core::format::{
    display_or, format_amount, format_bool, format_count, format_hash, format_percentage,
    format_score, format_timestamp, motes_to_cspr, PLACEHOLDER,
};
use explorer_core::Report;

use crate::tools::render::{paged, single, Listing, ReportResult, ToolError};

/// Current era from the auction metrics; validator queries require it
async fn current_era(api: &NetworkEndpoint, unavailable: &str) -> Result<u64, ToolError> {
    api.auction()
        .metrics()
        .await?
        .and_then(|metrics| metrics.current_era_id)
        .ok_or_else(|| ToolError::Unavailable(unavailable.to_string()))
}

pub async fn validators(api: &NetworkEndpoint, page: PageRequest) -> ReportResult {
    let era_id = current_era(
        api,
        "Unable to determine current era. Cannot fetch validators.",
    )
    .await?;

    paged(
        api.validators().list(era_id, page),
        page,
        "No validators found.".to_string(),
        Listing::new("Validators", |report, v: &Validator| {
            report
                .line(format_args!(
                    "- **Rank #{}** | **Active:** {}",
                    display_or(v.rank, ""),
                    format_bool(v.is_active.unwrap_or(false))
                ))
                .detail("Public Key", format_hash(v.public_key.as_deref()))
                .line(format_args!(
                    "  Fee: {} | Delegators: {}",
                    format_percentage(v.fee),
                    format_count(v.delegators_number)
                ))
                .line(format_args!(
                    "  Self Stake: {} | Delegators Stake: {}",
                    motes_to_cspr(&v.self_stake),
                    motes_to_cspr(&v.delegators_stake)
                ))
                .detail("Total Stake", motes_to_cspr(&v.total_stake))
                .detail("Network Share", format_percentage(v.network_share));
        }),
    )
    .await
}

pub async fn validator_info(api: &NetworkEndpoint, public_key: &str) -> ReportResult {
    let era_id = current_era(
        api,
        "Unable to determine current era. Cannot fetch validator info.",
    )
    .await?;

    single(
        api.validators().get(public_key, era_id),
        format!("Validator not found: {}", public_key),
        |v: &Validator, report| {
            report
                .heading("Validator Information")
                .field("Rank", format_args!("#{}", display_or(v.rank, "")))
                .field("Public Key", format_hash(v.public_key.as_deref()))
                .field("Active", format_bool(v.is_active.unwrap_or(false)))
                .field("Era ID", display_or(v.era_id, PLACEHOLDER))
                .field("Fee", format_percentage(v.fee))
                .field("Delegators", format_count(v.delegators_number))
                .field("Self Stake", motes_to_cspr(&v.self_stake))
                .field("Delegators Stake", motes_to_cspr(&v.delegators_stake))
                .field("Total Stake", motes_to_cspr(&v.total_stake))
                .field("Self Share", format_percentage(v.self_share))
                .field("Network Share", format_percentage(v.network_share));
        },
    )
    .await
}

pub async fn validator_delegations(
    api: &NetworkEndpoint,
    public_key: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.delegations().by_validator(public_key, page),
        page,
        format!("No delegations found for validator: {}", public_key),
        Listing::new("Validator Delegations", |report, delegation: &Delegation| {
            report
                .field("Delegator", format_hash(delegation.public_key.as_deref()))
                .detail("Staked Amount", motes_to_cspr(&delegation.stake));
        }),
    )
    .await
}

fn reward_row(report: &mut Report, reward: &Reward) {
    report
        .field("Era", display_or(reward.era_id, PLACEHOLDER))
        .detail("Amount", motes_to_cspr(&reward.amount))
        .detail("Timestamp", format_timestamp(reward.timestamp.as_ref()));
}

pub async fn validator_rewards(
    api: &NetworkEndpoint,
    public_key: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.validators().rewards(public_key, page),
        page,
        format!("No rewards found for validator: {}", public_key),
        Listing::new("Validator Rewards", reward_row),
    )
    .await
}

pub async fn validator_era_rewards(
    api: &NetworkEndpoint,
    public_key: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.validators().era_rewards(public_key, page),
        page,
        format!("No era rewards found for validator: {}", public_key),
        Listing::new("Validator Era Rewards", reward_row),
    )
    .await
}

pub async fn validator_total_rewards(api: &NetworkEndpoint, public_key: &str) -> ReportResult {
    let total = api.validators().total_rewards(public_key).await?;

    let mut report = Report::new();
    report
        .heading("Validator Total Rewards")
        .field("Public Key", format_hash(Some(public_key)))
        .field("Total Rewards", motes_to_cspr(&total));
    Ok(report.finish())
}

fn era_label(performance: &Performance) -> String {
    format!("Era {}", display_or(performance.era_id, PLACEHOLDER))
}

pub async fn validator_performance(
    api: &NetworkEndpoint,
    public_key: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.validators().performance(public_key, page),
        page,
        format!("No performance data found for validator: {}", public_key),
        Listing::new("Validator Historical Performance", |report, perf: &Performance| {
            report.field(
                &era_label(perf),
                format_args!("Score: {}", format_score(perf.score)),
            );
        })
        .compact(),
    )
    .await
}

pub async fn validator_average_performance(
    api: &NetworkEndpoint,
    public_key: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.validators().average_performance(public_key, page),
        page,
        format!("No average performance data found for validator: {}", public_key),
        Listing::new(
            "Validator Historical Average Performance",
            |report, perf: &Performance| {
                report.field(
                    &era_label(perf),
                    format_args!("Average Score: {}", format_score(perf.average_score)),
                );
            },
        )
        .compact(),
    )
    .await
}

pub async fn validators_average_performance(
    api: &NetworkEndpoint,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.validators().all_average_performance(page),
        page,
        "No validators average performance data found.".to_string(),
        Listing::new(
            "Validators Historical Average Performance",
            |report, perf: &Performance| {
                report.field(
                    &era_label(perf),
                    format_args!(
                        "{} | Score: {}",
                        format_hash(perf.public_key.as_deref()),
                        format_score(perf.score)
                    ),
                );
            },
        )
        .compact(),
    )
    .await
}

pub async fn bidder(api: &NetworkEndpoint, public_key: &str) -> ReportResult {
    single(
        api.bidders().get(public_key),
        format!("Bidder not found: {}", public_key),
        |bidder: &Bidder, report| {
            report
                .heading("Bidder Information")
                .field("Public Key", format_hash(bidder.public_key.as_deref()))
                .field("Rank", format_args!("#{}", display_or(bidder.rank, PLACEHOLDER)))
                .field("Active", format_bool(bidder.is_active.unwrap_or(false)))
                .field("Fee", format_args!("{}%", display_or(bidder.fee, PLACEHOLDER)))
                .field("Self Stake", motes_to_cspr(&bidder.self_stake))
                .field("Total Stake", motes_to_cspr(&bidder.total_stake))
                .field("Self Share", format_amount(bidder.self_share.as_ref()))
                .field("Network Share", format_amount(bidder.network_share.as_ref()));
        },
    )
    .await
}

pub async fn bidders(api: &NetworkEndpoint, page: PageRequest) -> ReportResult {
    paged(
        api.bidders().list(page),
        page,
        "No bidders found.".to_string(),
        Listing::new("Bidders", |report, b: &Bidder| {
            report
                .line(format_args!(
                    "- **Rank #{}** | **Active:** {}",
                    display_or(b.rank, ""),
                    format_bool(b.is_active.unwrap_or(false))
                ))
                .detail("Public Key", format_hash(b.public_key.as_deref()))
                .line(format_args!(
                    "  Fee: {}% | Self Stake: {}",
                    display_or(b.fee, PLACEHOLDER),
                    motes_to_cspr(&b.self_stake)
                ))
                .line(format_args!(
                    "  Total Stake: {} | Network Share: {}",
                    motes_to_cspr(&b.total_stake),
                    format_amount(b.network_share.as_ref())
                ));
        }),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::render::conclude;
    use crate::tools::reports::mock;
    use axum::{extract::Query, routing::get, Json, Router};
    use serde_json::{json, Value};
    use std::collections::HashMap;

    fn upstream(metrics: Value) -> Router {
        Router::new()
            .route(
                "/auction-metrics",
                get(move || {
                    let metrics = metrics.clone();
                    async move { mock::envelope(metrics) }
                }),
            )
            .route(
                "/validators",
                get(|Query(query): Query<HashMap<String, String>>| async move {
                    // Echo the era the caller asked for
                    let era: u64 = query["era_id"].parse().unwrap();
                    mock::paged(
                        json!([{
                            "public_key": "01val",
                            "era_id": era,
                            "rank": 1,
                            "is_active": true,
                            "fee": 5.0,
                            "delegators_number": 1234,
                            "self_stake": "1000000000000",
                            "delegators_stake": "0",
                            "total_stake": "1000000000000",
                            "network_share": 1.5
                        }]),
                        100,
                        100,
                    )
                }),
            )
            .route(
                "/validators/:key",
                get(|Query(query): Query<HashMap<String, String>>| async move {
                    Json(json!({"data": {"public_key": "01val", "era_id": query["era_id"].parse::<u64>().unwrap()}}))
                }),
            )
            .route(
                "/validators/:key/historical-performance",
                get(|| async {
                    mock::paged(json!([{"era_id": 10, "score": 0.98766}, {"score": 1.0}]), 2, 1)
                }),
            )
    }

    #[tokio::test]
    async fn test_validators_use_current_era() {
        let api = mock::spawn(upstream(json!({"current_era_id": 15302}))).await;
        let text = validators(&api, PageRequest::new(1, 1)).await.unwrap();

        assert_eq!(
            text,
            "## Validators (Page 1, 100 total)\n\
             ---\n\
             - **Rank #1** | **Active:** Yes\n\
             \x20 Public Key: 01val\n\
             \x20 Fee: 5.00% | Delegators: 1,234\n\
             \x20 Self Stake: 1,000.000000000 CSPR | Delegators Stake: 0.000000000 CSPR\n\
             \x20 Total Stake: 1,000.000000000 CSPR\n\
             \x20 Network Share: 1.50%\n\
             ---\n\
             Page 1 of 100\n"
        );

        let info = validator_info(&api, "01val").await.unwrap();
        assert!(info.contains("- **Era ID:** 15302\n"));
        assert!(info.contains("- **Rank:** #\n"));
    }

    #[tokio::test]
    async fn test_missing_era_short_circuits() {
        let api = mock::spawn(upstream(json!({"active_validator_number": 100}))).await;

        let text = conclude("retrieving validators", validators(&api, PageRequest::default()).await);
        assert_eq!(text, "Unable to determine current era. Cannot fetch validators.");

        let text = conclude("retrieving validator info", validator_info(&api, "01val").await);
        assert_eq!(text, "Unable to determine current era. Cannot fetch validator info.");
    }

    #[tokio::test]
    async fn test_era_lookup_failure_is_an_error() {
        let api = mock::failing("upstream unavailable").await;
        let text = conclude("retrieving validators", validators(&api, PageRequest::default()).await);
        assert_eq!(text, "Error retrieving validators: upstream unavailable");
    }

    #[tokio::test]
    async fn test_performance_rows_are_compact() {
        let api = mock::spawn(upstream(json!({}))).await;
        let text = validator_performance(&api, "01val", PageRequest::default())
            .await
            .unwrap();

        assert_eq!(
            text,
            "## Validator Historical Performance (Page 1, 2 total)\n\
             - **Era 10:** Score: 0.9877\n\
             - **Era N/A:** Score: 1\n\
             ---\n\
             Page 1 of 1\n"
        );
    }
}
