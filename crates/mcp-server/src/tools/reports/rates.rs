//! Fungible token prices: fiat rates and token-to-token DEX rates, each as
//! latest value, history, daily aggregate and daily history.

use cspr_cloud::models::FtRate;
use cspr_cloud::{NetworkEndpoint, PageRequest};
use explorer_core::format::{display_or, format_amount, format_hash, format_score, or_na, PLACEHOLDER};
use explorer_core::Report;

use crate::tools::render::{paged, single, Listing, ReportResult};

fn token_header(report: &mut Report, title: &str, rate: &FtRate) {
    report
        .heading(title)
        .field("Token", format_hash(rate.token_contract_package_hash.as_deref()));
}

pub async fn rate_latest(
    api: &NetworkEndpoint,
    package_hash: &str,
    currency_id: Option<&str>,
) -> ReportResult {
    single(
        api.ft().rate_latest(package_hash, currency_id),
        format!("No rate data found for token: {}", package_hash),
        |rate: &FtRate, report| {
            token_header(report, "Latest FT Rate", rate);
            report
                .field("Currency ID", display_or(rate.currency_id, PLACEHOLDER))
                .field("Amount", format_score(rate.amount))
                .field("Volume", format_amount(rate.volume.as_ref()))
                .field("DEX ID", display_or(rate.dex_id, PLACEHOLDER))
                .field("Transaction", format_hash(rate.transaction_hash.as_deref()))
                .field("Timestamp", or_na(rate.timestamp.as_deref()));
        },
    )
    .await
}

pub async fn rates(api: &NetworkEndpoint, package_hash: &str, page: PageRequest) -> ReportResult {
    paged(
        api.ft().rates(package_hash, page),
        page,
        format!("No rate history found for token: {}", package_hash),
        Listing::new("FT Rate History", |report, rate: &FtRate| {
            report
                .line(format_args!(
                    "- **Amount:** {} | Currency: {}",
                    format_score(rate.amount),
                    display_or(rate.currency_id, PLACEHOLDER)
                ))
                .line(format_args!(
                    "  Volume: {} | DEX: {}",
                    format_amount(rate.volume.as_ref()),
                    display_or(rate.dex_id, PLACEHOLDER)
                ))
                .detail("Timestamp", or_na(rate.timestamp.as_deref()));
        }),
    )
    .await
}

pub async fn daily_rate_latest(
    api: &NetworkEndpoint,
    package_hash: &str,
    currency_id: Option<&str>,
) -> ReportResult {
    single(
        api.ft().daily_rate_latest(package_hash, currency_id),
        format!("No daily rate data found for token: {}", package_hash),
        |rate: &FtRate, report| {
            token_header(report, "Latest Daily FT Rate", rate);
            report
                .field("Currency ID", display_or(rate.currency_id, PLACEHOLDER))
                .field("Amount", format_score(rate.amount))
                .field("Volume", format_amount(rate.volume.as_ref()))
                .field("Date", or_na(rate.date.as_deref()));
        },
    )
    .await
}

pub async fn daily_rates(
    api: &NetworkEndpoint,
    package_hash: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.ft().daily_rates(package_hash, page),
        page,
        format!("No daily rate history found for token: {}", package_hash),
        Listing::new("Daily FT Rate History", |report, rate: &FtRate| {
            report
                .line(format_args!(
                    "- **Amount:** {} | Currency: {}",
                    format_score(rate.amount),
                    display_or(rate.currency_id, PLACEHOLDER)
                ))
                .line(format_args!(
                    "  Volume: {} | Date: {}",
                    format_amount(rate.volume.as_ref()),
                    or_na(rate.date.as_deref())
                ));
        }),
    )
    .await
}

fn dex_rate_fields(report: &mut Report, rate: &FtRate) {
    report
        .field("Target Token", format_hash(rate.target_token_contract_package_hash.as_deref()))
        .field("Amount", format_score(rate.amount))
        .field("Volume", format_amount(rate.volume.as_ref()))
        .field("DEX ID", display_or(rate.dex_id, PLACEHOLDER));
}

fn dex_rate_row(report: &mut Report, rate: &FtRate) {
    report
        .field("Amount", format_score(rate.amount))
        .detail("Target", format_hash(rate.target_token_contract_package_hash.as_deref()))
        .line(format_args!(
            "  Volume: {} | DEX: {}",
            format_amount(rate.volume.as_ref()),
            display_or(rate.dex_id, PLACEHOLDER)
        ));
}

pub async fn dex_rate_latest(
    api: &NetworkEndpoint,
    package_hash: &str,
    target_package_hash: Option<&str>,
) -> ReportResult {
    single(
        api.ft().dex_rate_latest(package_hash, target_package_hash),
        format!("No DEX rate data found for token: {}", package_hash),
        |rate: &FtRate, report| {
            token_header(report, "Latest FT DEX Rate", rate);
            dex_rate_fields(report, rate);
            report
                .field("Transaction", format_hash(rate.transaction_hash.as_deref()))
                .field("Timestamp", or_na(rate.timestamp.as_deref()));
        },
    )
    .await
}

pub async fn dex_rates(
    api: &NetworkEndpoint,
    package_hash: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.ft().dex_rates(package_hash, page),
        page,
        format!("No DEX rate history found for token: {}", package_hash),
        Listing::new("FT DEX Rate History", |report, rate: &FtRate| {
            dex_rate_row(report, rate);
            report.detail("Timestamp", or_na(rate.timestamp.as_deref()));
        }),
    )
    .await
}

pub async fn daily_dex_rate_latest(
    api: &NetworkEndpoint,
    package_hash: &str,
    target_package_hash: Option<&str>,
) -> ReportResult {
    single(
        api.ft().daily_dex_rate_latest(package_hash, target_package_hash),
        format!("No daily DEX rate data found for token: {}", package_hash),
        |rate: &FtRate, report| {
            token_header(report, "Latest Daily FT DEX Rate", rate);
            dex_rate_fields(report, rate);
            report.field("Date", or_na(rate.date.as_deref()));
        },
    )
    .await
}

pub async fn daily_dex_rates(
    api: &NetworkEndpoint,
    package_hash: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.ft().daily_dex_rates(package_hash, page),
        page,
        format!("No daily DEX rate history found for token: {}", package_hash),
        Listing::new("Daily FT DEX Rate History", |report, rate: &FtRate| {
            dex_rate_row(report, rate);
            report.detail("Date", or_na(rate.date.as_deref()));
        }),
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::render::conclude;
    use crate::tools::reports::mock;
    use axum::{extract::Query, routing::get, Router};
    use serde_json::json;
    use std::collections::HashMap;

    fn upstream() -> Router {
        Router::new()
            .route(
                "/ft/:hash/rates/latest",
                get(|Query(query): Query<HashMap<String, String>>| async move {
                    // Only USD is known
                    match query.get("currency_id").map(String::as_str) {
                        Some("1") | None => mock::envelope(json!({
                            "token_contract_package_hash": "p1",
                            "currency_id": 1,
                            "amount": 0.01234567,
                            "volume": "120000",
                            "dex_id": 2,
                            "timestamp": "2024-01-15T10:30:45Z"
                        })),
                        Some(_) => mock::envelope(json!(null)),
                    }
                }),
            )
            .route(
                "/ft/:hash/daily-dex-rates",
                get(|| async {
                    mock::paged(
                        json!([{
                            "target_token_contract_package_hash": "p2",
                            "amount": 3.5,
                            "volume": 99,
                            "dex_id": 1,
                            "date": "2024-01-15"
                        }]),
                        1,
                        1,
                    )
                }),
            )
    }

    #[tokio::test]
    async fn test_latest_rate_with_currency_filter() {
        let api = mock::spawn(upstream()).await;

        let text = rate_latest(&api, "p1", Some("1")).await.unwrap();
        assert_eq!(
            text,
            "## Latest FT Rate\n\
             - **Token:** p1\n\
             - **Currency ID:** 1\n\
             - **Amount:** 0.0123\n\
             - **Volume:** 120000\n\
             - **DEX ID:** 2\n\
             - **Transaction:** N/A\n\
             - **Timestamp:** 2024-01-15T10:30:45Z\n"
        );

        let text = conclude("retrieving FT rate", rate_latest(&api, "p1", Some("2")).await);
        assert_eq!(text, "No rate data found for token: p1");
    }

    #[tokio::test]
    async fn test_daily_dex_history_row() {
        let api = mock::spawn(upstream()).await;
        let text = daily_dex_rates(&api, "p1", PageRequest::default()).await.unwrap();

        assert_eq!(
            text,
            "## Daily FT DEX Rate History (Page 1, 1 total)\n\
             ---\n\
             - **Amount:** 3.5\n\
             \x20 Target: p2\n\
             \x20 Volume: 99 | DEX: 1\n\
             \x20 Date: 2024-01-15\n\
             ---\n\
             Page 1 of 1\n"
        );
    }
}
