//! CSPR fiat rates, DEXes and swaps

use cspr_cloud::models::{Currency, CurrencyRate, Swap};
use cspr_cloud::{Amount, NetworkEndpoint, PageRequest};
use explorer_core::format::{display_or, format_hash, format_timestamp, or_na, PLACEHOLDER};

use crate::tools::render::{listing, paged, single, Listing, ReportResult};

pub async fn current_currency_rate(api: &NetworkEndpoint, currency_id: &str) -> ReportResult {
    single(
        api.rates().current(currency_id),
        format!("Currency rate not found for currency ID: {}", currency_id),
        |rate: &CurrencyRate, report| {
            report
                .heading("Current Currency Rate")
                .field("Currency ID", display_or(rate.currency_id, ""))
                .field("Rate", display_or(rate.amount, PLACEHOLDER))
                .field("Timestamp", format_timestamp(rate.created.as_ref()));
        },
    )
    .await
}

pub async fn historical_currency_rates(
    api: &NetworkEndpoint,
    currency_id: &str,
    page: PageRequest,
) -> ReportResult {
    paged(
        api.rates().historical(currency_id, page),
        page,
        format!("No historical rates found for currency ID: {}", currency_id),
        Listing::new("Historical Currency Rates", |report, rate: &CurrencyRate| {
            report.line(format_args!(
                "- **Rate:** {} | **Timestamp:** {}",
                display_or(rate.amount, PLACEHOLDER),
                format_timestamp(rate.created.as_ref())
            ));
        }),
    )
    .await
}

pub async fn currencies(api: &NetworkEndpoint, page: PageRequest) -> ReportResult {
    paged(
        api.rates().currencies(page),
        page,
        "No currencies found.".to_string(),
        Listing::new("Supported Currencies", |report, currency: &Currency| {
            report.line(format_args!(
                "- **ID:** {} | **Code:** {} | **Type ID:** {}",
                display_or(currency.id, PLACEHOLDER),
                or_na(currency.code.as_deref()),
                display_or(currency.type_id, PLACEHOLDER)
            ));
        })
        .compact(),
    )
    .await
}

pub async fn dexes(api: &NetworkEndpoint) -> ReportResult {
    listing(api.dex().list(), "No DEXes found.".to_string(), |dexes, report| {
        report.heading("Decentralized Exchanges");
        for dex in &dexes.data {
            report.line(format_args!(
                "- **ID:** {} | **Name:** {}",
                display_or(dex.id, PLACEHOLDER),
                or_na(dex.name.as_deref())
            ));
        }
    })
    .await
}

pub async fn swaps(api: &NetworkEndpoint, page: PageRequest) -> ReportResult {
    paged(
        api.swaps().list(page),
        page,
        "No swaps found.".to_string(),
        Listing::new("Token Swaps", |report, swap: &Swap| {
            let raw = |amount: &Option<Amount>| {
                amount.as_ref().map(|a| a.to_string()).unwrap_or_else(|| "0".into())
            };
            let sender = swap
                .sender_public_key
                .as_deref()
                .or(swap.sender_hash.as_deref());

            report
                .field("Transaction", format_hash(swap.transaction_hash.as_deref()))
                .detail("Sender", format_hash(sender))
                .line(format_args!(
                    "  Token0: {} | Token1: {}",
                    format_hash(swap.token0_contract_package_hash.as_deref()),
                    format_hash(swap.token1_contract_package_hash.as_deref())
                ))
                .line(format_args!(
                    "  Amount0 In: {} | Amount1 In: {}",
                    raw(&swap.amount0_in),
                    raw(&swap.amount1_in)
                ))
                .line(format_args!(
                    "  Amount0 Out: {} | Amount1 Out: {}",
                    raw(&swap.amount0_out),
                    raw(&swap.amount1_out)
                ))
                .line(format_args!(
                    "  DEX ID: {} | Block: {}",
                    display_or(swap.dex_id, PLACEHOLDER),
                    display_or(swap.block_height, PLACEHOLDER)
                ))
                .detail("Timestamp", or_na(swap.timestamp.as_deref()));
        }),
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

    fn upstream() -> Router {
        Router::new()
            .route(
                "/rates/:id/amount",
                get(|| async {
                    mock::envelope(json!({
                        "currency_id": 1,
                        "amount": 0.0123,
                        "created": "2024-01-15T10:30:45Z"
                    }))
                }),
            )
            .route(
                "/currencies",
                get(|| async {
                    mock::paged(
                        json!([{"id": 1, "code": "USD", "type_id": 1}, {"id": 2, "code": "EUR"}]),
                        2,
                        1,
                    )
                }),
            )
            .route(
                "/dexes",
                get(|| async { mock::envelope(json!([{"id": 1, "name": "Friendly.Market"}])) }),
            )
            .route(
                "/swaps",
                get(|| async {
                    mock::paged(
                        json!([{
                            "transaction_hash": "tx1",
                            "sender_hash": "account-hash-5",
                            "amount0_in": "1000",
                            "amount1_out": 250,
                            "dex_id": 1
                        }]),
                        1,
                        1,
                    )
                }),
            )
    }

    #[tokio::test]
    async fn test_current_rate() {
        let api = mock::spawn(upstream()).await;
        let text = current_currency_rate(&api, "1").await.unwrap();
        assert_eq!(
            text,
            "## Current Currency Rate\n- **Currency ID:** 1\n- **Rate:** 0.0123\n- **Timestamp:** 2024-01-15 10:30:45 UTC\n"
        );
    }

    #[tokio::test]
    async fn test_currencies_are_compact() {
        let api = mock::spawn(upstream()).await;
        let text = currencies(&api, PageRequest::default()).await.unwrap();
        assert_eq!(
            text,
            "## Supported Currencies (Page 1, 2 total)\n\
             - **ID:** 1 | **Code:** USD | **Type ID:** 1\n\
             - **ID:** 2 | **Code:** EUR | **Type ID:** N/A\n\
             ---\n\
             Page 1 of 1\n"
        );
    }

    #[tokio::test]
    async fn test_dexes_and_swaps() {
        let api = mock::spawn(upstream()).await;

        let text = dexes(&api).await.unwrap();
        assert_eq!(text, "## Decentralized Exchanges\n- **ID:** 1 | **Name:** Friendly.Market\n");

        let text = swaps(&api, PageRequest::default()).await.unwrap();
        assert!(text.contains("  Sender: account-hash-5\n"));
        assert!(text.contains("  Amount0 In: 1000 | Amount1 In: 0\n"));
        assert!(text.contains("  Amount0 Out: 0 | Amount1 Out: 250\n"));
        assert!(text.contains("  DEX ID: 1 | Block: N/A\n  Timestamp: N/A\n"));
    }

    #[tokio::test]
    async fn test_empty_results() {
        let api = mock::empty().await;
        assert_eq!(conclude("retrieving DEXes", dexes(&api).await), "No DEXes found.");
        assert_eq!(
            conclude("retrieving historical currency rates", historical_currency_rates(&api, "9", PageRequest::default()).await),
            "No historical rates found for currency ID: 9"
        );
    }
}
