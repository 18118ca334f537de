use cspr_cloud::models::{AuctionMetrics, Supply};
use cspr_cloud::NetworkEndpoint;
use explorer_core::format::{display_or, format_count, format_timestamp, motes_to_cspr, PLACEHOLDER};

use crate::tools::render::{single, ReportResult};

pub async fn network_status(api: &NetworkEndpoint) -> ReportResult {
    let label = api.network().label();
    single(
        api.auction().metrics(),
        "Unable to retrieve network status.".to_string(),
        |metrics: &AuctionMetrics, report| {
            report
                .heading(format_args!("Casper Network Status ({})", label))
                .field("Current Era", display_or(metrics.current_era_id, PLACEHOLDER))
                .field("Active Validators", format_count(metrics.active_validator_number))
                .field("Total Bids", format_count(metrics.total_bids_number))
                .field("Active Bids", format_count(metrics.active_bids_number))
                .field("Total Active Era Stake", motes_to_cspr(&metrics.total_active_era_stake));
        },
    )
    .await
}

pub async fn era_info(api: &NetworkEndpoint) -> ReportResult {
    let label = api.network().label();
    single(
        api.auction().metrics(),
        "Unable to retrieve era info.".to_string(),
        |metrics: &AuctionMetrics, report| {
            report
                .heading(format_args!("Era Information ({})", label))
                .field("Current Era ID", display_or(metrics.current_era_id, PLACEHOLDER))
                .field("Active Validators", format_count(metrics.active_validator_number))
                .field("Total Active Era Stake", motes_to_cspr(&metrics.total_active_era_stake));
        },
    )
    .await
}

pub async fn supply_info(api: &NetworkEndpoint) -> ReportResult {
    single(
        api.supply().get(),
        "Unable to retrieve supply info.".to_string(),
        |supply: &Supply, report| {
            report
                .heading("CSPR Supply Information")
                .field("Token", supply.token.as_deref().unwrap_or("CSPR"))
                .field("Total Supply", motes_to_cspr(&supply.total))
                .field("Circulating Supply", motes_to_cspr(&supply.circulating))
                .field("Last Updated", format_timestamp(supply.timestamp.as_ref()));
        },
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
    async fn test_network_status_heading_names_network() {
        let app = Router::new().route(
            "/auction-metrics",
            get(|| async {
                mock::envelope(json!({
                    "current_era_id": 15302,
                    "active_validator_number": 100,
                    "total_bids_number": 1024,
                    "active_bids_number": 512,
                    "total_active_era_stake": "9000000000000000000"
                }))
            }),
        );
        let api = mock::spawn(app).await;
        let text = network_status(&api).await.unwrap();

        assert_eq!(
            text,
            "## Casper Network Status (Mainnet)\n\
             - **Current Era:** 15302\n\
             - **Active Validators:** 100\n\
             - **Total Bids:** 1,024\n\
             - **Active Bids:** 512\n\
             - **Total Active Era Stake:** 9,000,000,000.000000000 CSPR\n"
        );
    }

    #[tokio::test]
    async fn test_missing_metrics() {
        let api = mock::empty().await;
        assert_eq!(
            conclude("retrieving era info", era_info(&api).await),
            "Unable to retrieve era info."
        );
        assert_eq!(
            conclude("retrieving supply info", supply_info(&api).await),
            "Unable to retrieve supply info."
        );
    }
}
