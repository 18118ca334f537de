use crate::error::CloudResult;
use crate::models::{FtAction, FtOwnership, FtRate, NamedEntry, NftAction, NftOwnership, NftToken};
use crate::network::NetworkEndpoint;
use crate::types::{Page, PageRequest};

fn optional_filter(name: &'static str, value: Option<&str>) -> Vec<(&'static str, String)> {
    value
        .filter(|v| !v.is_empty())
        .map(|v| vec![(name, v.to_string())])
        .unwrap_or_default()
}

/// Fungible tokens (CEP-18): ownership, actions and rates
pub struct Ft<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Ft<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    /// Holders of a token
    pub async fn package_ownership(
        &self,
        package_hash: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<FtOwnership>>> {
        self.api
            .get_page(
                &["contract-packages", package_hash, "ft-token-ownership"],
                page,
                &[],
            )
            .await
    }

    /// Token balances of an account
    pub async fn account_ownership(
        &self,
        identifier: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<FtOwnership>>> {
        self.api
            .get_page(
                &["accounts", identifier, "ft-token-ownership"],
                page,
                &[("includes", "contract_package".to_string())],
            )
            .await
    }

    pub async fn actions(&self, page: PageRequest) -> CloudResult<Option<Page<FtAction>>> {
        self.api.get_page(&["ft-token-actions"], page, &[]).await
    }

    pub async fn account_actions(
        &self,
        identifier: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<FtAction>>> {
        self.api
            .get_page(&["accounts", identifier, "ft-token-actions"], page, &[])
            .await
    }

    pub async fn package_actions(
        &self,
        package_hash: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<FtAction>>> {
        self.api
            .get_page(
                &["contract-packages", package_hash, "ft-token-actions"],
                page,
                &[],
            )
            .await
    }

    pub async fn rate_latest(
        &self,
        package_hash: &str,
        currency_id: Option<&str>,
    ) -> CloudResult<Option<FtRate>> {
        self.api
            .get_one(
                &["ft", package_hash, "rates", "latest"],
                &optional_filter("currency_id", currency_id),
            )
            .await
    }

    pub async fn rates(
        &self,
        package_hash: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<FtRate>>> {
        self.api
            .get_page(&["ft", package_hash, "rates"], page, &[])
            .await
    }

    pub async fn daily_rate_latest(
        &self,
        package_hash: &str,
        currency_id: Option<&str>,
    ) -> CloudResult<Option<FtRate>> {
        self.api
            .get_one(
                &["ft", package_hash, "daily-rates", "latest"],
                &optional_filter("currency_id", currency_id),
            )
            .await
    }

    pub async fn daily_rates(
        &self,
        package_hash: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<FtRate>>> {
        self.api
            .get_page(&["ft", package_hash, "daily-rates"], page, &[])
            .await
    }

    pub async fn dex_rate_latest(
        &self,
        package_hash: &str,
        target_package_hash: Option<&str>,
    ) -> CloudResult<Option<FtRate>> {
        self.api
            .get_one(
                &["ft", package_hash, "dex-rates", "latest"],
                &optional_filter("target_contract_package_hash", target_package_hash),
            )
            .await
    }

    pub async fn dex_rates(
        &self,
        package_hash: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<FtRate>>> {
        self.api
            .get_page(&["ft", package_hash, "dex-rates"], page, &[])
            .await
    }

    pub async fn daily_dex_rate_latest(
        &self,
        package_hash: &str,
        target_package_hash: Option<&str>,
    ) -> CloudResult<Option<FtRate>> {
        self.api
            .get_one(
                &["ft", package_hash, "daily-dex-rates", "latest"],
                &optional_filter("target_contract_package_hash", target_package_hash),
            )
            .await
    }

    pub async fn daily_dex_rates(
        &self,
        package_hash: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<FtRate>>> {
        self.api
            .get_page(&["ft", package_hash, "daily-dex-rates"], page, &[])
            .await
    }
}

/// Non-fungible tokens (CEP-47 / CEP-78)
pub struct Nft<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Nft<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    pub async fn get(&self, package_hash: &str, token_id: &str) -> CloudResult<Option<NftToken>> {
        self.api
            .get_one(&["contract-packages", package_hash, "nft-tokens", token_id], &[])
            .await
    }

    /// Tokens of a collection
    pub async fn by_package(
        &self,
        package_hash: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<NftToken>>> {
        self.api
            .get_page(&["contract-packages", package_hash, "nft-tokens"], page, &[])
            .await
    }

    pub async fn by_account(
        &self,
        identifier: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<NftToken>>> {
        self.api
            .get_page(
                &["accounts", identifier, "nft-tokens"],
                page,
                &[("includes", "contract_package".to_string())],
            )
            .await
    }

    pub async fn standards(&self) -> CloudResult<Option<Page<NamedEntry>>> {
        self.api.get_listing(&["nft-token-standards"]).await
    }

    /// Off-chain metadata fetch statuses
    pub async fn metadata_statuses(&self) -> CloudResult<Option<Page<NamedEntry>>> {
        self.api.get_listing(&["nft-token-metadata-statuses"]).await
    }

    pub async fn action_types(&self) -> CloudResult<Option<Page<NamedEntry>>> {
        self.api.get_listing(&["nft-token-action-types"]).await
    }

    pub async fn token_actions(
        &self,
        package_hash: &str,
        token_id: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<NftAction>>> {
        self.api
            .get_page(
                &["contract-packages", package_hash, "nft-tokens", token_id, "actions"],
                page,
                &[],
            )
            .await
    }

    pub async fn account_actions(
        &self,
        identifier: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<NftAction>>> {
        self.api
            .get_page(&["accounts", identifier, "nft-token-actions"], page, &[])
            .await
    }

    pub async fn package_actions(
        &self,
        package_hash: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<NftAction>>> {
        self.api
            .get_page(
                &["contract-packages", package_hash, "nft-token-actions"],
                page,
                &[],
            )
            .await
    }

    pub async fn package_ownership(
        &self,
        package_hash: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<NftOwnership>>> {
        self.api
            .get_page(
                &["contract-packages", package_hash, "nft-token-ownership"],
                page,
                &[],
            )
            .await
    }

    pub async fn account_ownership(
        &self,
        identifier: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<NftOwnership>>> {
        self.api
            .get_page(
                &["accounts", identifier, "nft-token-ownership"],
                page,
                &[("includes", "contract_package".to_string())],
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_filter_skips_blank_values() {
        assert!(optional_filter("currency_id", None).is_empty());
        assert!(optional_filter("currency_id", Some("")).is_empty());
        assert_eq!(
            optional_filter("currency_id", Some("1")),
            vec![("currency_id", "1".to_string())]
        );
    }
}
