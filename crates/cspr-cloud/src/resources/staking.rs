use crate::error::CloudResult;
use crate::models::{AuctionMetrics, Bidder, Delegation, Performance, Reward, Supply as SupplyInfo, Validator};
use crate::network::NetworkEndpoint;
use crate::types::{Amount, Page, PageRequest};

/// Delegations and delegator rewards
pub struct Delegations<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Delegations<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    /// Validators an account has delegated to
    pub async fn by_account(
        &self,
        public_key: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Delegation>>> {
        self.api
            .get_page(&["accounts", public_key, "delegations"], page, &[])
            .await
    }

    /// Delegators of a validator
    pub async fn by_validator(
        &self,
        public_key: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Delegation>>> {
        self.api
            .get_page(&["validators", public_key, "delegations"], page, &[])
            .await
    }

    pub async fn account_rewards(
        &self,
        public_key: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Reward>>> {
        self.api
            .get_page(&["accounts", public_key, "delegation-rewards"], page, &[])
            .await
    }

    pub async fn account_total_rewards(&self, public_key: &str) -> CloudResult<Option<Amount>> {
        self.api
            .get_one(&["accounts", public_key, "total-delegation-rewards"], &[])
            .await
    }

    /// Total paid out by a validator to its delegators
    pub async fn validator_total_rewards(&self, public_key: &str) -> CloudResult<Option<Amount>> {
        self.api
            .get_one(&["validators", public_key, "total-delegator-rewards"], &[])
            .await
    }
}

/// `/validators`
pub struct Validators<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Validators<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    /// Validators of an era. The API requires `era_id`.
    pub async fn list(
        &self,
        era_id: u64,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Validator>>> {
        self.api
            .get_page(&["validators"], page, &[("era_id", era_id.to_string())])
            .await
    }

    pub async fn get(&self, public_key: &str, era_id: u64) -> CloudResult<Option<Validator>> {
        self.api
            .get_one(&["validators", public_key], &[("era_id", era_id.to_string())])
            .await
    }

    pub async fn rewards(
        &self,
        public_key: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Reward>>> {
        self.api
            .get_page(&["validators", public_key, "rewards"], page, &[])
            .await
    }

    pub async fn total_rewards(&self, public_key: &str) -> CloudResult<Option<Amount>> {
        self.api
            .get_one(&["validators", public_key, "total-rewards"], &[])
            .await
    }

    pub async fn era_rewards(
        &self,
        public_key: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Reward>>> {
        self.api
            .get_page(&["validators", public_key, "era-rewards"], page, &[])
            .await
    }

    pub async fn performance(
        &self,
        public_key: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Performance>>> {
        self.api
            .get_page(&["validators", public_key, "historical-performance"], page, &[])
            .await
    }

    pub async fn average_performance(
        &self,
        public_key: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Performance>>> {
        self.api
            .get_page(
                &["validators", public_key, "historical-average-performance"],
                page,
                &[],
            )
            .await
    }

    /// Average performance of every validator
    pub async fn all_average_performance(
        &self,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Performance>>> {
        self.api
            .get_page(&["historical-validators-average-performance"], page, &[])
            .await
    }
}

/// `/bidders`
pub struct Bidders<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Bidders<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    pub async fn get(&self, public_key: &str) -> CloudResult<Option<Bidder>> {
        self.api.get_one(&["bidders", public_key], &[]).await
    }

    pub async fn list(&self, page: PageRequest) -> CloudResult<Option<Page<Bidder>>> {
        self.api.get_page(&["bidders"], page, &[]).await
    }
}

/// `/auction-metrics`
pub struct Auction<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Auction<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    /// Current era, bid counts and active stake
    pub async fn metrics(&self) -> CloudResult<Option<AuctionMetrics>> {
        self.api.get_one(&["auction-metrics"], &[]).await
    }
}

/// `/supply`
pub struct Supply<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Supply<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    pub async fn get(&self) -> CloudResult<Option<SupplyInfo>> {
        self.api.get_one(&["supply"], &[]).await
    }
}
