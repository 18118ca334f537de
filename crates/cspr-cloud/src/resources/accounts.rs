use crate::error::CloudResult;
use crate::models::{Account, CentralizedAccountInfo, CsprNameResolution};
use crate::network::NetworkEndpoint;
use crate::types::{Page, PageRequest};

/// `/accounts`
pub struct Accounts<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Accounts<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    /// Look up an account by public key or account hash
    pub async fn get(&self, identifier: &str) -> CloudResult<Option<Account>> {
        self.api.get_one(&["accounts", identifier], &[]).await
    }

    pub async fn list(&self, page: PageRequest) -> CloudResult<Option<Page<Account>>> {
        self.api.get_page(&["accounts"], page, &[]).await
    }
}

/// `/centralized-account-info`
pub struct CentralizedAccounts<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> CentralizedAccounts<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    pub async fn get(&self, account_hash: &str) -> CloudResult<Option<CentralizedAccountInfo>> {
        self.api
            .get_one(&["centralized-account-info", account_hash], &[])
            .await
    }

    pub async fn list(
        &self,
        page: PageRequest,
    ) -> CloudResult<Option<Page<CentralizedAccountInfo>>> {
        self.api
            .get_page(&["centralized-account-info"], page, &[])
            .await
    }
}

/// `/cspr-name-resolutions`
pub struct CsprNames<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> CsprNames<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    /// Resolve a name such as `alice.cspr`
    pub async fn resolve(&self, name: &str) -> CloudResult<Option<CsprNameResolution>> {
        self.api
            .get_one(&["cspr-name-resolutions", name], &[])
            .await
    }
}
