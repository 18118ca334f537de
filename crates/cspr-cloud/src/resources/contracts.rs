use crate::error::CloudResult;
use crate::models::{Contract, ContractPackage, EntryPointCosts, NamedEntry};
use crate::network::NetworkEndpoint;
use crate::types::{Page, PageRequest};

/// Contracts and contract packages
pub struct Contracts<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Contracts<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    /// Contract with its package
    pub async fn get(&self, contract_hash: &str) -> CloudResult<Option<Contract>> {
        self.api
            .get_one(
                &["contracts", contract_hash],
                &[("includes", "contract_package".to_string())],
            )
            .await
    }

    pub async fn list(&self, page: PageRequest) -> CloudResult<Option<Page<Contract>>> {
        self.api.get_page(&["contracts"], page, &[]).await
    }

    pub async fn entry_points(&self, contract_hash: &str) -> CloudResult<Option<Page<NamedEntry>>> {
        self.api
            .get_listing(&["contracts", contract_hash, "entry-points"])
            .await
    }

    pub async fn entry_point_costs(
        &self,
        contract_hash: &str,
        entry_point: &str,
    ) -> CloudResult<Option<EntryPointCosts>> {
        self.api
            .get_one(
                &["contracts", contract_hash, "entry-points", entry_point, "costs"],
                &[],
            )
            .await
    }

    pub async fn types(&self) -> CloudResult<Option<Page<NamedEntry>>> {
        self.api.get_listing(&["contract-types"]).await
    }

    pub async fn package(&self, package_hash: &str) -> CloudResult<Option<ContractPackage>> {
        self.api
            .get_one(&["contract-packages", package_hash], &[])
            .await
    }

    pub async fn packages(&self, page: PageRequest) -> CloudResult<Option<Page<ContractPackage>>> {
        self.api.get_page(&["contract-packages"], page, &[]).await
    }

    /// Packages deployed by an account
    pub async fn account_packages(
        &self,
        public_key: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<ContractPackage>>> {
        self.api
            .get_page(&["accounts", public_key, "contract-packages"], page, &[])
            .await
    }

    /// Contract versions of a package
    pub async fn by_package(
        &self,
        package_hash: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Contract>>> {
        self.api
            .get_page(&["contract-packages", package_hash, "contracts"], page, &[])
            .await
    }
}
