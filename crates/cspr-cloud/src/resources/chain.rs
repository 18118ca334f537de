use serde::Serialize;
use serde_json::Value;

use crate::error::CloudResult;
use crate::models::{AwaitingDeploy, Block, Deploy, NamedEntry, Transfer};
use crate::network::NetworkEndpoint;
use crate::types::{Page, PageRequest};

/// `/blocks`
pub struct Blocks<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Blocks<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    pub async fn get(&self, block_hash: &str) -> CloudResult<Option<Block>> {
        self.api.get_one(&["blocks", block_hash], &[]).await
    }

    /// Most recent blocks first
    pub async fn list(&self, page: PageRequest) -> CloudResult<Option<Page<Block>>> {
        self.api.get_page(&["blocks"], page, &[]).await
    }

    /// Blocks proposed by a validator
    pub async fn by_validator(
        &self,
        public_key: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Block>>> {
        self.api
            .get_page(&["validators", public_key, "blocks"], page, &[])
            .await
    }
}

/// `/deploys`
pub struct Deploys<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Deploys<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    /// Deploy with its native transfers
    pub async fn get(&self, deploy_hash: &str) -> CloudResult<Option<Deploy>> {
        self.api
            .get_one(
                &["deploys", deploy_hash],
                &[("includes", "transfers".to_string())],
            )
            .await
    }

    pub async fn list(&self, page: PageRequest) -> CloudResult<Option<Page<Deploy>>> {
        self.api.get_page(&["deploys"], page, &[]).await
    }

    pub async fn by_account(
        &self,
        public_key: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Deploy>>> {
        self.api
            .get_page(&["accounts", public_key, "deploys"], page, &[])
            .await
    }

    pub async fn by_block(
        &self,
        block_hash: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Deploy>>> {
        self.api
            .get_page(&["blocks", block_hash, "deploys"], page, &[])
            .await
    }

    pub async fn execution_types(&self) -> CloudResult<Option<Page<NamedEntry>>> {
        self.api.get_listing(&["deploy-execution-types"]).await
    }
}

/// `/transfers` scoped by account or deploy
pub struct Transfers<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Transfers<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    pub async fn by_account(
        &self,
        identifier: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Transfer>>> {
        self.api
            .get_page(&["accounts", identifier, "transfers"], page, &[])
            .await
    }

    pub async fn by_deploy(
        &self,
        deploy_hash: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<Transfer>>> {
        self.api
            .get_page(&["deploys", deploy_hash, "transfers"], page, &[])
            .await
    }
}

#[derive(Serialize)]
struct CreateAwaitingDeploy<'a> {
    deploy: &'a Value,
}

#[derive(Serialize)]
struct AddApproval<'a> {
    signer: &'a str,
    signature: &'a str,
}

/// `/awaiting-deploys`: deploys collecting multi-signature approvals
pub struct AwaitingDeploys<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> AwaitingDeploys<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    pub async fn get(&self, deploy_hash: &str) -> CloudResult<Option<AwaitingDeploy>> {
        self.api
            .get_one(&["awaiting-deploys", deploy_hash], &[])
            .await
    }

    /// Submit a deploy; returns the API's success flag
    pub async fn create(&self, deploy: &Value) -> CloudResult<bool> {
        let accepted: Option<bool> = self
            .api
            .post(&["awaiting-deploys"], &CreateAwaitingDeploy { deploy })
            .await?;
        Ok(accepted.unwrap_or(false))
    }

    /// Attach a signature; returns the API's success flag
    pub async fn add_approval(
        &self,
        deploy_hash: &str,
        signer: &str,
        signature: &str,
    ) -> CloudResult<bool> {
        let accepted: Option<bool> = self
            .api
            .post(
                &["awaiting-deploys", deploy_hash, "approvals"],
                &AddApproval { signer, signature },
            )
            .await?;
        Ok(accepted.unwrap_or(false))
    }
}
