//! Network selection and the per-network endpoint handle

use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;
use url::Url;

use crate::error::{CloudError, CloudResult};
use crate::resources::*;
use crate::types::{Envelope, Page, PageRequest};

/// Default production API
pub const MAINNET_URL: &str = "https://api.cspr.cloud";

/// Default test network API
pub const TESTNET_URL: &str = "https://api.testnet.cspr.cloud";

/// Casper network to query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Network {
    #[default]
    Mainnet,
    Testnet,
}

impl Network {
    /// Capitalized name used in report headings
    pub fn label(&self) -> &'static str {
        match self {
            Network::Mainnet => "Mainnet",
            Network::Testnet => "Testnet",
        }
    }

    pub fn is_testnet(&self) -> bool {
        matches!(self, Network::Testnet)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Network::Mainnet => f.write_str("mainnet"),
            Network::Testnet => f.write_str("testnet"),
        }
    }
}

impl FromStr for Network {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mainnet" => Ok(Network::Mainnet),
            "testnet" => Ok(Network::Testnet),
            other => Err(format!(
                "unknown network '{}' (expected mainnet or testnet)",
                other
            )),
        }
    }
}

/// Client configuration
#[derive(Debug, Clone)]
pub struct CloudConfig {
    /// CSPR.cloud access key, sent as the `Authorization` header
    pub api_key: String,
    pub mainnet_url: String,
    pub testnet_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl CloudConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            mainnet_url: MAINNET_URL.to_string(),
            testnet_url: TESTNET_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Point both networks at the same base URL (proxies, local mocks)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        let url = url.into();
        self.mainnet_url = url.clone();
        self.testnet_url = url;
        self
    }
}

/// CSPR.cloud client holding one endpoint per network
#[derive(Debug, Clone)]
pub struct CsprCloud {
    mainnet: NetworkEndpoint,
    testnet: NetworkEndpoint,
}

impl CsprCloud {
    /// Build the client. Both endpoints share one connection pool.
    pub fn new(config: CloudConfig) -> CloudResult<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        let api_key: Arc<str> = Arc::from(config.api_key.as_str());

        Ok(Self {
            mainnet: NetworkEndpoint::new(
                Network::Mainnet,
                &config.mainnet_url,
                http.clone(),
                api_key.clone(),
            )?,
            testnet: NetworkEndpoint::new(Network::Testnet, &config.testnet_url, http, api_key)?,
        })
    }

    /// Resolve the endpoint for a network
    pub fn endpoint(&self, network: Network) -> &NetworkEndpoint {
        match network {
            Network::Mainnet => &self.mainnet,
            Network::Testnet => &self.testnet,
        }
    }
}

/// All resources of one network, bound to its base URL
#[derive(Debug, Clone)]
pub struct NetworkEndpoint {
    network: Network,
    base_url: Url,
    http: Client,
    api_key: Arc<str>,
}

impl NetworkEndpoint {
    fn new(network: Network, base_url: &str, http: Client, api_key: Arc<str>) -> CloudResult<Self> {
        let base_url =
            Url::parse(base_url).map_err(|e| CloudError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(CloudError::InvalidUrl(base_url.to_string()));
        }

        Ok(Self {
            network,
            base_url,
            http,
            api_key,
        })
    }

    pub fn network(&self) -> Network {
        self.network
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn accounts(&self) -> Accounts<'_> {
        Accounts::new(self)
    }

    pub fn blocks(&self) -> Blocks<'_> {
        Blocks::new(self)
    }

    pub fn deploys(&self) -> Deploys<'_> {
        Deploys::new(self)
    }

    pub fn validators(&self) -> Validators<'_> {
        Validators::new(self)
    }

    pub fn contracts(&self) -> Contracts<'_> {
        Contracts::new(self)
    }

    pub fn delegations(&self) -> Delegations<'_> {
        Delegations::new(self)
    }

    pub fn transfers(&self) -> Transfers<'_> {
        Transfers::new(self)
    }

    pub fn nft(&self) -> Nft<'_> {
        Nft::new(self)
    }

    pub fn ft(&self) -> Ft<'_> {
        Ft::new(self)
    }

    pub fn rates(&self) -> Rates<'_> {
        Rates::new(self)
    }

    pub fn auction(&self) -> Auction<'_> {
        Auction::new(self)
    }

    pub fn supply(&self) -> Supply<'_> {
        Supply::new(self)
    }

    pub fn dex(&self) -> Dex<'_> {
        Dex::new(self)
    }

    pub fn swaps(&self) -> Swaps<'_> {
        Swaps::new(self)
    }

    pub fn centralized_accounts(&self) -> CentralizedAccounts<'_> {
        CentralizedAccounts::new(self)
    }

    pub fn cspr_names(&self) -> CsprNames<'_> {
        CsprNames::new(self)
    }

    pub fn awaiting_deploys(&self) -> AwaitingDeploys<'_> {
        AwaitingDeploys::new(self)
    }

    pub fn bidders(&self) -> Bidders<'_> {
        Bidders::new(self)
    }

    /// Build a URL from path segments; each segment is percent-encoded
    fn url(&self, segments: &[&str]) -> CloudResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| CloudError::InvalidUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send a request; `None` on 404, the body text otherwise
    async fn send(&self, request: RequestBuilder) -> CloudResult<Option<String>> {
        let response = request
            .header(AUTHORIZATION, self.api_key.as_ref())
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("{} upstream status {}", self.network, status);

        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            return Err(CloudError::api(status.as_u16(), &body));
        }

        Ok(Some(body))
    }

    async fn fetch<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
    ) -> CloudResult<Option<Envelope<T>>> {
        let url = self.url(segments)?;
        debug!("GET {}", url);

        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        match self.send(request).await? {
            Some(body) => Ok(Some(serde_json::from_str(&body)?)),
            None => Ok(None),
        }
    }

    /// Fetch a single record
    pub(crate) async fn get_one<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        query: &[(&'static str, String)],
    ) -> CloudResult<Option<T>> {
        Ok(self
            .fetch::<T>(segments, query)
            .await?
            .and_then(|envelope| envelope.data))
    }

    /// Fetch one page of a listing
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        segments: &[&str],
        page: PageRequest,
        filters: &[(&'static str, String)],
    ) -> CloudResult<Option<Page<T>>> {
        let mut query = Vec::with_capacity(filters.len() + 2);
        page.push_query(&mut query);
        query.extend(filters.iter().cloned());

        Ok(self
            .fetch::<Vec<T>>(segments, &query)
            .await?
            .and_then(Envelope::into_page))
    }

    /// Fetch a listing the API returns in one piece (reference tables)
    pub(crate) async fn get_listing<T: DeserializeOwned>(
        &self,
        segments: &[&str],
    ) -> CloudResult<Option<Page<T>>> {
        Ok(self
            .fetch::<Vec<T>>(segments, &[])
            .await?
            .and_then(Envelope::into_page))
    }

    /// POST a JSON body and decode the `data` field of the answer
    pub(crate) async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        segments: &[&str],
        body: &B,
    ) -> CloudResult<Option<T>> {
        let url = self.url(segments)?;
        debug!("POST {}", url);

        match self.send(self.http.post(url).json(body)).await? {
            Some(body) => Ok(serde_json::from_str::<Envelope<T>>(&body)?.data),
            None => Ok(None),
        }
    }
}
