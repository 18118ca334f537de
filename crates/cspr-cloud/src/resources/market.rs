use crate::error::CloudResult;
use crate::models::{Currency, CurrencyRate, NamedEntry, Swap};
use crate::network::NetworkEndpoint;
use crate::types::{Page, PageRequest};

/// Fiat currency rates of CSPR
pub struct Rates<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Rates<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    pub async fn current(&self, currency_id: &str) -> CloudResult<Option<CurrencyRate>> {
        self.api
            .get_one(&["rates", currency_id, "amount"], &[])
            .await
    }

    pub async fn historical(
        &self,
        currency_id: &str,
        page: PageRequest,
    ) -> CloudResult<Option<Page<CurrencyRate>>> {
        self.api.get_page(&["rates", currency_id], page, &[]).await
    }

    pub async fn currencies(&self, page: PageRequest) -> CloudResult<Option<Page<Currency>>> {
        self.api.get_page(&["currencies"], page, &[]).await
    }
}

/// `/dexes`
pub struct Dex<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Dex<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    pub async fn list(&self) -> CloudResult<Option<Page<NamedEntry>>> {
        self.api.get_listing(&["dexes"]).await
    }
}

/// `/swaps`
pub struct Swaps<'a> {
    api: &'a NetworkEndpoint,
}

impl<'a> Swaps<'a> {
    pub(crate) fn new(api: &'a NetworkEndpoint) -> Self {
        Self { api }
    }

    pub async fn list(&self, page: PageRequest) -> CloudResult<Option<Page<Swap>>> {
        self.api.get_page(&["swaps"], page, &[]).await
    }
}
