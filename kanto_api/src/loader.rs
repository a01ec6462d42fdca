use std::collections::HashSet;

use async_trait::async_trait;
use futures::future::try_join_all;
use kanto_core::error::Result;
use kanto_core::{CatalogSource, Entity, LoadError};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tracing::{debug, info, warn};
use url::Url;

use crate::assemble::assemble;
use crate::wire::{DetailBody, ItemRef, Listing};

/// Two-phase catalog loader: one listing request, then one detail request
/// per listed entry, all in flight at once.
pub struct PokeApiLoader {
    client: Client,
    base_url: String,
    limit: usize,
}

impl PokeApiLoader {
    pub fn new(base_url: impl Into<String>, limit: usize) -> Self {
        let base_url = base_url.into();
        info!("Creating PokeApiLoader: base_url={base_url}, limit={limit}");
        Self {
            client: Client::new(),
            base_url,
            limit,
        }
    }

    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self> {
        self.client = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|e| LoadError::transport(format!("failed to create HTTP client: {e}")))?;
        Ok(self)
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    pub fn listing_url(&self) -> Result<Url> {
        let raw = format!("{}/pokemon", self.base_url.trim_end_matches('/'));
        let mut url = Url::parse(&raw)
            .map_err(|e| LoadError::transport(format!("invalid base url {raw}: {e}")))?;
        url.query_pairs_mut()
            .append_pair("limit", &self.limit.to_string());
        Ok(url)
    }

    pub async fn fetch_listing(&self) -> Result<Vec<ItemRef>> {
        let url = self.listing_url()?;
        info!("Fetching listing: {url}");
        let listing: Listing = self.get_json(url.as_str()).await?;
        Ok(listing.results)
    }

    pub async fn fetch_detail(&self, item: &ItemRef) -> Result<Entity> {
        debug!("Fetching detail for {}: {}", item.name, item.url);
        let detail: DetailBody = self.get_json(&item.url).await?;
        assemble(item, detail)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| LoadError::transport(format!("GET {url} failed: {e}")))?
            .error_for_status()
            .map_err(|e| LoadError::transport(format!("GET {url}: {e}")))?;

        let bytes = response
            .bytes()
            .await
            .map_err(|e| LoadError::transport(format!("reading body of {url} failed: {e}")))?;

        serde_json::from_slice(&bytes)
            .map_err(|e| LoadError::parse(format!("unexpected body from {url}: {e}")))
    }
}

#[async_trait]
impl CatalogSource for PokeApiLoader {
    async fn load(&self) -> Result<Vec<Entity>> {
        let listing = self
            .fetch_listing()
            .await
            .inspect_err(|e| warn!("Listing fetch failed: {e}"))?;

        info!("Listing returned {} entries, fetching details", listing.len());

        let entities = try_join_all(listing.iter().map(|item| self.fetch_detail(item)))
            .await
            .inspect_err(|e| warn!("Detail fetch failed, aborting load: {e}"))?;

        ensure_unique_ids(&entities)?;

        info!("Loaded {} entities", entities.len());
        Ok(entities)
    }
}

fn ensure_unique_ids(entities: &[Entity]) -> Result<()> {
    let mut seen = HashSet::with_capacity(entities.len());
    for entity in entities {
        if !seen.insert(entity.id) {
            return Err(LoadError::parse(format!(
                "id {} appears more than once in the listing",
                entity.id
            )));
        }
    }
    Ok(())
}
