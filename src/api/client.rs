//! PokeAPI client
//!
//! Fetches PokeAPI resources over HTTP, consulting the response cache first.

use bytes::Bytes;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::Cache;
use crate::config::Config;
use crate::error::{PokedexError, Result};
use crate::models::{LocationAreaDetail, LocationAreaPage, Pokemon};

/// Where a response body came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Cache,
    Network,
}

/// A decoded response together with its origin
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub value: T,
    pub source: Source,
}

impl<T> Fetched<T> {
    /// Returns true if the body was served from the cache.
    pub fn is_cached(&self) -> bool {
        self.source == Source::Cache
    }
}

/// Client for the PokeAPI REST service
///
/// Every GET is keyed by its full URL. A cache hit skips the network; a
/// successful network fetch stores the raw body before decoding it.
#[derive(Debug)]
pub struct PokeApiClient {
    http: Client,
    base_url: String,
    cache: Cache,
}

impl PokeApiClient {
    /// Creates a client from configuration, starting a fresh cache.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        let cache = Cache::with_policy(config.cache_ttl, config.cache_policy);

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            cache,
        })
    }

    /// Creates a client around an existing cache with a default HTTP client.
    pub fn with_cache(base_url: impl Into<String>, cache: Cache) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache,
        }
    }

    /// Returns the response cache.
    pub fn cache(&self) -> &Cache {
        &self.cache
    }

    /// Returns the API base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches a page of location areas.
    ///
    /// `page_url` is a `next`/`previous` link from an earlier page; `None`
    /// requests the first page.
    pub async fn location_areas(&self, page_url: Option<&str>) -> Result<Fetched<LocationAreaPage>> {
        let url = match page_url {
            Some(url) => url.to_string(),
            None => format!("{}/location-area", self.base_url),
        };
        self.fetch_json(&url).await
    }

    /// Fetches one location area with its Pokemon encounters.
    pub async fn location_area(&self, name: &str) -> Result<Fetched<LocationAreaDetail>> {
        let url = format!("{}/location-area/{}", self.base_url, name);
        self.fetch_json(&url).await
    }

    /// Fetches a Pokemon by name.
    pub async fn pokemon(&self, name: &str) -> Result<Fetched<Pokemon>> {
        let url = format!("{}/pokemon/{}", self.base_url, name);
        self.fetch_json(&url).await.map_err(|err| match err {
            PokedexError::UnexpectedStatus(404) => PokedexError::PokemonNotFound(name.to_string()),
            other => other,
        })
    }

    /// Stops the cache's background sweep.
    pub async fn close(&self) {
        self.cache.close().await;
    }

    async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<Fetched<T>> {
        let (body, source) = self.fetch_bytes(url).await?;
        let value = serde_json::from_slice(&body)?;
        Ok(Fetched { value, source })
    }

    async fn fetch_bytes(&self, url: &str) -> Result<(Bytes, Source)> {
        if let Some(body) = self.cache.get(url).await {
            debug!(%url, "Cache hit");
            return Ok((body, Source::Cache));
        }

        debug!(%url, "Cache miss, fetching");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            debug!(%url, status = status.as_u16(), "Unexpected response status");
            return Err(PokedexError::UnexpectedStatus(status.as_u16()));
        }

        let body = response.bytes().await?;
        self.cache.add(url, body.clone()).await;

        Ok((body, Source::Network))
    }
}
