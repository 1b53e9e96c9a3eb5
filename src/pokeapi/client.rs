// PokeAPI HTTP client.
// Handles request dispatch, status checking, and the cache-or-fetch read path.

use reqwest::{
    Client, Response, StatusCode,
    header::{HeaderMap, HeaderValue, USER_AGENT},
};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::cache::ResponseCache;
use crate::error::{PokedexError, Result};

pub const POKEAPI_BASE: &str = "https://pokeapi.co/api/v2";

/// PokeAPI client backed by an expiring response cache.
pub struct PokeApiClient {
    http: Client,
    cache: ResponseCache,
}

impl PokeApiClient {
    /// Create a new client around the given cache.
    ///
    /// The cache is constructed once at startup and injected here, so tests
    /// can run isolated clients with their own ttl.
    pub fn new(cache: ResponseCache) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("pokedex-cli"));

        let http = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(PokedexError::Http)?;

        Ok(Self { http, cache })
    }

    /// The response cache backing this client.
    pub fn cache(&self) -> &ResponseCache {
        &self.cache
    }

    /// Resolve `url` to a decoded payload, consulting the cache first and
    /// populating it on a miss after a successfully decoded fetch.
    ///
    /// Cached entries hold raw response bytes, so every call decodes exactly
    /// once: on a hit from the cached bytes, on a miss from the fresh body.
    /// Bodies that fail to decode are surfaced as decode errors and never
    /// cached. Concurrent misses for the same URL may each fetch and each
    /// populate; last write wins, which is harmless because catalog records
    /// are immutable upstream.
    pub(crate) async fn fetch_cached<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        if let Some(bytes) = self.cache.get(url).await {
            debug!(url, "cache hit");
            return Ok(serde_json::from_slice(&bytes)?);
        }

        debug!(url, "cache miss, fetching");
        let response = self.http.get(url).send().await.map_err(PokedexError::Http)?;
        let response = check_response(response)?;
        let bytes = response.bytes().await.map_err(PokedexError::Http)?;

        let decoded = serde_json::from_slice(&bytes)?;
        self.cache.put(url, bytes.to_vec()).await;
        Ok(decoded)
    }
}

/// Check response status and convert failures into protocol errors.
fn check_response(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    match status {
        StatusCode::NOT_FOUND => Err(PokedexError::NotFound(url)),
        status => Err(PokedexError::Status { status, url }),
    }
}
