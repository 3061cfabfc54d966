// src/fetch/session.rs
// =============================================================================
// CachedSession: a reqwest client that answers from the response cache when
// it can and falls through to the network when it cannot.
//
// What counts as a page-load failure:
// - the request itself fails (DNS, connection refused, TLS, ...)
// - the server answers with a non-2xx status
// - the body cannot be read
//
// Only 2xx responses are written to the cache. The archive download goes
// through fetch_bytes, which skips the cache entirely.
// =============================================================================

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::cache::{CacheEntry, ResponseCache};
use super::PageSource;
use crate::error::{Result, ScrapeError};

pub struct CachedSession {
    client: Client,
    cache: ResponseCache,
}

impl CachedSession {
    pub fn new(cache: ResponseCache) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(CachedSession { client, cache })
    }

    /// Drops every cached response. Returns how many entries were removed.
    pub fn clear_cache(&self) -> Result<usize> {
        self.cache.clear()
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ScrapeError::page_load(url, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::page_load(url, format!("HTTP {}", status.as_u16())));
        }

        Ok(response)
    }
}

#[async_trait]
impl PageSource for CachedSession {
    async fn fetch(&mut self, url: &str) -> Result<String> {
        if let Some(entry) = self.cache.get(url) {
            debug!(url, "served from cache");
            return Ok(entry.body);
        }

        let response = self.get(url).await?;
        let status = response.status().as_u16();
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ScrapeError::page_load(url, e))?;

        // The docs are UTF-8; undecodable bytes become U+FFFD instead of
        // failing the page.
        let body = String::from_utf8_lossy(&bytes).into_owned();

        if let Err(e) = self.cache.put(&CacheEntry::new(url, status, body.clone())) {
            warn!(url, error = %e, "could not write cache entry");
        }
        debug!(url, status, "fetched from network");

        Ok(body)
    }

    async fn fetch_bytes(&mut self, url: &str) -> Result<Vec<u8>> {
        let response = self.get(url).await?;
        let bytes = response
            .bytes()
            .await
            .map_err(|e| ScrapeError::page_load(url, e))?;
        Ok(bytes.to_vec())
    }
}
