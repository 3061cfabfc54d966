// src/fetch/mod.rs
// =============================================================================
// This module loads pages from the network.
//
// Submodules:
// - cache: a persistent on-disk store of successful responses, keyed by URL
// - session: CachedSession, the reqwest client that consults the cache first
//
// Extractors never talk to reqwest directly. They take anything that
// implements PageSource, which is CachedSession in the binary and an
// in-memory fake in tests.
//
// Failure policy:
// - Every failure to load a page is ScrapeError::PageLoad (recoverable)
// - There are no retries; the caller decides whether to skip or abort
// =============================================================================

mod cache;
mod session;

#[cfg(test)]
mod fake;

pub use cache::ResponseCache;
pub use session::CachedSession;

#[cfg(test)]
pub use fake::FakeSource;

use async_trait::async_trait;

use crate::error::Result;

#[async_trait]
pub trait PageSource: Send {
    /// GET `url` and return the body decoded as UTF-8.
    /// May be answered from a cache.
    async fn fetch(&mut self, url: &str) -> Result<String>;

    /// GET `url` and return the raw body. Never cached.
    async fn fetch_bytes(&mut self, url: &str) -> Result<Vec<u8>>;
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why #[async_trait]?
//    - It rewrites the async methods to return boxed futures
//    - That keeps the trait usable the same way the rest of the crate uses
//      async functions, without worrying about future types
//
// 2. Why &mut self?
//    - A fetch can write a new entry into the cache
//    - The fake used in tests records which URLs were requested
// -----------------------------------------------------------------------------
