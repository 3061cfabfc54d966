// src/fetch/fake.rs
// In-memory PageSource for tests. Unknown URLs fail like a 404 would.

use std::collections::HashMap;

use async_trait::async_trait;

use super::PageSource;
use crate::error::{Result, ScrapeError};

#[derive(Debug, Default)]
pub struct FakeSource {
    pages: HashMap<String, String>,
    files: HashMap<String, Vec<u8>>,
    pub requested: Vec<String>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(url.to_string(), html.to_string());
        self
    }

    pub fn file(mut self, url: &str, bytes: &[u8]) -> Self {
        self.files.insert(url.to_string(), bytes.to_vec());
        self
    }
}

#[async_trait]
impl PageSource for FakeSource {
    async fn fetch(&mut self, url: &str) -> Result<String> {
        self.requested.push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::page_load(url, "HTTP 404"))
    }

    async fn fetch_bytes(&mut self, url: &str) -> Result<Vec<u8>> {
        self.requested.push(url.to_string());
        self.files
            .get(url)
            .cloned()
            .ok_or_else(|| ScrapeError::page_load(url, "HTTP 404"))
    }
}
