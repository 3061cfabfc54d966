// src/fetch/cache.rs
// =============================================================================
// Persistent response cache.
//
// Each successful response is stored as one JSON file in the cache directory.
// The file name is the percent-encoded URL, so a lookup is a single file read
// and entries survive between runs. Nothing expires on its own; `clear()`
// (the --clear-cache flag) is the only way entries go away.
//
// Rust concepts:
// - serde derive: CacheEntry <-> JSON without hand-written code
// - PathBuf: an owned, growable filesystem path
// =============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::Result;

const ENTRY_EXTENSION: &str = "json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub url: String,
    pub status: u16,
    pub body: String,
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(url: &str, status: u16, body: String) -> Self {
        CacheEntry {
            url: url.to_string(),
            status,
            body,
            fetched_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ResponseCache {
    dir: PathBuf,
}

impl ResponseCache {
    /// Opens (and creates if needed) the cache directory
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        let cache = ResponseCache { dir };
        let entries = cache.len()?;
        debug!(dir = %cache.dir.display(), entries, "response cache opened");
        Ok(cache)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Looks up a stored response.
    ///
    /// An unreadable or corrupt entry is treated as a miss; the next
    /// successful fetch overwrites it.
    pub fn get(&self, url: &str) -> Option<CacheEntry> {
        let path = self.entry_path(url);
        let raw = fs::read_to_string(&path).ok()?;
        match serde_json::from_str::<CacheEntry>(&raw) {
            Ok(entry) if entry.url == url => Some(entry),
            Ok(_) => None,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring corrupt cache entry");
                None
            }
        }
    }

    pub fn put(&self, entry: &CacheEntry) -> Result<()> {
        let json = serde_json::to_string(entry)?;
        fs::write(self.entry_path(&entry.url), json)?;
        Ok(())
    }

    /// Deletes every entry. Returns how many were removed.
    pub fn clear(&self) -> Result<usize> {
        let mut removed = 0;
        for path in self.entry_paths()? {
            fs::remove_file(path)?;
            removed += 1;
        }
        Ok(removed)
    }

    pub fn len(&self) -> Result<usize> {
        Ok(self.entry_paths()?.len())
    }

    fn entry_paths(&self) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) == Some(ENTRY_EXTENSION) {
                paths.push(path);
            }
        }
        Ok(paths)
    }

    // "https://peps.python.org/pep-0008/" -> "https%3A%2F%2Fpeps.python.org%2Fpep-0008%2F.json"
    fn entry_path(&self, url: &str) -> PathBuf {
        let name: String = url::form_urlencoded::byte_serialize(url.as_bytes()).collect();
        self.dir.join(format!("{}.{}", name, ENTRY_EXTENSION))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_put_then_get() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ResponseCache::open(tmp.path().join("http_cache")).unwrap();

        let entry = CacheEntry::new("https://peps.python.org/", 200, "<html></html>".into());
        cache.put(&entry).unwrap();

        assert_eq!(cache.get("https://peps.python.org/"), Some(entry));
        assert_eq!(cache.get("https://peps.python.org/pep-0001/"), None);
    }

    #[test]
    fn test_entries_survive_reopen() {
        let tmp = tempfile::tempdir().unwrap();
        let url = "https://docs.python.org/3/";
        ResponseCache::open(tmp.path())
            .unwrap()
            .put(&CacheEntry::new(url, 200, "body".into()))
            .unwrap();

        let reopened = ResponseCache::open(tmp.path()).unwrap();
        assert_eq!(reopened.get(url).unwrap().body, "body");
    }

    #[test]
    fn test_clear_removes_all_entries() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ResponseCache::open(tmp.path()).unwrap();
        cache.put(&CacheEntry::new("https://a.example/", 200, "a".into())).unwrap();
        cache.put(&CacheEntry::new("https://b.example/", 200, "b".into())).unwrap();
        assert_eq!(cache.len().unwrap(), 2);

        assert_eq!(cache.clear().unwrap(), 2);
        assert_eq!(cache.len().unwrap(), 0);
        assert_eq!(cache.get("https://a.example/"), None);
    }

    #[test]
    fn test_corrupt_entry_is_a_miss() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ResponseCache::open(tmp.path()).unwrap();
        let url = "https://a.example/";
        fs::write(cache.entry_path(url), "not json").unwrap();
        assert_eq!(cache.get(url), None);
    }

    #[test]
    fn test_entry_file_name_is_filesystem_safe() {
        let tmp = tempfile::tempdir().unwrap();
        let cache = ResponseCache::open(tmp.path()).unwrap();
        let path = cache.entry_path("https://peps.python.org/pep-0008/?a=1");
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(!name.contains('/'));
        assert!(name.ends_with(".json"));
    }
}
