//! Key/value storage for jobs, preferences, and cached scores
//!
//! The store is injected into callers rather than read as ambient global
//! state, so tests can run against an in-memory map while the CLI persists
//! to a JSON file.

use crate::error::{Result, ResumeInsightError};
use crate::processing::ats_scorer::AtsResult;
use chrono::{DateTime, Duration, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Minimal string key/value contract shared by all storage backends.
pub trait Store {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
    fn delete(&mut self, key: &str) -> Result<()>;
}

/// In-memory store for tests and one-shot invocations.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Store for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        self.entries.remove(key);
        Ok(())
    }
}

/// Store backed by a single JSON file, written through on every mutation.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl JsonFileStore {
    pub fn open(path: &Path) -> Result<Self> {
        let entries = if path.exists() {
            let content = std::fs::read_to_string(path)?;
            serde_json::from_str(&content)
                .map_err(|e| ResumeInsightError::Storage(format!("Corrupt store file: {}", e)))?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            entries,
        })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.entries)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }
}

impl Store for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        if self.entries.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }
}

const ATS_CACHE_KEY: &str = "ats_scores_cache";

/// A cached ATS result with the moment it was computed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedScore {
    pub result: AtsResult,
    pub timestamp: DateTime<Utc>,
}

/// Content-addressed cache of ATS results on top of a [`Store`].
///
/// Entries are keyed by a rolling hash of the resume text and expire after
/// the configured TTL.
pub struct AtsScoreCache<S: Store> {
    store: S,
    ttl: Duration,
}

impl<S: Store> AtsScoreCache<S> {
    pub fn new(store: S, ttl_hours: i64) -> Self {
        Self {
            store,
            ttl: Duration::hours(ttl_hours),
        }
    }

    pub fn get(&mut self, resume_text: &str) -> Option<AtsResult> {
        let hash = content_hash(resume_text);
        let mut cache = self.load_cache();

        match cache.get(&hash) {
            Some(cached) if Utc::now() - cached.timestamp <= self.ttl => {
                debug!("ATS cache hit for hash {}", hash);
                Some(cached.result.clone())
            }
            Some(_) => {
                debug!("ATS cache entry for hash {} expired", hash);
                cache.remove(&hash);
                self.save_cache(&cache);
                None
            }
            None => None,
        }
    }

    pub fn put(&mut self, resume_text: &str, result: &AtsResult) {
        let hash = content_hash(resume_text);
        let mut cache = self.load_cache();
        cache.insert(
            hash,
            CachedScore {
                result: result.clone(),
                timestamp: Utc::now(),
            },
        );
        self.save_cache(&cache);
    }

    /// Drop every entry older than the TTL.
    pub fn clear_expired(&mut self) {
        let mut cache = self.load_cache();
        let now = Utc::now();
        cache.retain(|_, cached| now - cached.timestamp <= self.ttl);
        self.save_cache(&cache);
    }

    fn load_cache(&self) -> HashMap<String, CachedScore> {
        match self.store.get(ATS_CACHE_KEY) {
            Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                warn!("Discarding unreadable ATS cache: {}", e);
                HashMap::new()
            }),
            Ok(None) => HashMap::new(),
            Err(e) => {
                warn!("Failed to read ATS cache: {}", e);
                HashMap::new()
            }
        }
    }

    fn save_cache(&mut self, cache: &HashMap<String, CachedScore>) {
        match serde_json::to_string(cache) {
            Ok(raw) => {
                if let Err(e) = self.store.set(ATS_CACHE_KEY, &raw) {
                    warn!("Failed to persist ATS cache: {}", e);
                }
            }
            Err(e) => warn!("Failed to serialize ATS cache: {}", e),
        }
    }
}

/// 32-bit rolling hash of the resume content, used as the cache key.
fn content_hash(text: &str) -> String {
    let mut hash: i32 = 0;
    for c in text.chars() {
        hash = hash.wrapping_shl(5).wrapping_sub(hash).wrapping_add(c as i32);
    }
    hash.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dummy_result(score: u32) -> AtsResult {
        AtsResult {
            score,
            feedback: vec!["ok".to_string()],
            breakdown: None,
        }
    }

    #[test]
    fn test_memory_store_roundtrip() {
        let mut store = MemoryStore::new();
        store.set("key", "value").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("value"));

        store.delete("key").unwrap();
        assert_eq!(store.get("key").unwrap(), None);
    }

    #[test]
    fn test_json_file_store_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");

        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.set("jobs", "[]").unwrap();
        }

        let mut store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("jobs").unwrap().as_deref(), Some("[]"));

        store.delete("jobs").unwrap();
        let store = JsonFileStore::open(&path).unwrap();
        assert_eq!(store.get("jobs").unwrap(), None);
    }

    #[test]
    fn test_cache_hit_and_miss() {
        let mut cache = AtsScoreCache::new(MemoryStore::new(), 24);
        cache.put("resume text", &dummy_result(82));

        let hit = cache.get("resume text").unwrap();
        assert_eq!(hit.score, 82);

        assert!(cache.get("different resume").is_none());
    }

    #[test]
    fn test_cache_expiry() {
        let mut cache = AtsScoreCache::new(MemoryStore::new(), 0);
        cache.put("resume text", &dummy_result(60));

        // TTL of zero hours means the entry is immediately stale.
        assert!(cache.get("resume text").is_none());
    }

    #[test]
    fn test_content_hash_stability() {
        assert_eq!(content_hash("abc"), content_hash("abc"));
        assert_ne!(content_hash("abc"), content_hash("abd"));
        assert_eq!(content_hash(""), "0");
    }
}
