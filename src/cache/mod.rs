//! Short-lived memo of successful operation results.
//!
//! The cache is created by a long-lived caller and handed to each
//! [`Scraper`](crate::portal::Scraper) it wants to share results with. Clones
//! share storage. The CLI runs one operation per process and never uses one.

mod stats;

pub use stats::CacheStats;

use crate::config::CacheConfig;
use crate::error::Result;
use crate::session::Credentials;
use crate::{log_debug, log_info};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    operation: &'static str,
    base_url: String,
    username: String,
    params: Vec<String>,
}

impl CacheKey {
    pub fn new<I, S>(operation: &'static str, credentials: &Credentials, params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            operation,
            base_url: credentials.base_url().to_string(),
            username: credentials.username().to_string(),
            params: params.into_iter().map(Into::into).collect(),
        }
    }

}

#[derive(Debug)]
struct CacheEntry {
    value: Value,
    stored_at: Instant,
}

#[derive(Debug, Clone)]
pub struct ResultCache {
    entries: Arc<Mutex<HashMap<CacheKey, CacheEntry>>>,
    stats: Arc<Mutex<CacheStats>>,
    ttl: Duration,
}

impl ResultCache {
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
            stats: Arc::new(Mutex::new(CacheStats::new())),
            ttl,
        }
    }

    /// A cache sized by `[cache]`, or `None` when caching is switched off.
    pub fn from_config(config: &CacheConfig) -> Option<Self> {
        config.enabled.then(|| Self::new(config.ttl()))
    }

    /// A fresh value for `key`. Expired entries are dropped on the way.
    pub async fn get<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let mut entries = self.entries.lock().await;
        let mut stats = self.stats.lock().await;

        let fresh: Option<T> = match entries.get(key) {
            Some(entry) if entry.stored_at.elapsed() < self.ttl => {
                serde_json::from_value(entry.value.clone()).ok()
            }
            Some(_) => {
                entries.remove(key);
                stats.record_expired(1);
                None
            }
            None => None,
        };

        match fresh {
            Some(value) => {
                stats.record_hit(key.operation);
                log_debug!("[cache] Hit for {} ({})", key.operation, key.username);
                Some(value)
            }
            None => {
                stats.record_miss();
                None
            }
        }
    }

    /// Stores `value` under `key`. Expired entries of any key are swept first
    /// so a cache shared across many users stays bounded by the TTL.
    pub async fn insert<T: Serialize>(&self, key: CacheKey, value: &T) -> Result<()> {
        let value = serde_json::to_value(value)?;
        let mut entries = self.entries.lock().await;
        let mut stats = self.stats.lock().await;

        let purged = self.sweep(&mut entries);
        stats.record_expired(purged);

        entries.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
        stats.record_store();
        Ok(())
    }

    /// Drops every expired entry and returns how many went.
    pub async fn purge_expired(&self) -> usize {
        let mut entries = self.entries.lock().await;
        let purged = self.sweep(&mut entries);
        self.stats.lock().await.record_expired(purged);
        purged
    }

    fn sweep(&self, entries: &mut HashMap<CacheKey, CacheEntry>) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| entry.stored_at.elapsed() < self.ttl);
        let purged = before - entries.len();
        if purged > 0 {
            log_debug!("[cache] Dropped {} expired entries", purged);
        }
        purged
    }

    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.stats.lock().await.clone()
    }

    pub async fn report(&self) {
        let stats = self.stats().await;
        log_info!("=== Result Cache Report ===");
        log_info!("Entries: {}", self.len().await);
        log_info!("Hits: {}", stats.hits);
        log_info!("Misses: {}", stats.misses);
        log_info!("Stores: {}", stats.stores);
        log_info!("Expired: {}", stats.expired);
        for (operation, hits) in &stats.hits_by_operation {
            log_info!("  {}: {} hits", operation, hits);
        }
    }
}
