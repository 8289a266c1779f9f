//! In-memory response caching.
//!
//! Entries expire after a per-entry TTL. Expired entries are removed lazily
//! when their key is read again; there is no background sweep and no size
//! bound, so the cache only lives as long as the process.

use shared::{MetaDetail, MetaPreview};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::time::Instant;
use tracing::debug;

/// Cached value with its absolute expiry
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Key-value store with per-entry expiry
#[derive(Debug)]
pub struct TtlCache<V> {
    entries: Mutex<HashMap<String, CacheEntry<V>>>,
}

impl<V> Default for TtlCache<V> {
    fn default() -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
        }
    }
}

impl<V: Clone> TtlCache<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a cached value if present and not expired.
    ///
    /// An expired entry is removed by this call.
    pub fn get(&self, key: &str) -> Option<V> {
        let mut entries = self.lock();

        match entries.get(key) {
            None => {
                debug!(key = key, "Cache miss");
                return None;
            }
            Some(entry) if !entry.is_expired(Instant::now()) => {
                debug!(key = key, "Cache hit");
                return Some(entry.value.clone());
            }
            Some(_) => {}
        }

        entries.remove(key);
        debug!(key = key, "Cache entry expired");
        None
    }

    /// Store a value, replacing any previous entry for the key
    pub fn set(&self, key: impl Into<String>, value: V, ttl: Duration) {
        let key = key.into();
        let expires_at = Instant::now() + ttl;

        debug!(key = %key, ttl_ms = ttl.as_millis() as u64, "Cache stored");
        self.lock().insert(key, CacheEntry { value, expires_at });
    }

    /// Number of stored entries, including expired ones not yet read
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, CacheEntry<V>>> {
        // Entries are plain values; a panic elsewhere cannot leave one half-written.
        self.entries.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Process-wide response cache shared by the catalog and meta handlers.
///
/// Created once at startup and dropped at shutdown; nothing is persisted.
#[derive(Debug, Default)]
pub struct ResponseCache {
    pub catalogs: TtlCache<Vec<MetaPreview>>,
    pub metas: TtlCache<MetaDetail>,
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }
}
