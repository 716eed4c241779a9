use dashmap::DashMap;
use serde::Serialize;
use std::time::{Duration, Instant};

/// A thread-safe cache with TTL support.
pub struct Cache<V> {
    data: DashMap<String, CacheEntry<V>>,
    default_ttl: Duration,
}

struct CacheEntry<V> {
    value: V,
    expires_at: Instant,
}

/// Entry counts reported by `/api/cache/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Entries held, expired ones included.
    pub total: usize,
    /// Entries that have not expired yet.
    pub active: usize,
}

impl<V: Clone> Cache<V> {
    pub fn new(default_ttl: Duration) -> Self {
        Self {
            data: DashMap::new(),
            default_ttl,
        }
    }

    /// Get a value from the cache. Expired entries are evicted on read.
    pub fn get(&self, key: &str) -> Option<V> {
        let entry = self.data.get(key)?;
        if entry.expires_at > Instant::now() {
            Some(entry.value.clone())
        } else {
            drop(entry);
            self.data.remove(key);
            None
        }
    }

    /// Set a value in the cache with the default TTL.
    pub fn set(&self, key: String, value: V) {
        self.set_with_ttl(key, value, self.default_ttl);
    }

    pub fn set_with_ttl(&self, key: String, value: V, ttl: Duration) {
        self.data.insert(
            key,
            CacheEntry {
                value,
                expires_at: Instant::now() + ttl,
            },
        );
    }

    /// Drop every entry.
    pub fn flush(&self) {
        self.data.clear();
    }

    /// Remove all expired entries, returning how many were dropped.
    pub fn cleanup(&self) -> usize {
        let before = self.data.len();
        let now = Instant::now();
        self.data.retain(|_, entry| entry.expires_at > now);
        before.saturating_sub(self.data.len())
    }

    pub fn stats(&self) -> CacheStats {
        let now = Instant::now();
        let active = self
            .data
            .iter()
            .filter(|entry| entry.expires_at > now)
            .count();
        CacheStats {
            total: self.data.len(),
            active,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}
