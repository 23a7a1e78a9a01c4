use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;
use std::hash::Hash;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};

use crate::modules::schedule::domain::Clock;
use crate::shared::errors::{AppError, AppResult};

/// Cached entry stamped with the injected clock's time
#[derive(Debug, Clone)]
struct CacheEntry<V> {
    value: V,
    inserted_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    fn is_expired(&self, now: DateTime<Utc>, ttl: Duration) -> bool {
        now - self.inserted_at > ttl
    }
}

/// Cache statistics for monitoring
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries_count: usize,
    pub evictions: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        if self.hits + self.misses == 0 {
            0.0
        } else {
            self.hits as f64 / (self.hits + self.misses) as f64
        }
    }
}

/// Keyed cache with a fixed TTL and an injected clock
///
/// Owned by whoever needs it; nothing here is process-global. Expiry is
/// judged against the injected clock only.
pub struct TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    entries: DashMap<K, CacheEntry<V>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
    max_entries: usize,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    pub fn new(
        ttl: std::time::Duration,
        max_entries: usize,
        clock: Arc<dyn Clock>,
    ) -> AppResult<Self> {
        if ttl.is_zero() {
            return Err(AppError::ValidationError("cache ttl must be > 0".to_string()));
        }
        if max_entries == 0 {
            return Err(AppError::ValidationError(
                "cache max_entries must be > 0".to_string(),
            ));
        }
        let ttl = Duration::from_std(ttl)
            .map_err(|e| AppError::InvalidInput(format!("cache ttl out of range: {}", e)))?;

        Ok(Self {
            entries: DashMap::new(),
            clock,
            ttl,
            max_entries,
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        })
    }

    /// Get a value if present and not expired
    pub fn get(&self, key: &K) -> Option<V> {
        let now = self.clock.now();

        // Drop expired entries before reading; the read guard must not be held across remove
        if self
            .entries
            .remove_if(key, |_, entry| entry.is_expired(now, self.ttl))
            .is_some()
        {
            debug!("Removed expired cache entry");
        }

        match self.entries.get(key).map(|entry| entry.value.clone()) {
            Some(value) => {
                self.hits.fetch_add(1, Ordering::Relaxed);
                Some(value)
            }
            None => {
                self.misses.fetch_add(1, Ordering::Relaxed);
                None
            }
        }
    }

    /// Insert or replace a value, evicting the oldest entries when full
    pub fn insert(&self, key: K, value: V) {
        if !self.entries.contains_key(&key) && self.entries.len() >= self.max_entries {
            self.purge_expired();
            if self.entries.len() >= self.max_entries {
                self.evict_oldest_entries();
            }
        }

        let entry = CacheEntry {
            value,
            inserted_at: self.clock.now(),
        };
        self.entries.insert(key, entry);

        // Concurrent inserters can all pass the check above; settle the overshoot here
        if self.entries.len() > self.max_entries {
            self.purge_expired();
            if self.entries.len() > self.max_entries {
                self.evict_oldest_entries();
            }
        }
    }

    pub fn invalidate(&self, key: &K) -> bool {
        self.entries.remove(key).is_some()
    }

    /// Remove every expired entry, returning how many went
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now, self.ttl));
        let removed = before.saturating_sub(self.entries.len());

        if removed > 0 {
            debug!("Cleaned up {} expired cache entries", removed);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries_count: self.entries.len(),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    /// Clear all cached entries and counters
    pub fn clear(&self) {
        self.entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.evictions.store(0, Ordering::Relaxed);
        info!("Cache cleared");
    }

    /// Evict oldest entries down to 90% of capacity
    fn evict_oldest_entries(&self) {
        let current_size = self.entries.len();

        let mut by_age: Vec<(K, DateTime<Utc>)> = self
            .entries
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().inserted_at))
            .collect();
        by_age.sort_by_key(|(_, inserted_at)| *inserted_at);

        let target_size = (self.max_entries * 9) / 10;
        let to_evict = current_size.saturating_sub(target_size).max(1);

        let evicted = by_age
            .into_iter()
            .take(to_evict)
            .filter(|(key, _)| self.entries.remove(key).is_some())
            .count();
        self.evictions.fetch_add(evicted as u64, Ordering::Relaxed);

        debug!(
            "Evicted {} old cache entries (was {}, now {})",
            evicted,
            current_size,
            self.entries.len()
        );
    }
}
