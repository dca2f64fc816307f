//! Bounded in-memory cache with LRU eviction, keyed by rounded Julian Day.
//!
//! Collapsed from the three-tier L1/L2/L3 shape this was grounded on down
//! to the single tier a pure-computation cache actually needs: there is no
//! persistence requirement here, so no Redis or disk layer.

use std::sync::Arc;
use std::time::Instant;

use dashmap::DashMap;
use panchangam_core::EphemerisSample;
use tokio::sync::RwLock;

use crate::CacheKey;

#[derive(Debug, Clone)]
struct CachedEntry {
    value: EphemerisSample,
    accessed_at: Instant,
    access_count: u64,
}

#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub evictions: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Entry-count-bounded LRU, same eviction mechanics as the byte-bounded
/// cache this is adapted from: sort by `accessed_at` then `access_count`,
/// evict from the front until there's room for one more entry.
pub struct L1Cache {
    entries: Arc<DashMap<CacheKey, CachedEntry>>,
    capacity: usize,
    stats: Arc<RwLock<CacheStats>>,
}

impl L1Cache {
    pub fn new(capacity: usize) -> Self {
        L1Cache { entries: Arc::new(DashMap::new()), capacity, stats: Arc::new(RwLock::new(CacheStats::default())) }
    }

    pub async fn get(&self, key: &CacheKey) -> Option<EphemerisSample> {
        if let Some(mut entry) = self.entries.get_mut(key) {
            entry.accessed_at = Instant::now();
            entry.access_count += 1;
            let mut stats = self.stats.write().await;
            stats.hits += 1;
            return Some(entry.value);
        }
        let mut stats = self.stats.write().await;
        stats.misses += 1;
        None
    }

    pub async fn store(&self, key: &CacheKey, value: EphemerisSample) {
        self.ensure_space().await;
        self.entries.insert(
            key.clone(),
            CachedEntry { value, accessed_at: Instant::now(), access_count: 1 },
        );
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub async fn clear(&self) {
        self.entries.clear();
    }

    pub async fn stats(&self) -> CacheStats {
        self.stats.read().await.clone()
    }

    async fn ensure_space(&self) {
        if self.entries.len() < self.capacity {
            return;
        }

        let mut candidates: Vec<_> = self
            .entries
            .iter()
            .map(|e| (e.key().clone(), e.value().accessed_at, e.value().access_count))
            .collect();
        candidates.sort_by(|a, b| a.1.cmp(&b.1).then(a.2.cmp(&b.2)));

        let to_evict = self.entries.len() + 1 - self.capacity;
        let mut stats = self.stats.write().await;
        for (key, _, _) in candidates.into_iter().take(to_evict) {
            self.entries.remove(&key);
            stats.evictions += 1;
        }
    }
}
