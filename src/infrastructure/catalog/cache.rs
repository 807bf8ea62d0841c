// SPDX-License-Identifier: MPL-2.0
//! In-memory record cache for repeated lookups.
//!
//! # Design
//!
//! - **LRU eviction**: Least recently used records are evicted first
//! - **Count-bounded**: At most `capacity` records are kept
//! - **Id-keyed**: Lookups by name are stored under the identifier they resolve to
//! - **Successes only**: Failed lookups always reach the wrapped catalog again
//!
//! # Usage
//!
//! ```ignore
//! let catalog = CachedCatalog::new(HttpCatalog::new(&settings)?, settings.cache_capacity);
//! let first = catalog.fetch_by_id(id).await?;  // network
//! let again = catalog.fetch_by_id(id).await?;  // memory
//! ```

use crate::application::port::CatalogSource;
use crate::domain::error::FetchFailed;
use crate::domain::record::{Record, RecordId};
use lru::LruCache;
use std::num::NonZeroUsize;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of records currently in cache.
    pub entries: usize,

    /// Lookups served from memory.
    pub hits: u64,

    /// Lookups forwarded to the wrapped catalog.
    pub misses: u64,

    /// Records evicted to make room.
    pub evictions: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

struct CacheInner {
    records: LruCache<RecordId, Record>,
    stats: CacheStats,
}

/// LRU decorator over a [`CatalogSource`].
pub struct CachedCatalog<C> {
    inner: C,
    /// `None` when caching is disabled.
    cache: Option<Mutex<CacheInner>>,
}

impl<C> CachedCatalog<C> {
    /// Wraps `inner`, keeping up to `capacity` records. `0` disables caching.
    #[must_use]
    pub fn new(inner: C, capacity: usize) -> Self {
        let cache = NonZeroUsize::new(capacity).map(|capacity| {
            Mutex::new(CacheInner {
                records: LruCache::new(capacity),
                stats: CacheStats::default(),
            })
        });
        Self { inner, cache }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    #[must_use]
    pub fn inner(&self) -> &C {
        &self.inner
    }

    /// Current statistics; all zero when caching is disabled.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        self.lock().map_or_else(CacheStats::default, |inner| CacheStats {
            entries: inner.records.len(),
            ..inner.stats
        })
    }

    /// Drops every cached record. Statistics are kept.
    pub fn clear(&self) {
        if let Some(mut inner) = self.lock() {
            inner.records.clear();
        }
    }

    fn lock(&self) -> Option<MutexGuard<'_, CacheInner>> {
        // Entries are plain clones; a poisoned lock still holds valid records.
        self.cache
            .as_ref()
            .map(|cache| cache.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn lookup(&self, id: RecordId) -> Option<Record> {
        let mut inner = self.lock()?;
        let hit = inner.records.get(&id).cloned();
        if hit.is_some() {
            inner.stats.hits += 1;
        } else {
            inner.stats.misses += 1;
        }
        hit
    }

    fn store(&self, record: &Record) {
        if let Some(mut inner) = self.lock() {
            if let Some((evicted, _)) = inner.records.push(record.id(), record.clone()) {
                if evicted != record.id() {
                    inner.stats.evictions += 1;
                }
            }
        }
    }
}

impl<C: CatalogSource> CatalogSource for CachedCatalog<C> {
    async fn fetch_by_id(&self, id: RecordId) -> Result<Record, FetchFailed> {
        if let Some(record) = self.lookup(id) {
            tracing::trace!(id = %id, "catalog cache hit");
            return Ok(record);
        }
        let record = self.inner.fetch_by_id(id).await?;
        self.store(&record);
        Ok(record)
    }

    async fn fetch_by_name(&self, name: &str) -> Result<Record, FetchFailed> {
        let record = self.inner.fetch_by_name(name).await?;
        self.store(&record);
        Ok(record)
    }
}

impl<C> std::fmt::Debug for CachedCatalog<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedCatalog")
            .field("stats", &self.stats())
            .finish_non_exhaustive()
    }
}
