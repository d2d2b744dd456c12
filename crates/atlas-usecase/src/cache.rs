//! Statistics cache using moka
//!
//! Entries are keyed by the query fingerprint and expire after a fixed
//! time-to-live. A reader may see statistics up to one TTL old.

use std::sync::Arc;
use std::time::Duration;

use atlas_domain::HeroStatistics;
use moka::sync::Cache;
use tracing::debug;

pub const DEFAULT_TTL: Duration = Duration::from_secs(60);
pub const DEFAULT_MAX_ENTRIES: u64 = 256;

/// Bounded, TTL-expiring statistics cache
#[derive(Clone)]
pub struct StatsCache {
    cache: Cache<String, Arc<HeroStatistics>>,
}

impl StatsCache {
    pub fn new(max_entries: u64, ttl: Duration) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_entries)
            .time_to_live(ttl)
            .build();
        Self { cache }
    }

    pub fn get(&self, key: &str) -> Option<Arc<HeroStatistics>> {
        self.cache.get(key)
    }

    /// Serve `key` from the cache, or compute, store and return it.
    ///
    /// Failed computations are not cached.
    pub fn get_or_compute<E>(
        &self,
        key: &str,
        compute: impl FnOnce() -> Result<HeroStatistics, E>,
    ) -> Result<Arc<HeroStatistics>, E> {
        if let Some(hit) = self.get(key) {
            debug!(key, "stats cache hit");
            return Ok(hit);
        }

        debug!(key, "stats cache miss");
        let stats = Arc::new(compute()?);
        self.cache.insert(key.to_string(), Arc::clone(&stats));
        Ok(stats)
    }

}

impl Default for StatsCache {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_ENTRIES, DEFAULT_TTL)
    }
}

impl core::fmt::Debug for StatsCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StatsCache")
            .field("entries", &self.cache.entry_count())
            .finish()
    }
}
