//! Operation counters for a [`BoundedCache`](crate::cache::BoundedCache).
//!
//! Plain, always-on counters: every `get` records a hit or a miss, every
//! `put` records an insertion or a refresh, and evictions are counted as
//! they happen. Cheap enough to leave enabled unconditionally; callers that
//! want rates snapshot the struct (it is `Copy`) and diff two snapshots.

/// Snapshot of cache operation counts.
///
/// # Example
///
/// ```
/// use citycache::cache::{BoundedCache, PolicyKind};
///
/// let mut cache = BoundedCache::new(2, PolicyKind::Lru);
/// cache.put("jp|tokyo", "Tokyo", "JP", 37_400_068.0);
/// cache.get("jp|tokyo");
/// cache.get("fr|paris");
///
/// let stats = cache.stats();
/// assert_eq!(stats.hits, 1);
/// assert_eq!(stats.misses, 1);
/// assert_eq!(stats.insertions, 1);
/// assert_eq!(stats.hit_rate(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// `get` calls that found the key.
    pub hits: u64,
    /// `get` calls that did not find the key.
    pub misses: u64,
    /// `put` calls that added a new entry.
    pub insertions: u64,
    /// `put` calls that refreshed an existing entry in place.
    pub refreshes: u64,
    /// Entries removed to make room for a new key.
    pub evictions: u64,
}

impl CacheStats {
    /// Total number of `get` calls observed.
    #[inline]
    pub fn lookups(self) -> u64 {
        self.hits + self.misses
    }

    /// Fraction of `get` calls that hit, or `0.0` before any lookup.
    pub fn hit_rate(self) -> f64 {
        let total = self.lookups();
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
