//! Bounded cache facade with runtime policy selection.
//!
//! [`BoundedCache`] is the domain-level surface: callers store city
//! population records under normalized `"<country>|<city>"` keys and pick an
//! eviction policy once, at construction, via [`PolicyKind`]. Dispatch is a
//! tagged enum over the four policy cores; there is no trait-object
//! indirection and no downcasting.
//!
//! ```text
//!   PolicyKind ──► BoundedCache ──► Inner::Lru(LruPolicy<String, Entry>)
//!                  ├─ stats: CacheStats     ::Lfu(LfuPolicy<..>)
//!                  └─ kind                  ::Fifo(FifoPolicy<..>)
//!                                           ::Random(RandomPolicy<..>)
//! ```
//!
//! Every `get` records a hit or miss and every `put` records an insertion,
//! refresh, or eviction in the always-on [`CacheStats`] counters.

use std::fmt;

use crate::entry::Entry;
use crate::error::ConfigError;
use crate::policy::fifo::FifoPolicy;
use crate::policy::lfu::LfuPolicy;
use crate::policy::lru::LruPolicy;
use crate::policy::random::RandomPolicy;
use crate::stats::CacheStats;

/// Eviction policy selector for [`BoundedCache`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolicyKind {
    /// Evict the least recently accessed entry.
    Lru,
    /// Evict the least frequently accessed entry (oldest on ties).
    Lfu,
    /// Evict the oldest entry by insertion order.
    Fifo,
    /// Evict a uniformly random entry.
    Random,
}

impl fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PolicyKind::Lru => "lru",
            PolicyKind::Lfu => "lfu",
            PolicyKind::Fifo => "fifo",
            PolicyKind::Random => "random",
        };
        f.write_str(name)
    }
}

/// One row of a [`BoundedCache::snapshot`].
#[derive(Debug, Clone, PartialEq)]
pub struct SnapshotEntry {
    /// City name with original display casing.
    pub city: String,
    /// Country code with original display casing.
    pub country: String,
    /// Cached population value.
    pub population: f64,
    /// Access frequency; populated only by the LFU policy.
    pub frequency: Option<u64>,
}

enum Inner {
    Lru(LruPolicy<String, Entry>),
    Lfu(LfuPolicy<String, Entry>),
    Fifo(FifoPolicy<String, Entry>),
    Random(RandomPolicy<String, Entry>),
}

impl Inner {
    fn insert(&mut self, key: String, entry: Entry) -> Option<Entry> {
        match self {
            Inner::Lru(p) => p.insert(key, entry),
            Inner::Lfu(p) => p.insert(key, entry),
            Inner::Fifo(p) => p.insert(key, entry),
            Inner::Random(p) => p.insert(key, entry),
        }
    }

    fn get(&mut self, key: &String) -> Option<&Entry> {
        match self {
            Inner::Lru(p) => p.get(key),
            Inner::Lfu(p) => p.get(key),
            Inner::Fifo(p) => p.get(key),
            Inner::Random(p) => p.get(key),
        }
    }

    fn contains(&self, key: &String) -> bool {
        match self {
            Inner::Lru(p) => p.contains(key),
            Inner::Lfu(p) => p.contains(key),
            Inner::Fifo(p) => p.contains(key),
            Inner::Random(p) => p.contains(key),
        }
    }

    fn len(&self) -> usize {
        match self {
            Inner::Lru(p) => p.len(),
            Inner::Lfu(p) => p.len(),
            Inner::Fifo(p) => p.len(),
            Inner::Random(p) => p.len(),
        }
    }

    fn capacity(&self) -> usize {
        match self {
            Inner::Lru(p) => p.capacity(),
            Inner::Lfu(p) => p.capacity(),
            Inner::Fifo(p) => p.capacity(),
            Inner::Random(p) => p.capacity(),
        }
    }

    fn clear(&mut self) {
        match self {
            Inner::Lru(p) => p.clear(),
            Inner::Lfu(p) => p.clear(),
            Inner::Fifo(p) => p.clear(),
            Inner::Random(p) => p.clear(),
        }
    }
}

/// Bounded key-value cache over city population records.
///
/// Keys are expected in the normalized form produced by
/// [`cache_key`](crate::entry::cache_key); the cache itself compares keys
/// byte-for-byte and performs no folding of its own.
///
/// # Example
///
/// ```
/// use citycache::cache::{BoundedCache, PolicyKind};
/// use citycache::entry::cache_key;
///
/// let mut cache = BoundedCache::new(2, PolicyKind::Lru);
/// cache.put(cache_key("JP", "Tokyo"), "Tokyo", "JP", 37_400_068.0);
/// cache.put(cache_key("FR", "Paris"), "Paris", "FR", 2_102_650.0);
///
/// assert_eq!(cache.get(&cache_key("jp", "TOKYO")), Some(37_400_068.0));
/// assert_eq!(cache.get("de|berlin"), None);
/// assert_eq!(cache.stats().hits, 1);
/// ```
pub struct BoundedCache {
    inner: Inner,
    kind: PolicyKind,
    stats: CacheStats,
}

impl BoundedCache {
    /// Creates a cache with the given capacity and eviction policy.
    ///
    /// A capacity of 0 yields a no-op cache: every `put` is discarded and
    /// every `get` misses. Use [`try_new`](Self::try_new) to surface that
    /// case as a configuration error instead.
    pub fn new(capacity: usize, kind: PolicyKind) -> Self {
        let inner = match kind {
            PolicyKind::Lru => Inner::Lru(LruPolicy::new(capacity)),
            PolicyKind::Lfu => Inner::Lfu(LfuPolicy::new(capacity)),
            PolicyKind::Fifo => Inner::Fifo(FifoPolicy::new(capacity)),
            PolicyKind::Random => Inner::Random(RandomPolicy::new(capacity)),
        };
        Self {
            inner,
            kind,
            stats: CacheStats::default(),
        }
    }

    /// Creates a cache, rejecting a zero capacity.
    ///
    /// # Example
    ///
    /// ```
    /// use citycache::cache::{BoundedCache, PolicyKind};
    ///
    /// assert!(BoundedCache::try_new(0, PolicyKind::Lru).is_err());
    /// assert!(BoundedCache::try_new(16, PolicyKind::Lru).is_ok());
    /// ```
    pub fn try_new(capacity: usize, kind: PolicyKind) -> Result<Self, ConfigError> {
        if capacity == 0 {
            return Err(ConfigError::new("cache capacity must be greater than zero"));
        }
        Ok(Self::new(capacity, kind))
    }

    /// Looks up a population by normalized key.
    ///
    /// A hit applies the policy's access side effect (LRU moves the entry
    /// to the front, LFU bumps its frequency) and is counted in the stats;
    /// a miss leaves the cache contents untouched.
    pub fn get(&mut self, key: &str) -> Option<f64> {
        let key = key.to_string();
        match self.inner.get(&key) {
            Some(entry) => {
                self.stats.hits += 1;
                Some(entry.population)
            }
            None => {
                self.stats.misses += 1;
                None
            }
        }
    }

    /// Inserts or refreshes a record.
    ///
    /// An existing key is refreshed in place (the payload is overwritten;
    /// for LRU and LFU the refresh counts as an access). A new key inserted
    /// at capacity evicts exactly one entry, chosen by the policy.
    pub fn put(
        &mut self,
        key: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        population: f64,
    ) {
        let key = key.into();
        let entry = Entry::new(key.clone(), city, country, population);

        let evicting =
            self.capacity() > 0 && self.len() == self.capacity() && !self.inner.contains(&key);

        match self.inner.insert(key, entry) {
            Some(_) => self.stats.refreshes += 1,
            None if self.capacity() > 0 => {
                self.stats.insertions += 1;
                if evicting {
                    self.stats.evictions += 1;
                }
            }
            // Zero-capacity no-op cache: nothing happened, count nothing.
            None => {}
        }
    }

    /// Returns the cache contents in the policy's display order, eviction
    /// candidate last. Does not count as an access and does not reorder
    /// anything.
    ///
    /// The `frequency` field is populated only under [`PolicyKind::Lfu`].
    pub fn snapshot(&self) -> Vec<SnapshotEntry> {
        match &self.inner {
            Inner::Lru(p) => p
                .iter()
                .map(|(_, entry)| SnapshotEntry {
                    city: entry.city.clone(),
                    country: entry.country.clone(),
                    population: entry.population,
                    frequency: None,
                })
                .collect(),
            Inner::Lfu(p) => p
                .iter()
                .map(|(_, entry, freq)| SnapshotEntry {
                    city: entry.city.clone(),
                    country: entry.country.clone(),
                    population: entry.population,
                    frequency: Some(freq),
                })
                .collect(),
            Inner::Fifo(p) => p
                .iter()
                .map(|(_, entry)| SnapshotEntry {
                    city: entry.city.clone(),
                    country: entry.country.clone(),
                    population: entry.population,
                    frequency: None,
                })
                .collect(),
            Inner::Random(p) => p
                .iter()
                .map(|(_, entry)| SnapshotEntry {
                    city: entry.city.clone(),
                    country: entry.country.clone(),
                    population: entry.population,
                    frequency: None,
                })
                .collect(),
        }
    }

    /// Checks key presence without counting as an access.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.contains(&key.to_string())
    }

    /// Current number of cached records.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns `true` if the cache holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.len() == 0
    }

    /// Maximum number of records, fixed at construction.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Removes all records. Capacity, policy, and stats are kept.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// The eviction policy this cache was built with.
    #[inline]
    pub fn policy(&self) -> PolicyKind {
        self.kind
    }

    /// Snapshot of the operation counters.
    #[inline]
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

impl fmt::Debug for BoundedCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoundedCache")
            .field("policy", &self.kind)
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .field("stats", &self.stats)
            .finish()
    }
}
