//! Thread-safe cache wrapper (feature `concurrency`).
//!
//! [`SharedCache`] is a cloneable handle over one [`BoundedCache`] guarded
//! by a single `parking_lot::Mutex`. Every policy mutates on `get`, so a
//! read-write lock would buy nothing; one exclusive lock per cache keeps
//! the policy cores free of atomics and the locking story trivial.
//!
//! Hosts that need compound operations (check-then-put without an
//! interleaved eviction) take [`SharedCache::lock`] and work on the guard.

use std::sync::Arc;

use parking_lot::{Mutex, MutexGuard};

use crate::cache::{BoundedCache, PolicyKind, SnapshotEntry};
use crate::error::ConfigError;
use crate::stats::CacheStats;

/// Cloneable, thread-safe handle to a [`BoundedCache`].
///
/// # Example
///
/// ```
/// use citycache::cache::PolicyKind;
/// use citycache::shared::SharedCache;
///
/// let cache = SharedCache::new(8, PolicyKind::Lru);
/// let handle = cache.clone();
///
/// std::thread::spawn(move || {
///     handle.put("jp|tokyo", "Tokyo", "JP", 37_400_068.0);
/// })
/// .join()
/// .unwrap();
///
/// assert_eq!(cache.get("jp|tokyo"), Some(37_400_068.0));
/// ```
#[derive(Clone)]
pub struct SharedCache {
    inner: Arc<Mutex<BoundedCache>>,
}

impl SharedCache {
    /// Creates a shared cache with the given capacity and policy.
    pub fn new(capacity: usize, kind: PolicyKind) -> Self {
        Self::from_cache(BoundedCache::new(capacity, kind))
    }

    /// Creates a shared cache, rejecting a zero capacity.
    pub fn try_new(capacity: usize, kind: PolicyKind) -> Result<Self, ConfigError> {
        BoundedCache::try_new(capacity, kind).map(Self::from_cache)
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: BoundedCache) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Locks the cache for a compound operation.
    pub fn lock(&self) -> MutexGuard<'_, BoundedCache> {
        self.inner.lock()
    }

    /// Looks up a population by normalized key. See [`BoundedCache::get`].
    pub fn get(&self, key: &str) -> Option<f64> {
        self.inner.lock().get(key)
    }

    /// Inserts or refreshes a record. See [`BoundedCache::put`].
    pub fn put(
        &self,
        key: impl Into<String>,
        city: impl Into<String>,
        country: impl Into<String>,
        population: f64,
    ) {
        self.inner.lock().put(key, city, country, population);
    }

    /// Contents in display order. See [`BoundedCache::snapshot`].
    pub fn snapshot(&self) -> Vec<SnapshotEntry> {
        self.inner.lock().snapshot()
    }

    /// Checks key presence without counting as an access.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().contains(key)
    }

    /// Current number of cached records.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    /// Returns `true` if the cache holds no records.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    /// Maximum number of records.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    /// Removes all records.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// The eviction policy this cache was built with.
    pub fn policy(&self) -> PolicyKind {
        self.inner.lock().policy()
    }

    /// Snapshot of the operation counters.
    pub fn stats(&self) -> CacheStats {
        self.inner.lock().stats()
    }
}

impl std::fmt::Debug for SharedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.inner.lock().fmt(f)
    }
}
