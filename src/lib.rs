//! # citycache
//!
//! A bounded key-value cache for accelerating repeated lookups over a slow
//! authoritative source, built around four interchangeable eviction
//! policies: **LRU**, **LFU** (O(1) bucket eviction), **FIFO**, and
//! **Random**.
//!
//! The motivating workload is a city population dataset: queries for the
//! same handful of cities arrive over and over, each full scan of the
//! source is expensive, and a small cache in front absorbs most of the
//! cost. Keys are case-folded `"<country>|<city>"` strings produced by
//! [`entry::cache_key`].
//!
//! ## Layers
//!
//! ```text
//!   CachedLookup ─── read-through flow over a PopulationSource
//!        │
//!   BoundedCache ─── domain facade, PolicyKind dispatch, CacheStats
//!        │
//!   policy cores ─── LruPolicy / LfuPolicy / FifoPolicy / RandomPolicy
//!                    (generic over K, V; unified by EvictionPolicy)
//! ```
//!
//! Use a policy core directly when you want a generic bounded map with a
//! specific replacement strategy; use [`cache::BoundedCache`] when you want
//! runtime policy selection and operation counters; use
//! [`source::CachedLookup`] for the full cache-in-front-of-source flow.
//!
//! ## Example
//!
//! ```
//! use citycache::prelude::*;
//!
//! let mut cache = BoundedCache::new(2, PolicyKind::Lru);
//! cache.put(cache_key("JP", "Tokyo"), "Tokyo", "JP", 37_400_068.0);
//! cache.put(cache_key("FR", "Paris"), "Paris", "FR", 2_102_650.0);
//!
//! // Touch Tokyo, then overflow: Paris is the least recently used.
//! cache.get("jp|tokyo");
//! cache.put(cache_key("IN", "Delhi"), "Delhi", "IN", 28_514_000.0);
//!
//! assert!(cache.contains("jp|tokyo"));
//! assert!(!cache.contains("fr|paris"));
//! assert_eq!(cache.stats().evictions, 1);
//! ```
//!
//! ## Feature flags
//!
//! - `concurrency` — enables [`shared::SharedCache`], an
//!   `Arc<parking_lot::Mutex<BoundedCache>>` handle for multi-threaded
//!   hosts. The core stays single-threaded and lock-free without it.

pub mod cache;
pub mod entry;
pub mod error;
pub mod policy;
pub mod prelude;
pub mod source;
pub mod stats;
pub mod traits;

#[cfg(feature = "concurrency")]
pub mod shared;

pub use cache::{BoundedCache, PolicyKind};
pub use entry::{cache_key, Entry};
pub use stats::CacheStats;
pub use traits::EvictionPolicy;
