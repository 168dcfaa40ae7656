//! Convenience re-exports of the commonly used surface.
//!
//! ```
//! use citycache::prelude::*;
//!
//! let mut cache = BoundedCache::new(4, PolicyKind::Lfu);
//! cache.put(cache_key("JP", "Tokyo"), "Tokyo", "JP", 37_400_068.0);
//! assert_eq!(cache.get("jp|tokyo"), Some(37_400_068.0));
//! ```

pub use crate::cache::{BoundedCache, PolicyKind, SnapshotEntry};
pub use crate::entry::{cache_key, Entry};
pub use crate::error::{ConfigError, InvariantError, SourceError};
pub use crate::policy::fifo::FifoPolicy;
pub use crate::policy::lfu::LfuPolicy;
pub use crate::policy::lru::LruPolicy;
pub use crate::policy::random::RandomPolicy;
pub use crate::source::{CachedLookup, CsvSource, Lookup, MemorySource, PopulationSource};
pub use crate::stats::CacheStats;
pub use crate::traits::EvictionPolicy;

#[cfg(feature = "concurrency")]
pub use crate::shared::SharedCache;
