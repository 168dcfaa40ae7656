//! # Eviction Policy Trait
//!
//! This module defines the capability trait shared by the four eviction
//! policy cores (LRU, LFU, FIFO, Random), giving callers a uniform
//! insert/get/size/capacity contract regardless of how victims are chosen.
//!
//! ## Design
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │          EvictionPolicy<K, V>           │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → usize                    │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┬──────────────┐
//!        ▼             ▼             ▼              ▼
//!   LruPolicy     LfuPolicy     FifoPolicy    RandomPolicy
//! ```
//!
//! `get` takes `&mut self` because a lookup is an *access*: LRU reorders its
//! recency list and LFU bumps a frequency counter on every hit. FIFO and
//! Random never mutate on `get` but implement the same signature so generic
//! code does not need to distinguish.
//!
//! Policy-specific operations (peeking or popping the current eviction
//! candidate, reading frequencies, seeding the generator) stay inherent on
//! each core; they only make sense for that policy and callers who need
//! them have already picked a concrete type.
//!
//! ## Example
//!
//! ```
//! use citycache::policy::fifo::FifoPolicy;
//! use citycache::policy::lru::LruPolicy;
//! use citycache::traits::EvictionPolicy;
//!
//! fn warm<P: EvictionPolicy<u64, &'static str>>(policy: &mut P) {
//!     policy.insert(1, "one");
//!     policy.insert(2, "two");
//! }
//!
//! let mut lru = LruPolicy::new(10);
//! let mut fifo = FifoPolicy::new(10);
//! warm(&mut lru);
//! warm(&mut fifo);
//! assert_eq!(lru.len(), 2);
//! assert_eq!(fifo.len(), 2);
//! ```

/// Uniform contract implemented by all four eviction policy cores.
///
/// Absence is a normal outcome: `get` on a missing key returns `None` and
/// is never an error.
pub trait EvictionPolicy<K, V> {
    /// Inserts a key-value pair, returning the previous value if the key
    /// already existed (a refresh).
    ///
    /// Inserting a *new* key into a full policy evicts exactly one existing
    /// entry first, chosen by the policy's rule. A refresh never changes the
    /// number of entries, and for recency/frequency-aware policies it counts
    /// as an access.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Looks up a value by key.
    ///
    /// On a hit this may reorder or re-weight internal policy state (LRU
    /// recency, LFU frequency). On a miss the state is unchanged.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Checks key presence without counting as an access.
    fn contains(&self, key: &K) -> bool;

    /// Current number of entries. Always `<= capacity()`.
    fn len(&self) -> usize;

    /// Returns `true` if the policy holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of entries, fixed at construction.
    fn capacity(&self) -> usize;

    /// Removes all entries. Capacity is unchanged.
    fn clear(&mut self);
}
