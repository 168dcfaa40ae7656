//! Random eviction policy.
//!
//! Evicts a uniformly random resident entry when a new key arrives at
//! capacity. No access history is kept: `get` is a plain map lookup and a
//! refresh only overwrites the value. The policy owns its own small PRNG, so
//! two instances never share generator state and a seeded instance replays
//! the same eviction sequence for the same operation sequence.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────┐
//!   │  map:  FxHashMap<K, (usize, V)>  (key → pos+val) │
//!   │  keys: Vec<K>                    (dense key set) │
//!   │  rng:  SmallRng                  (policy-owned)  │
//!   │                                                  │
//!   │  evict: i = rng.random_range(0..keys.len())      │
//!   │         keys.swap_remove(i), fix moved key's pos │
//!   └──────────────────────────────────────────────────┘
//! ```
//!
//! The dense key vector exists so a uniform victim can be drawn by index in
//! O(1); swap-remove keeps removal O(1) at the cost of reordering, which a
//! random policy does not care about.
//!
//! ## Thread Safety
//!
//! Not thread-safe; wrap in external synchronization for shared use.

use std::fmt;
use std::hash::Hash;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;

use crate::error::InvariantError;
use crate::traits::EvictionPolicy;

/// Random eviction policy core.
///
/// # Example
///
/// ```
/// use citycache::policy::random::RandomPolicy;
///
/// let mut cache = RandomPolicy::with_seed(2, 42);
/// cache.insert("a", 1);
/// cache.insert("b", 2);
/// cache.insert("c", 3); // evicts "a" or "b", chosen by the seeded rng
///
/// assert_eq!(cache.len(), 2);
/// assert!(cache.contains(&"c"));
/// ```
pub struct RandomPolicy<K, V>
where
    K: Eq + Hash + Clone,
{
    map: FxHashMap<K, (usize, V)>,
    keys: Vec<K>,
    rng: SmallRng,
    capacity: usize,
}

impl<K, V> RandomPolicy<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a random policy seeded from the operating system.
    ///
    /// A capacity of 0 creates a policy that accepts no entries.
    pub fn new(capacity: usize) -> Self {
        Self::with_rng(capacity, SmallRng::from_os_rng())
    }

    /// Creates a random policy with a deterministic seed.
    ///
    /// Given the same seed and the same operation sequence, the eviction
    /// choices replay identically. Intended for tests and reproductions.
    pub fn with_seed(capacity: usize, seed: u64) -> Self {
        Self::with_rng(capacity, SmallRng::seed_from_u64(seed))
    }

    fn with_rng(capacity: usize, rng: SmallRng) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            keys: Vec::with_capacity(capacity),
            rng,
            capacity,
        }
    }

    /// Looks up a value by key. Never affects future eviction choices.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key).map(|(_, value)| value)
    }

    /// Inserts or refreshes an entry, returning the previous value on a
    /// refresh.
    ///
    /// A new key inserted at capacity first evicts one resident entry chosen
    /// uniformly at random. The incoming key is never a candidate for the
    /// eviction it triggers.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(slot) = self.map.get_mut(&key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }

        if self.capacity == 0 {
            return None;
        }

        if self.map.len() >= self.capacity {
            self.evict_random();
        }

        let pos = self.keys.len();
        self.keys.push(key.clone());
        self.map.insert(key, (pos, value));

        debug_assert!(self.check_invariants().is_ok());

        None
    }

    /// Removes a uniformly random entry, returning it.
    pub fn evict_random(&mut self) -> Option<(K, V)> {
        if self.keys.is_empty() {
            return None;
        }

        let pos = self.rng.random_range(0..self.keys.len());
        let key = self.keys.swap_remove(pos);

        // swap_remove moved the former last key into `pos`; fix its index.
        if pos < self.keys.len() {
            let moved = self.keys[pos].clone();
            if let Some(slot) = self.map.get_mut(&moved) {
                slot.0 = pos;
            }
        }

        let (_, value) = self.map.remove(&key).expect("random key not in map");
        Some((key, value))
    }

    /// Checks key presence without counting as an access.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Current number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Returns `true` if the policy holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all entries. Generator state is kept.
    pub fn clear(&mut self) {
        self.map.clear();
        self.keys.clear();
    }

    /// Iterates entries in internal slot order.
    ///
    /// The order carries no eviction meaning; it is stable only between
    /// mutations.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.keys.iter().map(move |key| {
            let (_, value) = self.map.get(key).expect("random key not in map");
            (key, value)
        })
    }

    /// Verifies internal consistency: the key vector and map agree on
    /// membership and positions, and size respects capacity.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.map.len() > self.capacity {
            return Err(InvariantError::new("random: size exceeds capacity"));
        }
        if self.keys.len() != self.map.len() {
            return Err(InvariantError::new("random: key vec length != map length"));
        }
        for (pos, key) in self.keys.iter().enumerate() {
            match self.map.get(key) {
                Some((stored, _)) if *stored == pos => {}
                Some(_) => {
                    return Err(InvariantError::new("random: stale position in map"));
                }
                None => {
                    return Err(InvariantError::new("random: vec key missing from map"));
                }
            }
        }
        Ok(())
    }
}

impl<K, V> EvictionPolicy<K, V> for RandomPolicy<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        RandomPolicy::insert(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        RandomPolicy::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        RandomPolicy::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        RandomPolicy::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        RandomPolicy::capacity(self)
    }

    fn clear(&mut self) {
        RandomPolicy::clear(self);
    }
}

impl<K, V> fmt::Debug for RandomPolicy<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RandomPolicy")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
