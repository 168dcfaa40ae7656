//! First In, First Out (FIFO) eviction policy.
//!
//! Evicts strictly by insertion order: the entry inserted longest ago is the
//! victim, no matter how often or how recently it has been read. Lookups are
//! free of bookkeeping, and a refresh of an existing key keeps the key at
//! its original queue position.
//!
//! ## Architecture
//!
//! ```text
//!   ┌───────────────────────────────────────────────┐
//!   │  map:   FxHashMap<K, V>   (key → value)       │
//!   │  order: VecDeque<K>       (arrival order)     │
//!   │                                               │
//!   │  front ──► [A] [B] [C] ◄── back               │
//!   │          oldest       newest                  │
//!   │          (next victim)                        │
//!   └───────────────────────────────────────────────┘
//! ```
//!
//! Because `get` never mutates, FIFO trades hit-rate quality for the lowest
//! possible read cost of the four policies.
//!
//! ## Thread Safety
//!
//! Not thread-safe; wrap in external synchronization for shared use.

use std::collections::VecDeque;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::InvariantError;
use crate::traits::EvictionPolicy;

/// FIFO eviction policy core.
///
/// # Example
///
/// ```
/// use citycache::policy::fifo::FifoPolicy;
///
/// let mut fifo = FifoPolicy::new(2);
/// fifo.insert("a", 1);
/// fifo.insert("b", 2);
///
/// // Reading "a" does not protect it: it is still the oldest arrival.
/// fifo.get(&"a");
/// fifo.insert("c", 3);
///
/// assert!(!fifo.contains(&"a"));
/// assert!(fifo.contains(&"b"));
/// assert!(fifo.contains(&"c"));
/// ```
pub struct FifoPolicy<K, V>
where
    K: Eq + Hash + Clone,
{
    map: FxHashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
}

impl<K, V> FifoPolicy<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates a FIFO policy with the given capacity.
    ///
    /// A capacity of 0 creates a policy that accepts no entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            map: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Looks up a value by key. Never changes the eviction order.
    #[inline]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.map.get(key)
    }

    /// Inserts or refreshes an entry, returning the previous value on a
    /// refresh.
    ///
    /// A refresh overwrites the value in place; the key keeps its original
    /// arrival position. A new key inserted at capacity evicts the oldest
    /// entry first and joins at the back of the queue.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(old) = self.map.get_mut(&key) {
            return Some(std::mem::replace(old, value));
        }

        if self.capacity == 0 {
            return None;
        }

        if self.map.len() >= self.capacity {
            self.pop_oldest();
        }

        self.order.push_back(key.clone());
        self.map.insert(key, value);

        debug_assert!(self.check_invariants().is_ok());

        None
    }

    /// Removes and returns the oldest entry.
    ///
    /// # Example
    ///
    /// ```
    /// use citycache::policy::fifo::FifoPolicy;
    ///
    /// let mut fifo = FifoPolicy::new(4);
    /// fifo.insert(1, "one");
    /// fifo.insert(2, "two");
    ///
    /// assert_eq!(fifo.pop_oldest(), Some((1, "one")));
    /// ```
    pub fn pop_oldest(&mut self) -> Option<(K, V)> {
        let key = self.order.pop_front()?;
        let value = self.map.remove(&key).expect("fifo queue key not in map");
        Some((key, value))
    }

    /// Peeks at the oldest entry without removing it.
    pub fn peek_oldest(&self) -> Option<(&K, &V)> {
        let key = self.order.front()?;
        self.map.get(key).map(|value| (key, value))
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

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
    }

    /// Iterates entries newest-first; the last yielded entry is the current
    /// eviction candidate.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.order.iter().rev().map(move |key| {
            let value = self.map.get(key).expect("fifo queue key not in map");
            (key, value)
        })
    }

    /// Verifies internal consistency: the queue and map hold exactly the
    /// same key set and the size respects capacity.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.map.len() > self.capacity {
            return Err(InvariantError::new("fifo: size exceeds capacity"));
        }
        if self.order.len() != self.map.len() {
            return Err(InvariantError::new("fifo: queue length != map length"));
        }
        for key in &self.order {
            if !self.map.contains_key(key) {
                return Err(InvariantError::new("fifo: queued key missing from map"));
            }
        }
        Ok(())
    }
}

impl<K, V> EvictionPolicy<K, V> for FifoPolicy<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        FifoPolicy::insert(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        FifoPolicy::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        FifoPolicy::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        FifoPolicy::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        FifoPolicy::capacity(self)
    }

    fn clear(&mut self) {
        FifoPolicy::clear(self);
    }
}

impl<K, V> fmt::Debug for FifoPolicy<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FifoPolicy")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}
