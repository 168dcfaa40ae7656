//! Least Recently Used (LRU) eviction policy.
//!
//! Maintains a total recency order over all entries: the most recently
//! touched entry sits at the front, the least recently touched at the back,
//! and the back entry is the eviction candidate. Both `get` hits and
//! refreshes via `insert` move an entry to the front.
//!
//! ## Architecture
//!
//! ```text
//!   ┌──────────────────────────────────────────────────────────────┐
//!   │  index: FxHashMap<K, usize>   (key → slot index)             │
//!   │  slots: Vec<Option<Slot>>     (arena; Slot owns K, V, links) │
//!   │                                                              │
//!   │  head ──► [D] ◄──► [A] ◄──► [B] ◄── tail                     │
//!   │           MRU                LRU (next victim)               │
//!   └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The recency list is a doubly linked list threaded through the slot
//! arena with plain `usize` handles: the side map never stores a live
//! reference or pointer into the list, so moving or removing entries can
//! never leave a dangling handle behind.
//!
//! ## Operations
//!
//! | Operation  | Time  | Notes                                  |
//! |------------|-------|----------------------------------------|
//! | `get`      | O(1)  | Hit moves the entry to the front       |
//! | `insert`   | O(1)* | *Amortized; may evict the tail         |
//! | `pop_lru`  | O(1)  | Removes the back entry                 |
//! | `iter`     | O(n)  | Front-to-back (MRU first)              |
//!
//! ## Thread Safety
//!
//! Not thread-safe; wrap in external synchronization for shared use.

use std::fmt;
use std::hash::Hash;
use std::mem;

use rustc_hash::FxHashMap;

use crate::error::InvariantError;
use crate::traits::EvictionPolicy;

#[derive(Debug)]
struct Slot<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// LRU eviction policy core.
///
/// # Example
///
/// ```
/// use citycache::policy::lru::LruPolicy;
///
/// let mut lru = LruPolicy::new(2);
/// lru.insert("a", 1);
/// lru.insert("b", 2);
///
/// // Touching "a" protects it; "b" becomes the eviction candidate.
/// lru.get(&"a");
/// lru.insert("c", 3);
///
/// assert!(lru.contains(&"a"));
/// assert!(!lru.contains(&"b"));
/// assert!(lru.contains(&"c"));
/// ```
pub struct LruPolicy<K, V>
where
    K: Eq + Hash + Clone,
{
    index: FxHashMap<K, usize>,
    slots: Vec<Option<Slot<K, V>>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    capacity: usize,
}

impl<K, V> LruPolicy<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an LRU policy with the given capacity.
    ///
    /// A capacity of 0 creates a policy that accepts no entries (every
    /// insert is a no-op).
    pub fn new(capacity: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            head: None,
            tail: None,
            capacity,
        }
    }

    #[inline]
    fn slot(&self, idx: usize) -> &Slot<K, V> {
        self.slots[idx].as_ref().expect("lru slot missing")
    }

    #[inline]
    fn slot_mut(&mut self, idx: usize) -> &mut Slot<K, V> {
        self.slots[idx].as_mut().expect("lru slot missing")
    }

    fn allocate(&mut self, slot: Slot<K, V>) -> usize {
        if let Some(idx) = self.free.pop() {
            self.slots[idx] = Some(slot);
            idx
        } else {
            self.slots.push(Some(slot));
            self.slots.len() - 1
        }
    }

    fn release(&mut self, idx: usize) -> Slot<K, V> {
        let slot = self.slots[idx].take().expect("lru slot missing");
        self.free.push(idx);
        slot
    }

    /// Unlinks a slot from the recency list without freeing it.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = {
            let slot = self.slot(idx);
            (slot.prev, slot.next)
        };

        match prev {
            Some(p) => self.slot_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.slot_mut(n).prev = prev,
            None => self.tail = prev,
        }

        let slot = self.slot_mut(idx);
        slot.prev = None;
        slot.next = None;
    }

    /// Links a detached slot at the front (MRU position).
    fn attach_front(&mut self, idx: usize) {
        let old_head = self.head;
        {
            let slot = self.slot_mut(idx);
            slot.prev = None;
            slot.next = old_head;
        }
        match old_head {
            Some(h) => self.slot_mut(h).prev = Some(idx),
            None => self.tail = Some(idx),
        }
        self.head = Some(idx);
    }

    /// Looks up a value, moving the entry to the most-recent position on a
    /// hit. A miss leaves the recency order untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use citycache::policy::lru::LruPolicy;
    ///
    /// let mut lru = LruPolicy::new(4);
    /// lru.insert(1, "one");
    /// assert_eq!(lru.get(&1), Some(&"one"));
    /// assert_eq!(lru.get(&2), None);
    /// ```
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.detach(idx);
        self.attach_front(idx);

        debug_assert!(self.check_invariants().is_ok());

        self.slots[idx].as_ref().map(|slot| &slot.value)
    }

    /// Inserts or refreshes an entry, returning the previous value on a
    /// refresh.
    ///
    /// A refresh updates the payload and moves the entry to the front. A
    /// new key inserted at capacity evicts the least recently used entry
    /// first.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&idx) = self.index.get(&key) {
            let old = mem::replace(&mut self.slot_mut(idx).value, value);
            self.detach(idx);
            self.attach_front(idx);

            debug_assert!(self.check_invariants().is_ok());

            return Some(old);
        }

        if self.capacity == 0 {
            return None;
        }

        if self.index.len() >= self.capacity {
            self.pop_lru();
        }

        let idx = self.allocate(Slot {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        });
        self.index.insert(key, idx);
        self.attach_front(idx);

        debug_assert!(self.check_invariants().is_ok());

        None
    }

    /// Removes and returns the least recently used entry.
    ///
    /// # Example
    ///
    /// ```
    /// use citycache::policy::lru::LruPolicy;
    ///
    /// let mut lru = LruPolicy::new(4);
    /// lru.insert(1, "one");
    /// lru.insert(2, "two");
    ///
    /// assert_eq!(lru.pop_lru(), Some((1, "one")));
    /// assert_eq!(lru.len(), 1);
    /// ```
    pub fn pop_lru(&mut self) -> Option<(K, V)> {
        let idx = self.tail?;
        self.detach(idx);
        let slot = self.release(idx);
        self.index.remove(&slot.key);
        Some((slot.key, slot.value))
    }

    /// Peeks at the least recently used entry without touching it.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        self.tail.map(|idx| {
            let slot = self.slot(idx);
            (&slot.key, &slot.value)
        })
    }

    /// Checks key presence without counting as an access.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Current number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Returns `true` if the policy holds no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Maximum number of entries.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.index.clear();
        self.slots.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
    }

    /// Iterates entries in recency order, most recently used first.
    ///
    /// The last yielded entry is the current eviction candidate.
    ///
    /// # Example
    ///
    /// ```
    /// use citycache::policy::lru::LruPolicy;
    ///
    /// let mut lru = LruPolicy::new(4);
    /// lru.insert(1, "a");
    /// lru.insert(2, "b");
    /// lru.get(&1);
    ///
    /// let keys: Vec<_> = lru.iter().map(|(k, _)| *k).collect();
    /// assert_eq!(keys, vec![1, 2]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        std::iter::successors(self.head, move |&idx| self.slot(idx).next).map(move |idx| {
            let slot = self.slot(idx);
            (&slot.key, &slot.value)
        })
    }

    /// Verifies internal consistency: list length matches the index, every
    /// listed slot is indexed at its own position, and no cycle exists.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() > self.capacity {
            return Err(InvariantError::new("lru: size exceeds capacity"));
        }
        if self.index.is_empty() {
            if self.head.is_some() || self.tail.is_some() {
                return Err(InvariantError::new("lru: empty index with non-empty list"));
            }
            return Ok(());
        }

        let mut count = 0usize;
        let mut last = None;
        let mut current = self.head;
        while let Some(idx) = current {
            count += 1;
            if count > self.index.len() {
                return Err(InvariantError::new("lru: cycle in recency list"));
            }
            let slot = self
                .slots
                .get(idx)
                .and_then(|s| s.as_ref())
                .ok_or_else(|| InvariantError::new("lru: list references freed slot"))?;
            if self.index.get(&slot.key) != Some(&idx) {
                return Err(InvariantError::new("lru: index does not match list slot"));
            }
            last = Some(idx);
            current = slot.next;
        }

        if count != self.index.len() {
            return Err(InvariantError::new("lru: list length != index length"));
        }
        if last != self.tail {
            return Err(InvariantError::new("lru: tail does not terminate the list"));
        }
        Ok(())
    }
}

impl<K, V> EvictionPolicy<K, V> for LruPolicy<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        LruPolicy::insert(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LruPolicy::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        LruPolicy::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LruPolicy::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        LruPolicy::capacity(self)
    }

    fn clear(&mut self) {
        LruPolicy::clear(self);
    }
}

impl<K, V> fmt::Debug for LruPolicy<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LruPolicy")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod basic_behavior {
        use super::*;

        #[test]
        fn new_policy_is_empty() {
            let lru: LruPolicy<u32, u32> = LruPolicy::new(10);
            assert!(lru.is_empty());
            assert_eq!(lru.len(), 0);
            assert_eq!(lru.capacity(), 10);
        }

        #[test]
        fn insert_and_get() {
            let mut lru = LruPolicy::new(5);
            assert_eq!(lru.insert(1, 100), None);
            assert_eq!(lru.get(&1), Some(&100));
            assert_eq!(lru.len(), 1);
        }

        #[test]
        fn get_missing_key_returns_none() {
            let mut lru: LruPolicy<u32, u32> = LruPolicy::new(5);
            assert_eq!(lru.get(&1), None);
        }

        #[test]
        fn clear_removes_all_entries() {
            let mut lru = LruPolicy::new(5);
            lru.insert(1, 10);
            lru.insert(2, 20);
            lru.clear();
            assert!(lru.is_empty());
            assert!(!lru.contains(&1));
            assert_eq!(lru.capacity(), 5);
        }

        #[test]
        fn empty_policy_operations() {
            let mut lru: LruPolicy<u32, u32> = LruPolicy::new(5);
            assert_eq!(lru.pop_lru(), None);
            assert_eq!(lru.peek_lru(), None);
            assert_eq!(lru.iter().count(), 0);
        }
    }

    mod eviction_behavior {
        use super::*;

        #[test]
        fn evicts_least_recently_used() {
            let mut lru = LruPolicy::new(2);
            lru.insert(1, 100);
            lru.insert(2, 200);
            lru.insert(3, 300);

            assert_eq!(lru.len(), 2);
            assert!(!lru.contains(&1));
            assert!(lru.contains(&2));
            assert!(lru.contains(&3));
        }

        #[test]
        fn get_protects_an_entry_from_eviction() {
            let mut lru = LruPolicy::new(3);
            lru.insert(1, 100);
            lru.insert(2, 200);
            lru.insert(3, 300);

            lru.get(&1);
            lru.insert(4, 400);

            assert!(lru.contains(&1));
            assert!(!lru.contains(&2));
        }

        #[test]
        fn refresh_protects_an_entry_from_eviction() {
            let mut lru = LruPolicy::new(2);
            lru.insert(1, 100);
            lru.insert(2, 200);

            // Refresh counts as an access: key 2 becomes the victim.
            lru.insert(1, 111);
            lru.insert(3, 300);

            assert!(lru.contains(&1));
            assert!(!lru.contains(&2));
            assert_eq!(lru.get(&1), Some(&111));
        }

        #[test]
        fn pop_lru_removes_in_recency_order() {
            let mut lru = LruPolicy::new(3);
            lru.insert(1, 100);
            lru.insert(2, 200);
            lru.insert(3, 300);
            lru.get(&1);

            assert_eq!(lru.pop_lru(), Some((2, 200)));
            assert_eq!(lru.pop_lru(), Some((3, 300)));
            assert_eq!(lru.pop_lru(), Some((1, 100)));
            assert_eq!(lru.pop_lru(), None);
        }

        #[test]
        fn peek_lru_does_not_remove() {
            let mut lru = LruPolicy::new(3);
            lru.insert(1, 100);
            lru.insert(2, 200);

            assert_eq!(lru.peek_lru(), Some((&1, &100)));
            assert_eq!(lru.peek_lru(), Some((&1, &100)));
            assert_eq!(lru.len(), 2);
        }
    }

    mod refresh_semantics {
        use super::*;

        #[test]
        fn refresh_returns_old_value_and_keeps_size() {
            let mut lru = LruPolicy::new(2);
            lru.insert(1, 100);
            assert_eq!(lru.insert(1, 200), Some(100));
            assert_eq!(lru.len(), 1);
            assert_eq!(lru.get(&1), Some(&200));
        }
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn zero_capacity_rejects_inserts() {
            let mut lru = LruPolicy::new(0);
            assert_eq!(lru.insert(1, 100), None);
            assert!(lru.is_empty());
            assert!(!lru.contains(&1));
        }

        #[test]
        fn single_slot_replaces_on_every_new_key() {
            let mut lru = LruPolicy::new(1);
            lru.insert(1, 100);
            lru.insert(2, 200);
            assert_eq!(lru.len(), 1);
            assert!(!lru.contains(&1));
            assert_eq!(lru.get(&2), Some(&200));
        }

        #[test]
        fn slot_reuse_after_eviction() {
            let mut lru = LruPolicy::new(2);
            for i in 0..20u32 {
                lru.insert(i, i * 10);
            }
            assert_eq!(lru.len(), 2);
            // The arena never grows past capacity + the initial churn.
            assert!(lru.slots.len() <= 3);
        }
    }

    mod iteration_order {
        use super::*;

        #[test]
        fn iter_is_mru_first() {
            let mut lru = LruPolicy::new(3);
            lru.insert(1, 10);
            lru.insert(2, 20);
            lru.insert(3, 30);
            lru.get(&2);

            let keys: Vec<_> = lru.iter().map(|(k, _)| *k).collect();
            assert_eq!(keys, vec![2, 3, 1]);
        }
    }

    mod invariants {
        use super::*;

        #[test]
        fn invariants_hold_after_mixed_workload() {
            let mut lru = LruPolicy::new(8);
            for i in 0..100u32 {
                lru.insert(i % 13, i);
                lru.get(&(i % 7));
                assert!(lru.check_invariants().is_ok());
            }
            assert!(lru.len() <= 8);
        }
    }
}
