//! Least Frequently Used (LFU) eviction policy with O(1) operations.
//!
//! Tracks an access count per entry and evicts from the lowest occupied
//! frequency. Within a frequency, the entry that reached it longest ago
//! loses the tie. A refresh via `insert` counts as an access, so overwriting
//! a hot key keeps it hot.
//!
//! ## Architecture
//!
//! ```text
//!   ┌────────────────────────────────────────────────────────────────┐
//!   │  index:   FxHashMap<K, usize>      (key → slot index)          │
//!   │  slots:   Vec<Option<Slot>>        (arena; K, V, freq, links)  │
//!   │  buckets: FxHashMap<u64, Bucket>   (freq → intrusive list)     │
//!   │                                                                │
//!   │  min_freq ──► bucket(1) ◄──► bucket(2) ◄──► bucket(5)          │
//!   │               [C]◄─►[A]       [B]            [D]               │
//!   │                    tail = oldest at that frequency             │
//!   │                    (min bucket tail = next victim)             │
//!   └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Occupied frequencies form a doubly linked chain in ascending order, so
//! the minimum survives standalone pops without rescanning: when the lowest
//! bucket drains, its chain successor becomes the new minimum. A bump from
//! frequency `f` lands in bucket `f + 1`, which is created adjacent in the
//! chain if absent. Every step is O(1).
//!
//! All cross-references are `usize` arena indices and `u64` frequencies;
//! nothing holds a reference into a neighboring structure.
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
    freq: u64,
    prev: Option<usize>,
    next: Option<usize>,
}

/// One occupied frequency: an intrusive list through the slot arena plus
/// links to the neighboring occupied frequencies.
#[derive(Debug)]
struct Bucket {
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
    prev_freq: Option<u64>,
    next_freq: Option<u64>,
}

/// LFU eviction policy core.
///
/// # Example
///
/// ```
/// use citycache::policy::lfu::LfuPolicy;
///
/// let mut lfu = LfuPolicy::new(2);
/// lfu.insert("a", 1);
/// lfu.insert("b", 2);
///
/// // "a" reaches frequency 3; "b" stays at 1 and is evicted.
/// lfu.get(&"a");
/// lfu.get(&"a");
/// lfu.insert("c", 3);
///
/// assert!(lfu.contains(&"a"));
/// assert!(!lfu.contains(&"b"));
/// assert_eq!(lfu.frequency(&"c"), Some(1));
/// ```
pub struct LfuPolicy<K, V>
where
    K: Eq + Hash + Clone,
{
    index: FxHashMap<K, usize>,
    slots: Vec<Option<Slot<K, V>>>,
    free: Vec<usize>,
    buckets: FxHashMap<u64, Bucket>,
    /// Lowest occupied frequency; 0 when the policy is empty.
    min_freq: u64,
    capacity: usize,
}

impl<K, V> LfuPolicy<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Creates an LFU policy with the given capacity.
    ///
    /// A capacity of 0 creates a policy that accepts no entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            buckets: FxHashMap::default(),
            min_freq: 0,
            capacity,
        }
    }

    #[inline]
    fn slot(&self, idx: usize) -> &Slot<K, V> {
        self.slots[idx].as_ref().expect("lfu slot missing")
    }

    #[inline]
    fn slot_mut(&mut self, idx: usize) -> &mut Slot<K, V> {
        self.slots[idx].as_mut().expect("lfu slot missing")
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
        let slot = self.slots[idx].take().expect("lfu slot missing");
        self.free.push(idx);
        slot
    }

    fn list_push_front(slots: &mut [Option<Slot<K, V>>], bucket: &mut Bucket, idx: usize) {
        let old_head = bucket.head;
        {
            let slot = slots[idx].as_mut().expect("lfu slot missing");
            slot.prev = None;
            slot.next = old_head;
        }
        match old_head {
            Some(h) => slots[h].as_mut().expect("lfu slot missing").prev = Some(idx),
            None => bucket.tail = Some(idx),
        }
        bucket.head = Some(idx);
        bucket.len += 1;
    }

    fn list_remove(slots: &mut [Option<Slot<K, V>>], bucket: &mut Bucket, idx: usize) {
        let (prev, next) = {
            let slot = slots[idx].as_ref().expect("lfu slot missing");
            (slot.prev, slot.next)
        };
        match prev {
            Some(p) => slots[p].as_mut().expect("lfu slot missing").next = next,
            None => bucket.head = next,
        }
        match next {
            Some(n) => slots[n].as_mut().expect("lfu slot missing").prev = prev,
            None => bucket.tail = prev,
        }
        let slot = slots[idx].as_mut().expect("lfu slot missing");
        slot.prev = None;
        slot.next = None;
        bucket.len -= 1;
    }

    /// Removes an empty bucket from the frequency chain, advancing
    /// `min_freq` if the minimum just drained.
    fn unlink_bucket(&mut self, freq: u64) {
        let bucket = self.buckets.remove(&freq).expect("lfu bucket missing");
        debug_assert_eq!(bucket.len, 0);

        if let Some(p) = bucket.prev_freq {
            self.buckets
                .get_mut(&p)
                .expect("lfu chain prev missing")
                .next_freq = bucket.next_freq;
        }
        if let Some(n) = bucket.next_freq {
            self.buckets
                .get_mut(&n)
                .expect("lfu chain next missing")
                .prev_freq = bucket.prev_freq;
        }
        if self.min_freq == freq {
            self.min_freq = bucket.next_freq.unwrap_or(0);
        }
    }

    /// Moves a slot from its current frequency to the next one up.
    fn bump(&mut self, idx: usize) {
        let freq = self.slot(idx).freq;
        let new_freq = freq + 1;

        {
            let bucket = self.buckets.get_mut(&freq).expect("lfu bucket missing");
            Self::list_remove(&mut self.slots, bucket, idx);
        }
        let emptied = self.buckets[&freq].len == 0;

        // The destination bucket links in right after the source. Occupied
        // frequencies are ascending and distinct, so if `freq + 1` is
        // occupied it is already the chain successor.
        if !self.buckets.contains_key(&new_freq) {
            let old_next = self.buckets[&freq].next_freq;
            self.buckets
                .get_mut(&freq)
                .expect("lfu bucket missing")
                .next_freq = Some(new_freq);
            if let Some(n) = old_next {
                self.buckets
                    .get_mut(&n)
                    .expect("lfu chain next missing")
                    .prev_freq = Some(new_freq);
            }
            self.buckets.insert(
                new_freq,
                Bucket {
                    head: None,
                    tail: None,
                    len: 0,
                    prev_freq: Some(freq),
                    next_freq: old_next,
                },
            );
        }

        self.slot_mut(idx).freq = new_freq;
        {
            let bucket = self.buckets.get_mut(&new_freq).expect("lfu bucket missing");
            Self::list_push_front(&mut self.slots, bucket, idx);
        }

        if emptied {
            self.unlink_bucket(freq);
        }

        debug_assert!(self.check_invariants().is_ok());
    }

    /// Looks up a value, bumping the entry's frequency on a hit.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        self.bump(idx);
        self.slots[idx].as_ref().map(|slot| &slot.value)
    }

    /// Inserts or refreshes an entry, returning the previous value on a
    /// refresh.
    ///
    /// A refresh overwrites the value and counts as an access (the
    /// frequency is bumped). A new key starts at frequency 1; inserted at
    /// capacity it first evicts the least frequently used entry.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        if let Some(&idx) = self.index.get(&key) {
            let old = mem::replace(&mut self.slot_mut(idx).value, value);
            self.bump(idx);
            return Some(old);
        }

        if self.capacity == 0 {
            return None;
        }

        if self.index.len() >= self.capacity {
            self.pop_lfu();
        }

        let idx = self.allocate(Slot {
            key: key.clone(),
            value,
            freq: 1,
            prev: None,
            next: None,
        });
        self.index.insert(key, idx);

        // Frequency 1 is always the new chain front.
        if !self.buckets.contains_key(&1) {
            let next = if self.min_freq == 0 {
                None
            } else {
                Some(self.min_freq)
            };
            if let Some(n) = next {
                self.buckets
                    .get_mut(&n)
                    .expect("lfu chain next missing")
                    .prev_freq = Some(1);
            }
            self.buckets.insert(
                1,
                Bucket {
                    head: None,
                    tail: None,
                    len: 0,
                    prev_freq: None,
                    next_freq: next,
                },
            );
        }
        {
            let bucket = self.buckets.get_mut(&1).expect("lfu bucket missing");
            Self::list_push_front(&mut self.slots, bucket, idx);
        }
        self.min_freq = 1;

        debug_assert!(self.check_invariants().is_ok());

        None
    }

    /// Removes and returns the least frequently used entry (oldest within
    /// the lowest frequency on ties).
    ///
    /// # Example
    ///
    /// ```
    /// use citycache::policy::lfu::LfuPolicy;
    ///
    /// let mut lfu = LfuPolicy::new(4);
    /// lfu.insert(1, "one");
    /// lfu.insert(2, "two");
    /// lfu.get(&2);
    ///
    /// assert_eq!(lfu.pop_lfu(), Some((1, "one")));
    /// ```
    pub fn pop_lfu(&mut self) -> Option<(K, V)> {
        if self.min_freq == 0 {
            return None;
        }
        let freq = self.min_freq;

        let idx = {
            let bucket = self.buckets.get_mut(&freq).expect("lfu bucket missing");
            let idx = bucket.tail.expect("min bucket has no tail");
            Self::list_remove(&mut self.slots, bucket, idx);
            idx
        };
        if self.buckets[&freq].len == 0 {
            self.unlink_bucket(freq);
        }

        let slot = self.release(idx);
        self.index.remove(&slot.key);

        debug_assert!(self.check_invariants().is_ok());

        Some((slot.key, slot.value))
    }

    /// Peeks at the current eviction candidate without touching it.
    pub fn peek_lfu(&self) -> Option<(&K, &V)> {
        if self.min_freq == 0 {
            return None;
        }
        let bucket = &self.buckets[&self.min_freq];
        bucket.tail.map(|idx| {
            let slot = self.slot(idx);
            (&slot.key, &slot.value)
        })
    }

    /// Access frequency of a key, without counting as an access.
    pub fn frequency(&self, key: &K) -> Option<u64> {
        self.index.get(key).map(|&idx| self.slot(idx).freq)
    }

    /// Lowest occupied frequency, or `None` when empty.
    pub fn min_frequency(&self) -> Option<u64> {
        if self.min_freq == 0 {
            None
        } else {
            Some(self.min_freq)
        }
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
        self.buckets.clear();
        self.min_freq = 0;
    }

    /// Iterates entries as `(key, value, frequency)`, highest frequency
    /// first; within a frequency, most recently arrived first. The last
    /// yielded entry is the current eviction candidate.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V, u64)> + '_ {
        let mut freqs = Vec::with_capacity(self.buckets.len());
        let mut current = if self.min_freq == 0 {
            None
        } else {
            Some(self.min_freq)
        };
        while let Some(freq) = current {
            freqs.push(freq);
            current = self.buckets[&freq].next_freq;
        }
        freqs.reverse();

        freqs.into_iter().flat_map(move |freq| {
            std::iter::successors(self.buckets[&freq].head, move |&idx| self.slot(idx).next).map(
                move |idx| {
                    let slot = self.slot(idx);
                    (&slot.key, &slot.value, slot.freq)
                },
            )
        })
    }

    /// Verifies internal consistency: bucket lists account for every
    /// indexed entry, the frequency chain is ascending, no bucket is empty,
    /// and `min_freq` names the chain front.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.index.len() > self.capacity {
            return Err(InvariantError::new("lfu: size exceeds capacity"));
        }
        if self.index.is_empty() {
            if self.min_freq != 0 || !self.buckets.is_empty() {
                return Err(InvariantError::new("lfu: empty index with live buckets"));
            }
            return Ok(());
        }
        if self.min_freq == 0 {
            return Err(InvariantError::new("lfu: entries present but no minimum"));
        }

        let mut total = 0usize;
        let mut chain_len = 0usize;
        let mut prev_freq = None;
        let mut current = Some(self.min_freq);
        while let Some(freq) = current {
            chain_len += 1;
            if chain_len > self.buckets.len() {
                return Err(InvariantError::new("lfu: cycle in frequency chain"));
            }
            let bucket = self
                .buckets
                .get(&freq)
                .ok_or_else(|| InvariantError::new("lfu: chain names missing bucket"))?;
            if bucket.len == 0 {
                return Err(InvariantError::new("lfu: empty bucket left in chain"));
            }
            if bucket.prev_freq != prev_freq {
                return Err(InvariantError::new("lfu: broken back-link in chain"));
            }
            if let Some(p) = prev_freq {
                if freq <= p {
                    return Err(InvariantError::new("lfu: chain not ascending"));
                }
            }

            let mut count = 0usize;
            let mut node = bucket.head;
            while let Some(idx) = node {
                count += 1;
                if count > bucket.len {
                    return Err(InvariantError::new("lfu: cycle in bucket list"));
                }
                let slot = self
                    .slots
                    .get(idx)
                    .and_then(|s| s.as_ref())
                    .ok_or_else(|| InvariantError::new("lfu: bucket references freed slot"))?;
                if slot.freq != freq {
                    return Err(InvariantError::new("lfu: slot in wrong bucket"));
                }
                if self.index.get(&slot.key) != Some(&idx) {
                    return Err(InvariantError::new("lfu: index does not match slot"));
                }
                if slot.next.is_none() && bucket.tail != Some(idx) {
                    return Err(InvariantError::new("lfu: tail does not end bucket list"));
                }
                node = slot.next;
            }
            if count != bucket.len {
                return Err(InvariantError::new("lfu: bucket len mismatch"));
            }

            total += bucket.len;
            prev_freq = Some(freq);
            current = bucket.next_freq;
        }

        if chain_len != self.buckets.len() {
            return Err(InvariantError::new("lfu: bucket off the frequency chain"));
        }
        if total != self.index.len() {
            return Err(InvariantError::new("lfu: bucket totals != index length"));
        }
        Ok(())
    }
}

impl<K, V> EvictionPolicy<K, V> for LfuPolicy<K, V>
where
    K: Eq + Hash + Clone,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        LfuPolicy::insert(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        LfuPolicy::get(self, key)
    }

    #[inline]
    fn contains(&self, key: &K) -> bool {
        LfuPolicy::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        LfuPolicy::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        LfuPolicy::capacity(self)
    }

    fn clear(&mut self) {
        LfuPolicy::clear(self);
    }
}

impl<K, V> fmt::Debug for LfuPolicy<K, V>
where
    K: Eq + Hash + Clone + fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LfuPolicy")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("min_frequency", &self.min_frequency())
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
            let lfu: LfuPolicy<u32, u32> = LfuPolicy::new(10);
            assert!(lfu.is_empty());
            assert_eq!(lfu.min_frequency(), None);
        }

        #[test]
        fn insert_starts_at_frequency_one() {
            let mut lfu = LfuPolicy::new(5);
            lfu.insert(1, 100);
            assert_eq!(lfu.frequency(&1), Some(1));
            assert_eq!(lfu.min_frequency(), Some(1));
        }

        #[test]
        fn get_bumps_frequency() {
            let mut lfu = LfuPolicy::new(5);
            lfu.insert(1, 100);
            assert_eq!(lfu.get(&1), Some(&100));
            assert_eq!(lfu.get(&1), Some(&100));
            assert_eq!(lfu.frequency(&1), Some(3));
        }

        #[test]
        fn frequency_probe_is_not_an_access() {
            let mut lfu = LfuPolicy::new(5);
            lfu.insert(1, 100);
            lfu.frequency(&1);
            lfu.contains(&1);
            assert_eq!(lfu.frequency(&1), Some(1));
        }

        #[test]
        fn clear_resets_everything() {
            let mut lfu = LfuPolicy::new(5);
            lfu.insert(1, 100);
            lfu.get(&1);
            lfu.clear();
            assert!(lfu.is_empty());
            assert_eq!(lfu.min_frequency(), None);
            assert_eq!(lfu.capacity(), 5);
        }
    }

    mod eviction_behavior {
        use super::*;

        #[test]
        fn evicts_the_least_frequent() {
            let mut lfu = LfuPolicy::new(2);
            lfu.insert(1, 100);
            lfu.insert(2, 200);
            lfu.get(&1);
            lfu.get(&1);
            lfu.insert(3, 300);

            assert!(lfu.contains(&1));
            assert!(!lfu.contains(&2));
            assert!(lfu.contains(&3));
        }

        #[test]
        fn ties_break_toward_the_oldest() {
            let mut lfu = LfuPolicy::new(2);
            lfu.insert(1, 100);
            lfu.insert(2, 200);

            // Both at frequency 1: key 1 has been there longer.
            lfu.insert(3, 300);

            assert!(!lfu.contains(&1));
            assert!(lfu.contains(&2));
        }

        #[test]
        fn new_entries_evict_before_old_hot_ones() {
            let mut lfu = LfuPolicy::new(3);
            lfu.insert(1, 100);
            lfu.insert(2, 200);
            lfu.get(&1);
            lfu.get(&2);
            lfu.insert(3, 300);

            // Key 3 is the only frequency-1 entry and loses immediately.
            lfu.insert(4, 400);
            assert!(!lfu.contains(&3));
            assert!(lfu.contains(&1));
            assert!(lfu.contains(&2));
        }

        #[test]
        fn pop_lfu_drains_by_frequency_then_age() {
            let mut lfu = LfuPolicy::new(4);
            lfu.insert(1, 100);
            lfu.insert(2, 200);
            lfu.insert(3, 300);
            lfu.get(&2);
            lfu.get(&2);
            lfu.get(&3);

            // freq: 1→1, 3→2, 2→3.
            assert_eq!(lfu.pop_lfu(), Some((1, 100)));
            assert_eq!(lfu.pop_lfu(), Some((3, 300)));
            assert_eq!(lfu.pop_lfu(), Some((2, 200)));
            assert_eq!(lfu.pop_lfu(), None);
            assert_eq!(lfu.min_frequency(), None);
        }

        #[test]
        fn peek_lfu_does_not_remove_or_bump() {
            let mut lfu = LfuPolicy::new(3);
            lfu.insert(1, 100);
            lfu.insert(2, 200);
            lfu.get(&2);

            assert_eq!(lfu.peek_lfu(), Some((&1, &100)));
            assert_eq!(lfu.frequency(&1), Some(1));
            assert_eq!(lfu.len(), 2);
        }

        #[test]
        fn min_frequency_tracks_standalone_pops() {
            let mut lfu = LfuPolicy::new(4);
            lfu.insert(1, 100);
            lfu.insert(2, 200);
            lfu.get(&2);
            lfu.get(&2);

            assert_eq!(lfu.min_frequency(), Some(1));
            lfu.pop_lfu();
            // Bucket 1 drained; the chain successor takes over.
            assert_eq!(lfu.min_frequency(), Some(3));
        }

        #[test]
        fn new_insert_resets_minimum_to_one() {
            let mut lfu = LfuPolicy::new(4);
            lfu.insert(1, 100);
            lfu.get(&1);
            lfu.get(&1);
            assert_eq!(lfu.min_frequency(), Some(3));

            lfu.insert(2, 200);
            assert_eq!(lfu.min_frequency(), Some(1));
        }
    }

    mod refresh_semantics {
        use super::*;

        #[test]
        fn refresh_bumps_frequency_and_returns_old_value() {
            let mut lfu = LfuPolicy::new(3);
            lfu.insert(1, 100);
            assert_eq!(lfu.insert(1, 200), Some(100));
            assert_eq!(lfu.frequency(&1), Some(2));
            assert_eq!(lfu.len(), 1);
        }

        #[test]
        fn refreshed_entry_outlives_cold_neighbors() {
            let mut lfu = LfuPolicy::new(2);
            lfu.insert(1, 100);
            lfu.insert(2, 200);
            lfu.insert(1, 101);
            lfu.insert(3, 300);

            assert!(lfu.contains(&1));
            assert!(!lfu.contains(&2));
        }
    }

    mod edge_cases {
        use super::*;

        #[test]
        fn zero_capacity_rejects_inserts() {
            let mut lfu = LfuPolicy::new(0);
            assert_eq!(lfu.insert(1, 100), None);
            assert!(lfu.is_empty());
            assert_eq!(lfu.pop_lfu(), None);
        }

        #[test]
        fn single_slot_hot_key_survives_churn() {
            let mut lfu = LfuPolicy::new(1);
            lfu.insert(1, 100);
            lfu.insert(2, 200);
            assert!(!lfu.contains(&1));
            assert_eq!(lfu.get(&2), Some(&200));
        }

        #[test]
        fn large_frequency_gap_in_chain() {
            let mut lfu = LfuPolicy::new(2);
            lfu.insert(1, 100);
            for _ in 0..50 {
                lfu.get(&1);
            }
            lfu.insert(2, 200);
            assert_eq!(lfu.frequency(&1), Some(51));
            assert_eq!(lfu.min_frequency(), Some(1));
            assert!(lfu.check_invariants().is_ok());
        }
    }

    mod iteration_order {
        use super::*;

        #[test]
        fn iter_is_frequency_descending() {
            let mut lfu = LfuPolicy::new(4);
            lfu.insert(1, 10);
            lfu.insert(2, 20);
            lfu.insert(3, 30);
            lfu.get(&2);
            lfu.get(&2);
            lfu.get(&3);

            let order: Vec<_> = lfu.iter().map(|(k, _, f)| (*k, f)).collect();
            assert_eq!(order, vec![(2, 3), (3, 2), (1, 1)]);
        }

        #[test]
        fn iter_ties_are_most_recent_first() {
            let mut lfu = LfuPolicy::new(3);
            lfu.insert(1, 10);
            lfu.insert(2, 20);
            lfu.insert(3, 30);

            let keys: Vec<_> = lfu.iter().map(|(k, _, _)| *k).collect();
            // All at frequency 1; key 1 arrived first and is the candidate.
            assert_eq!(keys, vec![3, 2, 1]);
        }
    }

    mod invariants {
        use super::*;

        #[test]
        fn invariants_hold_after_mixed_workload() {
            let mut lfu = LfuPolicy::new(8);
            for i in 0..300u32 {
                lfu.insert(i % 17, i);
                lfu.get(&(i % 5));
                if i % 11 == 0 {
                    lfu.pop_lfu();
                }
                assert!(lfu.check_invariants().is_ok());
            }
            assert!(lfu.len() <= 8);
        }
    }
}
