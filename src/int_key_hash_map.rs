//! IntKeyHashMap: chained buckets over an entry arena, with selector-driven traversal.

use crate::config::{threshold_for, MapConfig, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR};
use crate::error::ConfigError;
use crate::selection::Selection;
use core::fmt;
use core::iter::FusedIterator;
use log::{debug, trace};
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Arena address of an entry; chains link entries through these.
    struct EntryKey;
}

/// Bucket for `key` in a table of `capacity` slots. Clearing the sign bit
/// keeps the dividend non-negative.
#[inline]
fn bucket_index(key: i32, capacity: usize) -> usize {
    (key & i32::MAX) as usize % capacity
}

/// One key/value node of a bucket chain.
pub struct Entry<T> {
    key: i32,
    value: T,
    next: Option<EntryKey>,
}

impl<T> Entry<T> {
    #[inline]
    pub fn key(&self) -> i32 {
        self.key
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }
}

impl<T: fmt::Debug> fmt::Debug for Entry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish()
    }
}

/// Hash map keyed by `i32`, resolving collisions by chaining.
///
/// Traversal order (used by `select`, `iter` and every snapshot method)
/// walks buckets from the highest index down to 0 and each chain from head
/// to tail. New keys are appended at the tail of their chain.
pub struct IntKeyHashMap<T> {
    buckets: Vec<Option<EntryKey>>,
    slots: SlotMap<EntryKey, Entry<T>>, // owns every entry; chains only link keys
    load_factor: f32,
    threshold: usize,
}

impl<T> IntKeyHashMap<T> {
    /// Empty map with capacity 16 and load factor 0.75.
    pub fn new() -> Self {
        Self::from_parts(
            DEFAULT_CAPACITY,
            DEFAULT_LOAD_FACTOR,
            threshold_for(DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR),
        )
    }

    pub fn with_capacity(capacity: usize) -> Result<Self, ConfigError> {
        Self::with_config(MapConfig::new(capacity, DEFAULT_LOAD_FACTOR))
    }

    pub fn with_capacity_and_load_factor(
        capacity: usize,
        load_factor: f32,
    ) -> Result<Self, ConfigError> {
        Self::with_config(MapConfig::new(capacity, load_factor))
    }

    pub fn with_config(config: MapConfig) -> Result<Self, ConfigError> {
        let threshold = config.validate()?;
        Ok(Self::from_parts(
            config.capacity,
            config.load_factor,
            threshold,
        ))
    }

    fn from_parts(capacity: usize, load_factor: f32, threshold: usize) -> Self {
        Self {
            buckets: vec![None; capacity],
            // At most `threshold` entries exist before the first growth.
            slots: SlotMap::with_capacity_and_key(threshold.min(capacity)),
            load_factor,
            threshold,
        }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }
    pub fn load_factor(&self) -> f32 {
        self.load_factor
    }
    /// Entry count at which the next insert grows the table.
    pub fn threshold(&self) -> usize {
        self.threshold
    }

    #[inline]
    fn bucket_of(&self, key: i32) -> usize {
        bucket_index(key, self.buckets.len())
    }

    fn find(&self, key: i32) -> Option<EntryKey> {
        let mut cur = self.buckets[self.bucket_of(key)];
        while let Some(k) = cur {
            let e = &self.slots[k];
            if e.key == key {
                return Some(k);
            }
            cur = e.next;
        }
        None
    }

    pub fn get(&self, key: i32) -> Option<&T> {
        self.find(key).map(|k| &self.slots[k].value)
    }

    pub fn get_mut(&mut self, key: i32) -> Option<&mut T> {
        let k = self.find(key)?;
        self.slots.get_mut(k).map(|e| &mut e.value)
    }

    pub fn contains_key(&self, key: i32) -> bool {
        self.find(key).is_some()
    }

    /// Insert or overwrite. Returns the previous value for an existing key;
    /// the table may grow after a new key is counted.
    pub fn put(&mut self, key: i32, value: T) -> Option<T> {
        let bucket = self.bucket_of(key);
        let mut tail = None;
        let mut cur = self.buckets[bucket];
        while let Some(k) = cur {
            let e = &mut self.slots[k];
            if e.key == key {
                return Some(core::mem::replace(&mut e.value, value));
            }
            tail = cur;
            cur = e.next;
        }

        let k = self.slots.insert(Entry {
            key,
            value,
            next: None,
        });
        match tail {
            Some(t) => self.slots[t].next = Some(k),
            None => self.buckets[bucket] = Some(k),
        }

        if self.slots.len() >= self.threshold {
            self.grow(self.capacity() + 1);
        }
        None
    }

    pub fn remove(&mut self, key: i32) -> Option<T> {
        let bucket = self.bucket_of(key);
        let mut prev = None;
        let mut cur = self.buckets[bucket];
        while let Some(k) = cur {
            let e = &self.slots[k];
            if e.key == key {
                return self.unlink(bucket, prev, k).map(|e| e.value);
            }
            prev = cur;
            cur = e.next;
        }
        None
    }

    // Detach `k` from its chain and take it out of the arena. `prev` is the
    // chain predecessor, or None when `k` heads `bucket`.
    fn unlink(
        &mut self,
        bucket: usize,
        prev: Option<EntryKey>,
        k: EntryKey,
    ) -> Option<Entry<T>> {
        let entry = self.slots.remove(k)?;
        match prev {
            Some(p) => self.slots[p].next = entry.next,
            None => self.buckets[bucket] = entry.next,
        }
        Some(entry)
    }

    /// Grow the table to at least `min_capacity` buckets by repeating
    /// `capacity = capacity * 2 + 1`, then relink every entry. A no-op when
    /// the table is already large enough.
    ///
    /// Entries are relinked in traversal order and appended to their new
    /// chains, so entries sharing a new bucket keep their relative order.
    pub fn grow(&mut self, min_capacity: usize) {
        let old_capacity = self.capacity();
        if min_capacity <= old_capacity {
            return;
        }
        let mut capacity = old_capacity;
        while capacity < min_capacity {
            capacity = capacity.saturating_mul(2).saturating_add(1);
        }

        let mut buckets: Vec<Option<EntryKey>> = vec![None; capacity];
        let mut tails: Vec<Option<EntryKey>> = vec![None; capacity];
        for old in (0..old_capacity).rev() {
            let mut cur = self.buckets[old];
            while let Some(k) = cur {
                let e = &mut self.slots[k];
                cur = e.next.take();
                let i = bucket_index(e.key, capacity);
                match tails[i] {
                    Some(t) => self.slots[t].next = Some(k),
                    None => buckets[i] = Some(k),
                }
                tails[i] = Some(k);
            }
        }

        self.buckets = buckets;
        self.threshold = threshold_for(capacity, self.load_factor);
        debug!(
            "grew table from {} to {} buckets (len={}, threshold={})",
            old_capacity,
            capacity,
            self.len(),
            self.threshold
        );
    }

    /// Offer each entry to `selector` in traversal order, removing entries
    /// it matches and stopping at the first stop verdict.
    ///
    /// Returns the stop verdict if one fired. Otherwise returns `Match` when
    /// at least one entry was removed, else `NoMatch`.
    ///
    /// ```
    /// use int_key_hashmap::{IntKeyHashMap, Selection};
    ///
    /// let mut m = IntKeyHashMap::new();
    /// for k in 0..10 {
    ///     m.put(k, k * 10);
    /// }
    /// // Drop every odd key.
    /// let r = m.select(|e| Selection::from_flags(e.key() % 2 == 1, false));
    /// assert_eq!(r, Selection::Match);
    /// assert_eq!(m.len(), 5);
    /// ```
    pub fn select<F>(&mut self, mut selector: F) -> Selection
    where
        F: FnMut(&Entry<T>) -> Selection,
    {
        let mut result = Selection::NoMatch;
        for bucket in (0..self.buckets.len()).rev() {
            let mut prev = None;
            let mut cur = self.buckets[bucket];
            while let Some(k) = cur {
                let entry = &self.slots[k];
                let (key, next) = (entry.key, entry.next);
                let verdict = selector(entry);
                if verdict.is_match() {
                    let removed = self.unlink(bucket, prev, k);
                    debug_assert!(removed.is_some(), "chain links a dead entry");
                    drop(removed);
                    result = Selection::Match;
                } else {
                    prev = cur;
                }
                if verdict.is_stop() {
                    trace!("select stopped at key {} with {:?}", key, verdict);
                    return verdict;
                }
                cur = next;
            }
        }
        result
    }

    /// Drop every entry. Capacity and threshold are kept.
    pub fn clear(&mut self) {
        trace!("clearing {} entries", self.len());
        self.buckets.fill(None);
        self.slots.clear();
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            map: self,
            bucket: self.buckets.len(),
            cur: None,
            remaining: self.slots.len(),
        }
    }

    pub fn keys(&self) -> Vec<i32> {
        self.iter().map(Entry::key).collect()
    }

    pub fn values(&self) -> Vec<&T> {
        self.iter().map(Entry::value).collect()
    }

    pub fn entries(&self) -> Vec<&Entry<T>> {
        self.iter().collect()
    }

    /// Clone values into `buf` in traversal order until either runs out.
    /// Returns how many slots were written.
    pub fn values_into(&self, buf: &mut [T]) -> usize
    where
        T: Clone,
    {
        let mut written = 0;
        for (slot, e) in buf.iter_mut().zip(self.iter()) {
            slot.clone_from(&e.value);
            written += 1;
        }
        written
    }

    /// `"<type name>[size=<len>, capacity=<buckets>]"`.
    pub fn describe(&self) -> String {
        self.to_string()
    }
}

impl<T> Default for IntKeyHashMap<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Display for IntKeyHashMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}[size={}, capacity={}]",
            core::any::type_name::<Self>(),
            self.len(),
            self.capacity()
        )
    }
}

impl<T: fmt::Debug> fmt::Debug for IntKeyHashMap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|e| (e.key, &e.value)))
            .finish()
    }
}

impl<T> Extend<(i32, T)> for IntKeyHashMap<T> {
    fn extend<I: IntoIterator<Item = (i32, T)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.put(k, v);
        }
    }
}

impl<T> FromIterator<(i32, T)> for IntKeyHashMap<T> {
    fn from_iter<I: IntoIterator<Item = (i32, T)>>(iter: I) -> Self {
        let mut m = Self::new();
        m.extend(iter);
        m
    }
}

impl<'a, T> IntoIterator for &'a IntKeyHashMap<T> {
    type Item = &'a Entry<T>;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over entries in traversal order.
pub struct Iter<'a, T> {
    map: &'a IntKeyHashMap<T>,
    bucket: usize, // next bucket to load is `bucket - 1`
    cur: Option<EntryKey>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a Entry<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let map = self.map;
        loop {
            if let Some(k) = self.cur {
                let e = &map.slots[k];
                self.cur = e.next;
                self.remaining -= 1;
                return Some(e);
            }
            if self.bucket == 0 {
                return None;
            }
            self.bucket -= 1;
            self.cur = map.buckets[self.bucket];
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}
impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
impl<T> IntKeyHashMap<T> {
    /// Walk every chain and check the structural invariants: each entry sits
    /// in its key's bucket, keys are unique, and every arena entry is
    /// reachable exactly once.
    pub(crate) fn assert_consistent(&self) {
        let mut seen = std::collections::BTreeSet::new();
        for (i, head) in self.buckets.iter().enumerate() {
            let mut cur = *head;
            while let Some(k) = cur {
                let e = self.slots.get(k).expect("chain links a live entry");
                assert_eq!(bucket_index(e.key, self.capacity()), i, "entry in wrong bucket");
                assert!(seen.insert(e.key), "duplicate key {}", e.key);
                cur = e.next;
            }
        }
        assert_eq!(seen.len(), self.slots.len(), "unreachable arena entries");
        assert!(self.threshold > 0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::BTreeSet;

    fn keys_set<T>(m: &IntKeyHashMap<T>) -> BTreeSet<i32> {
        m.keys().into_iter().collect()
    }

    /// Invariant: the bucket index is non-negative and in range for any key sign.
    #[test]
    fn bucket_index_clears_sign_bit() {
        assert_eq!(bucket_index(5, 4), 1);
        assert_eq!(bucket_index(-1, 16), (i32::MAX as usize) % 16);
        assert_eq!(bucket_index(i32::MIN, 9), 0);
        for k in [-7, -1, 0, 1, i32::MAX, i32::MIN] {
            assert!(bucket_index(k, 9) < 9);
        }
    }

    /// Invariant: `put` on a new key returns None and grows len; on an existing
    /// key it returns the prior value and leaves len unchanged.
    #[test]
    fn put_new_and_existing() {
        let mut m: IntKeyHashMap<&str> = IntKeyHashMap::new();
        assert_eq!(m.put(7, "a"), None);
        assert_eq!(m.len(), 1);
        assert_eq!(m.put(7, "b"), Some("a"));
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(7), Some(&"b"));
        m.assert_consistent();
    }

    /// Invariant: capacity 4 / load factor 0.75 grows to 9 on the third insert.
    #[test]
    fn third_insert_grows_small_table() {
        let mut m = IntKeyHashMap::with_capacity_and_load_factor(4, 0.75).unwrap();
        assert_eq!(m.threshold(), 3);
        m.put(1, "a");
        m.put(2, "b");
        assert_eq!(m.capacity(), 4);
        m.put(3, "c");
        assert_eq!(m.capacity(), 9);
        assert_eq!(m.threshold(), 6);
        assert_eq!(m.len(), 3);
        assert_eq!(m.get(1), Some(&"a"));
        assert_eq!(m.get(2), Some(&"b"));
        assert_eq!(m.get(3), Some(&"c"));
        assert_eq!(keys_set(&m), BTreeSet::from([1, 2, 3]));
        m.assert_consistent();
    }

    /// Invariant: with load factor 0.7 on 10 buckets the threshold is 7, so
    /// the sixth insert leaves the table alone and the seventh grows it.
    #[test]
    fn growth_waits_for_whole_threshold() {
        let mut m = IntKeyHashMap::with_capacity_and_load_factor(10, 0.7).unwrap();
        assert_eq!(m.threshold(), 7);
        for k in 0..6 {
            m.put(k, k);
        }
        assert_eq!(m.capacity(), 10);
        m.put(6, 6);
        assert_eq!(m.capacity(), 21);
        assert_eq!(m.threshold(), 14);

        let m9: IntKeyHashMap<()> = IntKeyHashMap::with_capacity_and_load_factor(10, 0.9).unwrap();
        assert_eq!(m9.threshold(), 9);
    }

    /// Invariant: overwriting an existing key never triggers growth.
    #[test]
    fn overwrite_does_not_grow() {
        let mut m = IntKeyHashMap::with_capacity_and_load_factor(4, 0.75).unwrap();
        m.put(1, 1);
        m.put(2, 2);
        for v in 0..10 {
            m.put(2, v);
        }
        assert_eq!(m.capacity(), 4);
        assert_eq!(m.get(2), Some(&9));
    }

    /// Invariant: `grow` is a no-op at or below the current capacity and
    /// otherwise repeats `2c + 1` until the target is reached.
    #[test]
    fn grow_policy() {
        let mut m: IntKeyHashMap<i32> = IntKeyHashMap::with_capacity(4).unwrap();
        m.grow(4);
        assert_eq!(m.capacity(), 4);
        m.grow(2);
        assert_eq!(m.capacity(), 4);
        m.grow(20); // 4 -> 9 -> 19 -> 39
        assert_eq!(m.capacity(), 39);
        assert_eq!(m.threshold(), 29);
    }

    /// Invariant: colliding keys share a chain and keep insertion order; the
    /// middle of a chain can be removed without losing its neighbours.
    #[test]
    fn chain_order_and_middle_removal() {
        let mut m = IntKeyHashMap::with_capacity_and_load_factor(5, 10.0).unwrap();
        for k in [0, 5, 10, 15, -5] {
            m.put(k, k);
        }
        // -5 & i32::MAX = 2147483643, which is 3 mod 5; the rest share bucket 0.
        assert_eq!(m.keys(), vec![-5, 0, 5, 10, 15]);
        assert_eq!(m.remove(5), Some(5));
        assert_eq!(m.keys(), vec![-5, 0, 10, 15]);
        assert_eq!(m.remove(0), Some(0));
        assert_eq!(m.remove(15), Some(15));
        assert_eq!(m.keys(), vec![-5, 10]);
        assert_eq!(m.remove(15), None);
        m.assert_consistent();
    }

    /// Invariant: relinking during growth keeps entries that land in the same
    /// new bucket in their previous traversal order.
    #[test]
    fn growth_preserves_relative_chain_order() {
        let mut m = IntKeyHashMap::with_capacity_and_load_factor(2, 100.0).unwrap();
        // All even keys share bucket 0 of 2; multiples of 5 share bucket 0 of 5.
        for k in [0, 10, 20, 30] {
            m.put(k, ());
        }
        m.grow(5);
        assert_eq!(m.capacity(), 5);
        assert_eq!(m.keys(), vec![0, 10, 20, 30]);
        m.assert_consistent();
    }

    /// Invariant: an always-NoMatch selector returns NoMatch and changes nothing.
    #[test]
    fn select_no_match_is_read_only() {
        let mut m: IntKeyHashMap<i32> = (0..20).map(|k| (k, k)).collect();
        let before = m.keys();
        let calls = Cell::new(0);
        let r = m.select(|_| {
            calls.set(calls.get() + 1);
            Selection::NoMatch
        });
        assert_eq!(r, Selection::NoMatch);
        assert_eq!(calls.get(), 20);
        assert_eq!(m.keys(), before);
    }

    /// Invariant: StopMatch on the first entry removes exactly that entry and
    /// the selector is not called again.
    #[test]
    fn select_stop_match_first() {
        let mut m: IntKeyHashMap<i32> = (0..20).map(|k| (k, k)).collect();
        let first = m.keys()[0];
        let mut calls = 0;
        let r = m.select(|_| {
            calls += 1;
            Selection::StopMatch
        });
        assert_eq!(r, Selection::StopMatch);
        assert_eq!(calls, 1);
        assert_eq!(m.len(), 19);
        assert!(!m.contains_key(first));
        m.assert_consistent();
    }

    /// Invariant: StopNoMatch halts without removal and is returned verbatim,
    /// even after earlier entries were removed.
    #[test]
    fn select_stop_no_match_after_removals() {
        let mut m = IntKeyHashMap::with_capacity_and_load_factor(3, 10.0).unwrap();
        for k in [0, 3, 6, 9, 1] {
            m.put(k, k);
        }
        // Traversal: bucket 2 (empty), bucket 1: [1], bucket 0: [0, 3, 6, 9].
        assert_eq!(m.keys(), vec![1, 0, 3, 6, 9]);
        let r = m.select(|e| match e.key() {
            0 | 3 => Selection::Match,
            6 => Selection::StopNoMatch,
            _ => Selection::NoMatch,
        });
        assert_eq!(r, Selection::StopNoMatch);
        assert_eq!(m.keys(), vec![1, 6, 9]);
        m.assert_consistent();
    }

    /// Invariant: select can remove the head, a middle link and the tail of
    /// one chain in a single pass and leave the chain well formed.
    #[test]
    fn select_removes_at_every_chain_position() {
        let mut m = IntKeyHashMap::with_capacity_and_load_factor(4, 10.0).unwrap();
        for k in [0, 4, 8, 12, 16, 20] {
            m.put(k, k);
        }
        assert_eq!(m.keys(), vec![0, 4, 8, 12, 16, 20]);
        let r = m.select(|e| Selection::from_flags(matches!(e.key(), 0 | 8 | 20), false));
        assert_eq!(r, Selection::Match);
        assert_eq!(m.keys(), vec![4, 12, 16]);
        m.assert_consistent();
        assert_eq!(m.get(12), Some(&12));
    }

    /// Invariant: removing every entry through select unlinks whole chains,
    /// heads included, and reports Match.
    #[test]
    fn select_remove_all() {
        let mut m: IntKeyHashMap<String> = (0..50).map(|k| (k, k.to_string())).collect();
        let r = m.select(|_| Selection::Match);
        assert_eq!(r, Selection::Match);
        assert!(m.is_empty());
        assert!(m.keys().is_empty());
        m.assert_consistent();
    }

    /// Invariant: clear empties the map but keeps capacity and threshold.
    #[test]
    fn clear_keeps_capacity() {
        let mut m: IntKeyHashMap<i32> = (0..100).map(|k| (k, k)).collect();
        let (cap, thr) = (m.capacity(), m.threshold());
        m.clear();
        assert_eq!(m.len(), 0);
        assert_eq!(m.capacity(), cap);
        assert_eq!(m.threshold(), thr);
        assert_eq!(m.get(42), None);
        assert!(m.keys().is_empty());
        m.put(42, 1);
        assert_eq!(m.get(42), Some(&1));
        m.assert_consistent();
    }

    /// Invariant: snapshots have length `len()` and share the traversal order.
    #[test]
    fn snapshots_agree() {
        let m: IntKeyHashMap<i32> = (-10..10).map(|k| (k, k * 2)).collect();
        let keys = m.keys();
        let values: Vec<i32> = m.values().into_iter().copied().collect();
        let entries = m.entries();
        assert_eq!(keys.len(), m.len());
        assert_eq!(values.len(), m.len());
        assert_eq!(entries.len(), m.len());
        for ((k, v), e) in keys.iter().zip(&values).zip(&entries) {
            assert_eq!(*v, k * 2);
            assert_eq!(e.key(), *k);
            assert_eq!(e.value(), v);
        }
        assert_eq!(m.iter().len(), m.len());
    }

    /// Invariant: values_into writes min(buf.len(), len()) values.
    #[test]
    fn values_into_bounds() {
        let m: IntKeyHashMap<i32> = (0..5).map(|k| (k, k)).collect();
        let mut empty: [i32; 0] = [];
        assert_eq!(m.values_into(&mut empty), 0);

        let mut short = [0; 3];
        assert_eq!(m.values_into(&mut short), 3);
        let expected: Vec<i32> = m.values().into_iter().copied().take(3).collect();
        assert_eq!(short.to_vec(), expected);

        let mut long = [-1; 8];
        assert_eq!(m.values_into(&mut long), 5);
        assert_eq!(&long[5..], &[-1, -1, -1]);
    }

    /// Invariant: get_mut updates are observed by get.
    #[test]
    fn get_mut_updates_in_place() {
        let mut m = IntKeyHashMap::new();
        m.put(-3, 10);
        *m.get_mut(-3).unwrap() += 5;
        assert_eq!(m.get(-3), Some(&15));
        assert!(m.get_mut(4).is_none());
    }

    #[test]
    fn describe_format() {
        let mut m: IntKeyHashMap<u8> = IntKeyHashMap::with_capacity(4).unwrap();
        m.put(1, 1);
        let s = m.describe();
        assert!(s.starts_with("int_key_hashmap::int_key_hash_map::IntKeyHashMap<u8>"));
        assert!(s.ends_with("[size=1, capacity=4]"), "{}", s);
    }

    #[test]
    fn debug_lists_entries() {
        let mut m = IntKeyHashMap::new();
        m.put(1, "x");
        assert_eq!(format!("{:?}", m), "{1: \"x\"}");
    }
}
