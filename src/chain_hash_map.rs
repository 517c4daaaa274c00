//! ChainHashMap: separate-chaining table over a prime-stepped bucket array.

use crate::size_table::{next_size_index, previous_size_index, HASH_SIZES};
use slotmap::{DefaultKey, SlotMap};

/// Multiplier for the polynomial rolling hash.
const HASH_BASE: usize = 17;

#[derive(Debug)]
struct Entry<V> {
    key: Box<str>,
    value: Option<V>,
    next: Option<DefaultKey>,
}

/// A hash map from string keys to values of type `V`, resolving collisions
/// by separate chaining. Bucket counts step through a fixed prime sequence:
/// the table grows when more than half full and shrinks when less than a
/// quarter full, silently clamping at both ends of the sequence.
///
/// An entry may be present while holding no value (`set` with `None`);
/// `get` cannot tell that apart from an absent key, `contains_key` can.
///
/// Entries live in a slotmap arena; bucket heads and `next` links are arena
/// keys, so dropping the map never walks a chain.
pub struct ChainHashMap<V> {
    buckets: Vec<Option<DefaultKey>>,
    slots: SlotMap<DefaultKey, Entry<V>>,
    size_index: usize,
}

impl<V> ChainHashMap<V> {
    /// Create an empty table at the smallest bucket count (53).
    pub fn new() -> Self {
        Self {
            buckets: vec![None; HASH_SIZES[0]],
            slots: SlotMap::with_key(),
            size_index: 0,
        }
    }

    /// Number of live key/value entries.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Current bucket count; changes only when the table resizes.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    // Polynomial rolling hash over the key's bytes, mod the live bucket
    // count. Only valid until the next resize, which is why rehash must
    // recompute every entry's bucket rather than redistribute by formula.
    fn bucket_index(&self, key: &str) -> usize {
        let count = self.buckets.len();
        key.bytes()
            .fold(0usize, |h, b| (h * HASH_BASE + b as usize) % count)
    }

    /// Insert or overwrite. A key already present gets its value replaced in
    /// place; a new key is prepended to its bucket's chain. An insert that
    /// pushes the table past half full grows it one step up the size table.
    pub fn set(&mut self, key: &str, value: Option<V>) {
        let bucket = self.bucket_index(key);

        let mut cur = self.buckets[bucket];
        while let Some(k) = cur {
            let entry = &mut self.slots[k];
            if &*entry.key == key {
                entry.value = value;
                return;
            }
            cur = entry.next;
        }

        // The chain scan already proved the key absent; head prepend is O(1).
        let k = self.slots.insert(Entry {
            key: key.into(),
            value,
            next: self.buckets[bucket],
        });
        self.buckets[bucket] = Some(k);

        if self.slots.len() > self.buckets.len() / 2 {
            self.rehash(next_size_index(self.size_index));
        }
    }

    /// Look up a key. Returns `None` both for an absent key and for a key
    /// stored with no value; use [`contains_key`](Self::contains_key) to
    /// tell those apart.
    pub fn get(&self, key: &str) -> Option<&V> {
        let mut cur = self.buckets[self.bucket_index(key)];
        while let Some(k) = cur {
            let entry = &self.slots[k];
            if &*entry.key == key {
                return entry.value.as_ref();
            }
            cur = entry.next;
        }
        None
    }

    /// Whether the key is present, regardless of its value.
    pub fn contains_key(&self, key: &str) -> bool {
        let mut cur = self.buckets[self.bucket_index(key)];
        while let Some(k) = cur {
            let entry = &self.slots[k];
            if &*entry.key == key {
                return true;
            }
            cur = entry.next;
        }
        false
    }

    /// Remove a key, returning the value it held. A removal that leaves the
    /// table less than a quarter full shrinks it one step down the size
    /// table (never below the smallest size).
    pub fn remove(&mut self, key: &str) -> Option<V> {
        let bucket = self.bucket_index(key);

        // Locate the entry and remember its predecessor so the unlink
        // handles both the chain-head and mid-chain cases.
        let mut prev: Option<DefaultKey> = None;
        let mut cur = self.buckets[bucket];
        while let Some(k) = cur {
            if &*self.slots[k].key == key {
                break;
            }
            prev = cur;
            cur = self.slots[k].next;
        }
        let k = cur?;

        let entry = self.slots.remove(k)?;
        match prev {
            Some(p) => self.slots[p].next = entry.next,
            None => self.buckets[bucket] = entry.next,
        }

        if self.slots.len() < self.buckets.len() / 4 {
            self.rehash(previous_size_index(self.size_index));
        }

        entry.value
    }

    /// Iterate over `(key, value)` pairs in unspecified order.
    pub fn iter(&self) -> Iter<'_, V> {
        Iter {
            it: self.slots.values(),
        }
    }

    // Move the table to `size_index`. A no-op when the target equals the
    // current index, which transparently covers both clamped boundaries.
    // Every entry's bucket is recomputed against the new count and the
    // entry relinked as the new chain head; entry count and the key/value
    // set are preserved, chain-relative order is not.
    fn rehash(&mut self, size_index: usize) {
        if size_index == self.size_index {
            return;
        }

        let old = std::mem::replace(&mut self.buckets, vec![None; HASH_SIZES[size_index]]);
        self.size_index = size_index;

        for head in old {
            let mut cur = head;
            while let Some(k) = cur {
                cur = self.slots[k].next;
                let bucket = self.bucket_index(&self.slots[k].key);
                let entry = &mut self.slots[k];
                entry.next = self.buckets[bucket];
                self.buckets[bucket] = Some(k);
            }
        }
    }
}

impl<V> Default for ChainHashMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over entries in `ChainHashMap`, yielding `(key, value)`.
pub struct Iter<'a, V> {
    it: slotmap::basic::Values<'a, DefaultKey, Entry<V>>,
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (&'a str, Option<&'a V>);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.it.next().map(|e| (&*e.key, e.value.as_ref()))
    }
}
