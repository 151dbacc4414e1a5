//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with O(1) LRU ordering,
//! capacity enforcement, and eviction callback dispatch.

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::cache::{CacheEntry, RecencyList};
use crate::error::{CacheError, Result};

// == Eviction Callback ==
/// Callback invoked with ownership of each (key, value) pair that leaves the
/// cache under capacity pressure: an `add` past capacity or a `resize` to a
/// smaller capacity. Explicit removal and `purge` do not invoke it.
///
/// Behind [`LruCache`](crate::cache::LruCache) the callback runs while the
/// cache lock is held; it must not call back into the same cache and should
/// return quickly.
pub type EvictCallback<V> = Box<dyn FnMut(String, V) + Send>;

// == Cache Store ==
/// Fixed-capacity cache storage with strict LRU eviction.
///
/// This is the single-threaded core: exact LRU bookkeeping, capacity
/// enforcement, and eviction callback dispatch, with every operation O(1)
/// expected time. For concurrent use, wrap it in
/// [`LruCache`](crate::cache::LruCache).
pub struct CacheStore<V> {
    /// Key-value storage
    entries: HashMap<String, CacheEntry<V>>,
    /// Recency order over present keys, most recent first
    recency: RecencyList,
    /// Maximum number of entries allowed
    capacity: usize,
    /// Invoked for each entry evicted under capacity pressure
    on_evict: Option<EvictCallback<V>>,
}

impl<V> fmt::Debug for CacheStore<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheStore")
            .field("capacity", &self.capacity)
            .field("len", &self.entries.len())
            .field("has_callback", &self.on_evict.is_some())
            .finish()
    }
}

impl<V> CacheStore<V> {
    // == Constructor ==
    /// Creates a new CacheStore with the given capacity and optional
    /// eviction callback.
    ///
    /// # Arguments
    /// * `capacity` - Maximum number of entries the cache can hold
    /// * `on_evict` - Callback invoked for each evicted entry, if any
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `capacity` is zero.
    pub fn new(capacity: usize, on_evict: Option<EvictCallback<V>>) -> Result<Self> {
        if capacity == 0 {
            return Err(CacheError::InvalidCapacity(capacity));
        }

        Ok(Self {
            entries: HashMap::with_capacity(capacity),
            recency: RecencyList::with_capacity(capacity),
            capacity,
            on_evict,
        })
    }

    // == Add ==
    /// Inserts or updates a key-value pair.
    ///
    /// If the key already exists, its value is overwritten and the entry
    /// becomes most recently used; updates never evict. If the key is new
    /// and the cache is at capacity, the least recently used entry is
    /// evicted, invoking the eviction callback.
    ///
    /// Returns `true` if an eviction occurred.
    pub fn add(&mut self, key: String, value: V) -> bool {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            self.recency.touch(entry.slot);
            return false;
        }

        let slot = self.recency.push_front(key.clone());
        self.entries.insert(key, CacheEntry::new(value, slot));

        if self.entries.len() > self.capacity {
            self.evict_oldest();
            return true;
        }
        false
    }

    // == Get ==
    /// Retrieves a value by key, marking the entry as most recently used.
    ///
    /// This is a mutating read: a hit changes which entry is evicted next.
    pub fn get(&mut self, key: &str) -> Option<&V> {
        match self.entries.get(key) {
            Some(entry) => {
                self.recency.touch(entry.slot);
                Some(&entry.value)
            }
            None => None,
        }
    }

    // == Peek ==
    /// Retrieves a value by key without updating recency order.
    pub fn peek(&self, key: &str) -> Option<&V> {
        self.entries.get(key).map(|entry| &entry.value)
    }

    // == Contains ==
    /// Checks whether a key is present without updating recency order.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    // == Remove ==
    /// Removes an entry by key, returning whether it was present.
    ///
    /// Removal is an explicit caller decision, not an eviction: the eviction
    /// callback is not invoked.
    pub fn remove(&mut self, key: &str) -> bool {
        match self.entries.remove(key) {
            Some(entry) => {
                self.recency.remove(entry.slot);
                true
            }
            None => false,
        }
    }

    // == Get Oldest ==
    /// Returns the least recently used entry without updating recency order.
    pub fn get_oldest(&self) -> Option<(&str, &V)> {
        let key = self.recency.back()?;
        let entry = self.entries.get(key)?;
        Some((key, &entry.value))
    }

    // == Remove Oldest ==
    /// Removes and returns the least recently used entry.
    ///
    /// Like [`remove`](Self::remove), this is caller-initiated and does not
    /// invoke the eviction callback.
    pub fn remove_oldest(&mut self) -> Option<(String, V)> {
        let key = self.recency.pop_back()?;
        let entry = self.entries.remove(&key)?;
        Some((key, entry.value))
    }

    // == Keys ==
    /// Returns the keys currently present, least recently used first.
    pub fn keys(&self) -> Vec<String> {
        self.recency.iter_oldest_first().map(str::to_owned).collect()
    }

    // == Purge ==
    /// Removes all entries.
    ///
    /// Bulk teardown is distinct from eviction: the eviction callback is not
    /// invoked for the dropped entries.
    pub fn purge(&mut self) {
        let dropped = self.entries.len();
        self.entries.clear();
        self.recency.clear();

        if dropped > 0 {
            debug!("Cache purged: dropped {} entries", dropped);
        }
    }

    // == Resize ==
    /// Changes the cache capacity.
    ///
    /// If the new capacity is smaller than the current size, least recently
    /// used entries are evicted one at a time, each invoking the eviction
    /// callback, until the cache fits. Returns the number of entries evicted.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] if `new_capacity` is zero.
    pub fn resize(&mut self, new_capacity: usize) -> Result<usize> {
        if new_capacity == 0 {
            return Err(CacheError::InvalidCapacity(new_capacity));
        }

        let mut evicted = 0;
        while self.entries.len() > new_capacity {
            self.evict_oldest();
            evicted += 1;
        }
        self.capacity = new_capacity;

        if evicted > 0 {
            debug!("Cache resized to {}: evicted {} entries", new_capacity, evicted);
        }
        Ok(evicted)
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    // == Capacity ==
    /// Returns the maximum number of entries the cache can hold.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Evict Oldest ==
    /// Evicts the least recently used entry, dispatching the eviction
    /// callback with ownership of the removed pair.
    fn evict_oldest(&mut self) {
        if let Some(key) = self.recency.pop_back() {
            if let Some(entry) = self.entries.remove(&key) {
                debug!("Evicted least recently used entry: {}", key);
                if let Some(on_evict) = self.on_evict.as_mut() {
                    on_evict(key, entry.value);
                }
            }
        }
    }
}
