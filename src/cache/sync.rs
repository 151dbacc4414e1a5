//! Thread-Safe Cache Module
//!
//! Wraps the cache core in a single exclusive lock so that every operation,
//! including the composite check-then-act ones, is atomic with respect to
//! concurrent callers.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::cache::{CacheStore, EvictCallback};
use crate::error::Result;

// == Thread-Safe LRU Cache ==
/// A thread-safe, fixed-capacity LRU cache.
///
/// Every method acquires a single exclusive lock, performs one
/// [`CacheStore`] operation (or one composite critical section), releases
/// the lock, and returns the core's result unchanged, so concurrent
/// operations are linearizable. Critical sections do O(1) bookkeeping plus
/// at most one eviction callback invocation.
///
/// Cloning the handle is cheap and yields a second handle to the same
/// cache. Lookups return owned clones of the stored values; no reference
/// into the cache's internal structures ever escapes the lock.
#[derive(Debug)]
pub struct LruCache<V> {
    /// Core guarded by the single exclusive lock
    inner: Arc<Mutex<CacheStore<V>>>,
}

impl<V> Clone for LruCache<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> LruCache<V> {
    // == Constructors ==
    /// Creates an LRU cache of the given capacity.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`](crate::error::CacheError) if
    /// `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_callback_option(capacity, None)
    }

    /// Creates an LRU cache of the given capacity with an eviction callback.
    ///
    /// The callback receives ownership of each (key, value) pair evicted
    /// under capacity pressure (an `add` past capacity or a `resize`
    /// shrink). It runs synchronously while the cache lock is held: it must
    /// not call back into this cache, since that deadlocks against the same
    /// lock, and it should avoid long-running work, since it blocks every
    /// other cache operation for its duration.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`](crate::error::CacheError) if
    /// `capacity` is zero.
    pub fn with_evict_callback<F>(capacity: usize, on_evict: F) -> Result<Self>
    where
        F: FnMut(String, V) + Send + 'static,
    {
        Self::with_callback_option(capacity, Some(Box::new(on_evict)))
    }

    fn with_callback_option(capacity: usize, on_evict: Option<EvictCallback<V>>) -> Result<Self> {
        let store = CacheStore::new(capacity, on_evict)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(store)),
        })
    }

    // == Add ==
    /// Adds a value to the cache. Returns true if an eviction occurred.
    pub fn add(&self, key: String, value: V) -> bool {
        self.inner.lock().add(key, value)
    }

    // == Get ==
    /// Looks up a key's value, marking the entry as most recently used.
    pub fn get(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    // == Peek ==
    /// Returns the key's value without updating recency order.
    pub fn peek(&self, key: &str) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    // == Contains ==
    /// Checks if a key is in the cache without updating recency order.
    pub fn contains(&self, key: &str) -> bool {
        self.inner.lock().contains(key)
    }

    // == Contains Or Add ==
    /// Atomically checks if a key is in the cache without updating recency
    /// order, and if not, adds the value.
    ///
    /// Returns `(found, evicted)`. When the key is present the cache is
    /// left untouched; no other operation can interleave between the check
    /// and the add.
    pub fn contains_or_add(&self, key: String, value: V) -> (bool, bool) {
        let mut store = self.inner.lock();

        if store.contains(&key) {
            return (true, false);
        }
        let evicted = store.add(key, value);
        (false, evicted)
    }

    // == Peek Or Add ==
    /// Atomically peeks at a key's value without updating recency order,
    /// and if absent, adds the value.
    ///
    /// Returns `(previous, found, evicted)`: the already-present value with
    /// `(_, true, false)`, or `(None, false, evicted)` after adding.
    pub fn peek_or_add(&self, key: String, value: V) -> (Option<V>, bool, bool)
    where
        V: Clone,
    {
        let mut store = self.inner.lock();

        if let Some(previous) = store.peek(&key) {
            return (Some(previous.clone()), true, false);
        }
        let evicted = store.add(key, value);
        (None, false, evicted)
    }

    // == Remove ==
    /// Removes the provided key from the cache, returning whether it was
    /// present. Does not invoke the eviction callback.
    pub fn remove(&self, key: &str) -> bool {
        self.inner.lock().remove(key)
    }

    // == Get Oldest ==
    /// Returns the least recently used entry without updating recency order.
    pub fn get_oldest(&self) -> Option<(String, V)>
    where
        V: Clone,
    {
        self.inner
            .lock()
            .get_oldest()
            .map(|(key, value)| (key.to_owned(), value.clone()))
    }

    // == Remove Oldest ==
    /// Removes and returns the least recently used entry. Does not invoke
    /// the eviction callback.
    pub fn remove_oldest(&self) -> Option<(String, V)> {
        self.inner.lock().remove_oldest()
    }

    // == Keys ==
    /// Returns a snapshot of the keys, least recently used first.
    pub fn keys(&self) -> Vec<String> {
        self.inner.lock().keys()
    }

    // == Purge ==
    /// Completely clears the cache. Does not invoke the eviction callback.
    pub fn purge(&self) {
        self.inner.lock().purge();
    }

    // == Resize ==
    /// Changes the cache capacity, evicting least recently used entries as
    /// needed. Returns the number of entries evicted.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`](crate::error::CacheError) if
    /// `new_capacity` is zero.
    pub fn resize(&self, new_capacity: usize) -> Result<usize> {
        self.inner.lock().resize(new_capacity)
    }

    // == Length ==
    /// Returns the number of items in the cache.
    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    // == Capacity ==
    /// Returns the maximum number of entries the cache can hold.
    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }
}
