//! Sync LRU - A thread-safe fixed-capacity LRU cache
//!
//! Maps string keys to arbitrary values with strict least-recently-used
//! eviction and optional eviction callbacks.
//!
//! [`LruCache`] is the concurrent entry point: a single exclusive lock makes
//! every operation atomic. [`CacheStore`] is the single-threaded core for
//! callers that manage their own synchronization.

pub mod cache;
pub mod error;

pub use cache::{CacheStore, EvictCallback, LruCache};
pub use error::{CacheError, Result};
