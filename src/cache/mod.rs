//! Cache Module
//!
//! Provides fixed-capacity in-memory caching with strict LRU eviction.

mod entry;
mod lru;
mod store;
mod sync;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::RecencyList;
pub use store::{CacheStore, EvictCallback};
pub use sync::LruCache;
