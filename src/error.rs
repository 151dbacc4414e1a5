//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache.
///
/// A cache can only fail in one way: being asked for a capacity that is not
/// a positive integer, either at construction or on resize. Every other
/// operation is total; "not found" is reported as a boolean or `Option`,
/// never as an error.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Requested capacity is not a positive integer
    #[error("Invalid capacity: {0} (must be greater than zero)")]
    InvalidCapacity(usize),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
