//! Error types for the FIFO cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

use crate::cache::Evicted;

// == Cache Error Enum ==
/// Unified error type for cache operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Capacity below 1 at construction
    #[error("Invalid capacity: {0}, capacity must be not less than 1")]
    InvalidCapacity(usize),

    /// Dequeue on an empty cache
    #[error("Empty queue")]
    EmptyQueue,

    /// Key has no live entry
    #[error("Key not found: {0} is not currently enqueued")]
    KeyNotFound(String),

    /// No key contains the given substring
    #[error("No keys found with prefix: {0}")]
    NoMatch(String),

    /// A popped slot had no value in the index
    #[error("No saved value for key: {0}")]
    MissingValue(String),

    /// A slot was freed but the new key still could not be placed
    #[error("Error while enqueueing key: {0}")]
    EnqueueFailed(String),
}

// == Enqueue Error ==
/// Failure of [`FifoCache::enqueue`](crate::FifoCache::enqueue).
///
/// Eviction is not rolled back when insertion fails, so the pair evicted
/// before the failure travels with the error instead of being dropped.
#[derive(Error, Debug)]
#[error("Error while enqueueing key: {key}")]
pub struct EnqueueError<V> {
    /// Key that could not be enqueued
    pub key: String,
    /// Pair evicted before the failed insertion, if any
    pub evicted: Option<Evicted<V>>,
}

impl<V> From<EnqueueError<V>> for CacheError {
    fn from(err: EnqueueError<V>) -> Self {
        CacheError::EnqueueFailed(err.key)
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            CacheError::KeyNotFound("a".to_string()).to_string(),
            "Key not found: a is not currently enqueued"
        );
        assert_eq!(CacheError::EmptyQueue.to_string(), "Empty queue");
        assert_eq!(
            CacheError::NoMatch("u.1".to_string()).to_string(),
            "No keys found with prefix: u.1"
        );
    }

    #[test]
    fn test_enqueue_error_converts_to_cache_error() {
        let err = EnqueueError {
            key: "new".to_string(),
            evicted: Some(Evicted {
                key: "old".to_string(),
                value: Some(1),
            }),
        };
        assert_eq!(err.to_string(), "Error while enqueueing key: new");

        let converted: CacheError = err.into();
        assert_eq!(converted, CacheError::EnqueueFailed("new".to_string()));
    }
}
