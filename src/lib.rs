//! FIFO Cache - A bounded, thread-safe key/value cache
//!
//! Entries are evicted oldest-first from a fixed-capacity ring buffer while a
//! concurrent index gives keyed lookup, update, substring scan and deletion.

pub mod cache;
pub mod config;
pub mod error;

pub use cache::{CacheStats, CircularQueue, Evicted, FifoCache};
pub use config::CacheConfig;
pub use error::{CacheError, EnqueueError, Result};
