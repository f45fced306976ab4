//! Cache Module
//!
//! Provides a bounded key/value cache with FIFO ring-buffer eviction.

mod entry;
mod queue;
mod ring;
mod stats;
mod store;


// Re-export public types
pub use entry::Evicted;
pub use queue::CircularQueue;
pub use stats::CacheStats;
pub use store::FifoCache;

// == Public Constants ==
/// Capacity used by [`CacheConfig::default`](crate::CacheConfig::default)
pub const DEFAULT_CAPACITY: usize = 1000;
