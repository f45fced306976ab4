//! Cache Statistics Module
//!
//! Tracks cache activity: hits, misses, inserts and evictions.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

// == Stats Counters ==
/// Live counters shared by all callers of a cache.
///
/// Reads run under the shared lock, so counters are atomic rather than
/// relying on `&mut self`.
#[derive(Debug, Default)]
pub(crate) struct StatsCounters {
    hits: AtomicU64,
    misses: AtomicU64,
    inserts: AtomicU64,
    evictions: AtomicU64,
    stale_evictions: AtomicU64,
    dequeues: AtomicU64,
}

impl StatsCounters {
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    // == Record Eviction ==
    /// Counts a slot popped by enqueue; `stale` marks a slot with no value.
    pub fn record_eviction(&self, stale: bool) {
        self.evictions.fetch_add(1, Ordering::Relaxed);
        if stale {
            self.stale_evictions.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_dequeue(&self) {
        self.dequeues.fetch_add(1, Ordering::Relaxed);
    }

    // == Snapshot ==
    /// Copies the counters into a serializable [`CacheStats`].
    pub fn snapshot(&self, total_entries: usize) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
            evictions: self.evictions.load(Ordering::Relaxed),
            stale_evictions: self.stale_evictions.load(Ordering::Relaxed),
            dequeues: self.dequeues.load(Ordering::Relaxed),
            total_entries,
        }
    }
}

// == Cache Stats ==
/// Point-in-time view of cache activity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    /// Number of successful `get` lookups
    pub hits: u64,
    /// Number of `get` lookups on absent keys
    pub misses: u64,
    /// Number of successful enqueues
    pub inserts: u64,
    /// Number of slots evicted to make room for an enqueue
    pub evictions: u64,
    /// Evicted slots whose key had already been deleted or re-enqueued
    pub stale_evictions: u64,
    /// Number of slots popped by `dequeue`
    pub dequeues: u64,
    /// Occupied ring slots at snapshot time
    pub total_entries: usize,
}

impl CacheStats {
    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}
