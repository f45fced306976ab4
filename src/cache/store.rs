//! Cache Store Module
//!
//! Main cache engine combining a fixed-capacity key ring with a concurrent
//! keyed index.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;
use parking_lot::RwLock;
use tracing::{debug, trace, warn};

use crate::cache::entry::{IndexEntry, Slot};
use crate::cache::ring::KeyRing;
use crate::cache::stats::StatsCounters;
use crate::cache::{CacheStats, CircularQueue, Evicted};
use crate::config::CacheConfig;
use crate::error::{CacheError, EnqueueError, Result};

// == FIFO Cache ==
/// Bounded key/value cache with FIFO eviction.
///
/// The ring lock orders every operation: enqueue, dequeue, update and delete
/// take it exclusively, reads take it shared. The index has its own sharded
/// locking and is only touched while the ring lock is held, which keeps the
/// two structures consistent for every other caller.
#[derive(Debug)]
pub struct FifoCache<V> {
    /// Keys in insertion order
    ring: RwLock<KeyRing>,
    /// Key-value storage
    index: DashMap<String, IndexEntry<V>>,
    /// Next slot sequence number, advanced under the write lock
    next_seq: AtomicU64,
    /// Activity counters
    stats: StatsCounters,
    /// Maximum number of slots
    capacity: usize,
    /// Name used in log events
    name: String,
}

impl<V: Clone> FifoCache<V> {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// # Errors
    /// Returns [`CacheError::InvalidCapacity`] when `capacity < 1`.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_config(CacheConfig::new(capacity))
    }

    /// Creates an empty cache from a [`CacheConfig`].
    pub fn with_config(config: CacheConfig) -> Result<Self> {
        config.validate()?;

        debug!(cache = %config.name, capacity = config.capacity, "FIFO cache created");

        Ok(Self {
            ring: RwLock::new(KeyRing::new(config.capacity)),
            index: DashMap::with_capacity(config.capacity),
            next_seq: AtomicU64::new(0),
            stats: StatsCounters::default(),
            capacity: config.capacity,
            name: config.name,
        })
    }

    // == Enqueue ==
    /// Inserts a key-value pair, evicting the oldest entry if the cache is full.
    ///
    /// Eviction and insertion happen inside one exclusive section, so no
    /// other caller observes the freed slot before the new key fills it.
    /// Enqueueing a key that is already present is not deduplicated: it takes
    /// a new slot and the index keeps the latest value.
    ///
    /// # Returns
    /// * `Ok(None)` - the cache had room
    /// * `Ok(Some(evicted))` - the oldest slot was evicted to make room
    /// * `Err(EnqueueError)` - the key could not be placed; carries the
    ///   evicted pair since eviction is not rolled back
    pub fn enqueue(
        &self,
        key: impl Into<String>,
        value: V,
    ) -> std::result::Result<Option<Evicted<V>>, EnqueueError<V>> {
        let key = key.into();
        let mut ring = self.ring.write();

        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let evicted = match ring.try_push(Slot::new(key.clone(), seq)) {
            Ok(()) => None,
            Err(slot) => {
                // Already inside the exclusive section; pop without relocking
                let evicted = self.evict_oldest(&mut ring);
                if ring.try_push(slot).is_err() {
                    warn!(cache = %self.name, key = %key, "Unable to enqueue after eviction");
                    return Err(EnqueueError { key, evicted });
                }
                evicted
            }
        };

        self.index.insert(key, IndexEntry::new(seq, value));
        self.stats.record_insert();

        Ok(evicted)
    }

    // == Dequeue ==
    /// Removes and returns the oldest entry.
    ///
    /// # Errors
    /// * [`CacheError::EmptyQueue`] - nothing is enqueued
    /// * [`CacheError::MissingValue`] - the oldest slot's key was deleted or
    ///   enqueued again later; the slot is consumed anyway
    pub fn dequeue(&self) -> Result<(String, V)> {
        let mut ring = self.ring.write();

        let slot = ring.pop_front().ok_or(CacheError::EmptyQueue)?;
        self.stats.record_dequeue();

        match self.take_value(&slot) {
            Some(value) => {
                debug!(cache = %self.name, key = %slot.key, "Dequeued entry");
                Ok((slot.key, value))
            }
            None => {
                debug!(cache = %self.name, key = %slot.key, "Dequeued slot has no saved value");
                Err(CacheError::MissingValue(slot.key))
            }
        }
    }

    // == Update ==
    /// Replaces the value stored for `key`.
    ///
    /// The key keeps its position in the eviction order.
    pub fn update(&self, key: &str, value: V) -> Result<()> {
        let _ring = self.ring.write();

        match self.index.get_mut(key) {
            Some(mut entry) => {
                entry.value = value;
                Ok(())
            }
            None => Err(CacheError::KeyNotFound(key.to_string())),
        }
    }

    // == Get ==
    /// Retrieves the value stored for `key`.
    pub fn get(&self, key: &str) -> Result<V> {
        let _ring = self.ring.read();

        match self.index.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Ok(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                trace!(cache = %self.name, key = %key, "Cache miss");
                Err(CacheError::KeyNotFound(key.to_string()))
            }
        }
    }

    // == Get By Prefix ==
    /// Returns every pair whose key contains `prefix` anywhere.
    ///
    /// An empty `prefix` matches every key.
    ///
    /// # Errors
    /// Returns [`CacheError::NoMatch`] when nothing matches, including when
    /// the cache is empty.
    pub fn get_by_prefix(&self, prefix: &str) -> Result<HashMap<String, V>> {
        let _ring = self.ring.read();

        let results: HashMap<String, V> = self
            .index
            .iter()
            .filter(|entry| entry.key().contains(prefix))
            .map(|entry| (entry.key().clone(), entry.value().value.clone()))
            .collect();

        if results.is_empty() {
            return Err(CacheError::NoMatch(prefix.to_string()));
        }

        Ok(results)
    }

    // == Delete ==
    /// Removes the value stored for `key`; absent keys are a no-op.
    ///
    /// The key's ring slot is left in place and keeps counting toward
    /// [`len`](Self::len) until it is evicted or dequeued, at which point it
    /// yields no value.
    pub fn delete(&self, key: &str) {
        let _ring = self.ring.write();

        if self.index.remove(key).is_some() {
            debug!(cache = %self.name, key = %key, "Deleted entry");
        }
    }

    // == Contains Key ==
    /// Returns true if `key` currently has a value.
    pub fn contains_key(&self, key: &str) -> bool {
        let _ring = self.ring.read();
        self.index.contains_key(key)
    }

    // == Keys ==
    /// Returns keys that still hold a value, oldest first.
    pub fn keys(&self) -> Vec<String> {
        let ring = self.ring.read();

        ring.iter()
            .filter(|slot| {
                self.index
                    .get(&slot.key)
                    .map_or(false, |entry| entry.is_owned_by(slot))
            })
            .map(|slot| slot.key.clone())
            .collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot(self.len())
    }

    // == Capacity ==
    /// Returns the fixed maximum number of entries.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the number of occupied slots.
    pub fn len(&self) -> usize {
        self.ring.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.ring.read().is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.ring.read().is_full()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // == Evict Oldest ==
    /// Pops the oldest slot and takes its value, if it still owns one.
    ///
    /// Takes the ring by `&mut`, so the caller must already hold the write guard.
    fn evict_oldest(&self, ring: &mut KeyRing) -> Option<Evicted<V>> {
        let slot = ring.pop_front()?;
        let value = self.take_value(&slot);

        self.stats.record_eviction(value.is_none());
        if value.is_none() {
            debug!(cache = %self.name, key = %slot.key, "Evicted slot has no saved value");
        } else {
            debug!(cache = %self.name, key = %slot.key, "Evicted oldest entry");
        }

        Some(Evicted {
            key: slot.key,
            value,
        })
    }

    // == Take Value ==
    /// Removes the index entry for `slot`, unless a newer slot owns it.
    fn take_value(&self, slot: &Slot) -> Option<V> {
        self.index
            .remove_if(&slot.key, |_, entry| entry.is_owned_by(slot))
            .map(|(_, entry)| entry.value)
    }
}

impl<V: Clone + PartialEq> FifoCache<V> {
    // == Update If Changed ==
    /// Replaces the value for `key` only when it differs from the stored one.
    ///
    /// Returns whether a write happened.
    pub fn update_if_changed(&self, key: &str, value: V) -> Result<bool> {
        let _ring = self.ring.write();

        match self.index.get_mut(key) {
            Some(mut entry) if entry.value != value => {
                entry.value = value;
                Ok(true)
            }
            Some(_) => Ok(false),
            None => Err(CacheError::KeyNotFound(key.to_string())),
        }
    }
}

impl<V: Clone> CircularQueue<V> for FifoCache<V> {
    fn capacity(&self) -> usize {
        FifoCache::capacity(self)
    }

    fn len(&self) -> usize {
        FifoCache::len(self)
    }

    fn enqueue(
        &self,
        key: String,
        value: V,
    ) -> std::result::Result<Option<Evicted<V>>, EnqueueError<V>> {
        FifoCache::enqueue(self, key, value)
    }

    fn dequeue(&self) -> Result<(String, V)> {
        FifoCache::dequeue(self)
    }

    fn update(&self, key: &str, value: V) -> Result<()> {
        FifoCache::update(self, key, value)
    }

    fn get(&self, key: &str) -> Result<V> {
        FifoCache::get(self, key)
    }
}
