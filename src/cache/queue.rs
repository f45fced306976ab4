//! Circular Queue Module
//!
//! Positional queue operations shared by FIFO cache implementations.

use crate::cache::Evicted;
use crate::error::{EnqueueError, Result};

// == Circular Queue ==
/// A bounded queue of keyed values that evicts its oldest entry when full.
pub trait CircularQueue<V> {
    /// Returns the queue capacity
    fn capacity(&self) -> usize;

    /// Returns the number of enqueued items
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Enqueues a new item, evicting the oldest one if the queue is full
    fn enqueue(
        &self,
        key: String,
        value: V,
    ) -> std::result::Result<Option<Evicted<V>>, EnqueueError<V>>;

    /// Dequeues the first enqueued key/value pair
    fn dequeue(&self) -> Result<(String, V)>;

    /// Replaces the value of a currently enqueued key
    fn update(&self, key: &str, value: V) -> Result<()>;

    /// Returns the value of a currently enqueued key
    fn get(&self, key: &str) -> Result<V>;
}
