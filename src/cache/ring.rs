//! Key Ring Module
//!
//! Fixed-capacity ring buffer holding enqueued keys in FIFO order.

use crate::cache::entry::Slot;

// == Key Ring ==
/// Ordering structure for FIFO eviction.
///
/// Storage is allocated once at construction and never grows:
/// - `head` = index of the oldest slot
/// - `head + len` (wrapped) = next free position
///
/// The ring does no locking. Callers hold the cache's write guard for every
/// mutating call.
#[derive(Debug)]
pub struct KeyRing {
    /// Slot storage, `None` for free positions
    slots: Box<[Option<Slot>]>,
    /// Position of the oldest slot
    head: usize,
    /// Number of occupied slots
    len: usize,
}

impl KeyRing {
    // == Constructor ==
    /// Creates an empty ring with room for exactly `capacity` slots.
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: (0..capacity).map(|_| None).collect(),
            head: 0,
            len: 0,
        }
    }

    // == Try Push ==
    /// Appends a slot at the back.
    ///
    /// Hands the slot back when the ring is full.
    pub fn try_push(&mut self, slot: Slot) -> Result<(), Slot> {
        if self.is_full() {
            return Err(slot);
        }

        let tail = (self.head + self.len) % self.capacity();
        self.slots[tail] = Some(slot);
        self.len += 1;
        Ok(())
    }

    // == Pop Front ==
    /// Removes and returns the oldest slot.
    ///
    /// Returns None if the ring is empty.
    pub fn pop_front(&mut self) -> Option<Slot> {
        if self.len == 0 {
            return None;
        }

        let slot = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        slot
    }

    // == Peek Front ==
    /// Returns the oldest slot without removing it.
    #[allow(dead_code)]
    pub fn peek_front(&self) -> Option<&Slot> {
        if self.len == 0 {
            None
        } else {
            self.slots[self.head].as_ref()
        }
    }

    // == Iter ==
    /// Iterates slots from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &Slot> + '_ {
        (0..self.len).filter_map(move |offset| {
            self.slots[(self.head + offset) % self.capacity()].as_ref()
        })
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }
}
