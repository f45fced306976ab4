//! Cache Entry Module
//!
//! Defines ring slots, index entries and the evicted pair returned to callers.

// == Slot ==
/// A position in the ordering ring.
///
/// `seq` is unique per enqueue, so a slot can tell whether the index entry
/// for its key still belongs to it or to a later enqueue of the same key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    /// Key this slot was enqueued with
    pub key: String,
    /// Enqueue sequence number
    pub seq: u64,
}

impl Slot {
    pub fn new(key: String, seq: u64) -> Self {
        Self { key, seq }
    }
}

// == Index Entry ==
/// Value stored in the keyed index together with its owning slot.
#[derive(Debug, Clone)]
pub struct IndexEntry<V> {
    /// Sequence number of the slot that owns this value
    pub seq: u64,
    /// The stored value
    pub value: V,
}

impl<V> IndexEntry<V> {
    pub fn new(seq: u64, value: V) -> Self {
        Self { seq, value }
    }

    // == Is Owned By ==
    /// Returns true if `slot` is the ring slot this value was stored for.
    pub fn is_owned_by(&self, slot: &Slot) -> bool {
        self.seq == slot.seq
    }
}

// == Evicted ==
/// The oldest pair pushed out of a full cache by an enqueue.
///
/// `value` is `None` when the evicted slot no longer had a value: the key was
/// deleted, or enqueued again later so the index holds the newer value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evicted<V> {
    /// Key of the evicted slot
    pub key: String,
    /// Value removed from the index, if the slot still owned one
    pub value: Option<V>,
}

impl<V> Evicted<V> {
    // == Into Pair ==
    /// Returns the `(key, value)` pair when the eviction carried a value.
    pub fn into_pair(self) -> Option<(String, V)> {
        let Evicted { key, value } = self;
        value.map(|value| (key, value))
    }
}
