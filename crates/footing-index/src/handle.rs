//! Generational handles into a [`RecordStore`](crate::RecordStore).
//!
//! A [`RecordHandle`] names one slot of the store plus the generation the
//! slot had when the record was inserted. Removing a record bumps the
//! slot's generation, so any handle still held for the old record resolves
//! to `None` instead of silently reaching whatever is stored there next.

use std::fmt;

/// Stable reference to one placed record.
///
/// Map keys hold handles rather than copies of the record; this is what
/// lets a 3×2 table be found from any of its six cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RecordHandle {
    pub(crate) index: u32,
    pub(crate) generation: u32,
}

impl RecordHandle {
    pub(crate) fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Slot index within the store.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Slot generation at insertion time.
    pub fn generation(&self) -> u32 {
        self.generation
    }
}

impl fmt::Display for RecordHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RecordHandle(slot={}, gen={})", self.index, self.generation)
    }
}
