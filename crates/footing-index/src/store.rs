//! Slab storage for placed records.
//!
//! [`RecordStore`] owns every live [`PlacedRecord`] of one occupancy map.
//! Records are addressed by [`RecordHandle`]; freed slots are recycled
//! through a free list with their generation bumped, so handles from a
//! removed record never resolve to the slot's next occupant.
//!
//! Slot reuse scrambles slot order, so each record also carries an
//! insertion sequence number; ordered iteration follows that instead.

use crate::handle::RecordHandle;
use crate::record::PlacedRecord;

/// A single storage slot.
#[derive(Clone, Debug)]
struct Slot<K> {
    /// Bumped every time the slot's record is removed.
    generation: u32,
    /// Insertion sequence of the current record.
    seq: u64,
    record: Option<PlacedRecord<K>>,
}

/// Arena of placed records addressed by generational handles.
#[derive(Clone, Debug)]
pub struct RecordStore<K> {
    slots: Vec<Slot<K>>,
    /// Indices of empty slots available for reuse.
    free_list: Vec<u32>,
    live: usize,
    next_seq: u64,
}

impl<K> RecordStore<K> {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_list: Vec::new(),
            live: 0,
            next_seq: 0,
        }
    }

    /// Store a record and return its handle.
    pub fn insert(&mut self, record: PlacedRecord<K>) -> RecordHandle {
        self.live += 1;
        let seq = self.next_seq;
        self.next_seq += 1;
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            slot.seq = seq;
            slot.record = Some(record);
            return RecordHandle::new(index, slot.generation);
        }
        let index = self.slots.len() as u32;
        self.slots.push(Slot {
            generation: 0,
            seq,
            record: Some(record),
        });
        RecordHandle::new(index, 0)
    }

    /// Resolve a handle. Stale or foreign handles return `None`.
    pub fn get(&self, handle: RecordHandle) -> Option<&PlacedRecord<K>> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.record.as_ref()
    }

    /// Whether `handle` refers to a live record.
    pub fn contains(&self, handle: RecordHandle) -> bool {
        self.get(handle).is_some()
    }

    /// Take a record out of the store, retiring its handle.
    pub fn remove(&mut self, handle: RecordHandle) -> Option<PlacedRecord<K>> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let record = slot.record.take()?;
        slot.generation = slot.generation.wrapping_add(1);
        self.free_list.push(handle.index);
        self.live -= 1;
        Some(record)
    }

    /// Remove every live record, in insertion order. All outstanding
    /// handles become stale.
    pub fn drain(&mut self) -> Vec<PlacedRecord<K>> {
        let mut out = Vec::with_capacity(self.live);
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if let Some(record) = slot.record.take() {
                slot.generation = slot.generation.wrapping_add(1);
                self.free_list.push(index as u32);
                out.push((slot.seq, record));
            }
        }
        self.live = 0;
        out.sort_unstable_by_key(|&(seq, _)| seq);
        out.into_iter().map(|(_, record)| record).collect()
    }

    /// Iterate live records with their handles, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (RecordHandle, &PlacedRecord<K>)> {
        let mut live: Vec<_> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| {
                slot.record
                    .as_ref()
                    .map(|r| (slot.seq, RecordHandle::new(index as u32, slot.generation), r))
            })
            .collect();
        live.sort_unstable_by_key(|&(seq, _, _)| seq);
        live.into_iter().map(|(_, handle, record)| (handle, record))
    }

    /// Number of live records.
    pub fn len(&self) -> usize {
        self.live
    }

    /// Whether the store holds no live records.
    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    /// Total slots ever allocated (live + free).
    pub fn capacity_slots(&self) -> usize {
        self.slots.len()
    }
}

impl<K> Default for RecordStore<K> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use footing_core::{GridCoord, ObjectIndex, Rotation, StructureId};
    use smallvec::smallvec;

    fn record(object: u32) -> PlacedRecord<GridCoord> {
        PlacedRecord::new(
            ObjectIndex(object),
            StructureId(1),
            GridCoord::ZERO,
            Rotation::Deg0,
            smallvec![GridCoord::ZERO],
        )
    }

    #[test]
    fn insert_and_get() {
        let mut store = RecordStore::new();
        let h = store.insert(record(5));
        assert_eq!(store.get(h).unwrap().object_index(), ObjectIndex(5));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn removed_handle_goes_stale() {
        let mut store = RecordStore::new();
        let h = store.insert(record(1));
        assert!(store.remove(h).is_some());
        assert!(store.get(h).is_none());
        assert!(store.remove(h).is_none());
        assert!(store.is_empty());
    }

    #[test]
    fn slot_reuse_bumps_generation() {
        let mut store = RecordStore::new();
        let old = store.insert(record(1));
        store.remove(old);
        let new = store.insert(record(2));
        assert_eq!(new.index(), old.index());
        assert_ne!(new.generation(), old.generation());
        assert!(store.get(old).is_none());
        assert_eq!(store.get(new).unwrap().object_index(), ObjectIndex(2));
        assert_eq!(store.capacity_slots(), 1);
    }

    #[test]
    fn drain_empties_and_stales_everything() {
        let mut store = RecordStore::new();
        let a = store.insert(record(1));
        let b = store.insert(record(2));
        let drained = store.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].object_index(), ObjectIndex(1));
        assert!(store.is_empty());
        assert!(!store.contains(a));
        assert!(!store.contains(b));
    }

    #[test]
    fn iter_skips_free_slots() {
        let mut store = RecordStore::new();
        let a = store.insert(record(1));
        let _b = store.insert(record(2));
        store.remove(a);
        let live: Vec<_> = store.iter().map(|(_, r)| r.object_index()).collect();
        assert_eq!(live, vec![ObjectIndex(2)]);
    }

    #[test]
    fn reused_slots_keep_insertion_order() {
        let mut store = RecordStore::new();
        let a = store.insert(record(1));
        store.insert(record(2));
        store.insert(record(3));
        store.remove(a);
        let d = store.insert(record(4));
        assert_eq!(d.index(), a.index());
        let order: Vec<_> = store.iter().map(|(_, r)| r.object_index()).collect();
        assert_eq!(order, vec![ObjectIndex(2), ObjectIndex(3), ObjectIndex(4)]);
        let drained: Vec<_> = store.drain().iter().map(|r| r.object_index()).collect();
        assert_eq!(drained, order);
    }

    #[test]
    fn foreign_handle_is_none() {
        let store: RecordStore<GridCoord> = RecordStore::new();
        assert!(store.get(RecordHandle::new(3, 0)).is_none());
    }
}
