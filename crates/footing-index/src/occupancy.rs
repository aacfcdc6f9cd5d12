//! Key → record occupancy map.
//!
//! [`OccupancyMap`] binds every key of an object's footprint to one
//! [`RecordHandle`] in its own [`RecordStore`]. A layer owns two of these,
//! one keyed by [`GridCoord`] and one by [`Edge`]; they never share
//! records.
//!
//! Iteration walks records in insertion order and each record's footprint
//! in footprint order, which keeps save files stable across runs. Keys
//! are dropped with `swap_remove`, so the key table's own order is not
//! meaningful.

use std::fmt;
use std::hash::Hash;

use footing_core::{Edge, GridCoord, PlacementKind};
use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::config::OverlapPolicy;
use crate::error::IndexError;
use crate::handle::RecordHandle;
use crate::record::PlacedRecord;
use crate::store::RecordStore;

/// A key type an occupancy map can be indexed by.
pub trait OccupancyKey: Copy + Eq + Hash + fmt::Debug + fmt::Display + 'static {
    /// Which kind of placement this key addresses.
    const KIND: PlacementKind;
}

impl OccupancyKey for GridCoord {
    const KIND: PlacementKind = PlacementKind::Cell;
}

impl OccupancyKey for Edge {
    const KIND: PlacementKind = PlacementKind::Edge;
}

/// Occupied keys of one kind and the records they alias.
#[derive(Clone, Debug)]
pub struct OccupancyMap<K: OccupancyKey> {
    keys: IndexMap<K, RecordHandle>,
    records: RecordStore<K>,
}

impl<K: OccupancyKey> OccupancyMap<K> {
    /// Create an empty map.
    pub fn new() -> Self {
        Self {
            keys: IndexMap::new(),
            records: RecordStore::new(),
        }
    }

    /// Bind every key of `record`'s footprint to the record.
    ///
    /// Bounds are not checked here; callers validate with the layer's
    /// queries first. Overlap with existing keys is resolved by `policy`.
    /// With [`OverlapPolicy::Reject`] nothing is modified on error.
    pub fn insert(
        &mut self,
        record: PlacedRecord<K>,
        policy: OverlapPolicy,
    ) -> Result<RecordHandle, IndexError> {
        match policy {
            OverlapPolicy::Reject => {
                if let Some(key) = record.footprint().iter().find(|k| self.keys.contains_key(*k)) {
                    return Err(IndexError::AlreadyOccupied {
                        kind: K::KIND,
                        key: key.to_string(),
                    });
                }
            }
            OverlapPolicy::Replace => {
                let mut displaced: SmallVec<[RecordHandle; 4]> = SmallVec::new();
                for key in record.footprint() {
                    if let Some(&h) = self.keys.get(key) {
                        if !displaced.contains(&h) {
                            displaced.push(h);
                        }
                    }
                }
                for h in displaced {
                    if let Some(old) = self.remove_handle(h) {
                        tracing::debug!(
                            kind = %K::KIND,
                            origin = %old.origin(),
                            object = %old.object_index(),
                            "displaced overlapping object"
                        );
                    }
                }
            }
        }

        let keys: SmallVec<[K; 8]> = SmallVec::from_slice(record.footprint());
        let handle = self.records.insert(record);
        for key in keys {
            self.keys.insert(key, handle);
        }
        Ok(handle)
    }

    /// Remove the whole object occupying `key`.
    ///
    /// Returns `None` if `key` is not occupied.
    pub fn remove(&mut self, key: &K) -> Option<PlacedRecord<K>> {
        let handle = *self.keys.get(key)?;
        self.remove_handle(handle)
    }

    /// Remove the object behind `handle` and every key aliasing it.
    pub fn remove_handle(&mut self, handle: RecordHandle) -> Option<PlacedRecord<K>> {
        let record = self.records.remove(handle)?;
        for key in record.footprint() {
            if self.keys.get(key) == Some(&handle) {
                self.keys.swap_remove(key);
            }
        }
        Some(record)
    }

    /// Whether `key` is occupied.
    pub fn contains_key(&self, key: &K) -> bool {
        self.keys.contains_key(key)
    }

    /// Handle of the object occupying `key`.
    pub fn handle_at(&self, key: &K) -> Option<RecordHandle> {
        self.keys.get(key).copied()
    }

    /// Record of the object occupying `key`.
    pub fn record_at(&self, key: &K) -> Option<&PlacedRecord<K>> {
        self.records.get(*self.keys.get(key)?)
    }

    /// Occupied keys with their records, objects in insertion order.
    ///
    /// A multi-key object is yielded once per key, in footprint order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &PlacedRecord<K>)> {
        self.records
            .iter()
            .flat_map(|(_, r)| r.footprint().iter().map(move |k| (k, r)))
    }

    /// Remove everything, returning the removed records.
    pub fn clear(&mut self) -> Vec<PlacedRecord<K>> {
        self.keys.clear();
        self.records.drain()
    }

    /// Number of occupied keys.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no key is occupied.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Number of distinct objects.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

impl<K: OccupancyKey> Default for OccupancyMap<K> {
    fn default() -> Self {
        Self::new()
    }
}
