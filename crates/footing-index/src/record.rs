//! The record shared by every key an object occupies.

use footing_core::{GridCoord, ObjectIndex, Rotation, StructureId};
use footing_space::Footprint;

/// One placed object.
///
/// Generic over the key type: `PlacedRecord<GridCoord>` for cell objects,
/// `PlacedRecord<Edge>` for edge objects. The footprint is fixed at
/// creation and lists every key the object occupies, in footprint order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlacedRecord<K> {
    object_index: ObjectIndex,
    structure_id: StructureId,
    origin: GridCoord,
    rotation: Rotation,
    footprint: Footprint<K>,
}

impl<K> PlacedRecord<K> {
    /// Create a record.
    pub fn new(
        object_index: ObjectIndex,
        structure_id: StructureId,
        origin: GridCoord,
        rotation: Rotation,
        footprint: Footprint<K>,
    ) -> Self {
        Self {
            object_index,
            structure_id,
            origin,
            rotation,
            footprint,
        }
    }

    /// Handle to the caller's scene object.
    pub fn object_index(&self) -> ObjectIndex {
        self.object_index
    }

    /// Catalogue id of the placed structure.
    pub fn structure_id(&self) -> StructureId {
        self.structure_id
    }

    /// Pivot cell the object was placed at.
    pub fn origin(&self) -> GridCoord {
        self.origin
    }

    /// Orientation the object was placed with.
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Every key the object occupies.
    pub fn footprint(&self) -> &[K] {
        &self.footprint
    }
}
