//! Placement-legality queries.
//!
//! These compose the footprint geometry with a layer's occupancy maps.
//! Validation failures are plain `false`; nothing here mutates the layer.
//!
//! [`is_space_free`](PlacementLayer::is_space_free) and
//! [`is_space_occupied`](PlacementLayer::is_space_occupied) are not
//! negations of each other: a footprint that partially overlaps existing
//! objects is neither free nor occupied.

use footing_core::{GridCoord, Placement, PlacementKind, Rotation};
use footing_space::{cell_footprint, crossed_edges, edge_footprint};

use crate::error::IndexError;
use crate::layer::PlacementLayer;

impl PlacementLayer {
    /// True iff no key of the footprint is occupied.
    ///
    /// A footprint that leaves the `i32` range covers nothing and is free;
    /// [`is_space_valid`](Self::is_space_valid) rejects it.
    pub fn is_space_free(&self, placement: &Placement, kind: PlacementKind) -> bool {
        match kind {
            PlacementKind::Cell => cell_footprint(placement)
                .is_none_or(|cells| cells.iter().all(|cell| !self.cells.contains_key(cell))),
            PlacementKind::Edge => edge_footprint(placement)
                .is_none_or(|edges| edges.iter().all(|edge| !self.edges.contains_key(edge))),
        }
    }

    /// True iff every key of the footprint is occupied (by any objects).
    pub fn is_space_occupied(&self, placement: &Placement, kind: PlacementKind) -> bool {
        match kind {
            PlacementKind::Cell => cell_footprint(placement)
                .is_some_and(|cells| cells.iter().all(|cell| self.cells.contains_key(cell))),
            PlacementKind::Edge => edge_footprint(placement)
                .is_some_and(|edges| edges.iter().all(|edge| self.edges.contains_key(edge))),
        }
    }

    /// True iff the footprint lies inside the layer bounds.
    ///
    /// For edges only the smaller (bottom/left) endpoint is tested, so a
    /// wall along the top or right border, whose far endpoint sits one past
    /// the last cell, still counts as valid. Footprints past the `i32`
    /// range are never valid.
    pub fn is_space_valid(&self, placement: &Placement, kind: PlacementKind) -> bool {
        let bounds = self.bounds();
        match kind {
            PlacementKind::Cell => cell_footprint(placement)
                .is_some_and(|cells| cells.iter().all(|&cell| bounds.contains(cell))),
            PlacementKind::Edge => edge_footprint(placement)
                .is_some_and(|edges| edges.iter().all(|edge| bounds.contains(edge.smaller()))),
        }
    }

    /// Whether `cell` lies inside the layer bounds.
    pub fn is_cell_in_bounds(&self, cell: GridCoord) -> bool {
        self.bounds().contains(cell)
    }

    /// Whether an edge placement would cut through a single multi-cell
    /// object.
    ///
    /// For each edge of the footprint the two cells it separates are
    /// examined: the cell at the edge's smaller endpoint and its neighbour
    /// behind (0°/180°, horizontal edges) or to the left (90°/270°,
    /// vertical edges). Returns `Ok(true)` as soon as both cells hold cell
    /// objects with the same [`ObjectIndex`](footing_core::ObjectIndex).
    ///
    /// Only defined for [`PlacementKind::Edge`]; cell placements return
    /// [`IndexError::Unsupported`].
    pub fn is_space_occupied_by_multitile_object(
        &self,
        placement: &Placement,
        kind: PlacementKind,
    ) -> Result<bool, IndexError> {
        if kind != PlacementKind::Edge {
            return Err(IndexError::Unsupported {
                operation: "is_space_occupied_by_multitile_object",
                kind,
            });
        }
        let across = match placement.rotation {
            Rotation::Deg0 | Rotation::Deg180 => GridCoord::BACK,
            Rotation::Deg90 | Rotation::Deg270 => GridCoord::LEFT,
        };
        for edge in edge_footprint(placement).unwrap_or_default() {
            let here = edge.smaller();
            let Some(there) = here.checked_add(across) else {
                continue;
            };
            let (Some(a), Some(b)) = (
                self.object_index_for_cell(here),
                self.object_index_for_cell(there),
            ) else {
                continue;
            };
            if a == b {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Whether a cell placement would straddle an existing edge object.
    ///
    /// Checks every boundary edge strictly inside the cell footprint (see
    /// [`crossed_edges`]); a wall on any of them blocks the placement. A
    /// 1×1 placement crosses no edges and always returns `false`.
    pub fn is_space_occupied_by_edge_object(&self, placement: &Placement) -> bool {
        crossed_edges(placement)
            .is_some_and(|edges| edges.iter().any(|edge| self.edges.contains_key(edge)))
    }
}
