//! One placement layer: bounds plus independent cell and edge occupancy.

use footing_core::{Edge, GridCoord, ObjectIndex, Placement, PlacementKind, StructureId};
use footing_space::{cell_footprint, edge_footprint, Footprint, GridBounds};
use indexmap::IndexSet;

use crate::config::{ConfigError, LayerConfig};
use crate::error::IndexError;
use crate::handle::RecordHandle;
use crate::occupancy::OccupancyMap;
use crate::record::PlacedRecord;

/// Occupancy state for one category of placed objects.
///
/// A plain owned value: construct it from a [`LayerConfig`], mutate it
/// through `&mut self`. Layers share nothing with each other.
///
/// Inserts do not check bounds or freeness on the caller's behalf beyond
/// the configured [`OverlapPolicy`](crate::OverlapPolicy); run
/// [`is_space_valid`](Self::is_space_valid) and
/// [`is_space_free`](Self::is_space_free) first.
///
/// # Examples
///
/// ```
/// use footing_core::{GridCoord, ObjectIndex, Placement, PlacementKind, Rotation, Size2, StructureId};
/// use footing_index::{LayerConfig, PlacementLayer};
/// use footing_space::GridBounds;
///
/// let mut floor = PlacementLayer::new(LayerConfig::new("floor", GridBounds::new(0, 9, 0, 9))).unwrap();
/// let rug = Placement::new(GridCoord::new(2, 2), Size2::new(2, 3).unwrap(), Rotation::Deg0);
///
/// assert!(floor.is_space_valid(&rug, PlacementKind::Cell));
/// assert!(floor.is_space_free(&rug, PlacementKind::Cell));
/// floor.add_cell_object(ObjectIndex(0), StructureId(4), &rug).unwrap();
///
/// assert_eq!(floor.origin_for_cell(GridCoord::new(3, 4)), Some(GridCoord::new(2, 2)));
/// assert!(!floor.is_space_free(&rug, PlacementKind::Cell));
/// ```
#[derive(Clone, Debug)]
pub struct PlacementLayer {
    config: LayerConfig,
    pub(crate) cells: OccupancyMap<GridCoord>,
    pub(crate) edges: OccupancyMap<Edge>,
}

impl PlacementLayer {
    /// Validate `config` and build an empty layer.
    pub fn new(config: LayerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            cells: OccupancyMap::new(),
            edges: OccupancyMap::new(),
        })
    }

    /// Layer name from the config.
    pub fn name(&self) -> &str {
        &self.config.name
    }

    /// Playable area.
    pub fn bounds(&self) -> GridBounds {
        self.config.bounds
    }

    /// The configuration this layer was built with.
    pub fn config(&self) -> &LayerConfig {
        &self.config
    }

    /// Read-only view of the cell map.
    pub fn cells(&self) -> &OccupancyMap<GridCoord> {
        &self.cells
    }

    /// Read-only view of the edge map.
    pub fn edges(&self) -> &OccupancyMap<Edge> {
        &self.edges
    }

    // ── Footprints ─────────────────────────────────────────────────

    /// Cells `placement` would cover, or `None` past the `i32` range.
    pub fn cell_footprint(&self, placement: &Placement) -> Option<Footprint<GridCoord>> {
        cell_footprint(placement)
    }

    /// Edges `placement` would cover, or `None` past the `i32` range.
    pub fn edge_footprint(&self, placement: &Placement) -> Option<Footprint<Edge>> {
        edge_footprint(placement)
    }

    // ── Mutation ───────────────────────────────────────────────────

    /// Record a cell object covering `placement`'s cell footprint.
    pub fn add_cell_object(
        &mut self,
        object_index: ObjectIndex,
        structure_id: StructureId,
        placement: &Placement,
    ) -> Result<RecordHandle, IndexError> {
        let footprint = cell_footprint(placement)
            .ok_or_else(|| self.out_of_range(PlacementKind::Cell, placement))?;
        let keys = footprint.len();
        let record = PlacedRecord::new(
            object_index,
            structure_id,
            placement.origin,
            placement.rotation,
            footprint,
        );
        let handle = self
            .cells
            .insert(record, self.config.overlap_policy)
            .inspect_err(|e| tracing::warn!(layer = %self.config.name, error = %e, "cell object rejected"))?;
        tracing::debug!(
            layer = %self.config.name,
            origin = %placement.origin,
            rotation = %placement.rotation,
            structure = %structure_id,
            object = %object_index,
            keys,
            "placed cell object"
        );
        Ok(handle)
    }

    /// Record an edge object covering `placement`'s edge footprint.
    ///
    /// Sizes wider than one edge on both axes are accepted but logged, as
    /// they do not form a contiguous wall run.
    pub fn add_edge_object(
        &mut self,
        object_index: ObjectIndex,
        structure_id: StructureId,
        placement: &Placement,
    ) -> Result<RecordHandle, IndexError> {
        let footprint = edge_footprint(placement)
            .ok_or_else(|| self.out_of_range(PlacementKind::Edge, placement))?;
        if !placement.size.is_single_width() {
            tracing::warn!(
                layer = %self.config.name,
                size = %placement.size,
                origin = %placement.origin,
                "edge object wider than one edge; its footprint is not a wall run"
            );
        }
        let keys = footprint.len();
        let record = PlacedRecord::new(
            object_index,
            structure_id,
            placement.origin,
            placement.rotation,
            footprint,
        );
        let handle = self
            .edges
            .insert(record, self.config.overlap_policy)
            .inspect_err(|e| tracing::warn!(layer = %self.config.name, error = %e, "edge object rejected"))?;
        tracing::debug!(
            layer = %self.config.name,
            origin = %placement.origin,
            rotation = %placement.rotation,
            structure = %structure_id,
            object = %object_index,
            keys,
            "placed edge object"
        );
        Ok(handle)
    }

    fn out_of_range(&self, kind: PlacementKind, placement: &Placement) -> IndexError {
        let err = IndexError::OutOfRange {
            kind,
            origin: placement.origin,
        };
        tracing::warn!(layer = %self.config.name, error = %err, "placement rejected");
        err
    }

    /// Remove the cell object covering `cell`, wherever in its footprint
    /// `cell` lies.
    ///
    /// Returns `None` (and leaves the layer unchanged) if `cell` is empty.
    pub fn remove_cell_object(&mut self, cell: GridCoord) -> Option<PlacedRecord<GridCoord>> {
        let removed = self.cells.remove(&cell);
        match &removed {
            Some(record) => self.log_removed(record, "removed cell object"),
            None => tracing::warn!(layer = %self.config.name, %cell, "no cell object to remove"),
        }
        removed
    }

    /// Remove every edge object touching `placement`'s edge footprint.
    ///
    /// Each touched object is removed whole, including edges outside the
    /// footprint. Returns the removed records; empty if nothing was there.
    pub fn remove_edge_object(&mut self, placement: &Placement) -> Vec<PlacedRecord<Edge>> {
        let mut removed = Vec::new();
        for edge in edge_footprint(placement).unwrap_or_default() {
            if let Some(record) = self.edges.remove(&edge) {
                self.log_removed(&record, "removed edge object");
                removed.push(record);
            }
        }
        if removed.is_empty() {
            tracing::warn!(
                layer = %self.config.name,
                origin = %placement.origin,
                rotation = %placement.rotation,
                "no edge object to remove"
            );
        }
        removed
    }

    /// Remove the edge object occupying `edge`, wherever along its run
    /// `edge` lies.
    ///
    /// Returns `None` (and leaves the layer unchanged) if `edge` is empty.
    pub fn remove_edge_object_at(&mut self, edge: &Edge) -> Option<PlacedRecord<Edge>> {
        let removed = self.edges.remove(edge);
        match &removed {
            Some(record) => self.log_removed(record, "removed edge object"),
            None => tracing::warn!(layer = %self.config.name, %edge, "no edge object to remove"),
        }
        removed
    }

    fn log_removed<K>(&self, record: &PlacedRecord<K>, message: &'static str) {
        tracing::debug!(
            layer = %self.config.name,
            origin = %record.origin(),
            object = %record.object_index(),
            "{message}"
        );
    }

    /// Empty both maps.
    ///
    /// Returns the distinct scene handles of every removed object, cells
    /// first, so the caller can tear down their visual representation.
    pub fn clear_all(&mut self) -> Vec<ObjectIndex> {
        let cells = self.cells.clear();
        let edges = self.edges.clear();
        let objects: IndexSet<ObjectIndex> = cells
            .iter()
            .map(|r| r.object_index())
            .chain(edges.iter().map(|r| r.object_index()))
            .collect();
        tracing::debug!(
            layer = %self.config.name,
            cell_objects = cells.len(),
            edge_objects = edges.len(),
            "cleared layer"
        );
        objects.into_iter().collect()
    }

    // ── Lookups ────────────────────────────────────────────────────

    /// Whether a cell object covers `cell`.
    pub fn is_cell_object_at(&self, cell: GridCoord) -> bool {
        self.cells.contains_key(&cell)
    }

    /// Whether an edge object covers `edge`.
    pub fn is_edge_object_at(&self, edge: &Edge) -> bool {
        self.edges.contains_key(edge)
    }

    /// Record of the cell object covering `cell`.
    pub fn record_for_cell(&self, cell: GridCoord) -> Option<&PlacedRecord<GridCoord>> {
        self.cells.record_at(&cell)
    }

    /// Record of the edge object covering `edge`.
    pub fn record_for_edge(&self, edge: &Edge) -> Option<&PlacedRecord<Edge>> {
        self.edges.record_at(edge)
    }

    /// Scene handle of the cell object covering `cell`.
    pub fn object_index_for_cell(&self, cell: GridCoord) -> Option<ObjectIndex> {
        self.record_for_cell(cell).map(|r| r.object_index())
    }

    /// Scene handle of the edge object covering `edge`.
    pub fn object_index_for_edge(&self, edge: &Edge) -> Option<ObjectIndex> {
        self.record_for_edge(edge).map(|r| r.object_index())
    }

    /// Full footprint of the cell object covering `cell`.
    pub fn footprint_for_cell(&self, cell: GridCoord) -> Option<&[GridCoord]> {
        self.record_for_cell(cell).map(|r| r.footprint())
    }

    /// Full footprint of the edge object covering `edge`.
    pub fn footprint_for_edge(&self, edge: &Edge) -> Option<&[Edge]> {
        self.record_for_edge(edge).map(|r| r.footprint())
    }

    /// Pivot cell of the cell object covering `cell`.
    pub fn origin_for_cell(&self, cell: GridCoord) -> Option<GridCoord> {
        self.record_for_cell(cell).map(|r| r.origin())
    }

    /// Pivot cell of the edge object covering `edge`.
    pub fn origin_for_edge(&self, edge: &Edge) -> Option<GridCoord> {
        self.record_for_edge(edge).map(|r| r.origin())
    }

    /// Structure id of the cell object covering `cell`.
    pub fn structure_id_for_cell(&self, cell: GridCoord) -> Option<StructureId> {
        self.record_for_cell(cell).map(|r| r.structure_id())
    }

    /// Structure id of the edge object covering `edge`.
    pub fn structure_id_for_edge(&self, edge: &Edge) -> Option<StructureId> {
        self.record_for_edge(edge).map(|r| r.structure_id())
    }

    /// Number of occupied cells.
    pub fn occupied_cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of occupied edges.
    pub fn occupied_edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Number of distinct placed objects across both maps.
    pub fn object_count(&self) -> usize {
        self.cells.record_count() + self.edges.record_count()
    }
}
