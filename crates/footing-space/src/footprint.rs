//! Rotation-aware footprint computation.
//!
//! An object's footprint is generated from two inclusive offset ranges,
//! one per grid axis, relative to the pivot cell. Each range either walks
//! up from 0 (`0, 1, …, n`) or down from 0 (`0, -1, …, -n`) depending on
//! the rotation, so the pivot is always the first element and the object
//! grows away from it towards the direction it faces:
//!
//! | rotation | axes swapped | x range | z range |
//! |----------|--------------|---------|---------|
//! | 0°       | no           | up      | up      |
//! | 90°      | yes          | up      | down    |
//! | 180°     | no           | down    | down    |
//! | 270°     | yes          | down    | up      |
//!
//! Offsets are enumerated x-outer, z-inner.
//!
//! Every function here returns `None` when some key of the footprint
//! would fall outside the `i32` coordinate range.

use footing_core::{Edge, GridCoord, Placement, Rotation};
use indexmap::IndexSet;
use smallvec::SmallVec;

/// Ordered keys occupied by one object.
///
/// Inline capacity covers the common 1×1 to 2×4 objects without touching
/// the heap.
pub type Footprint<K> = SmallVec<[K; 8]>;

/// `0..=end` stepping by one towards `end`, which may be negative.
fn axis_range(end: i32) -> impl Iterator<Item = i32> + Clone {
    let step = if end < 0 { -1 } else { 1 };
    (0..=end.abs()).map(move |i| i * step)
}

/// Offset from the pivot to the far corner of the footprint.
fn far_offset(placement: &Placement) -> GridCoord {
    let size = placement.rotated_size();
    // Size2 caps both extents at i32::MAX.
    let x = size.x() as i32 - 1;
    let z = size.z() as i32 - 1;
    match placement.rotation {
        Rotation::Deg0 => GridCoord::new(x, z),
        Rotation::Deg90 => GridCoord::new(x, -z),
        Rotation::Deg180 => GridCoord::new(-x, -z),
        Rotation::Deg270 => GridCoord::new(-x, z),
    }
}

/// Offsets from the pivot for every cell of the placement, in footprint order.
fn offsets(placement: &Placement) -> impl Iterator<Item = GridCoord> {
    let far = far_offset(placement);
    let zs = axis_range(far.z);
    axis_range(far.x).flat_map(move |x| zs.clone().map(move |z| GridCoord::new(x, z)))
}

/// Cells covered by a cell object.
///
/// Returns exactly `size.x * size.z` distinct coordinates, the first of
/// which is the origin, or `None` if the far corner is not representable.
///
/// # Examples
///
/// ```
/// use footing_core::{GridCoord, Placement, Rotation, Size2};
/// use footing_space::cell_footprint;
///
/// let p = Placement::new(GridCoord::new(5, 5), Size2::new(2, 1).unwrap(), Rotation::Deg180);
/// let cells = cell_footprint(&p).unwrap();
/// assert_eq!(cells.as_slice(), &[GridCoord::new(5, 5), GridCoord::new(4, 5)]);
///
/// let edge_of_world = Placement::new(GridCoord::new(i32::MAX, 0), Size2::new(2, 1).unwrap(), Rotation::Deg0);
/// assert!(cell_footprint(&edge_of_world).is_none());
/// ```
pub fn cell_footprint(placement: &Placement) -> Option<Footprint<GridCoord>> {
    placement.origin.checked_add(far_offset(placement))?;
    offsets(placement)
        .map(|offset| placement.origin.checked_add(offset))
        .collect()
}

/// Canonical edges covered by an edge object.
///
/// Uses the same offset ranges as [`cell_footprint`] and pairs each point
/// with its neighbour along [`Rotation::edge_direction`].
///
/// Only single-width edge objects (see
/// [`Size2::is_single_width`](footing_core::Size2::is_single_width))
/// produce a contiguous wall run. Wider sizes still return one edge per
/// cell of the area.
pub fn edge_footprint(placement: &Placement) -> Option<Footprint<Edge>> {
    let direction = placement.rotation.edge_direction();
    placement
        .origin
        .checked_add(far_offset(placement))?
        .checked_add(direction)?;
    offsets(placement)
        .map(|offset| {
            let point = placement.origin.checked_add(offset)?;
            Some(Edge::new(point, point.checked_add(direction)?))
        })
        .collect()
}

/// The single edge occupied by a 1×1 edge object at `origin`.
///
/// At 0° this is the cell's bottom edge and at 270° its left edge.
pub fn unit_edge(origin: GridCoord, rotation: Rotation) -> Option<Edge> {
    Some(Edge::new(origin, origin.checked_add(rotation.edge_direction())?))
}

/// Boundary edges lying strictly inside a cell footprint.
///
/// These are the edges a wall would have to occupy to split the object,
/// so a cell object cannot be placed where any of them already holds an
/// edge record. For each cell, its left edge is included when the cell to
/// its left is part of the footprint and its bottom edge when the cell
/// below is. A 1×1 footprint crosses no edges.
///
/// Edges whose far endpoint is past `i32::MAX` can never hold a wall and
/// are left out. The set is deduplicated and ordered by first discovery.
/// `None` if the cell footprint itself is not representable.
pub fn crossed_edges(placement: &Placement) -> Option<IndexSet<Edge>> {
    let cells: IndexSet<GridCoord> = cell_footprint(placement)?.into_iter().collect();
    let mut edges = IndexSet::new();
    let in_footprint = |cell: GridCoord, step: GridCoord| {
        cell.checked_add(step).is_some_and(|n| cells.contains(&n))
    };
    for &cell in &cells {
        if in_footprint(cell, GridCoord::LEFT) {
            edges.extend(unit_edge(cell, Rotation::Deg270));
        }
        if in_footprint(cell, GridCoord::BACK) {
            edges.extend(unit_edge(cell, Rotation::Deg0));
        }
    }
    Some(edges)
}
