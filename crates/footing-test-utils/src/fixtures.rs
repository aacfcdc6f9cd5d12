//! Layer fixtures shared across integration tests.
//!
//! - [`layer`]: empty layer over `0..width × 0..depth`.
//! - [`floor_5x5`]: the 5×5 board most scenarios use.
//! - [`placement`]: terse [`Placement`] constructor taking degrees.
//! - [`furnished_floor`]: a 10×10 floor with a few cell and edge objects.

use footing_core::{GridCoord, ObjectIndex, Placement, Rotation, Size2, StructureId};
use footing_index::{LayerConfig, OverlapPolicy, PlacementLayer};
use footing_space::GridBounds;

/// Empty layer named `name` over `width × depth` cells from the origin.
pub fn layer(name: &str, width: u32, depth: u32) -> PlacementLayer {
    PlacementLayer::new(LayerConfig::new(name, GridBounds::from_size(width, depth)))
        .expect("fixture config is valid")
}

/// Like [`layer`], with overlapping inserts evicting the objects they hit.
pub fn replacing_layer(name: &str, width: u32, depth: u32) -> PlacementLayer {
    let config = LayerConfig::new(name, GridBounds::from_size(width, depth))
        .with_overlap_policy(OverlapPolicy::Replace);
    PlacementLayer::new(config).expect("fixture config is valid")
}

pub fn floor_5x5() -> PlacementLayer {
    layer("floor", 5, 5)
}

/// `Placement` at `(x, z)` of size `sx × sz` rotated by `degrees`.
///
/// Panics on zero sizes or non-right-angle rotations.
pub fn placement(x: i32, z: i32, sx: u32, sz: u32, degrees: i32) -> Placement {
    Placement::new(
        GridCoord::new(x, z),
        Size2::new(sx, sz).expect("fixture size is non-zero"),
        Rotation::try_from(degrees).expect("fixture rotation is a right angle"),
    )
}

/// 10×10 floor with two cell objects and two edge objects:
///
/// | object | structure | kind | placement      |
/// |--------|-----------|------|----------------|
/// | 0      | 4         | cell | (2, 2) 2×2 @0  |
/// | 1      | 7         | cell | (6, 4) 3×1 @90 |
/// | 2      | 9         | edge | (0, 5) 3×1 @0  |
/// | 3      | 9         | edge | (8, 8) 1×1 @270|
pub fn furnished_floor() -> PlacementLayer {
    let mut floor = layer("floor", 10, 10);
    let cells = [(0, 4, placement(2, 2, 2, 2, 0)), (1, 7, placement(6, 4, 3, 1, 90))];
    let edges = [(2, 9, placement(0, 5, 3, 1, 0)), (3, 9, placement(8, 8, 1, 1, 270))];
    for (object, structure, p) in cells {
        floor
            .add_cell_object(ObjectIndex(object), StructureId(structure), &p)
            .expect("fixture cell objects do not overlap");
    }
    for (object, structure, p) in edges {
        floor
            .add_edge_object(ObjectIndex(object), StructureId(structure), &p)
            .expect("fixture edge objects do not overlap");
    }
    floor
}
