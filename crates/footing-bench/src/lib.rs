//! Benchmark profiles for the Footing placement index.
//!
//! - [`furnished_profile`]: 100x100 floor with ~2K mixed-size cell objects
//! - [`walled_profile`]: 100x100 wall layer with every fourth grid line walled
//! - [`empty_profile`]: empty 100x100 layer
//! - [`scatter_placements`]: deterministic placements via seed

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use footing_core::{GridCoord, ObjectIndex, Placement, PlacementKind, Rotation, Size2, StructureId};
use footing_index::{LayerConfig, PlacementLayer};
use footing_space::GridBounds;

/// Side length of both reference profiles.
pub const PROFILE_SIDE: u32 = 100;

/// Empty `PROFILE_SIDE × PROFILE_SIDE` layer.
pub fn empty_profile(name: &str) -> PlacementLayer {
    PlacementLayer::new(LayerConfig::new(name, GridBounds::from_size(PROFILE_SIDE, PROFILE_SIDE)))
        .unwrap()
}

/// Generate `n` deterministic placements of 1×1 to 3×3 objects inside a
/// `side × side` grid.
///
/// The placements may overlap each other; profile builders skip the ones
/// that do not fit.
pub fn scatter_placements(side: u32, n: usize, seed: u64) -> Vec<Placement> {
    (0..n as u64)
        .map(|i| {
            let h = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i.wrapping_mul(1442695040888963407));
            let x = (h % side as u64) as i32;
            let z = ((h >> 16) % side as u64) as i32;
            let sx = 1 + ((h >> 32) % 3) as u32;
            let sz = 1 + ((h >> 40) % 3) as u32;
            let rotation = Rotation::ALL[((h >> 48) % 4) as usize];
            Placement::new(GridCoord::new(x, z), Size2::new(sx, sz).unwrap(), rotation)
        })
        .collect()
}

/// Build the furnished floor profile: up to 2000 cell objects, each
/// placed only if valid and free.
pub fn furnished_profile(seed: u64) -> PlacementLayer {
    let mut floor = empty_profile("floor");
    for (i, p) in scatter_placements(PROFILE_SIDE, 2000, seed).iter().enumerate() {
        if floor.is_space_valid(p, PlacementKind::Cell) && floor.is_space_free(p, PlacementKind::Cell) {
            floor
                .add_cell_object(ObjectIndex(i as u32), StructureId((i % 16) as u32), p)
                .unwrap();
        }
    }
    floor
}

/// Build the wall profile: 4-cell wall runs along every fourth row and
/// column line.
pub fn walled_profile() -> PlacementLayer {
    let mut walls = empty_profile("walls");
    let run = Size2::new(4, 1).unwrap();
    let side = PROFILE_SIDE as i32;
    let mut next = 0u32;
    for line in (0..side).step_by(4) {
        for start in (0..side).step_by(4) {
            for (origin, rotation) in [
                (GridCoord::new(start, line), Rotation::Deg0),
                (GridCoord::new(line, start), Rotation::Deg270),
            ] {
                let p = Placement::new(origin, run, rotation);
                if walls.is_space_free(&p, PlacementKind::Edge) {
                    walls
                        .add_edge_object(ObjectIndex(next), StructureId(1), &p)
                        .unwrap();
                    next += 1;
                }
            }
        }
    }
    walls
}
