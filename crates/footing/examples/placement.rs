//! Furnish a small room, wall it in, save both layers, and read them back.
//!
//! Run with `RUST_LOG=debug` to see every placement.

use footing::prelude::*;
use footing::persist::dedup_entries;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let bounds = GridBounds::from_size(6, 6);
    let mut floor = PlacementLayer::new(LayerConfig::new("floor", bounds))?;
    let mut walls = PlacementLayer::new(LayerConfig::new("walls", bounds))?;

    // Outer walls along the bottom and left sides.
    let run = Size2::new(6, 1)?;
    walls.add_edge_object(ObjectIndex(100), StructureId(1), &Placement::new(GridCoord::ZERO, run, Rotation::Deg0))?;
    walls.add_edge_object(ObjectIndex(101), StructureId(1), &Placement::new(GridCoord::ZERO, run, Rotation::Deg270))?;

    let furniture = [
        (StructureId(10), Placement::new(GridCoord::new(1, 1), Size2::new(2, 2)?, Rotation::Deg0)),
        (StructureId(11), Placement::new(GridCoord::new(4, 4), Size2::new(2, 1)?, Rotation::Deg180)),
        (StructureId(12), Placement::new(GridCoord::new(5, 1), Size2::new(3, 1)?, Rotation::Deg270)),
        // Overlaps the first table and is refused.
        (StructureId(13), Placement::new(GridCoord::new(2, 2), Size2::ONE, Rotation::Deg0)),
    ];
    for (i, (structure, placement)) in furniture.iter().enumerate() {
        if !floor.is_space_valid(placement, PlacementKind::Cell) {
            tracing::warn!(%structure, origin = %placement.origin, "out of bounds");
            continue;
        }
        if walls.is_space_occupied_by_edge_object(placement) {
            tracing::warn!(%structure, origin = %placement.origin, "a wall is in the way");
            continue;
        }
        if let Err(e) = floor.add_cell_object(ObjectIndex(i as u32), *structure, placement) {
            tracing::warn!(%structure, error = %e, "not placed");
        }
    }

    let dir = std::env::temp_dir().join("footing-example");
    let mut archive = LayerArchive::new(FsTextStore::new(&dir));
    for layer in [&floor, &walls] {
        if !archive.save(layer, layer.name()) {
            return Err(format!("could not save {}", layer.name()).into());
        }
    }

    for name in ["floor", "walls"] {
        let lines = archive.load(name).unwrap_or_default();
        let entries = dedup_entries(&lines)?;
        println!("{name}: {} keys, {} objects", lines.len(), entries.len());
        for entry in entries {
            println!("  {entry}");
        }
    }

    let removed = floor.clear_all();
    println!("cleared {} floor objects", removed.len());
    Ok(())
}
