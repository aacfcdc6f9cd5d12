//! Footing: a cell and edge occupancy index for tile placement games.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Footing sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use footing::prelude::*;
//!
//! let bounds = GridBounds::from_size(8, 8);
//! let mut floor = PlacementLayer::new(LayerConfig::new("floor", bounds)).unwrap();
//! let walls = PlacementLayer::new(LayerConfig::new("walls", bounds)).unwrap();
//!
//! // A 2×1 table, turned a quarter.
//! let table = Placement::new(GridCoord::new(3, 3), Size2::new(2, 1).unwrap(), Rotation::Deg90);
//! assert!(floor.is_space_valid(&table, PlacementKind::Cell));
//! floor.add_cell_object(ObjectIndex(0), StructureId(12), &table).unwrap();
//! assert_eq!(floor.origin_for_cell(GridCoord::new(3, 2)), Some(GridCoord::new(3, 3)));
//!
//! // A wall straight through the table is spotted.
//! let wall = Placement::unit(GridCoord::new(3, 3), Rotation::Deg0);
//! assert!(walls.is_space_free(&wall, PlacementKind::Edge));
//! assert_eq!(floor.is_space_occupied_by_multitile_object(&wall, PlacementKind::Edge), Ok(true));
//!
//! // One save line per occupied key.
//! assert_eq!(serialize(&floor), "12:(3, 0, 3):90\n12:(3, 0, 3):90\n");
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `footing-core` | Coordinates, edges, rotations, ids, errors |
//! | [`space`] | `footing-space` | Bounds and footprint geometry |
//! | [`index`] | `footing-index` | Occupancy maps, layers, and placement queries |
//! | [`persist`] | `footing-persist` | Save/load of layers as text |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core value types (`footing-core`).
///
/// [`types::GridCoord`], [`types::Edge`], [`types::Rotation`], and the
/// [`types::Placement`] request they combine into.
pub use footing_core as types;

/// Bounds and footprint geometry (`footing-space`).
pub use footing_space as space;

/// Occupancy maps, layers, and placement queries (`footing-index`).
///
/// [`index::PlacementLayer`] is the main entry point.
pub use footing_index as index;

/// Save and load of layers (`footing-persist`).
///
/// [`persist::LayerArchive`] writes layers through a
/// [`persist::TextStore`].
pub use footing_persist as persist;

/// Common imports for typical Footing usage.
///
/// ```rust
/// use footing::prelude::*;
/// ```
pub mod prelude {
    // Core types
    pub use footing_core::{
        Edge, GridCoord, ObjectIndex, Placement, PlacementKind, Rotation, Size2, StructureId,
    };

    // Errors
    pub use footing_core::CoreError;
    pub use footing_index::{ConfigError, IndexError};
    pub use footing_persist::PersistError;

    // Geometry
    pub use footing_space::{cell_footprint, crossed_edges, edge_footprint, unit_edge, GridBounds};

    // Index
    pub use footing_index::{LayerConfig, OverlapPolicy, PlacedRecord, PlacementLayer};

    // Persistence
    pub use footing_persist::{deserialize, serialize, FsTextStore, LayerArchive, TextStore};
}
