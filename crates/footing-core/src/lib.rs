//! Core types for the Footing placement index.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the grid vocabulary shared by every other Footing crate: cell
//! coordinates, canonical edges, quarter-turn rotations, footprint sizes,
//! placement requests, and strongly-typed identifiers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod edge;
pub mod error;
pub mod id;
pub mod placement;
pub mod rotation;

pub use coord::GridCoord;
pub use edge::Edge;
pub use error::CoreError;
pub use id::{ObjectIndex, StructureId};
pub use placement::{Placement, PlacementKind, Size2};
pub use rotation::Rotation;
