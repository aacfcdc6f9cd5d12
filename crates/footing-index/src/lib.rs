//! Occupancy index and placement queries for Footing.
//!
//! A [`PlacementLayer`] tracks which cells and which cell-boundary edges
//! are taken by placed objects, and answers whether a new object may go
//! somewhere. Games keep one layer per placement category (floors, walls,
//! furniture) so that, say, a sofa can sit on a floor tile without the two
//! colliding.
//!
//! # Architecture
//!
//! ```text
//! PlacementLayer
//! ├── LayerConfig (name, GridBounds, OverlapPolicy; immutable)
//! ├── OccupancyMap<GridCoord>
//! │   ├── IndexMap<GridCoord, RecordHandle>   (one entry per covered cell)
//! │   └── RecordStore<GridCoord>              (one record per object)
//! └── OccupancyMap<Edge>
//!     ├── IndexMap<Edge, RecordHandle>
//!     └── RecordStore<Edge>
//! ```
//!
//! Every key of a multi-cell object maps to the same [`RecordHandle`], so
//! the object can be looked up or removed from any cell it covers, and
//! removal erases all of its keys at once.
//!
//! The two maps never reference each other; only the adjacency queries in
//! [`query`] read across them.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
pub mod handle;
pub mod layer;
pub mod occupancy;
pub mod query;
pub mod record;
pub mod store;

pub use config::{ConfigError, LayerConfig, OverlapPolicy};
pub use error::IndexError;
pub use handle::RecordHandle;
pub use layer::PlacementLayer;
pub use occupancy::{OccupancyKey, OccupancyMap};
pub use record::PlacedRecord;
pub use store::RecordStore;
