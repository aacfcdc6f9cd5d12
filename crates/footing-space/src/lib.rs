//! Footprint geometry for Footing placement layers.
//!
//! Everything in this crate is a pure function of its arguments: given a
//! [`Placement`](footing_core::Placement) it computes which cells or which
//! canonical edges the object would occupy, and [`GridBounds`] answers
//! whether a cell lies on the playable grid. No occupancy state lives here.
//!
//! # Footprints
//!
//! - [`cell_footprint`]: cells covered by a floor/furniture object
//! - [`edge_footprint`]: boundary edges covered by a wall-like object
//! - [`unit_edge`]: the single edge of a 1×1 edge object
//! - [`crossed_edges`]: edges strictly inside a cell footprint

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod bounds;
pub mod footprint;

pub use bounds::GridBounds;
pub use footprint::{cell_footprint, crossed_edges, edge_footprint, unit_edge, Footprint};
