//! Save and load of Footing placement layers.
//!
//! Flattens a [`PlacementLayer`](footing_index::PlacementLayer) to a
//! line-oriented text format and reads it back as lines. Rebuilding
//! records from those lines is left to the caller, who knows each
//! structure's size; [`parse_line`] and [`dedup_entries`] do the decoding.
//!
//! # Architecture
//!
//! - [`serialize`] / [`deserialize`]: layer → text → lines
//! - [`TextStore`]: the file-system seam; [`FsTextStore`] for real files
//! - [`LayerArchive`]: named save/load over a store, turning I/O failures
//!   into a logged `false`/`None`
//!
//! # Format
//!
//! ```text
//! <structureId>:<origin>:<rotation>\n
//! 4:(2, 0, 2):0
//! 4:(2, 0, 2):0
//! 9:(0, 0, 5):90
//! ```
//!
//! One line per occupied *key*, cells first then edges, each in insertion
//! order. A 2×1 object therefore appears twice; consumers deduplicate
//! while reconstructing.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod archive;
pub mod codec;
pub mod error;
pub mod store;

pub use archive::LayerArchive;
pub use codec::{dedup_entries, deserialize, parse_line, serialize, SaveEntry};
pub use error::PersistError;
pub use store::{FsTextStore, TextStore};

/// Separator between the fields of a save line.
pub const FIELD_SEPARATOR: char = ':';

/// Directory, relative to the working directory, that [`FsTextStore`]
/// uses by default.
pub const DEFAULT_SAVE_DIR: &str = "SaveFiles";
