//! Error types for occupancy mutation and queries.

use std::error::Error;
use std::fmt;

use footing_core::{GridCoord, PlacementKind};

/// Errors from inserting into or querying a placement layer.
///
/// Placement legality itself (free, in bounds) is answered with booleans
/// by the query methods; these errors cover requests the layer refuses to
/// carry out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum IndexError {
    /// An insert would cover a key already held by another object.
    AlreadyOccupied {
        /// Which map the conflict is in.
        kind: PlacementKind,
        /// The first conflicting key, as displayed.
        key: String,
    },
    /// The placement's footprint leaves the `i32` coordinate range.
    OutOfRange {
        /// Which map the insert targeted.
        kind: PlacementKind,
        /// Origin of the refused placement.
        origin: GridCoord,
    },
    /// The query is not defined for this placement kind.
    Unsupported {
        /// Name of the refused operation.
        operation: &'static str,
        /// The placement kind it was called with.
        kind: PlacementKind,
    },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AlreadyOccupied { kind, key } => {
                write!(f, "{kind} position {key} is already occupied")
            }
            Self::OutOfRange { kind, origin } => {
                write!(f, "{kind} footprint at {origin} leaves the i32 coordinate range")
            }
            Self::Unsupported { operation, kind } => {
                write!(f, "{operation} is not supported for {kind} placements")
            }
        }
    }
}

impl Error for IndexError {}
