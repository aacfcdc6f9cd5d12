//! Error types for core value construction and parsing.

use std::error::Error;
use std::fmt;

/// Errors from building or parsing core grid values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// A rotation that is not a multiple of 90 in `[0, 270]`.
    InvalidRotation {
        /// The rejected angle.
        degrees: i32,
    },
    /// An object size with a zero-length axis.
    ZeroSize {
        /// Requested x extent.
        x: u32,
        /// Requested z extent.
        z: u32,
    },
    /// An object size with an axis longer than `i32::MAX` cells.
    SizeTooLarge {
        /// Requested x extent.
        x: u32,
        /// Requested z extent.
        z: u32,
    },
    /// Text that is not a `(x, 0, z)` coordinate.
    ParseCoord {
        /// The offending input.
        input: String,
    },
    /// Text that is not an integer angle.
    ParseRotation {
        /// The offending input.
        input: String,
    },
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRotation { degrees } => {
                write!(f, "rotation must be 0, 90, 180 or 270 degrees, got {degrees}")
            }
            Self::ZeroSize { x, z } => {
                write!(f, "object size must be at least 1x1, got {x}x{z}")
            }
            Self::SizeTooLarge { x, z } => {
                write!(f, "object size {x}x{z} exceeds the grid coordinate range")
            }
            Self::ParseCoord { input } => {
                write!(f, "expected a coordinate like \"(x, 0, z)\", got {input:?}")
            }
            Self::ParseRotation { input } => {
                write!(f, "expected a rotation in degrees, got {input:?}")
            }
        }
    }
}

impl Error for CoreError {}
