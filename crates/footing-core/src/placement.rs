//! Placement requests: where, how big, and which way round.

use std::fmt;

use crate::coord::GridCoord;
use crate::error::CoreError;
use crate::rotation::Rotation;

/// Footprint size of an object in unrotated local space.
///
/// Both axes are at least 1. For edge objects `x` is the length of the wall
/// run and `z` should stay 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Size2 {
    x: u32,
    z: u32,
}

impl Size2 {
    /// A single cell (or a single edge).
    pub const ONE: Self = Self { x: 1, z: 1 };

    /// Largest extent on either axis; every offset fits in an `i32`.
    pub const MAX_EXTENT: u32 = i32::MAX as u32;

    /// Create a size, rejecting zero or more than [`MAX_EXTENT`](Self::MAX_EXTENT)
    /// on either axis.
    pub fn new(x: u32, z: u32) -> Result<Self, CoreError> {
        if x == 0 || z == 0 {
            return Err(CoreError::ZeroSize { x, z });
        }
        if x > Self::MAX_EXTENT || z > Self::MAX_EXTENT {
            return Err(CoreError::SizeTooLarge { x, z });
        }
        Ok(Self { x, z })
    }

    /// Whether this is a straight run one cell wide, the only shape an
    /// edge object is defined for.
    pub fn is_single_width(&self) -> bool {
        self.x == 1 || self.z == 1
    }

    /// Extent along local x.
    pub fn x(&self) -> u32 {
        self.x
    }

    /// Extent along local z.
    pub fn z(&self) -> u32 {
        self.z
    }

    /// Number of cells covered.
    pub fn area(&self) -> usize {
        self.x as usize * self.z as usize
    }

    /// The size with its axes exchanged.
    pub fn swapped(&self) -> Self {
        Self {
            x: self.z,
            z: self.x,
        }
    }
}

impl fmt::Display for Size2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.x, self.z)
    }
}

/// Which of a layer's two maps a placement addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PlacementKind {
    /// The object covers whole cells (floors, furniture).
    Cell,
    /// The object sits on cell boundaries (walls, fences).
    Edge,
}

impl fmt::Display for PlacementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell => write!(f, "cell"),
            Self::Edge => write!(f, "edge"),
        }
    }
}

/// A candidate or actual placement: pivot cell, size and rotation.
///
/// The origin stays the pivot corner for every rotation; the footprint
/// grows away from it towards the direction the rotation faces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Pivot cell.
    pub origin: GridCoord,
    /// Unrotated size.
    pub size: Size2,
    /// Orientation.
    pub rotation: Rotation,
}

impl Placement {
    /// Create a placement.
    pub fn new(origin: GridCoord, size: Size2, rotation: Rotation) -> Self {
        Self {
            origin,
            size,
            rotation,
        }
    }

    /// A 1×1 placement at `origin`.
    pub fn unit(origin: GridCoord, rotation: Rotation) -> Self {
        Self::new(origin, Size2::ONE, rotation)
    }

    /// Size after applying the rotation (axes swapped at 90° and 270°).
    pub fn rotated_size(&self) -> Size2 {
        if self.rotation.swaps_axes() {
            self.size.swapped()
        } else {
            self.size
        }
    }
}
