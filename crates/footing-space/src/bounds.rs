//! Inclusive rectangular grid bounds.

use std::fmt;

use footing_core::GridCoord;

/// The playable area of a placement layer, inclusive on all sides.
///
/// Set once when a layer is built and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridBounds {
    x_min: i32,
    x_max: i32,
    z_min: i32,
    z_max: i32,
}

impl GridBounds {
    /// Create bounds. Inverted ranges are representable (and contain
    /// nothing); layer configuration rejects them.
    pub const fn new(x_min: i32, x_max: i32, z_min: i32, z_max: i32) -> Self {
        Self {
            x_min,
            x_max,
            z_min,
            z_max,
        }
    }

    /// Bounds covering `width × depth` cells starting at the origin.
    ///
    /// Sizes past the `i32` range stop at `i32::MAX`.
    pub fn from_size(width: u32, depth: u32) -> Self {
        let last = |n: u32| (i64::from(n) - 1).min(i64::from(i32::MAX)) as i32;
        Self::new(0, last(width), 0, last(depth))
    }

    /// Smallest valid x.
    pub fn x_min(&self) -> i32 {
        self.x_min
    }

    /// Largest valid x.
    pub fn x_max(&self) -> i32 {
        self.x_max
    }

    /// Smallest valid z.
    pub fn z_min(&self) -> i32 {
        self.z_min
    }

    /// Largest valid z.
    pub fn z_max(&self) -> i32 {
        self.z_max
    }

    /// `x_min <= x <= x_max && z_min <= z <= z_max`.
    pub fn contains(&self, coord: GridCoord) -> bool {
        (self.x_min..=self.x_max).contains(&coord.x) && (self.z_min..=self.z_max).contains(&coord.z)
    }

    /// Whether either range is inverted.
    pub fn is_empty(&self) -> bool {
        self.x_min > self.x_max || self.z_min > self.z_max
    }

    /// Number of cells inside the bounds.
    pub fn cell_count(&self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let w = (self.x_max as i64 - self.x_min as i64 + 1) as usize;
        let d = (self.z_max as i64 - self.z_min as i64 + 1) as usize;
        w * d
    }
}

impl fmt::Display for GridBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}] x [{}, {}]",
            self.x_min, self.x_max, self.z_min, self.z_max
        )
    }
}
