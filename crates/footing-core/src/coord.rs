//! Integer grid coordinates.

use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

use crate::error::CoreError;

/// A cell on the placement grid.
///
/// The grid lives in the horizontal plane of a 3D world: `x` runs
/// left/right and `z` runs back/forward. The vertical component is always
/// zero and is only materialized by [`Display`](fmt::Display), which
/// renders the coordinate as `(x, 0, z)`.
///
/// A cell's position is its bottom-left corner, so the cell at `(x, z)`
/// owns the edges `(x, z)–(x+1, z)` (bottom) and `(x, z)–(x, z+1)` (left).
///
/// Ordering compares `x` first, then `z`. [`Edge`](crate::Edge)
/// canonicalization relies on this.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridCoord {
    /// Horizontal axis (left to right).
    pub x: i32,
    /// Depth axis (back to forward).
    pub z: i32,
}

impl GridCoord {
    /// The grid origin.
    pub const ZERO: Self = Self { x: 0, z: 0 };
    /// Unit step towards `+x`.
    pub const RIGHT: Self = Self { x: 1, z: 0 };
    /// Unit step towards `-x`.
    pub const LEFT: Self = Self { x: -1, z: 0 };
    /// Unit step towards `+z`.
    pub const FORWARD: Self = Self { x: 0, z: 1 };
    /// Unit step towards `-z`.
    pub const BACK: Self = Self { x: 0, z: -1 };

    /// Create a coordinate.
    pub const fn new(x: i32, z: i32) -> Self {
        Self { x, z }
    }

    /// Whether `other` shares a side with `self` (Manhattan distance 1).
    pub fn is_adjacent(&self, other: &GridCoord) -> bool {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.z.abs_diff(other.z)) == 1
    }

    /// Component-wise addition, or `None` if either axis leaves `i32`.
    ///
    /// Footprint code steps with this rather than `+` so a placement at
    /// the edge of the coordinate range is rejected instead of wrapping.
    pub fn checked_add(self, rhs: GridCoord) -> Option<GridCoord> {
        Some(GridCoord::new(
            self.x.checked_add(rhs.x)?,
            self.z.checked_add(rhs.z)?,
        ))
    }
}

impl Add for GridCoord {
    type Output = GridCoord;

    fn add(self, rhs: GridCoord) -> GridCoord {
        GridCoord::new(self.x + rhs.x, self.z + rhs.z)
    }
}

impl Sub for GridCoord {
    type Output = GridCoord;

    fn sub(self, rhs: GridCoord) -> GridCoord {
        GridCoord::new(self.x - rhs.x, self.z - rhs.z)
    }
}

impl Neg for GridCoord {
    type Output = GridCoord;

    fn neg(self) -> GridCoord {
        GridCoord::new(-self.x, -self.z)
    }
}

impl From<(i32, i32)> for GridCoord {
    fn from((x, z): (i32, i32)) -> Self {
        Self::new(x, z)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, 0, {})", self.x, self.z)
    }
}

impl FromStr for GridCoord {
    type Err = CoreError;

    /// Parse the `(x, 0, z)` form produced by `Display`.
    ///
    /// The vertical component must be zero.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || CoreError::ParseCoord {
            input: s.to_string(),
        };
        let inner = s
            .trim()
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(err)?;
        let mut parts = inner.split(',').map(|p| p.trim().parse::<i32>());
        let (x, y, z) = match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(Ok(x)), Some(Ok(y)), Some(Ok(z)), None) => (x, y, z),
            _ => return Err(err()),
        };
        if y != 0 {
            return Err(err());
        }
        Ok(Self::new(x, z))
    }
}
