//! Quarter-turn rotations.

use std::fmt;
use std::str::FromStr;

use crate::coord::GridCoord;
use crate::error::CoreError;

/// Orientation of a placed object, in quarter turns.
///
/// Placement only supports the four axis-aligned orientations, so any
/// other angle is rejected at conversion time rather than producing an
/// empty or undefined footprint later.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rotation {
    /// 0 degrees.
    #[default]
    Deg0,
    /// 90 degrees.
    Deg90,
    /// 180 degrees.
    Deg180,
    /// 270 degrees.
    Deg270,
}

impl Rotation {
    /// All rotations in ascending order.
    pub const ALL: [Rotation; 4] = [
        Rotation::Deg0,
        Rotation::Deg90,
        Rotation::Deg180,
        Rotation::Deg270,
    ];

    /// The angle in degrees.
    pub fn degrees(self) -> i32 {
        match self {
            Self::Deg0 => 0,
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Whether the object's local axes are swapped relative to the grid.
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Deg90 | Self::Deg270)
    }

    /// Unit direction an edge object of this rotation extends towards.
    ///
    /// 0° → +x, 90° → −z, 180° → −x, 270° → +z.
    pub fn edge_direction(self) -> GridCoord {
        match self {
            Self::Deg0 => GridCoord::RIGHT,
            Self::Deg90 => GridCoord::BACK,
            Self::Deg180 => GridCoord::LEFT,
            Self::Deg270 => GridCoord::FORWARD,
        }
    }

    /// Rotate clockwise by one quarter turn.
    pub fn next(self) -> Self {
        match self {
            Self::Deg0 => Self::Deg90,
            Self::Deg90 => Self::Deg180,
            Self::Deg180 => Self::Deg270,
            Self::Deg270 => Self::Deg0,
        }
    }
}

impl TryFrom<i32> for Rotation {
    type Error = CoreError;

    /// Accepts 0, 90, 180 and 270 only.
    fn try_from(degrees: i32) -> Result<Self, Self::Error> {
        match degrees {
            0 => Ok(Self::Deg0),
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            _ => Err(CoreError::InvalidRotation { degrees }),
        }
    }
}

impl fmt::Display for Rotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

impl FromStr for Rotation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let degrees: i32 = s.trim().parse().map_err(|_| CoreError::ParseRotation {
            input: s.to_string(),
        })?;
        Rotation::try_from(degrees)
    }
}
