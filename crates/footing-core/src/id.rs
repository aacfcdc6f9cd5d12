//! Strongly-typed identifiers.

use std::fmt;

/// Identifies a structure type in the caller's catalogue (a floor tile,
/// a wall segment, a sofa).
///
/// This is the value written to save files; it is what a loader needs to
/// know which prefab to instantiate again.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StructureId(pub u32);

impl fmt::Display for StructureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for StructureId {
    fn from(v: u32) -> Self {
        Self(v)
    }
}

/// Opaque handle to the caller's scene representation of a placed object.
///
/// The index never interprets this value. Two cells share an `ObjectIndex`
/// exactly when they belong to the same placed object, which is what the
/// multi-tile adjacency query compares.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectIndex(pub u32);

impl fmt::Display for ObjectIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ObjectIndex {
    fn from(v: u32) -> Self {
        Self(v)
    }
}
