//! Canonical cell-boundary edges.

use std::fmt;

use crate::coord::GridCoord;

/// A boundary segment between two grid points.
///
/// Stored in canonical form: `smaller <= bigger` under the (x, then z)
/// ordering of [`GridCoord`]. The only way to build an `Edge` is
/// [`Edge::new`], which sorts its endpoints, so two computations that walk
/// the same physical edge from opposite directions always produce equal
/// (and equally hashed) values.
///
/// # Examples
///
/// ```
/// use footing_core::{Edge, GridCoord};
///
/// let a = Edge::new(GridCoord::new(1, 0), GridCoord::new(0, 0));
/// let b = Edge::new(GridCoord::new(0, 0), GridCoord::new(1, 0));
/// assert_eq!(a, b);
/// assert_eq!(a.smaller(), GridCoord::new(0, 0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Edge {
    smaller: GridCoord,
    bigger: GridCoord,
}

impl Edge {
    /// Build the canonical edge between `a` and `b`.
    pub fn new(a: GridCoord, b: GridCoord) -> Self {
        if b < a {
            Self {
                smaller: b,
                bigger: a,
            }
        } else {
            Self {
                smaller: a,
                bigger: b,
            }
        }
    }

    /// The bottom/left endpoint.
    pub fn smaller(&self) -> GridCoord {
        self.smaller
    }

    /// The top/right endpoint.
    pub fn bigger(&self) -> GridCoord {
        self.bigger
    }

    /// Whether the edge runs along the x axis (constant z).
    pub fn is_horizontal(&self) -> bool {
        self.smaller.z == self.bigger.z
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.smaller, self.bigger)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(x: i32, z: i32) -> GridCoord {
        GridCoord::new(x, z)
    }

    #[test]
    fn new_orders_by_x() {
        let e = Edge::new(c(4, 2), c(3, 2));
        assert_eq!(e.smaller(), c(3, 2));
        assert_eq!(e.bigger(), c(4, 2));
        assert!(e.is_horizontal());
    }

    #[test]
    fn new_orders_by_z_when_x_equal() {
        let e = Edge::new(c(1, 0), c(1, -1));
        assert_eq!(e.smaller(), c(1, -1));
        assert_eq!(e.bigger(), c(1, 0));
        assert!(!e.is_horizontal());
    }

    #[test]
    fn opposite_directions_hash_equal() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(Edge::new(c(0, 0), c(0, 1)));
        set.insert(Edge::new(c(0, 1), c(0, 0)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn display() {
        let e = Edge::new(c(1, 0), c(0, 0));
        assert_eq!(e.to_string(), "(0, 0, 0)-(1, 0, 0)");
    }

    proptest! {
        #[test]
        fn endpoints_always_sorted(ax in -50i32..50, az in -50i32..50, bx in -50i32..50, bz in -50i32..50) {
            let e = Edge::new(c(ax, az), c(bx, bz));
            prop_assert!(e.smaller() <= e.bigger());
            prop_assert_eq!(e, Edge::new(c(bx, bz), c(ax, az)));
        }
    }
}
