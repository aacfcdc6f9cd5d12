//! Property tests for footprint geometry across all rotations and sizes.

use footing_core::{Edge, GridCoord, Placement, Rotation, Size2};
use footing_space::{cell_footprint, crossed_edges, edge_footprint, unit_edge};
use proptest::prelude::*;
use std::collections::HashSet;

fn arb_rotation() -> impl Strategy<Value = Rotation> {
    prop_oneof![
        Just(Rotation::Deg0),
        Just(Rotation::Deg90),
        Just(Rotation::Deg180),
        Just(Rotation::Deg270),
    ]
}

fn arb_placement() -> impl Strategy<Value = Placement> {
    (-20i32..20, -20i32..20, 1u32..6, 1u32..6, arb_rotation()).prop_map(|(x, z, sx, sz, rot)| {
        Placement::new(GridCoord::new(x, z), Size2::new(sx, sz).unwrap(), rot)
    })
}

proptest! {
    #[test]
    fn cell_footprint_has_area_many_distinct_cells(p in arb_placement()) {
        let cells = cell_footprint(&p).unwrap();
        prop_assert_eq!(cells.len(), p.size.area());
        let distinct: HashSet<_> = cells.iter().copied().collect();
        prop_assert_eq!(distinct.len(), cells.len());
        prop_assert_eq!(cells[0], p.origin);
    }

    #[test]
    fn cell_footprint_fits_rotated_bounding_box(p in arb_placement()) {
        let cells = cell_footprint(&p).unwrap();
        let size = p.rotated_size();
        let (min_x, max_x) = (cells.iter().map(|c| c.x).min().unwrap(), cells.iter().map(|c| c.x).max().unwrap());
        let (min_z, max_z) = (cells.iter().map(|c| c.z).min().unwrap(), cells.iter().map(|c| c.z).max().unwrap());
        prop_assert_eq!((max_x - min_x + 1) as u32, size.x());
        prop_assert_eq!((max_z - min_z + 1) as u32, size.z());
    }

    #[test]
    fn edge_footprint_is_canonical_and_adjacent(p in arb_placement()) {
        for edge in edge_footprint(&p).unwrap() {
            prop_assert!(edge.smaller() <= edge.bigger());
            prop_assert!(edge.smaller().is_adjacent(&edge.bigger()));
        }
    }

    #[test]
    fn straight_wall_runs_are_distinct(
        x in -20i32..20,
        z in -20i32..20,
        len in 1u32..8,
        rot in arb_rotation(),
    ) {
        let p = Placement::new(GridCoord::new(x, z), Size2::new(len, 1).unwrap(), rot);
        let edges = edge_footprint(&p).unwrap();
        let distinct: HashSet<Edge> = edges.iter().copied().collect();
        prop_assert_eq!(distinct.len(), len as usize);
    }

    #[test]
    fn opposite_unit_edges_compare_equal(x in -20i32..20, z in -20i32..20, rot in arb_rotation()) {
        let a = GridCoord::new(x, z);
        let edge = unit_edge(a, rot);
        let b = a + rot.edge_direction();
        let opposite = rot.next().next();
        prop_assert!(edge.is_some());
        prop_assert_eq!(edge, unit_edge(b, opposite));
    }

    #[test]
    fn crossed_edges_join_two_footprint_cells(p in arb_placement()) {
        let cells: HashSet<GridCoord> = cell_footprint(&p).unwrap().into_iter().collect();
        let edges = crossed_edges(&p).unwrap();
        let (sx, sz) = (p.size.x() as usize, p.size.z() as usize);
        prop_assert_eq!(edges.len(), (sx - 1) * sz + sx * (sz - 1));
        for edge in edges {
            // Both cells sharing an inner edge belong to the footprint.
            let s = edge.smaller();
            let across = if edge.is_horizontal() { s + GridCoord::BACK } else { s + GridCoord::LEFT };
            prop_assert!(cells.contains(&s));
            prop_assert!(cells.contains(&across));
        }
    }

    #[test]
    fn footprints_near_the_range_limit_never_wrap(
        dx in 0i32..4,
        dz in 0i32..4,
        sx in 1u32..6,
        sz in 1u32..6,
        rot in arb_rotation(),
        high in any::<bool>(),
    ) {
        let (x, z) = if high { (i32::MAX - dx, i32::MAX - dz) } else { (i32::MIN + dx, i32::MIN + dz) };
        let p = Placement::new(GridCoord::new(x, z), Size2::new(sx, sz).unwrap(), rot);
        match cell_footprint(&p) {
            Some(cells) => {
                prop_assert_eq!(cells.len(), p.size.area());
                // No wrap: every cell stays within the rotated box around the origin.
                for cell in &cells {
                    prop_assert!(u64::from(cell.x.abs_diff(x)) < u64::from(p.rotated_size().x()));
                    prop_assert!(u64::from(cell.z.abs_diff(z)) < u64::from(p.rotated_size().z()));
                }
            }
            None => prop_assert!(crossed_edges(&p).is_none()),
        }
        if let Some(edges) = edge_footprint(&p) {
            for edge in edges {
                prop_assert!(edge.smaller().is_adjacent(&edge.bigger()));
            }
        }
    }
}
