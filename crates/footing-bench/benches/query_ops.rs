//! Criterion micro-benchmarks for occupancy queries and edits.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use footing_bench::{empty_profile, furnished_profile, scatter_placements, walled_profile, PROFILE_SIDE};
use footing_core::{GridCoord, ObjectIndex, PlacementKind, StructureId};

/// Benchmark: is_space_free + is_space_valid for 1K placements on the
/// furnished floor.
fn bench_free_and_valid_1k(c: &mut Criterion) {
    let floor = furnished_profile(42);
    let candidates = scatter_placements(PROFILE_SIDE, 1_000, 99);

    c.bench_function("free_and_valid_1k", |b| {
        b.iter(|| {
            for p in &candidates {
                black_box(floor.is_space_valid(p, PlacementKind::Cell));
                black_box(floor.is_space_free(p, PlacementKind::Cell));
            }
        });
    });
}

/// Benchmark: is_space_occupied_by_edge_object for 1K placements on the
/// wall grid.
fn bench_walls_crossed_1k(c: &mut Criterion) {
    let walls = walled_profile();
    let candidates = scatter_placements(PROFILE_SIDE, 1_000, 99);

    c.bench_function("walls_crossed_1k", |b| {
        b.iter(|| {
            for p in &candidates {
                black_box(walls.is_space_occupied_by_edge_object(p));
            }
        });
    });
}

/// Benchmark: origin lookup through every cell of the 100x100 floor.
fn bench_origin_lookup_10k(c: &mut Criterion) {
    let floor = furnished_profile(42);
    let side = PROFILE_SIDE as i32;

    c.bench_function("origin_lookup_10k", |b| {
        b.iter(|| {
            for x in 0..side {
                for z in 0..side {
                    black_box(floor.origin_for_cell(GridCoord::new(x, z)));
                }
            }
        });
    });
}

/// Benchmark: place 2K scattered objects where free, then remove through
/// each placement's origin.
fn bench_place_and_remove(c: &mut Criterion) {
    let placements = scatter_placements(PROFILE_SIDE, 2_000, 42);

    c.bench_function("place_and_remove_2k", |b| {
        b.iter_batched(
            || empty_profile("floor"),
            |mut floor| {
                for (i, p) in placements.iter().enumerate() {
                    if floor.is_space_free(p, PlacementKind::Cell) {
                        let _ = floor.add_cell_object(ObjectIndex(i as u32), StructureId(0), p);
                    }
                }
                for p in &placements {
                    floor.remove_cell_object(p.origin);
                }
                floor
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_free_and_valid_1k,
    bench_walls_crossed_1k,
    bench_origin_lookup_10k,
    bench_place_and_remove
);
criterion_main!(benches);
