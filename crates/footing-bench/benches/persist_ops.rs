//! Criterion micro-benchmarks for layer save encoding.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use footing_bench::{furnished_profile, walled_profile};
use footing_persist::{dedup_entries, deserialize, serialize, LayerArchive};
use footing_test_utils::MemoryTextStore;

/// Benchmark: serialize the furnished floor (~4K lines).
fn bench_serialize_floor(c: &mut Criterion) {
    let floor = furnished_profile(42);

    c.bench_function("serialize_floor", |b| {
        b.iter(|| black_box(serialize(black_box(&floor))));
    });
}

/// Benchmark: split and decode the wall grid's save text.
fn bench_decode_walls(c: &mut Criterion) {
    let text = serialize(&walled_profile());

    c.bench_function("decode_walls", |b| {
        b.iter(|| {
            let lines = deserialize(black_box(&text));
            black_box(dedup_entries(&lines).unwrap());
        });
    });
}

/// Benchmark: save through an in-memory archive.
fn bench_archive_save(c: &mut Criterion) {
    let floor = furnished_profile(42);
    let mut archive = LayerArchive::new(MemoryTextStore::new());

    c.bench_function("archive_save_memory", |b| {
        b.iter(|| black_box(archive.try_save(&floor, "floor").unwrap()));
    });
}

criterion_group!(
    benches,
    bench_serialize_floor,
    bench_decode_walls,
    bench_archive_save
);
criterion_main!(benches);
