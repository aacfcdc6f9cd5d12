use std::io;

use footing_core::{GridCoord, ObjectIndex, Rotation, StructureId};
use footing_persist::{dedup_entries, deserialize, serialize, LayerArchive, PersistError, SaveEntry};
use footing_test_utils::fixtures::{furnished_floor, layer, placement};
use footing_test_utils::{FailingTextStore, MemoryTextStore};
use proptest::prelude::*;

#[test]
fn line_count_matches_occupied_keys() {
    let floor = furnished_floor();
    let lines = deserialize(&serialize(&floor));
    assert_eq!(lines.len(), floor.occupied_cell_count() + floor.occupied_edge_count());
    assert_eq!(lines.len(), 11);
}

#[test]
fn dedup_recovers_one_entry_per_object() {
    let floor = furnished_floor();
    let entries = dedup_entries(deserialize(&serialize(&floor))).unwrap();
    assert_eq!(
        entries,
        vec![
            SaveEntry {
                structure_id: StructureId(4),
                origin: GridCoord::new(2, 2),
                rotation: Rotation::Deg0,
            },
            SaveEntry {
                structure_id: StructureId(7),
                origin: GridCoord::new(6, 4),
                rotation: Rotation::Deg90,
            },
            SaveEntry {
                structure_id: StructureId(9),
                origin: GridCoord::new(0, 5),
                rotation: Rotation::Deg0,
            },
            SaveEntry {
                structure_id: StructureId(9),
                origin: GridCoord::new(8, 8),
                rotation: Rotation::Deg270,
            },
        ]
    );
}

#[test]
fn archive_saves_in_one_write_and_loads_back() {
    let floor = furnished_floor();
    let mut archive = LayerArchive::new(MemoryTextStore::new());
    assert!(archive.save(&floor, "floor"));
    assert_eq!(archive.store().writes(), 1);
    assert_eq!(archive.store().get("floor"), Some(serialize(&floor).as_str()));

    let lines = archive.load("floor").unwrap();
    assert_eq!(lines.len(), 11);
}

#[test]
fn saving_empty_layer_writes_empty_file() {
    let mut archive = LayerArchive::new(MemoryTextStore::new());
    assert_eq!(archive.try_save(&layer("walls", 3, 3), "walls").unwrap(), 0);
    assert_eq!(archive.store().get("walls"), Some(""));
    assert_eq!(archive.load("walls"), Some(Vec::new()));
}

#[test]
fn load_of_missing_save_is_none() {
    let archive = LayerArchive::new(MemoryTextStore::new());
    assert_eq!(archive.load("ghost"), None);
    assert!(matches!(
        archive.try_load("ghost"),
        Err(PersistError::Io { ref path, .. }) if path == "memory:ghost"
    ));
}

#[test]
fn io_failures_become_false_and_none() {
    let mut archive = LayerArchive::new(FailingTextStore::new(io::ErrorKind::PermissionDenied));
    assert!(!archive.save(&furnished_floor(), "floor"));
    assert_eq!(archive.load("floor"), None);
    match archive.try_save(&furnished_floor(), "floor") {
        Err(PersistError::Io { source, .. }) => {
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied)
        }
        other => panic!("expected I/O error, got {other:?}"),
    }
}

#[test]
fn bad_names_never_reach_the_store() {
    let mut archive = LayerArchive::new(MemoryTextStore::new());
    assert!(!archive.save(&furnished_floor(), "../escape"));
    assert_eq!(archive.store().writes(), 0);
}

#[test]
fn preloaded_text_without_final_newline() {
    let mut store = MemoryTextStore::new();
    store.insert("old", "1:(0, 0, 0):0\n2:(1, 0, 1):90");
    let archive = LayerArchive::new(store);
    let lines = archive.load("old").unwrap();
    assert_eq!(lines, vec!["1:(0, 0, 0):0", "2:(1, 0, 1):90"]);
}

proptest! {
    #[test]
    fn every_line_parses_and_count_matches(
        objects in prop::collection::vec((0..6i32, 0..6i32, 1..=2u32, 1..=2u32, 0..4i32), 0..12)
    ) {
        let mut l = layer("floor", 6, 6);
        for (i, (x, z, sx, sz, r)) in objects.into_iter().enumerate() {
            let p = placement(x, z, sx, sz, r * 90);
            let _ = l.add_cell_object(ObjectIndex(i as u32), StructureId(i as u32), &p);
        }
        let lines = deserialize(&serialize(&l));
        prop_assert_eq!(lines.len(), l.occupied_cell_count());
        let entries = dedup_entries(&lines).unwrap();
        prop_assert_eq!(entries.len(), l.object_count());
    }
}
