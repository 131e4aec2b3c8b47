// tests/browse_tests.rs
mod common;

use bndl_rs::browse::batch::decode_all_with_progress;
use bndl_rs::browse::{discover_containers, discover_containers_with_progress, Progress};
use bndl_rs::*;
use common::ContainerBuilder;
use std::fs;
use std::path::Path;

fn game_folder(root: &Path) {
    ContainerBuilder::new(2)
        .entry([0, 0, 0, 1], Some((b"DAT outer DAT inner", 19)), None)
        .entry([0, 0, 0, 2], Some((b"plain", 5)), Some((b"second", 6)))
        .write_to(&root.join("TRK_UNIT0_GR.BNDL"));
    ContainerBuilder::new(2)
        .entry([0xAB, 0, 0, 0], Some((b"car", 3)), None)
        .write_to(&root.join("VEHICLES").join("VEH_CARBRWDS_GR.BNDL"));
    fs::write(root.join("VEHICLES").join("README.txt"), b"not a container").unwrap();
    fs::create_dir_all(root.join("EMPTY")).unwrap();
    fs::write(root.join("BROKEN.bndl"), b"BND2 this is not it").unwrap();
}

#[test]
fn test_discover_sorted_and_filtered() {
    let dir = tempfile::tempdir().unwrap();
    game_folder(dir.path());

    let found = discover_containers(dir.path()).unwrap();
    let names: Vec<String> = found
        .iter()
        .map(|p| p.strip_prefix(dir.path()).unwrap().display().to_string())
        .collect();
    assert_eq!(found.len(), 3);
    assert!(names.iter().any(|n| n.ends_with("VEH_CARBRWDS_GR.BNDL")));
    assert!(names.iter().all(|n| !n.ends_with(".txt")));

    let mut sorted = found.clone();
    sorted.sort();
    assert_eq!(found, sorted);
}

#[test]
fn test_discover_progress_reaches_total() {
    let dir = tempfile::tempdir().unwrap();
    game_folder(dir.path());

    let mut seen: Vec<Progress> = Vec::new();
    let found = discover_containers_with_progress(dir.path(), |p| seen.push(p.clone())).unwrap();
    assert_eq!(seen.len(), found.len());
    assert_eq!(seen.last().map(|p| p.percent()), Some(100));
}

#[test]
fn test_discover_missing_root_fails() {
    assert!(matches!(
        discover_containers("no/such/folder"),
        Err(BndlError::Io(_))
    ));
}

#[test]
fn test_tree_expansion() {
    let dir = tempfile::tempdir().unwrap();
    game_folder(dir.path());
    let options = DecodeOptions::default();

    let root = Node::folder(dir.path());
    let labels: Vec<String> = root.children(&options).unwrap().iter().map(Node::label).collect();
    assert_eq!(
        labels,
        vec!["EMPTY", "VEHICLES", "BROKEN.bndl", "TRK_UNIT0_GR.BNDL"]
    );

    let track = Node::container(dir.path().join("TRK_UNIT0_GR.BNDL"));
    let entries = track.children(&options).unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].label(), "00_00_00_01");

    let records = entries[1].children(&options).unwrap();
    let record_labels: Vec<String> = records.iter().map(Node::label).collect();
    assert_eq!(
        record_labels,
        vec!["00_00_00_02_1.unknown.dat", "00_00_00_02_2.unknown.dat"]
    );
    assert!(!records[0].has_children());

    let nested = &entries[0].children(&options).unwrap()[0];
    assert!(nested.has_children());
    let blobs = nested.children(&options).unwrap();
    assert_eq!(blobs.len(), 1);
    assert_eq!(blobs[0].data().map(|d| d.len()), Some(19));

    let inner = blobs[0].children(&options).unwrap();
    assert_eq!(inner.len(), 1);
    assert_eq!(&inner[0].data().unwrap()[..], b"DAT inner");
}

#[test]
fn test_broken_container_fails_only_its_node() {
    let dir = tempfile::tempdir().unwrap();
    game_folder(dir.path());
    let options = DecodeOptions::default();

    let broken = Node::container(dir.path().join("BROKEN.bndl"));
    assert!(matches!(
        broken.children(&options),
        Err(BndlError::InvalidMagic { .. })
    ));

    let fine = Node::container(dir.path().join("TRK_UNIT0_GR.BNDL"));
    assert!(fine.children(&options).is_ok());
}

#[test]
fn test_batch_decode_keeps_input_order() {
    let dir = tempfile::tempdir().unwrap();
    game_folder(dir.path());

    let mut paths = discover_containers(dir.path()).unwrap();
    paths.push(dir.path().join("missing.bndl"));

    let mut reports = 0;
    let results = decode_all_with_progress(&paths, 3, &DecodeOptions::default(), |p| {
        reports += 1;
        assert!(p.done <= p.total);
    });
    assert_eq!(reports, paths.len());
    assert_eq!(results.len(), paths.len());

    for (result, path) in results.iter().zip(&paths) {
        assert_eq!(&result.path, path);
    }

    let ok: Vec<usize> = results
        .iter()
        .filter_map(|r| r.result.as_ref().ok().map(|c| c.len()))
        .collect();
    assert_eq!(ok.len(), 2);
    assert!(results.iter().filter(|r| r.result.is_err()).count() == 2);
}

#[test]
fn test_batch_with_no_paths() {
    let results = bndl_rs::browse::batch::decode_all(&[], 4, &DecodeOptions::default());
    assert!(results.is_empty());
}

#[cfg(unix)]
#[test]
fn test_symlink_loop_is_not_followed() {
    let dir = tempfile::tempdir().unwrap();
    ContainerBuilder::new(2)
        .entry([1, 0, 0, 0], Some((b"a", 1)), None)
        .write_to(&dir.path().join("A.BNDL"));
    std::os::unix::fs::symlink(dir.path(), dir.path().join("loop")).unwrap();

    let found = discover_containers(dir.path()).unwrap();
    assert_eq!(found, vec![dir.path().join("A.BNDL")]);

    let labels: Vec<String> = Node::folder(dir.path())
        .children(&DecodeOptions::default())
        .unwrap()
        .iter()
        .map(Node::label)
        .collect();
    assert_eq!(labels, vec!["A.BNDL"]);
}
