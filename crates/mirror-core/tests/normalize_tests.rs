//! Tests for the path normalizer

use chrono::{DateTime, TimeZone, Utc};
use mirror_core::{EntryKind, PathEntry, enumerate, normalize};
use mirror_fs::LocalFs;
use mirror_test_utils::{RecordingFs, TestTree};
use pretty_assertions::assert_eq;

#[test]
fn entries_are_sorted_ordinally_and_root_stripped() {
    let tree = TestTree::new();
    tree.file("b.txt", "b")
        .file("a/x.txt", "x")
        .file("a-b.txt", "ab")
        .file("A.txt", "A")
        .dir("a/z");
    let root = tree.normalized_root().with_trailing_separator();

    let raw = enumerate(&LocalFs, &root, None).unwrap();
    let entries = normalize(&LocalFs, &root, raw);

    let paths: Vec<_> = entries.iter().map(|e| e.relative_path.as_str()).collect();
    // '-' (0x2D) sorts before '/' (0x2F); uppercase before lowercase
    assert_eq!(paths, vec!["A.txt", "a", "a-b.txt", "a/x.txt", "a/z", "b.txt"]);
}

#[test]
fn file_timestamps_are_captured_once() {
    let tree = TestTree::new();
    tree.file_at("f.txt", "f", 1_700_000_000).dir("d");
    let root = tree.normalized_root().with_trailing_separator();

    let raw = enumerate(&LocalFs, &root, None).unwrap();
    let entries = normalize(&LocalFs, &root, raw);

    // Changing the file afterwards does not affect the snapshot
    tree.set_mtime("f.txt", 1_800_000_000, 0);

    let expected: DateTime<Utc> = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    assert_eq!(
        entries,
        vec![
            PathEntry::directory("d"),
            PathEntry::file("f.txt", Some(expected)),
        ]
    );
}

#[test]
fn unreadable_timestamp_leaves_none() {
    let tree = TestTree::new();
    tree.file("f.txt", "f").file("g.txt", "g");
    let root = tree.normalized_root().with_trailing_separator();
    let fs = RecordingFs::default();
    fs.fail_on(tree.path("f.txt"));

    let raw = enumerate(&fs, &root, None).unwrap();
    let entries = normalize(&fs, &root, raw);

    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].kind, EntryKind::File);
    assert_eq!(entries[0].modified_at, None);
    assert!(entries[1].modified_at.is_some());
}
