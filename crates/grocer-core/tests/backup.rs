//! Backup writing against a real filesystem.

use std::fs;

use chrono::NaiveDate;
use grocer_core::backup::read_backup;
use grocer_core::{FrequencyTable, GrocerError};

fn sample() -> FrequencyTable {
    FrequencyTable::from_lines(
        "/data/input.txt",
        ["Peas", "Cranberries", "peas", "Sweet Potatoes", "CRANBERRIES", "Peas"],
    )
}

#[test]
fn writes_header_and_sorted_rows() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("frequency.dat");
    let stamp = NaiveDate::from_ymd_opt(2025, 10, 19)
        .and_then(|d| d.and_hms_opt(9, 5, 0))
        .unwrap();

    sample().write_backup_at(&target, stamp).unwrap();

    assert_eq!(
        fs::read_to_string(&target).unwrap(),
        "# frequency.dat generated 2025-10-19 09:05:00 from /data/input.txt\n\
         Cranberries 2\n\
         Peas 3\n\
         Sweet Potatoes 1\n"
    );
}

#[test]
fn leaves_no_temporary_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("frequency.dat");
    sample().write_backup(&target).unwrap();

    let names: Vec<_> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name())
        .collect();
    assert_eq!(names, ["frequency.dat"]);
}

#[test]
fn creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("nested/data/frequency.dat");
    sample().write_backup(&target).unwrap();
    assert!(target.is_file());
}

#[test]
fn overwrites_existing_backup() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("frequency.dat");
    fs::write(&target, "stale contents\n").unwrap();

    sample().write_backup(&target).unwrap();

    let text = fs::read_to_string(&target).unwrap();
    assert!(text.starts_with("# frequency.dat generated "));
    assert!(!text.contains("stale"));
}

#[test]
fn empty_table_writes_header_only() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("empty.txt");
    fs::write(&input, "").unwrap();
    let target = dir.path().join("frequency.dat");

    let mut table = FrequencyTable::new(&input);
    table.load().unwrap();
    assert_eq!(table.unique_item_count(), 0);
    assert_eq!(table.total_purchases(), 0);

    table.write_backup(&target).unwrap();
    let text = fs::read_to_string(&target).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.ends_with(&format!(" from {}\n", input.display())));
}

#[test]
fn unwritable_target_is_write_error() {
    let dir = tempfile::tempdir().unwrap();
    // A regular file where a parent directory should be.
    let blocker = dir.path().join("blocker");
    fs::write(&blocker, "").unwrap();
    let target = blocker.join("frequency.dat");

    let err = sample().write_backup(&target).unwrap_err();
    assert!(matches!(err, GrocerError::Write { .. }), "got {err:?}");
}

#[test]
fn round_trip_preserves_counts() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("frequency.dat");
    let original = sample();
    original.write_backup(&target).unwrap();

    let entries = read_backup(&target).unwrap();

    // Expand each row back into repeated purchase lines and reload.
    let lines = entries
        .iter()
        .flat_map(|(name, count)| std::iter::repeat_n(name.as_str(), *count));
    let reloaded = FrequencyTable::from_lines("roundtrip", lines);

    assert_eq!(reloaded.items_by_name(), original.items_by_name());
}

#[test]
fn load_reads_utf8_lossily_and_crlf() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("input.txt");
    fs::write(&input, b"Peas\r\nCaf\xE9\r\npeas\r\n").unwrap();

    let mut table = FrequencyTable::new(&input);
    table.load().unwrap();
    assert_eq!(table.count_of("PEAS"), 2);
    assert_eq!(table.unique_item_count(), 2);
}

#[test]
fn round_trip_keeps_hash_prefixed_names() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("frequency.dat");
    FrequencyTable::from_lines("in.txt", ["#1 Coffee", "Peas", "#1 Coffee"])
        .write_backup(&target)
        .unwrap();

    assert_eq!(
        read_backup(&target).unwrap(),
        vec![("#1 Coffee".to_string(), 2), ("Peas".to_string(), 1)]
    );
}
