//! # Database Lifecycle Tests
//!
//! Whole-lifecycle scenarios for the record store: open a database, run
//! point operations through the collaborator boundary, save the snapshot,
//! and reopen it. These tests exercise the stack end to end the way the
//! interactive shell does.

use tempfile::tempdir;

use avldb::Database;

fn open_db(dir: &tempfile::TempDir) -> Database {
    Database::open(dir.path().join("store.avldb")).unwrap()
}

mod boundary_signals {
    use super::*;

    #[test]
    fn create_reports_duplicates_as_false() {
        let dir = tempdir().unwrap();
        let mut db = open_db(&dir);

        assert!(db.create(1, "Alice"));
        assert!(!db.create(1, "Mallory"));
        assert_eq!(db.find(1).unwrap().value, "Alice");
    }

    #[test]
    fn find_distinguishes_absent_from_found() {
        let dir = tempdir().unwrap();
        let mut db = open_db(&dir);
        db.create(7, "seven");

        let hit = db.find(7).unwrap();
        assert_eq!(hit.value, "seven");
        assert_eq!(hit.comparisons, 1);
        assert!(db.find(8).is_none());
    }

    #[test]
    fn delete_and_edit_report_missing_keys_as_false() {
        let dir = tempdir().unwrap();
        let mut db = open_db(&dir);
        db.create(1, "one");

        assert!(!db.delete(2));
        assert!(!db.edit(2, "two"));
        assert!(db.delete(1));
        assert!(!db.delete(1));
        assert!(db.is_empty());
    }

    #[test]
    fn edit_replaces_value_in_place() {
        let dir = tempdir().unwrap();
        let mut db = open_db(&dir);
        db.create(3, "before");

        assert!(db.edit(3, "after"));
        assert_eq!(db.find(3).unwrap().value, "after");
        assert_eq!(db.len(), 1);
    }
}

mod export_and_clear {
    use super::*;

    #[test]
    fn export_follows_insertion_order() {
        let dir = tempdir().unwrap();
        let mut db = open_db(&dir);
        for (key, value) in [(5, "five"), (1, "one"), (9, "nine"), (3, "three")] {
            db.create(key, value);
        }
        db.delete(1);
        db.create(2, "two");

        let keys: Vec<i64> = db.export().iter().map(|r| r.key).collect();
        assert_eq!(keys, vec![5, 9, 3, 2]);
    }

    #[test]
    fn clear_empties_the_live_tree_without_saving() {
        let dir = tempdir().unwrap();
        let mut db = open_db(&dir);
        db.create(1, "one");
        db.save().unwrap();

        db.clear();
        assert!(db.is_empty());
        assert!(db.export().is_empty());

        // the cleared state was never persisted
        let reopened = open_db(&dir);
        assert_eq!(reopened.len(), 1);
    }
}

mod snapshot_lifecycle {
    use super::*;

    #[test]
    fn first_open_with_no_snapshot_starts_empty() {
        let dir = tempdir().unwrap();

        let db = open_db(&dir);
        assert!(db.is_empty());
        assert!(db.export().is_empty());
    }

    #[test]
    fn empty_tree_round_trips_through_disk() {
        let dir = tempdir().unwrap();
        let db = open_db(&dir);
        db.save().unwrap();

        let reopened = open_db(&dir);
        assert!(reopened.is_empty());
    }

    #[test]
    fn records_survive_save_and_reopen() {
        let dir = tempdir().unwrap();
        let mut db = open_db(&dir);
        for key in 0..50i64 {
            assert!(db.create(key * 3, &format!("record-{key}")));
        }
        db.delete(21);
        db.save().unwrap();

        let reopened = open_db(&dir);
        assert_eq!(reopened.len(), 49);
        assert!(reopened.find(21).is_none());
        assert_eq!(reopened.find(42).unwrap().value, "record-14");
    }

    #[test]
    fn save_overwrites_the_previous_snapshot() {
        let dir = tempdir().unwrap();
        let mut db = open_db(&dir);
        db.create(1, "one");
        db.save().unwrap();

        db.delete(1);
        db.create(2, "two");
        db.save().unwrap();

        let reopened = open_db(&dir);
        assert!(reopened.find(1).is_none());
        assert_eq!(reopened.find(2).unwrap().value, "two");
    }

    #[test]
    fn corrupt_snapshot_fails_to_open() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("store.avldb");
        std::fs::write(&path, b"definitely not a snapshot").unwrap();

        let err = Database::open(&path).unwrap_err();
        assert!(err.to_string().contains("malformed snapshot"));
    }

    #[test]
    fn rebalanced_tree_keeps_its_search_depth_after_reload() {
        let dir = tempdir().unwrap();
        let mut db = open_db(&dir);
        for key in [10, 20, 30, 25] {
            db.create(key, &format!("value-{key}"));
        }
        db.delete(10);
        let before = db.find(30).unwrap();
        db.save().unwrap();

        let reopened = open_db(&dir);
        let after = reopened.find(30).unwrap();
        assert_eq!(before.comparisons, after.comparisons);
        assert_eq!(after.comparisons, 2);
    }
}
