//! Save document round-trips, migration, and reconciliation through real
//! stores.

use keycard_arena::catalog::Catalog;
use keycard_arena::core::constants::SAVE_KEY;
use keycard_arena::save::{reconcile, KeyValueStore, MemoryStore, SaveRecord, SaveStore};
use keycard_arena::utils::FileStore;
use std::fs;
use std::sync::atomic::{AtomicU64, Ordering};

fn temp_file_store() -> FileStore {
    static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);
    let id = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
    FileStore::new(std::env::temp_dir().join(format!(
        "kca-save-store-test-{}-{}",
        std::process::id(),
        id
    )))
}

fn populated_record() -> SaveRecord {
    let mut record = SaveRecord::new();
    for (id, level) in [("grave_warden", 4), ("ember_knight", 1), ("ash_duelist", 9)] {
        record.unlocked.push(id.to_string());
        record.levels.insert(id.to_string(), level);
    }
    record.currency = 1_234;
    record
}

#[test]
fn test_memory_roundtrip_preserves_everything() {
    let mut saves = SaveStore::new(MemoryStore::new());
    let record = populated_record();
    assert!(saves.persist(&record));

    let loaded = saves.load();
    assert_eq!(loaded, record);
    assert_eq!(loaded.unlocked, vec!["grave_warden", "ember_knight", "ash_duelist"]);
}

#[test]
fn test_file_roundtrip() {
    let store = temp_file_store();
    let dir = store.dir().to_path_buf();
    let mut saves = SaveStore::new(store);
    let record = populated_record();
    assert!(saves.persist(&record));
    assert_eq!(saves.load(), record);

    // A fresh store on the same directory sees the same save
    let reopened = SaveStore::new(FileStore::new(dir.clone()));
    assert_eq!(reopened.load(), record);

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_file_store_corrupt_save_loads_default() {
    let mut store = temp_file_store();
    let dir = store.dir().to_path_buf();
    store.set(SAVE_KEY, "not json at all").unwrap();

    let saves = SaveStore::new(store);
    assert_eq!(saves.load(), SaveRecord::new());

    fs::remove_dir_all(dir).ok();
}

#[test]
fn test_legacy_unversioned_save_migrates() {
    let mut store = MemoryStore::new();
    store.insert_raw(
        SAVE_KEY,
        r#"{"unlockedHeroes": ["tide_oracle", "storm_drummer"], "heroLevels": {"tide_oracle": 3}, "demonSouls": 12}"#,
    );
    let catalog = Catalog::builtin().unwrap();
    let mut saves = SaveStore::new(store);

    let record = saves.load_reconciled(&catalog);
    assert_eq!(record.unlocked, vec!["tide_oracle", "storm_drummer"]);
    assert_eq!(record.level_of("tide_oracle"), Some(3));
    assert_eq!(record.level_of("storm_drummer"), Some(1));
    assert_eq!(record.currency, 12);

    // Re-persisting upgrades the document in place
    saves.persist(&record);
    let raw = saves.backend().raw(SAVE_KEY).unwrap();
    let value: serde_json::Value = serde_json::from_str(raw).unwrap();
    assert!(value["version"].as_u64().unwrap() >= 2);
}

#[test]
fn test_ghost_pruned_from_both_collections() {
    let catalog = Catalog::builtin().unwrap();
    let mut record = populated_record();
    record.unlocked.insert(1, "ghost".to_string());
    record.levels.insert("ghost".to_string(), 6);

    reconcile(&mut record, &catalog);
    assert!(!record.unlocked.iter().any(|id| id == "ghost"));
    assert!(!record.levels.contains_key("ghost"));
    assert_eq!(record.unlocked, vec!["grave_warden", "ember_knight", "ash_duelist"]);
}

#[test]
fn test_reconcile_is_idempotent() {
    let catalog = Catalog::builtin().unwrap();
    let mut record = populated_record();
    record.unlocked.push("ghost".to_string());
    record.levels.insert("phantom".to_string(), 2);

    reconcile(&mut record, &catalog);
    let once = record.clone();
    let report = reconcile(&mut record, &catalog);
    assert!(report.is_clean());
    assert_eq!(record, once);
}

#[test]
fn test_unknown_fields_ignored() {
    let mut store = MemoryStore::new();
    store.insert_raw(
        SAVE_KEY,
        r#"{"version": 2, "unlockedHeroes": ["ember_knight"], "heroLevels": {"ember_knight": 2}, "demonSouls": 0, "savedAt": 1700000000, "settings": {"volume": 3}}"#,
    );
    let saves = SaveStore::new(store);
    let record = saves.load();
    assert_eq!(record.level_of("ember_knight"), Some(2));
}
