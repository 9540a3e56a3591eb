use std::fs;
use std::sync::Arc;

use stories_engine::{
    MemoryPreferenceStore, PersistedPreference, PreferenceStore, RonPreferenceStore,
    PREFS_FILENAME,
};
use tempfile::TempDir;

#[test]
fn memory_store_round_trips_values() {
    let store = MemoryPreferenceStore::new();
    assert_eq!(store.get("search"), None);
    store.set("search", "Rust");
    assert_eq!(store.get("search").as_deref(), Some("Rust"));
}

#[test]
fn ron_store_survives_reopen() {
    let temp = TempDir::new().unwrap();
    {
        let store = RonPreferenceStore::open(temp.path());
        store.set("search", "Redux");
        store.set("theme", "dark");
    }

    let reopened = RonPreferenceStore::open(temp.path());
    assert_eq!(reopened.get("search").as_deref(), Some("Redux"));
    assert_eq!(reopened.get("theme").as_deref(), Some("dark"));
}

#[test]
fn ron_store_ignores_corrupt_file() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join(PREFS_FILENAME), "{ not ron").unwrap();

    let store = RonPreferenceStore::open(temp.path());
    assert_eq!(store.get("search"), None);

    store.set("search", "Go");
    let reopened = RonPreferenceStore::open(temp.path());
    assert_eq!(reopened.get("search").as_deref(), Some("Go"));
}

#[test]
fn ron_store_write_failure_is_swallowed() {
    stories_logging::initialize_for_tests();
    let temp = TempDir::new().unwrap();
    let blocker = temp.path().join("not_a_dir");
    fs::write(&blocker, "x").unwrap();

    let store = RonPreferenceStore::open(&blocker);
    store.set("search", "Rust");
    assert_eq!(store.get("search"), None);
    assert!(!blocker.join(PREFS_FILENAME).exists());
}

#[test]
fn ron_store_retries_value_after_failed_write() {
    stories_logging::initialize_for_tests();
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("state");
    fs::write(&dir, "x").unwrap();

    let store = RonPreferenceStore::open(&dir);
    store.set("search", "Rust");

    fs::remove_file(&dir).unwrap();
    store.set("search", "Rust");
    assert_eq!(store.get("search").as_deref(), Some("Rust"));
    assert!(dir.join(PREFS_FILENAME).exists());

    let reopened = RonPreferenceStore::open(&dir);
    assert_eq!(reopened.get("search").as_deref(), Some("Rust"));
}

#[test]
fn ron_store_failed_write_keeps_previous_value() {
    stories_logging::initialize_for_tests();
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("state");

    let store = RonPreferenceStore::open(&dir);
    store.set("search", "Go");
    fs::remove_dir_all(&dir).unwrap();
    fs::write(&dir, "x").unwrap();

    store.set("search", "Rust");
    assert_eq!(store.get("search").as_deref(), Some("Go"));
}

#[test]
fn persisted_preference_falls_back_to_default() {
    let store: Arc<dyn PreferenceStore> = Arc::new(MemoryPreferenceStore::new());
    let search = PersistedPreference::new(store.clone(), "search");
    assert_eq!(search.load_or("React"), "React");

    search.save("Rust");
    assert_eq!(search.load_or("React"), "Rust");
    assert_eq!(store.get("search").as_deref(), Some("Rust"));

    search.save("");
    assert_eq!(search.load_or("React"), "React");
}
