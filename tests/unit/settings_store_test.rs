use std::fs;
use std::path::Path;

use serde_json::json;

use tabswitch::services::settings_store::{
    SettingsStore, SettingsStoreTrait, KEY_SORT_METHOD, KEY_TRACK_MRV,
};
use tabswitch::types::settings::{SettingsChange, SortMethod, SwitcherSettings};

fn temp_settings_path() -> String {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.json").to_string_lossy().to_string();
    // Leak the tempdir so it doesn't get cleaned up during the test
    std::mem::forget(dir);
    path
}

#[test]
fn test_load_defaults_when_no_file() {
    let mut store = SettingsStore::new(Some(temp_settings_path()));
    let settings = store.load().unwrap();
    assert_eq!(settings, SwitcherSettings::default());
}

#[test]
fn test_save_and_load_roundtrip() {
    let path = temp_settings_path();
    let mut store = SettingsStore::new(Some(path.clone()));
    store.load().unwrap();
    store.set_sort_method(SortMethod::Alphabetical).unwrap();

    let mut store2 = SettingsStore::new(Some(path));
    let loaded = store2.load().unwrap();
    assert_eq!(loaded.sort_method, SortMethod::Alphabetical);
    assert!(loaded.track_mrv);
}

#[test]
fn test_load_malformed_json_is_an_error() {
    let path = temp_settings_path();
    if let Some(parent) = Path::new(&path).parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "{ invalid json }").unwrap();

    let mut store = SettingsStore::new(Some(path));
    assert!(store.load().is_err());
}

#[test]
fn test_persisted_file_uses_flat_keys() {
    let path = temp_settings_path();
    let mut store = SettingsStore::new(Some(path.clone()));
    store.load().unwrap();
    store.set_sort_method(SortMethod::FuzzySearchScore).unwrap();

    let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(raw["track-mrv"], json!(true));
    assert_eq!(raw["sort-method"], json!("FuzzySearchScore"));
}

#[test]
fn test_subscribers_receive_changes() {
    let mut store = SettingsStore::new(Some(temp_settings_path()));
    store.load().unwrap();
    let rx = store.subscribe();

    store.set_sort_method(SortMethod::Alphabetical).unwrap();
    assert_eq!(
        rx.try_recv().unwrap(),
        SettingsChange::SortMethod {
            old: SortMethod::MostRecentlyVisited,
            new: SortMethod::Alphabetical,
        }
    );
}

#[test]
fn test_unchanged_value_does_not_notify() {
    let mut store = SettingsStore::new(Some(temp_settings_path()));
    store.load().unwrap();
    let rx = store.subscribe();

    store.set_tracking_enabled(true).unwrap();
    assert!(rx.try_recv().is_err());
}

#[test]
fn test_disabling_tracking_flips_mrv_sort_to_alphabetical() {
    let mut store = SettingsStore::new(Some(temp_settings_path()));
    store.load().unwrap();
    let rx = store.subscribe();

    store.set_tracking_enabled(false).unwrap();
    assert!(!store.settings().track_mrv);
    assert_eq!(store.settings().sort_method, SortMethod::Alphabetical);

    let changes: Vec<SettingsChange> = rx.try_iter().collect();
    assert_eq!(changes.len(), 2);
    assert!(changes.contains(&SettingsChange::TrackingEnabled {
        old: true,
        new: false
    }));
}

#[test]
fn test_disabling_tracking_keeps_non_mrv_sort() {
    let mut store = SettingsStore::new(Some(temp_settings_path()));
    store.load().unwrap();
    store.set_sort_method(SortMethod::FuzzySearchScore).unwrap();

    store.set_tracking_enabled(false).unwrap();
    assert_eq!(store.settings().sort_method, SortMethod::FuzzySearchScore);
}

#[test]
fn test_apply_external_updates_memory_and_notifies() {
    let mut store = SettingsStore::new(Some(temp_settings_path()));
    store.load().unwrap();
    let rx = store.subscribe();

    let change = store
        .apply_external(KEY_TRACK_MRV, Some(&json!(false)))
        .unwrap();
    assert_eq!(
        change,
        Some(SettingsChange::TrackingEnabled {
            old: true,
            new: false
        })
    );
    assert!(!store.settings().track_mrv);
    assert!(rx.try_recv().is_ok());
}

#[test]
fn test_apply_external_removed_key_restores_default() {
    let mut store = SettingsStore::new(Some(temp_settings_path()));
    store.load().unwrap();
    store.set_sort_method(SortMethod::Alphabetical).unwrap();

    let change = store.apply_external(KEY_SORT_METHOD, None).unwrap();
    assert!(change.is_some());
    assert_eq!(
        store.settings().sort_method,
        SortMethod::MostRecentlyVisited
    );
}

#[test]
fn test_apply_external_rejects_unknown_key() {
    let mut store = SettingsStore::new(Some(temp_settings_path()));
    store.load().unwrap();
    assert!(store.apply_external("theme", Some(&json!("dark"))).is_err());
}

#[test]
fn test_apply_external_rejects_wrong_type() {
    let mut store = SettingsStore::new(Some(temp_settings_path()));
    store.load().unwrap();
    assert!(store
        .apply_external(KEY_TRACK_MRV, Some(&json!("yes")))
        .is_err());
    assert!(store
        .apply_external(KEY_SORT_METHOD, Some(&json!("MostRecentlyUsed")))
        .is_err());
}

#[test]
fn test_config_path_override() {
    let path = "/tmp/tabswitch_test_settings.json".to_string();
    let store = SettingsStore::new(Some(path.clone()));
    assert_eq!(store.config_path(), path);
}

#[test]
fn test_default_config_path_uses_platform_dir() {
    let store = SettingsStore::new(None);
    let path = store.config_path();
    assert!(path.contains("settings.json"));
    assert!(path.to_lowercase().contains("tabswitch"));
}
