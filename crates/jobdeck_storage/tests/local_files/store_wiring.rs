#![forbid(unsafe_code)]

use std::fs;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use jobdeck_storage::store::{KeyValueStore, LocalStore, StorageError};

fn temp_dir(name: &str) -> PathBuf {
    let suffix = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    std::env::temp_dir().join(format!("jobdeck-store-test-{name}-{suffix}"))
}

#[test]
fn dbw_local_roundtrip_one_file_per_key() {
    let base = temp_dir("roundtrip");
    let mut store = LocalStore::for_dir(base.clone());

    assert_eq!(store.read_raw("jobs").unwrap(), None);
    store.write_raw("jobs", "[]").unwrap();
    store.write_raw("savedJobs", "[1,2]").unwrap();

    assert_eq!(store.read_raw("jobs").unwrap().as_deref(), Some("[]"));
    assert_eq!(fs::read_to_string(base.join("savedJobs")).unwrap(), "[1,2]");

    store.remove_raw("jobs").unwrap();
    assert_eq!(store.read_raw("jobs").unwrap(), None);
    // removing an absent key is not an error
    store.remove_raw("jobs").unwrap();

    fs::remove_dir_all(base).unwrap();
}

#[test]
fn dbw_local_overwrite_replaces_whole_value() {
    let base = temp_dir("overwrite");
    let mut store = LocalStore::for_dir(base.clone());
    store.write_raw("applications", "[1]").unwrap();
    store.write_raw("applications", "[1,2,3]").unwrap();
    assert_eq!(
        store.read_raw("applications").unwrap().as_deref(),
        Some("[1,2,3]")
    );
    // no stray temp file left behind after the rename
    assert!(!base.join("applications.tmp").exists());
    fs::remove_dir_all(base).unwrap();
}

#[test]
fn dbw_local_rejects_path_like_keys() {
    let base = temp_dir("badkey");
    let mut store = LocalStore::for_dir(base.clone());
    let err = store.write_raw("../escape", "x").unwrap_err();
    assert!(matches!(err, StorageError::InvalidKey(_)));
    let err = store.read_raw("a/b").unwrap_err();
    assert!(matches!(err, StorageError::InvalidKey(_)));
    if base.exists() {
        fs::remove_dir_all(base).unwrap();
    }
}
