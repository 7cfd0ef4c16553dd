#![forbid(unsafe_code)]

use jobdeck_storage::store::{KeyValueStore, StorageError, DARK_MODE_KEY};

/// UI preference stored as the literal strings "true"/"false". Absence or any
/// unexpected value reads as disabled.
pub fn dark_mode_enabled<S: KeyValueStore>(store: &S) -> Result<bool, StorageError> {
    Ok(store.read_raw(DARK_MODE_KEY)?.as_deref() == Some("true"))
}

/// Flips and persists the preference, returning the new state.
pub fn toggle_dark_mode<S: KeyValueStore>(store: &mut S) -> Result<bool, StorageError> {
    let enabled = !dark_mode_enabled(store)?;
    store.write_raw(DARK_MODE_KEY, if enabled { "true" } else { "false" })?;
    Ok(enabled)
}
