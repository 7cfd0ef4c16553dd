#![forbid(unsafe_code)]

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::store::{KeyValueStore, StorageError};

/// Decodes the stored JSON array for `key`. Absence yields an empty sequence.
/// A decode failure also yields an empty sequence, after clearing the
/// offending entry, so corrupt data self-heals instead of wedging every later
/// read. Store I/O errors still propagate.
pub fn get_collection<T, S>(store: &mut S, key: &str) -> Result<Vec<T>, StorageError>
where
    T: DeserializeOwned,
    S: KeyValueStore,
{
    let Some(raw) = store.read_raw(key)? else {
        return Ok(Vec::new());
    };
    match serde_json::from_str::<Vec<T>>(&raw) {
        Ok(items) => Ok(items),
        Err(_) => {
            store.remove_raw(key)?;
            Ok(Vec::new())
        }
    }
}

/// Serializes and stores the full sequence, always overwriting. Every
/// mutation in this crate is read-modify-write of a whole collection.
pub fn set_collection<T, S>(store: &mut S, key: &str, items: &[T]) -> Result<(), StorageError>
where
    T: Serialize,
    S: KeyValueStore,
{
    let raw = serde_json::to_string(items)?;
    store.write_raw(key, &raw)
}
