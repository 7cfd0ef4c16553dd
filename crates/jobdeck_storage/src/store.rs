#![forbid(unsafe_code)]

use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Store keys shared with any pre-existing persisted data. The on-disk layout
/// must stay bit-compatible: same keys, same JSON shapes.
pub const JOBS_KEY: &str = "jobs";
pub const APPLICATIONS_KEY: &str = "applications";
pub const SAVED_JOBS_KEY: &str = "savedJobs";
pub const APPLY_JOB_ID_KEY: &str = "applyJobId";
pub const DARK_MODE_KEY: &str = "darkMode";

#[derive(Debug)]
pub enum StorageError {
    Io(std::io::Error),
    Json(serde_json::Error),
    InvalidKey(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "io error: {err}"),
            Self::Json(err) => write!(f, "json error: {err}"),
            Self::InvalidKey(key) => write!(f, "invalid store key: {key}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<std::io::Error> for StorageError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Synchronous string-keyed key-value store. Injected into every consumer so
/// tests can substitute [`MemoryStore`] for the on-disk backend. Writes
/// replace the whole value for a key; there are no partial updates and no
/// transactions, which is sound only under the single-process, synchronous
/// usage this crate assumes.
pub trait KeyValueStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn write_raw(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_raw(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-memory backend for tests and ephemeral sessions.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write_raw(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_raw(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// On-disk backend: one file per key under the store directory, file content
/// is exactly the stored value. Writes go through a temp file and rename so a
/// crash mid-write never leaves a half-written entry.
#[derive(Debug, Clone)]
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    pub fn default_local() -> Self {
        let root = env::var("JOBDECK_STORE_DIR")
            .ok()
            .map(PathBuf::from)
            .unwrap_or_else(default_store_dir);
        Self::for_dir(root)
    }

    pub fn for_dir(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn entry_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        // Keys double as file names; anything path-like would escape the dir.
        if key.is_empty()
            || key
                .chars()
                .any(|c| !c.is_ascii_alphanumeric() && c != '_' && c != '-')
        {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root.join(key))
    }
}

impl KeyValueStore for LocalStore {
    fn read_raw(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.entry_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write_raw(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        fs::create_dir_all(&self.root)?;
        atomic_write(&path, value.as_bytes())
    }

    fn remove_raw(&mut self, key: &str) -> Result<(), StorageError> {
        let path = self.entry_path(key)?;
        if path.exists() {
            fs::remove_file(path)?;
        }
        Ok(())
    }
}

fn default_store_dir() -> PathBuf {
    if let Ok(xdg_data_home) = env::var("XDG_DATA_HOME") {
        return PathBuf::from(xdg_data_home).join("jobdeck");
    }
    if let Ok(home) = env::var("HOME") {
        return PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("jobdeck");
    }
    PathBuf::from(".jobdeck")
}

fn atomic_write(path: &Path, data: &[u8]) -> Result<(), StorageError> {
    let mut tmp = path.to_path_buf();
    tmp.set_extension("tmp");
    fs::write(&tmp, data)?;
    fs::rename(tmp, path)?;
    Ok(())
}
