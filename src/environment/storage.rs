//! String-keyed synchronous storage backends.
//!
//! The [`KeyValueStore`] trait is what the [`Repository`](super::Repository)
//! writes through. It takes `&self` everywhere; backends use interior
//! mutability where they need it.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Could not access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Could not serialize or parse value: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub trait KeyValueStore {
    /// Returns `Ok(None)` if nothing was stored under `key`.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Arc<S> {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

/// Keeps everything in process memory. Cloning shares the same map.
#[derive(Clone, Default, Debug)]
pub struct MemoryStore {
    values: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(format!("Memory Store Error: {e:?}")))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut values = self
            .values
            .lock()
            .map_err(|e| StorageError::Unavailable(format!("Memory Store Error: {e:?}")))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// One `<key>.json` file per key inside a data directory
#[derive(Clone, Debug)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// Creates `directory` if it does not exist yet.
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let directory = directory.into();
        if !directory.exists() {
            std::fs::create_dir_all(&directory).map_err(|source| StorageError::Io {
                path: directory.clone(),
                source,
            })?;
        }
        Ok(Self { directory })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let data_path = self.path(key);
        if !data_path.exists() {
            return Ok(None);
        };
        std::fs::read_to_string(&data_path)
            .map(Some)
            .map_err(|source| StorageError::Io {
                path: data_path,
                source,
            })
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let data_path = self.path(key);
        std::fs::write(&data_path, value).map_err(|source| StorageError::Io {
            path: data_path,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_clones_share_values() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("key", "value").unwrap();
        assert_eq!(other.get("key").unwrap().as_deref(), Some("value"));
        other.set("key", "other").unwrap();
        assert_eq!(store.get("key").unwrap().as_deref(), Some("other"));
        assert_eq!(store.get("missing").unwrap(), None);
    }

    #[test]
    fn file_store_writes_one_file_per_key() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().join("nested")).unwrap();
        assert_eq!(store.get("sociogram_posts").unwrap(), None);

        store.set("sociogram_posts", "[]").unwrap();
        assert!(store.directory().join("sociogram_posts.json").exists());
        assert_eq!(store.get("sociogram_posts").unwrap().as_deref(), Some("[]"));

        store.set("sociogram_posts", "[1]").unwrap();
        assert_eq!(store.get("sociogram_posts").unwrap().as_deref(), Some("[1]"));
        assert_eq!(store.get("sociogram_theme").unwrap(), None);
    }
}
