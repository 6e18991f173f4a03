use std::str::FromStr;
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{from_str, to_string};

use super::config::Config;
use super::storage::{FileStore, KeyValueStore, MemoryStore, StorageError};
use super::types::{PostCollection, Theme};

/// Best-effort persistence of the feed and the theme preference.
///
/// Every failure is logged as a warning and otherwise ignored: a failed
/// save never reaches the caller, a failed load is treated as "nothing
/// saved yet".
#[derive(Clone)]
pub struct Repository {
    store: Arc<dyn KeyValueStore + Send + Sync>,
    posts_key: String,
    theme_key: String,
}

impl std::fmt::Debug for Repository {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Repository")
            .field("posts_key", &self.posts_key)
            .field("theme_key", &self.theme_key)
            .finish()
    }
}

impl Repository {
    pub fn new(store: impl KeyValueStore + Send + Sync + 'static, config: &Config) -> Self {
        Self {
            store: Arc::new(store),
            posts_key: config.posts_key.clone(),
            theme_key: config.theme_key.clone(),
        }
    }

    /// A repository over a `FileStore` in the configured data directory.
    /// Falls back to memory (nothing survives a restart) if no directory
    /// is usable.
    pub fn from_config(config: &Config) -> Self {
        let Some(dir) = config.data_dir.as_ref() else {
            log::warn!("No data directory, keeping feed in memory only");
            return Self::new(MemoryStore::new(), config);
        };
        match FileStore::new(dir) {
            Ok(store) => Self::new(store, config),
            Err(e) => {
                log::warn!("Could not open data directory, keeping feed in memory only: {e}");
                Self::new(MemoryStore::new(), config)
            }
        }
    }

    pub fn save_posts(&self, posts: &PostCollection) {
        if let Err(e) = write(&*self.store, &self.posts_key, posts) {
            log::warn!("Failed to save posts: {e}");
        }
    }

    /// `None` if nothing was saved or the saved data can't be parsed
    pub fn load_posts(&self) -> Option<PostCollection> {
        match read(&*self.store, &self.posts_key) {
            Ok(posts) => posts,
            Err(e) => {
                log::warn!("Failed to load posts: {e}");
                None
            }
        }
    }

    pub fn save_theme(&self, theme: Theme) {
        let name: &'static str = theme.into();
        if let Err(e) = self.store.set(&self.theme_key, name) {
            log::warn!("Failed to save theme: {e}");
        }
    }

    pub fn load_theme(&self) -> Option<Theme> {
        let stored = match self.store.get(&self.theme_key) {
            Ok(stored) => stored?,
            Err(e) => {
                log::warn!("Failed to load theme: {e}");
                return None;
            }
        };
        if stored.is_empty() {
            return None;
        }
        // anything that isn't exactly "dark" counts as light
        Some(Theme::from_str(&stored).unwrap_or(Theme::Light))
    }
}

fn read<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    let Some(data) = store.get(key)? else {
        return Ok(None);
    };
    let obj: T = from_str(&data)?;
    Ok(Some(obj))
}

fn write<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> Result<(), StorageError> {
    let data = to_string(value)?;
    store.set(key, &data)
}
