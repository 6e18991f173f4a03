pub mod config;
pub mod data;
pub mod repository;
pub mod storage;
pub mod types;

pub use config::{Config, POSTS_KEY, THEME_KEY};
pub use repository::Repository;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

#[derive(Clone, Debug)]
pub struct Environment {
    pub config: Config,
    pub repository: Repository,
}

impl Environment {
    pub fn new(config: Config) -> Self {
        let repository = Repository::from_config(&config);
        Self { config, repository }
    }

    /// Same keys as `config`, but backed by `store`
    pub fn with_store(config: Config, store: impl KeyValueStore + Send + Sync + 'static) -> Self {
        let repository = Repository::new(store, &config);
        Self { config, repository }
    }
}
