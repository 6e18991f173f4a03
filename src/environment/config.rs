use std::path::PathBuf;

use serde::{Deserialize, Serialize};

pub const POSTS_KEY: &str = "sociogram_posts";
pub const THEME_KEY: &str = "sociogram-theme";

const DATA_DIR_ENV: &str = "SOCIOGRAM_DATA_DIR";

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Where a `FileStore` keeps its files. `None` if no folder could be
    /// resolved on this platform.
    pub data_dir: Option<PathBuf>,
    #[serde(default = "default_posts_key")]
    pub posts_key: String,
    #[serde(default = "default_theme_key")]
    pub theme_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: data_directory(),
            posts_key: default_posts_key(),
            theme_key: default_theme_key(),
        }
    }
}

impl Config {
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = Some(data_dir.into());
        self
    }
}

fn default_posts_key() -> String {
    POSTS_KEY.to_string()
}

fn default_theme_key() -> String {
    THEME_KEY.to_string()
}

/// `SOCIOGRAM_DATA_DIR` if set, otherwise the platform config folder
fn data_directory() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    use directories_next::ProjectDirs;
    let Some(proj_dirs) = ProjectDirs::from("com", "sociogram", "sociogram") else {
        log::warn!("Couldn't find a folder to save data");
        return None;
    };
    Some(proj_dirs.config_dir().to_path_buf())
}
