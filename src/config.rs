use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::EstateResult;
use crate::storage::{read_json, save_json};

pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_USER_PREFS_PATH: &str = "preferences.json";

/// Application settings read once at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// An `EnvFilter` directive such as `info` or `estatebook=debug`.
    pub log_level: String,
    pub user_prefs_file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            user_prefs_file_path: PathBuf::from(DEFAULT_USER_PREFS_PATH),
        }
    }
}

impl Config {
    /// Reads the config at `path`, writing the defaults out if it does not exist yet.
    /// A file that cannot be parsed falls back to the defaults.
    pub fn load_or_init(path: &Path) -> EstateResult<Self> {
        match read_json::<Config>(path) {
            Ok(Some(config)) => Ok(config),
            Ok(None) => {
                let config = Config::default();
                save_json(path, &config)?;
                Ok(config)
            }
            Err(e) => {
                warn!(file = %path.display(), error = %e, "config file unreadable, using defaults");
                Ok(Config::default())
            }
        }
    }
}
