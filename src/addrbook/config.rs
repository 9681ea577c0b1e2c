use crate::error::{AddrError, Result};
use crate::model::UPCOMING_WINDOW_DAYS;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_FILE_NAME: &str = "addressbook.json";

/// Configuration for addrbook, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct AddrConfig {
    /// File name of the address book, relative to the data directory
    #[serde(default = "default_file_name")]
    pub file_name: String,

    /// How many days ahead `birthdays` looks
    #[serde(default = "default_window")]
    pub birthday_window_days: i64,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_window() -> i64 {
    UPCOMING_WINDOW_DAYS
}

impl Default for AddrConfig {
    fn default() -> Self {
        Self {
            file_name: default_file_name(),
            birthday_window_days: default_window(),
        }
    }
}

impl AddrConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(AddrError::Io)?;
        let config: AddrConfig =
            serde_json::from_str(&content).map_err(AddrError::Serialization)?;
        if config.birthday_window_days < 0 {
            return Err(AddrError::Api(format!(
                "birthday_window_days must not be negative (got {})",
                config.birthday_window_days
            )));
        }
        Ok(config)
    }

    /// Full path of the address book file inside `data_dir`
    pub fn book_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.file_name)
    }
}
