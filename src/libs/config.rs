//! Application configuration stored as `config.json` in the data directory.
//!
//! The only setting is where the todo database lives. When no configuration
//! file exists the defaults apply and the database is kept next to the
//! config file:
//!
//! - **Windows**: `%LOCALAPPDATA%\tudu\tudu\todos.db`
//! - **macOS**: `~/Library/Application Support/tudu/tudu/todos.db`
//! - **Linux**: `~/.local/share/tudu/tudu/todos.db`
//!
//! ```rust,no_run
//! use tudu::libs::config::Config;
//!
//! let config = Config::read()?;
//! let db_path = config.db_path()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::PathBuf;

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const DB_FILE_NAME: &str = "todos.db";

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    /// Overrides the default database location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub db_path: Option<PathBuf>,
}

impl Config {
    /// Reads the configuration, falling back to defaults when the file is missing.
    pub fn read() -> Result<Config> {
        Self::read_from(&DataStorage::new())
    }

    pub fn read_from(storage: &DataStorage) -> Result<Config> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&DataStorage::new())
    }

    pub fn save_to(&self, storage: &DataStorage) -> Result<()> {
        let config_file_path = storage.get_path(CONFIG_FILE_NAME)?;
        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Database file to open: the configured path or `todos.db` in the data directory.
    pub fn db_path(&self) -> Result<PathBuf> {
        self.db_path_in(&DataStorage::new())
    }

    pub fn db_path_in(&self, storage: &DataStorage) -> Result<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => Ok(storage.get_path(DB_FILE_NAME)?),
        }
    }

    /// Prompts for the database location, starting from the current configuration.
    pub fn init() -> Result<Config> {
        let mut config = Config::read()?;
        let current = config.db_path()?;

        let input: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDbPath.to_string())
            .default(current.display().to_string())
            .interact_text()?;

        let default_path = DataStorage::new().get_path(DB_FILE_NAME)?;
        let chosen = PathBuf::from(input.trim());
        // The default location is stored as None.
        config.db_path = if chosen == default_path { None } else { Some(chosen) };
        Ok(config)
    }
}
