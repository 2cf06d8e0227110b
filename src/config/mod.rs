// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use image_manager::config::{self, FolderSortKey};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Point the manager at another image root and order folders by mtime
//! config.root_dir = Some(PathBuf::from("/srv/renders"));
//! config.folder_sort = Some(FolderSortKey::Modified);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub use defaults::{DEFAULT_FOLDER_SORT, DEFAULT_ROOT_SUBPATH, IMAGE_EXTENSIONS};

/// Key used to order folders, newest first.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum FolderSortKey {
    /// Lexicographic folder name. Date-named folders sort chronologically.
    #[default]
    Name,
    /// Folder modification time.
    Modified,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Directory holding the date-named image folders.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder_sort: Option<FolderSortKey>,
}

impl Config {
    /// Returns the configured root, or the default root under the home directory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if no root is configured and the home
    /// directory cannot be determined.
    pub fn resolved_root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.root_dir {
            return Ok(root.clone());
        }
        dirs::home_dir()
            .map(|home| home.join(DEFAULT_ROOT_SUBPATH))
            .ok_or_else(|| Error::Config("Could not determine home directory".into()))
    }

    #[must_use]
    pub fn folder_sort_key(&self) -> FolderSortKey {
        self.folder_sort.unwrap_or(DEFAULT_FOLDER_SORT)
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(defaults::APP_NAME);
        path.push(defaults::CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Reads a config file. Unparseable content falls back to the defaults.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "ignoring invalid settings file");
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
