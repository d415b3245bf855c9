// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! Only presentation preferences are stored; the gallery's contents are
//! rebuilt each session and never persisted.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "PhotoDeck";

pub const DEFAULT_THUMBNAILS_PER_ROW: u32 = 2;
pub const MIN_THUMBNAILS_PER_ROW: u32 = 1;
pub const MAX_THUMBNAILS_PER_ROW: u32 = 8;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub thumbnails_per_row: Option<u32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            thumbnails_per_row: Some(DEFAULT_THUMBNAILS_PER_ROW),
        }
    }
}

/// Ensures persisted column counts stay inside the supported range so a
/// hand-edited config cannot request a degenerate grid.
#[must_use]
pub fn clamp_thumbnails_per_row(value: u32) -> u32 {
    value.clamp(MIN_THUMBNAILS_PER_ROW, MAX_THUMBNAILS_PER_ROW)
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
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

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content).unwrap_or_default())
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
