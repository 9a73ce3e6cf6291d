//! Configuration loading and management

use crate::defaults;
use crate::keybind::KeybindMap;
use crate::types::Config;
use crate::{parser, ConfigError, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Get the default dashkit config directory
pub fn config_dir() -> Result<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(".dashkit"))
        .ok_or(ConfigError::NoHomeDir)
}

/// Get the default dashkit config file path
pub fn config_file() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load configuration from file, or return defaults if not found
pub fn load_or_default() -> Result<Config> {
    load_path_or_default(&config_file()?)
}

/// Load configuration from `path`, falling back to defaults when the file is
/// missing or unparseable
pub fn load_path_or_default(path: &Path) -> Result<Config> {
    let mut config = match std::fs::read_to_string(path) {
        Ok(content) => match parser::parse_toml(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to parse config file {:?}: {}", path, e);
                tracing::warn!("Using default configuration");
                defaults::default_config()
            }
        },
        Err(_) => {
            tracing::debug!("No config file at {:?}, using defaults", path);
            defaults::default_config()
        }
    };
    config.merge_with_defaults();
    Ok(config)
}

/// Load configuration from a specific file
pub fn load_from_file(path: &Path) -> Result<Config> {
    let mut config = parser::load_from_file(path)?;
    config.merge_with_defaults();
    Ok(config)
}

impl Config {
    /// Load or return defaults
    pub fn load_or_default() -> Result<Self> {
        load_or_default()
    }

    /// Load from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        load_from_file(path)
    }

    /// Build a KeybindMap from this config
    pub fn to_keybind_map(&self) -> Result<KeybindMap> {
        KeybindMap::from_bindings(&self.bindings)
    }

    /// Apply default bindings for keys the user did not bind
    pub fn merge_with_defaults(&mut self) {
        let default_bindings = defaults::default_bindings();

        merge_binding_map(&mut self.bindings.global, &default_bindings.global);
        merge_binding_map(&mut self.bindings.sidebar, &default_bindings.sidebar);
        merge_binding_map(&mut self.bindings.form, &default_bindings.form);
        merge_binding_map(&mut self.bindings.date_input, &default_bindings.date_input);
        merge_binding_map(&mut self.bindings.calendar, &default_bindings.calendar);
    }
}

/// Merge default bindings into user bindings
fn merge_binding_map(user_map: &mut HashMap<String, String>, defaults: &HashMap<String, String>) {
    for (k, v) in defaults {
        user_map.entry(k.clone()).or_insert(v.clone());
    }
}
