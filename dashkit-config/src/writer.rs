//! Configuration file writing and serialization

use crate::types::Config;
use crate::Result;
use std::path::{Path, PathBuf};

/// Save configuration to a file, creating parent directories
pub fn save_to_file(config: &Config, path: &Path) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).map_err(crate::ConfigError::TomlSerialize)?;
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, toml_string)?;
    Ok(())
}

/// Save configuration to the default config file, returning its path
pub fn save_default(config: &Config) -> Result<PathBuf> {
    let config_path = crate::config::config_file()?;
    save_to_file(config, &config_path)?;
    Ok(config_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{defaults, parser};

    #[test]
    fn test_serialization() {
        let config = defaults::default_config();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[options]"));
        assert!(toml_str.contains("[date_picker]"));
        assert!(toml_str.contains("[[shell.resources]]"));
        assert!(toml_str.contains("[bindings"));
    }

    #[test]
    fn test_saved_file_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = defaults::default_config();
        config.date_picker.show_time = true;
        config.date_picker.min_date = chrono::NaiveDate::from_ymd_opt(2020, 2, 29);

        save_to_file(&config, &path).unwrap();
        let loaded = parser::load_from_file(&path).unwrap();
        assert!(loaded.date_picker.show_time);
        assert_eq!(loaded.date_picker.min_date, config.date_picker.min_date);
        assert_eq!(loaded.shell.resources, config.shell.resources);
    }
}
