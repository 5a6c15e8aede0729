use crate::error::{MemoPadError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATA_FILE: &str = "memopad.json";

/// Keys accepted by [`MemoPadConfig::get`] and [`MemoPadConfig::set`].
pub const CONFIG_KEYS: &[&str] = &["data-file", "autosave", "log-file"];

/// Configuration for memopad, stored as config.json in the config directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemoPadConfig {
    /// Pad file; relative paths resolve against the working directory
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    /// Save after every change instead of only on exit
    #[serde(default)]
    pub autosave: bool,

    /// Where to write logs; the terminal UI never logs to the screen
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

impl Default for MemoPadConfig {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            autosave: false,
            log_file: None,
        }
    }
}

impl MemoPadConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(MemoPadError::Io)?;
        serde_json::from_str(&content).map_err(|e| {
            MemoPadError::Config(format!("{} is invalid: {}", config_path.display(), e))
        })
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(MemoPadError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(MemoPadError::Serialization)?;
        fs::write(config_path, content).map_err(MemoPadError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "data-file" => Some(self.data_file.display().to_string()),
            "autosave" => Some(self.autosave.to_string()),
            "log-file" => Some(
                self.log_file
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_default(),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "data-file" => {
                if value.trim().is_empty() {
                    return Err("data-file cannot be empty".to_string());
                }
                self.data_file = PathBuf::from(value);
            }
            "autosave" => {
                self.autosave = match value.to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    other => return Err(format!("autosave expects true or false, got {}", other)),
                };
            }
            "log-file" => {
                self.log_file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = MemoPadConfig::default();
        assert_eq!(config.data_file, PathBuf::from("memopad.json"));
        assert!(!config.autosave);
        assert!(config.log_file.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = MemoPadConfig::load(dir.path()).unwrap();
        assert_eq!(config, MemoPadConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let config_dir = dir.path().join("cfg");

        let mut config = MemoPadConfig::default();
        config.set("data-file", "notes/pad.json").unwrap();
        config.set("autosave", "yes").unwrap();
        config.save(&config_dir).unwrap();

        let loaded = MemoPadConfig::load(&config_dir).unwrap();
        assert_eq!(loaded.data_file, PathBuf::from("notes/pad.json"));
        assert!(loaded.autosave);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{ "autosave": true }"#).unwrap();
        let config = MemoPadConfig::load(dir.path()).unwrap();
        assert!(config.autosave);
        assert_eq!(config.data_file, PathBuf::from("memopad.json"));
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "nope").unwrap();
        assert!(matches!(
            MemoPadConfig::load(dir.path()),
            Err(MemoPadError::Config(_))
        ));
    }

    #[test]
    fn test_get_and_set_keys() {
        let mut config = MemoPadConfig::default();
        for key in CONFIG_KEYS {
            assert!(config.get(key).is_some(), "missing getter for {}", key);
        }
        assert_eq!(config.get("bogus"), None);

        config.set("log-file", "/tmp/memopad.log").unwrap();
        assert_eq!(config.get("log-file").unwrap(), "/tmp/memopad.log");
        config.set("log-file", "").unwrap();
        assert!(config.log_file.is_none());

        assert!(config.set("autosave", "maybe").is_err());
        assert!(config.set("data-file", "  ").is_err());
        assert!(config.set("bogus", "1").is_err());
    }
}
