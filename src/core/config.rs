//! Application configuration management
//!
//! Handles loading and saving non-secret preferences:
//! - GitHub username, recorded on successful authentication
//! - API base URL (overridable for GitHub Enterprise installations)
//!
//! The access token deliberately has no field here; credentials are
//! resolved fresh on every run and never touch the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::{Deserialize, Serialize};

use crate::error::{GitaiError, Result};

/// Default GitHub REST API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.github.com";

/// Config file name, placed directly in the user's home directory
const CONFIG_FILE_NAME: &str = ".gitai_config.json";

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// GitHub username learned during `gitai auth`
    #[serde(default)]
    pub username: Option<String>,

    /// Base URL for the GitHub REST API
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: None,
            api_base_url: default_api_base_url(),
        }
    }
}

impl Config {
    /// Load configuration from the default path, or defaults if not present
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::path()?)
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path).map_err(|e| {
                GitaiError::Config(format!("Cannot read {}: {}", path.display(), e))
            })?;
            let config: Config = serde_json::from_str(&contents).map_err(|e| {
                GitaiError::Config(format!("Invalid config file {}: {}", path.display(), e))
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::path()?)
    }

    /// Save configuration to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(path, contents).map_err(|e| {
            GitaiError::Config(format!("Cannot write {}: {}", path.display(), e))
        })?;
        Ok(())
    }

    /// Get the configuration file path (`~/.gitai_config.json`)
    pub fn path() -> Result<PathBuf> {
        let base_dirs = BaseDirs::new()
            .ok_or_else(|| GitaiError::Config("Could not determine home directory".into()))?;

        Ok(base_dirs.home_dir().join(CONFIG_FILE_NAME))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.username.is_none());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".gitai_config.json");

        let config = Config {
            username: Some("octocat".to_string()),
            api_base_url: "https://github.example.com/api/v3".to_string(),
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.username.as_deref(), Some("octocat"));
        assert_eq!(loaded.api_base_url, "https://github.example.com/api/v3");
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempdir().unwrap();
        let loaded = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert!(loaded.username.is_none());
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(".gitai_config.json");
        fs::write(&path, r#"{"username": "octocat"}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.username.as_deref(), Some("octocat"));
        assert_eq!(loaded.api_base_url, DEFAULT_API_BASE_URL);
    }

    #[test]
    fn test_config_has_no_secret_fields() {
        let config = Config {
            username: Some("octocat".to_string()),
            ..Config::default()
        };
        let value = serde_json::to_value(&config).unwrap();
        let object = value.as_object().unwrap();

        assert_eq!(object.len(), 2);
        assert!(object.contains_key("username"));
        assert!(object.contains_key("api_base_url"));
    }
}
