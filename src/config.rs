//! Configuration handling
//!
//! Reads the optional `phonetic-lookup.toml` file. A missing file means
//! defaults.
//!
//! ## Environment Variables
//!
//! The following environment variables override config file settings:
//!
//! - `PHONETIC_LOOKUP_DICTIONARY` - Path to the dictionary document
//! - `PHONETIC_LOOKUP_DEBUG` - Emit pipeline internals (`true`/`1`)
//! - `PHONETIC_LOOKUP_FUZZY_LIMIT` - Distinct codes kept by fuzzy matching
//!
//! These can be set in a `.env` file next to the config file.

use crate::matcher::DEFAULT_FUZZY_LIMIT;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "phonetic-lookup.toml";

/// Environment variable names
pub const ENV_DICTIONARY: &str = "PHONETIC_LOOKUP_DICTIONARY";
pub const ENV_DEBUG: &str = "PHONETIC_LOOKUP_DEBUG";
pub const ENV_FUZZY_LIMIT: &str = "PHONETIC_LOOKUP_FUZZY_LIMIT";

pub const DEFAULT_DICTIONARY_PATH: &str = "data/dictionaries/resonite-node-database.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Dictionary document to load
    #[serde(default = "default_dictionary_path")]
    pub dictionary_path: PathBuf,
    /// Emit the code, candidates and selection of every query at INFO
    #[serde(default)]
    pub debug: bool,
    /// Distinct codes kept by fuzzy matching
    #[serde(default = "default_fuzzy_limit")]
    pub fuzzy_limit: usize,
}

fn default_dictionary_path() -> PathBuf {
    PathBuf::from(DEFAULT_DICTIONARY_PATH)
}

fn default_fuzzy_limit() -> usize {
    DEFAULT_FUZZY_LIMIT
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dictionary_path: default_dictionary_path(),
            debug: false,
            fuzzy_limit: default_fuzzy_limit(),
        }
    }
}

impl Config {
    /// Load `phonetic-lookup.toml` from a directory.
    ///
    /// This also loads any `.env` file in the directory and applies
    /// environment variable overrides.
    pub fn load(dir: &Path) -> anyhow::Result<Self> {
        let env_path = dir.join(".env");
        if env_path.exists() {
            let _ = dotenvy::from_path(&env_path);
        }

        let mut config = Self::from_file(&dir.join(CONFIG_FILE_NAME))?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Read a config file; a missing file yields the defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| anyhow::anyhow!("Invalid config file {}: {}", path.display(), e))?;
        Ok(config)
    }

    /// Apply environment variable overrides to the configuration
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = std::env::var(ENV_DICTIONARY) {
            if !path.is_empty() {
                self.dictionary_path = PathBuf::from(path);
            }
        }

        if let Ok(debug) = std::env::var(ENV_DEBUG) {
            if let Some(enabled) = parse_flag(&debug) {
                self.debug = enabled;
            }
        }

        if let Ok(limit) = std::env::var(ENV_FUZZY_LIMIT) {
            if let Ok(limit) = limit.parse::<usize>() {
                self.fuzzy_limit = limit;
            }
        }
    }

    /// Save configuration to a directory
    pub fn save(&self, dir: &Path) -> anyhow::Result<()> {
        let config_path = dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&config_path, content)?;
        Ok(())
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.fuzzy_limit, 5);
        assert_eq!(config.dictionary_path, PathBuf::from(DEFAULT_DICTIONARY_PATH));
    }

    #[test]
    fn test_partial_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "debug = true\n").unwrap();

        let config = Config::from_file(&path).unwrap();
        assert!(config.debug);
        assert_eq!(config.fuzzy_limit, DEFAULT_FUZZY_LIMIT);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            dictionary_path: PathBuf::from("nodes.json"),
            debug: true,
            fuzzy_limit: 3,
        };
        config.save(dir.path()).unwrap();

        let loaded = Config::from_file(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "fuzzy_limit = \"many\"\n").unwrap();
        assert!(Config::from_file(&path).is_err());
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
