//! Configuration management for examtag.
//!
//! Configuration is layered with figment: built-in defaults, then a TOML
//! config file, then environment variables. CLI flags override the loaded
//! values at dispatch time.

use std::path::PathBuf;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::tagger::{DEFAULT_FIRST_INDEX, DEFAULT_LAST_INDEX};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "config.toml";

/// Configuration directory name.
const CONFIG_DIR_NAME: &str = "examtag";

/// Default directory holding the question files.
const DEFAULT_BASE_DIR: &str = "public";

/// Application configuration.
///
/// Configuration is loaded from (in order of precedence, highest first):
/// 1. Environment variables (prefixed with `EXAMTAG_`)
/// 2. TOML config file at `~/.config/examtag/config.toml`
/// 3. Default values
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Tagger configuration.
    pub tagger: TaggerConfig,
}

/// Tagger-related configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaggerConfig {
    /// Directory containing the `question_{i}.json` files.
    /// Defaults to `public` relative to the working directory.
    pub base_dir: Option<PathBuf>,
    /// First file index to process (inclusive).
    pub first_index: u32,
    /// Last file index to process (inclusive).
    pub last_index: u32,
    /// Stop the run at the first file that fails.
    pub fail_fast: bool,
}

impl Default for TaggerConfig {
    fn default() -> Self {
        Self {
            base_dir: None, // Resolved to the default at runtime
            first_index: DEFAULT_FIRST_INDEX,
            last_index: DEFAULT_LAST_INDEX,
            fail_fast: false,
        }
    }
}

impl Config {
    /// Load configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails, or if
    /// the loaded values do not validate.
    pub fn load() -> Result<Self> {
        Self::load_from(None)
    }

    /// Load configuration with an optional custom config path.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration loading or parsing fails, or if
    /// the loaded values do not validate.
    pub fn load_from(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(Self::default_config_path);

        let figment = Figment::new()
            .merge(Serialized::defaults(Config::default()))
            .merge(Toml::file(&config_file))
            .merge(Env::prefixed("EXAMTAG_").split("__"));

        let config: Config = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Get the default configuration file path.
    #[must_use]
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from(".config"))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration values are invalid.
    pub fn validate(&self) -> Result<()> {
        if self.tagger.first_index == 0 {
            return Err(Error::ConfigValidation {
                message: "first_index must be at least 1".to_string(),
            });
        }

        if self.tagger.first_index > self.tagger.last_index {
            return Err(Error::ConfigValidation {
                message: format!(
                    "first_index ({}) cannot be greater than last_index ({})",
                    self.tagger.first_index, self.tagger.last_index
                ),
            });
        }

        Ok(())
    }

    /// Get the base directory, resolving the default if not set.
    #[must_use]
    pub fn base_dir(&self) -> PathBuf {
        self.tagger
            .base_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR))
    }

    /// Get the configured index range (inclusive).
    #[must_use]
    pub fn indices(&self) -> std::ops::RangeInclusive<u32> {
        self.tagger.first_index..=self.tagger.last_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.tagger.base_dir.is_none());
        assert_eq!(config.tagger.first_index, 1);
        assert_eq!(config.tagger.last_index, 10);
        assert!(!config.tagger.fail_fast);
    }

    #[test]
    fn test_default_base_dir_resolution() {
        let config = Config::default();
        assert_eq!(config.base_dir(), PathBuf::from("public"));
    }

    #[test]
    fn test_explicit_base_dir_wins() {
        let mut config = Config::default();
        config.tagger.base_dir = Some(PathBuf::from("/data/questions"));
        assert_eq!(config.base_dir(), PathBuf::from("/data/questions"));
    }

    #[test]
    fn test_indices_range() {
        let config = Config::default();
        assert_eq!(config.indices(), 1..=10);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_first_index() {
        let mut config = Config::default();
        config.tagger.first_index = 0;

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("first_index"));
    }

    #[test]
    fn test_validate_inverted_range() {
        let mut config = Config::default();
        config.tagger.first_index = 5;
        config.tagger.last_index = 2;

        let result = config.validate();
        assert!(result.is_err());
        let err = result.unwrap_err().to_string();
        assert!(err.contains("cannot be greater"));
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        // A nonexistent config file is fine; figment just skips it.
        let config = Config::load_from(Some(PathBuf::from("/nonexistent/examtag.toml"))).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_load_from_toml_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[tagger]\nbase_dir = \"data\"\nfirst_index = 2\nlast_index = 4\nfail_fast = true\n",
        )
        .unwrap();

        let config = Config::load_from(Some(path)).unwrap();
        assert_eq!(config.tagger.base_dir, Some(PathBuf::from("data")));
        assert_eq!(config.indices(), 2..=4);
        assert!(config.tagger.fail_fast);
    }

    #[test]
    fn test_load_from_rejects_invalid_range() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[tagger]\nfirst_index = 9\nlast_index = 3\n").unwrap();

        let result = Config::load_from(Some(path));
        assert!(result.is_err());
    }

    #[test]
    fn test_default_config_path_ends_with_expected_name() {
        let path = Config::default_config_path();
        assert!(path.ends_with("examtag/config.toml"));
    }
}
