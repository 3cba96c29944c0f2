//! Application configuration with persistence.
//!
//! [`AppConfig`] is what gets stored; [`ConfigStore`] knows where. The file
//! lives at:
//! - Linux: `~/.config/pocketbook/config.json`
//! - macOS: `~/Library/Application Support/pocketbook/config.json`
//! - Windows: `%APPDATA%/pocketbook/config.json`
//!
//! # Example
//!
//! ```ignore
//! use crate::state::{AppConfig, ConfigStore};
//!
//! let store = ConfigStore::default_location()?;
//! let mut config = store.load();
//! config.theme = Theme::Dark;
//! store.save(&config)?;
//! ```

use color_eyre::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::paths::AppPaths;
use crate::constants::DEFAULT_API_URL;
use crate::theme::Theme;

// ============================================================================
// AppConfig
// ============================================================================

/// Persisted user settings.
///
/// Missing fields fall back to their defaults, so older or hand-edited files
/// keep loading.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppConfig {
    /// Last chosen color theme.
    #[serde(default)]
    pub theme: Theme,
    /// Overrides the built-in web-script endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
}

impl AppConfig {
    /// The endpoint to talk to: the configured URL, else the built-in one.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.api_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL)
    }
}

// ============================================================================
// ConfigStore
// ============================================================================

/// Reads and writes [`AppConfig`] at a fixed path.
///
/// A store without a path loads defaults and refuses to save.
#[derive(Debug, Clone, Default)]
pub struct ConfigStore {
    path: Option<PathBuf>,
}

impl ConfigStore {
    /// Store at the platform config location.
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined or created.
    pub fn default_location() -> Result<Self> {
        Ok(Self::at(AppPaths::new().config_file()?))
    }

    /// Store at an explicit path.
    #[must_use]
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store that never touches the disk.
    #[must_use]
    pub fn ephemeral() -> Self {
        Self { path: None }
    }

    /// Loads the configuration, falling back to defaults on any failure.
    #[must_use]
    pub fn load(&self) -> AppConfig {
        match self.try_load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Config load failed, using defaults: {err}");
                AppConfig::default()
            }
        }
    }

    /// Loads the configuration. A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn try_load(&self) -> Result<AppConfig> {
        let Some(path) = &self.path else {
            return Ok(AppConfig::default());
        };
        if !path.exists() {
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Writes the configuration, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the store has no path or the file cannot be written.
    pub fn save(&self, config: &AppConfig) -> Result<()> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| color_eyre::eyre::eyre!("No config location available"))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(config)?;
        fs::write(path, content)?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[fixture]
    fn temp_dir() -> tempfile::TempDir {
        tempfile::tempdir().expect("temp dir should be created")
    }

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.endpoint(), DEFAULT_API_URL);
    }

    #[rstest]
    #[case::unset(None, DEFAULT_API_URL)]
    #[case::blank(Some("   "), DEFAULT_API_URL)]
    #[case::custom(Some(" http://localhost:8080/exec "), "http://localhost:8080/exec")]
    fn test_endpoint_resolution(#[case] api_url: Option<&str>, #[case] expected: &str) {
        let config = AppConfig {
            api_url: api_url.map(String::from),
            ..Default::default()
        };
        assert_eq!(config.endpoint(), expected);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig = serde_json::from_str(r#"{"theme":"dark"}"#).unwrap();
        assert_eq!(config.theme, Theme::Dark);
        assert!(config.api_url.is_none());

        let empty: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, AppConfig::default());
    }

    #[rstest]
    fn test_save_then_load(temp_dir: tempfile::TempDir) {
        let store = ConfigStore::at(temp_dir.path().join("nested").join("config.json"));
        let config = AppConfig {
            theme: Theme::Dark,
            api_url: Some("http://127.0.0.1:9000/exec".to_string()),
        };

        store.save(&config).unwrap();

        assert_eq!(store.try_load().unwrap(), config);
    }

    #[rstest]
    fn test_missing_file_is_default(temp_dir: tempfile::TempDir) {
        let store = ConfigStore::at(temp_dir.path().join("config.json"));
        assert_eq!(store.try_load().unwrap(), AppConfig::default());
    }

    #[rstest]
    fn test_corrupt_file_falls_back(temp_dir: tempfile::TempDir) {
        let path = temp_dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();
        let store = ConfigStore::at(&path);

        assert!(store.try_load().is_err());
        assert_eq!(store.load(), AppConfig::default());
    }

    #[test]
    fn test_ephemeral_store_refuses_to_save() {
        let store = ConfigStore::ephemeral();
        assert!(store.save(&AppConfig::default()).is_err());
        assert_eq!(store.load(), AppConfig::default());
    }
}
