// SPDX-License-Identifier: MPL-2.0
//! This module handles the gallery's configuration, including loading and saving
//! settings to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! The configuration is organized into logical sections:
//! - `[catalog]` - Remote catalog address, identifier universe and request limits
//! - `[gallery]` - Batch sizing
//!
//! Every key is optional; missing keys fall back to [`defaults`]. Values read
//! from disk are clamped into their bounds when runtime settings are built,
//! so a hand-edited file can never produce an unusable client.
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` on the command line
//! 3. Set `DEX_GALLERY_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use dex_gallery::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.gallery.batch_size = Some(12);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::application::gallery::GallerySettings;
use crate::application::query::FanOutConfig;
use crate::error::{Error, Result};
use crate::infrastructure::catalog::CatalogSettings;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key reported when an existing settings file cannot be read.
pub const LOAD_WARNING: &str = "config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// Remote catalog settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Base address; lookups append `/{id}` or `/{name}`.
    #[serde(default = "default_base_url", skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    /// Identifiers are drawn from `1..=universe_size`.
    #[serde(
        default = "default_universe_size",
        skip_serializing_if = "Option::is_none"
    )]
    pub universe_size: Option<u32>,

    /// Per-lookup deadline in seconds.
    #[serde(
        default = "default_request_timeout_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub request_timeout_secs: Option<u64>,

    /// Lookups allowed in flight at once.
    #[serde(
        default = "default_max_concurrency",
        skip_serializing_if = "Option::is_none"
    )]
    pub max_concurrency: Option<usize>,

    /// Records kept in the in-memory cache; `0` disables it.
    #[serde(
        default = "default_cache_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub cache_capacity: Option<usize>,

    /// `User-Agent` header sent with every request.
    #[serde(default = "default_user_agent", skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            universe_size: default_universe_size(),
            request_timeout_secs: default_request_timeout_secs(),
            max_concurrency: default_max_concurrency(),
            cache_capacity: default_cache_capacity(),
            user_agent: default_user_agent(),
        }
    }
}

/// Gallery settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct GalleryConfig {
    /// Records drawn per refresh.
    #[serde(default = "default_batch_size", skip_serializing_if = "Option::is_none")]
    pub batch_size: Option<usize>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            batch_size: default_batch_size(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Gallery configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    /// Remote catalog settings.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Gallery settings.
    #[serde(default)]
    pub gallery: GalleryConfig,
}

impl Config {
    /// Settings for the HTTP catalog client.
    #[must_use]
    pub fn catalog_settings(&self) -> CatalogSettings {
        let catalog = &self.catalog;
        CatalogSettings {
            base_url: catalog
                .base_url
                .clone()
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            request_timeout: self.request_timeout(),
            user_agent: catalog
                .user_agent
                .clone()
                .filter(|agent| !agent.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string()),
            cache_capacity: catalog
                .cache_capacity
                .unwrap_or(DEFAULT_CACHE_CAPACITY)
                .min(MAX_CACHE_CAPACITY),
        }
    }

    /// Limits for batch fetching.
    #[must_use]
    pub fn fan_out_config(&self) -> FanOutConfig {
        FanOutConfig {
            max_concurrency: self
                .catalog
                .max_concurrency
                .unwrap_or(DEFAULT_MAX_CONCURRENCY)
                .clamp(MIN_MAX_CONCURRENCY, MAX_MAX_CONCURRENCY),
            request_timeout: self.request_timeout(),
        }
    }

    /// Batch sizing for the gallery coordinator.
    ///
    /// The batch size is not capped by the universe size: an oversized batch
    /// surfaces as a sampling error on refresh.
    #[must_use]
    pub fn gallery_settings(&self) -> GallerySettings {
        GallerySettings {
            batch_size: self
                .gallery
                .batch_size
                .unwrap_or(DEFAULT_BATCH_SIZE)
                .clamp(MIN_BATCH_SIZE, MAX_BATCH_SIZE),
            universe_size: self
                .catalog
                .universe_size
                .unwrap_or(DEFAULT_UNIVERSE_SIZE)
                .clamp(MIN_UNIVERSE_SIZE, MAX_UNIVERSE_SIZE),
        }
    }

    fn request_timeout(&self) -> Duration {
        let secs = self
            .catalog
            .request_timeout_secs
            .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
            .clamp(MIN_REQUEST_TIMEOUT_SECS, MAX_REQUEST_TIMEOUT_SECS);
        Duration::from_secs(secs)
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_base_url() -> Option<String> {
    Some(DEFAULT_BASE_URL.to_string())
}

fn default_universe_size() -> Option<u32> {
    Some(DEFAULT_UNIVERSE_SIZE)
}

fn default_request_timeout_secs() -> Option<u64> {
    Some(DEFAULT_REQUEST_TIMEOUT_SECS)
}

fn default_max_concurrency() -> Option<usize> {
    Some(DEFAULT_MAX_CONCURRENCY)
}

fn default_cache_capacity() -> Option<usize> {
    Some(DEFAULT_CACHE_CAPACITY)
}

fn default_user_agent() -> Option<String> {
    Some(DEFAULT_USER_AGENT.to_string())
}

fn default_batch_size() -> Option<usize> {
    Some(DEFAULT_BATCH_SIZE)
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (Config::default(), Some(LOAD_WARNING.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            catalog: CatalogConfig {
                base_url: Some("http://localhost:8080/api/pokemon".to_string()),
                universe_size: Some(151),
                request_timeout_secs: Some(3),
                max_concurrency: Some(4),
                cache_capacity: Some(0),
                user_agent: Some("Tester/1.0".to_string()),
            },
            gallery: GalleryConfig {
                batch_size: Some(12),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_reports_warning_on_invalid_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[gallery\nbatch_size = ")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_WARNING));
    }

    #[test]
    fn load_with_override_missing_file_uses_defaults_silently() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_then_load_with_override() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.gallery.batch_size = Some(9);

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save failed");
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert!(warning.is_none());
        assert_eq!(loaded.gallery.batch_size, Some(9));
    }

    #[test]
    fn partial_file_fills_missing_keys_with_defaults() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "[catalog]\nuniverse_size = 151\n").expect("write failed");

        let loaded = load_from_path(&config_path).expect("load failed");
        assert_eq!(loaded.catalog.universe_size, Some(151));
        assert_eq!(loaded.catalog.base_url.as_deref(), Some(DEFAULT_BASE_URL));
        assert_eq!(loaded.gallery.batch_size, Some(DEFAULT_BATCH_SIZE));
    }

    #[test]
    fn default_config_resolves_documented_settings() {
        let config = Config::default();

        let catalog = config.catalog_settings();
        assert_eq!(catalog.base_url, DEFAULT_BASE_URL);
        assert_eq!(catalog.request_timeout, Duration::from_secs(10));
        assert_eq!(catalog.cache_capacity, 64);
        assert!(catalog.user_agent.starts_with("DexGallery/"));

        let fan_out = config.fan_out_config();
        assert_eq!(fan_out.max_concurrency, 8);

        let gallery = config.gallery_settings();
        assert_eq!(gallery.batch_size, 30);
        assert_eq!(gallery.universe_size, 1010);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let config = Config {
            catalog: CatalogConfig {
                base_url: Some("   ".to_string()),
                universe_size: Some(0),
                request_timeout_secs: Some(10_000),
                max_concurrency: Some(0),
                cache_capacity: Some(usize::MAX),
                user_agent: None,
            },
            gallery: GalleryConfig {
                batch_size: Some(0),
            },
        };

        let catalog = config.catalog_settings();
        assert_eq!(catalog.base_url, DEFAULT_BASE_URL);
        assert_eq!(
            catalog.request_timeout,
            Duration::from_secs(MAX_REQUEST_TIMEOUT_SECS)
        );
        assert_eq!(catalog.cache_capacity, MAX_CACHE_CAPACITY);
        assert_eq!(catalog.user_agent, DEFAULT_USER_AGENT);

        assert_eq!(config.fan_out_config().max_concurrency, MIN_MAX_CONCURRENCY);

        let gallery = config.gallery_settings();
        assert_eq!(gallery.batch_size, MIN_BATCH_SIZE);
        assert_eq!(gallery.universe_size, MIN_UNIVERSE_SIZE);
    }

    #[test]
    fn batch_size_is_not_capped_by_universe() {
        let mut config = Config::default();
        config.catalog.universe_size = Some(10);
        config.gallery.batch_size = Some(20);

        let gallery = config.gallery_settings();
        assert_eq!((gallery.batch_size, gallery.universe_size), (20, 10));
    }
}
