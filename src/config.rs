//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::marquee::MarqueeSettings;
use crate::models::SortKey;

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemeMode {
    /// Automatically detect OS theme (dark/light)
    #[default]
    Auto,
    /// Always use dark theme
    Dark,
    /// Always use light theme
    Light,
}

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Menu catalog to load instead of the built-in one
    pub catalog: Option<PathBuf>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Display help on startup
    pub show_help_on_startup: bool,
    /// Theme mode preference (Auto, Dark, Light)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Ordering applied when the menu opens
    #[serde(default)]
    pub default_sort: SortKey,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_help_on_startup: false,
            theme_mode: ThemeMode::default(),
            default_sort: SortKey::default(),
        }
    }
}

/// Category strip animation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarqueeConfig {
    /// Scroll speed in cells per second
    #[serde(default = "default_velocity")]
    pub velocity: f64,
    /// Quiet time after the last interaction before the strip scrolls again
    #[serde(default = "default_resume_delay_ms")]
    pub resume_delay_ms: u64,
    /// Delay before the first frame so the layout can settle
    #[serde(default = "default_startup_delay_ms")]
    pub startup_delay_ms: u64,
    /// Time between frames of the UI loop
    #[serde(default = "default_frame_interval_ms")]
    pub frame_interval_ms: u64,
}

fn default_velocity() -> f64 {
    8.0
}

fn default_resume_delay_ms() -> u64 {
    500
}

fn default_startup_delay_ms() -> u64 {
    250
}

fn default_frame_interval_ms() -> u64 {
    33
}

impl Default for MarqueeConfig {
    fn default() -> Self {
        Self {
            velocity: default_velocity(),
            resume_delay_ms: default_resume_delay_ms(),
            startup_delay_ms: default_startup_delay_ms(),
            frame_interval_ms: default_frame_interval_ms(),
        }
    }
}

impl MarqueeConfig {
    /// Controller settings derived from this configuration.
    pub fn settings(&self) -> MarqueeSettings {
        MarqueeSettings {
            velocity: self.velocity,
            resume_delay: Duration::from_millis(self.resume_delay_ms),
            startup_delay: Duration::from_millis(self.startup_delay_ms),
        }
    }

    /// Time between frames.
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_interval_ms)
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/ChefMenu/config.toml`
/// - macOS: `~/Library/Application Support/ChefMenu/config.toml`
/// - Windows: `%APPDATA%\ChefMenu\config.toml`
///
/// The catalog path is checked when it is set, not on load, so a file that
/// has since moved can still be replaced through `config set`.
///
/// # Validation
///
/// - marquee velocity must be positive and finite
/// - frame interval must be at least 1 ms
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
    /// Category strip animation
    #[serde(default)]
    pub marquee: MarqueeConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks if the config file exists on disk.
    #[must_use]
    pub fn exists() -> bool {
        Self::config_file_path()
            .map(|path| path.exists())
            .unwrap_or(false)
    }

    /// Gets the platform-specific config directory path.
    ///
    /// - Linux: `~/.config/ChefMenu/`
    /// - macOS: `~/Library/Application Support/ChefMenu/`
    /// - Windows: `%APPDATA%\ChefMenu\`
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join("ChefMenu");

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file, defaulting when it is absent.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        let config_dir = Self::config_dir()?;
        fs::create_dir_all(&config_dir).context(format!(
            "Failed to create config directory: {}",
            config_dir.display()
        ))?;

        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to `config_path`.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Configured catalog path, if it is set and still on disk.
    ///
    /// A stale path is logged and ignored so callers fall back to the
    /// built-in menu.
    #[must_use]
    pub fn catalog_path(&self) -> Option<&Path> {
        let catalog = self.paths.catalog.as_deref()?;
        if catalog.exists() {
            Some(catalog)
        } else {
            tracing::warn!(
                path = %catalog.display(),
                "configured catalog not found, using built-in menu"
            );
            None
        }
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        let velocity = self.marquee.velocity;
        if !velocity.is_finite() || velocity <= 0.0 {
            anyhow::bail!("Marquee velocity must be a positive number (got {velocity})");
        }

        if self.marquee.frame_interval_ms == 0 {
            anyhow::bail!("Marquee frame interval must be at least 1 ms");
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::new();
        assert!(config.paths.catalog.is_none());
        assert_eq!(config.ui.theme_mode, ThemeMode::Auto);
        assert_eq!(config.ui.default_sort, SortKey::Recommended);
        assert_eq!(config.marquee.resume_delay_ms, 500);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_marquee_settings_conversion() {
        let marquee = MarqueeConfig {
            velocity: 12.5,
            resume_delay_ms: 750,
            startup_delay_ms: 100,
            frame_interval_ms: 16,
        };
        let settings = marquee.settings();
        assert_eq!(settings.velocity, 12.5);
        assert_eq!(settings.resume_delay, Duration::from_millis(750));
        assert_eq!(settings.startup_delay, Duration::from_millis(100));
        assert_eq!(marquee.frame_interval(), Duration::from_millis(16));
    }

    #[test]
    fn test_load_missing_file_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config = Config::load_from(&temp_dir.path().join("config.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[marquee]\nvelocity = 4.0\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.marquee.velocity, 4.0);
        assert_eq!(config.marquee.frame_interval_ms, 33);
        assert_eq!(config.ui, UiConfig::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::new();
        config.ui.theme_mode = ThemeMode::Light;
        config.ui.default_sort = SortKey::Price;
        config.marquee.velocity = 3.0;
        config.save_to(&path).unwrap();

        assert!(!path.with_extension("toml.tmp").exists());
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_validate_rejects_bad_marquee_values() {
        let mut config = Config::new();
        config.marquee.velocity = 0.0;
        assert!(config.validate().is_err());

        config.marquee.velocity = f64::NAN;
        assert!(config.validate().is_err());

        config.marquee.velocity = 8.0;
        config.marquee.frame_interval_ms = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_stale_catalog_path_still_loads() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[paths]\ncatalog = \"/nonexistent/menu.toml\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(
            config.paths.catalog,
            Some(PathBuf::from("/nonexistent/menu.toml"))
        );
        assert!(config.catalog_path().is_none());
    }

    #[test]
    fn test_catalog_path_returns_existing_file() {
        let temp_dir = TempDir::new().unwrap();
        let catalog = temp_dir.path().join("menu.toml");
        fs::write(&catalog, "").unwrap();

        let mut config = Config::new();
        config.paths.catalog = Some(catalog.clone());
        assert_eq!(config.catalog_path(), Some(catalog.as_path()));
    }
}
