// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[playback]` - Autoplay, initial mute state, initial volume, looping
//! - `[overlay]` - Control overlay auto-hide delay
//!
//! # Path Resolution
//!
//! 1. Explicit path passed to `load_from_path()`/`save_to_path()` (or `--config`)
//! 2. `ICED_SHOWREEL_CONFIG_DIR` environment variable
//! 3. Platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_showreel::config;
//!
//! let (mut config, _warning) = config::load();
//! config.playback.start_muted = Some(false);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::domain::video::{HideDelay, Volume};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::warn;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "IcedShowreel";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "ICED_SHOWREEL_CONFIG_DIR";

/// Playback behavior applied to every widget when it mounts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    #[serde(default = "default_autoplay", skip_serializing_if = "Option::is_none")]
    pub autoplay: Option<bool>,

    #[serde(default = "default_start_muted", skip_serializing_if = "Option::is_none")]
    pub start_muted: Option<bool>,

    #[serde(default = "default_loop_enabled", skip_serializing_if = "Option::is_none")]
    pub loop_enabled: Option<bool>,

    /// Initial volume (0.0 to 1.0).
    #[serde(default = "default_volume", skip_serializing_if = "Option::is_none")]
    pub initial_volume: Option<f32>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            autoplay: default_autoplay(),
            start_muted: default_start_muted(),
            loop_enabled: default_loop_enabled(),
            initial_volume: default_volume(),
        }
    }
}

/// Control overlay settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OverlayConfig {
    /// Idle time before the overlay hides (seconds).
    #[serde(default = "default_hide_delay_secs", skip_serializing_if = "Option::is_none")]
    pub hide_delay_secs: Option<u32>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            hide_delay_secs: default_hide_delay_secs(),
        }
    }
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default)]
    pub overlay: OverlayConfig,
}

impl Config {
    /// Resolves the settings a widget needs at mount time.
    #[must_use]
    pub fn widget_settings(&self) -> WidgetSettings {
        WidgetSettings {
            autoplay: self.playback.autoplay.unwrap_or(DEFAULT_AUTOPLAY),
            start_muted: self.playback.start_muted.unwrap_or(DEFAULT_START_MUTED),
            loop_enabled: self.playback.loop_enabled.unwrap_or(DEFAULT_LOOP_ENABLED),
            initial_volume: Volume::new(self.playback.initial_volume.unwrap_or(DEFAULT_VOLUME)),
            hide_delay: HideDelay::new(
                self.overlay
                    .hide_delay_secs
                    .unwrap_or(DEFAULT_HIDE_DELAY_SECS),
            ),
        }
    }
}

/// Resolved, validated per-widget settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WidgetSettings {
    pub autoplay: bool,
    pub start_muted: bool,
    pub loop_enabled: bool,
    pub initial_volume: Volume,
    pub hide_delay: HideDelay,
}

impl Default for WidgetSettings {
    fn default() -> Self {
        Config::default().widget_settings()
    }
}

fn default_autoplay() -> Option<bool> {
    Some(DEFAULT_AUTOPLAY)
}

fn default_start_muted() -> Option<bool> {
    Some(DEFAULT_START_MUTED)
}

fn default_loop_enabled() -> Option<bool> {
    Some(DEFAULT_LOOP_ENABLED)
}

fn default_volume() -> Option<f32> {
    Some(DEFAULT_VOLUME)
}

fn default_hide_delay_secs() -> Option<u32> {
    Some(DEFAULT_HIDE_DELAY_SECS)
}

/// Returns the config file path, honoring the environment override.
fn default_config_path() -> Option<PathBuf> {
    let base = std::env::var_os(ENV_CONFIG_DIR)
        .map(PathBuf::from)
        .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_NAME)))?;
    Some(base.join(CONFIG_FILE))
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    match default_config_path() {
        Some(path) => load_or_default(&path),
        None => (Config::default(), None),
    }
}

/// Loads the configuration from an explicit path, falling back to defaults.
///
/// A missing file is not an error; an unreadable or invalid one yields the
/// defaults plus a warning.
pub fn load_or_default(path: &Path) -> (Config, Option<String>) {
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(path) {
        Ok(config) => (config, None),
        Err(err) => {
            warn!(path = %path.display(), error = %err, "falling back to default settings");
            (Config::default(), Some(err.to_string()))
        }
    }
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = default_config_path() {
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
