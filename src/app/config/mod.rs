// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! toast preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[toast]` - Auto-hide delay, bottom inset and transition durations
//! - `[demo]` - Message, style and theme used by the demo launcher
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable deployments:
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass a directory to `load_with_override()` (the demo's `--config-dir`)
//! 3. Set `ICED_TOAST_CONFIG_DIR` environment variable
//! 4. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use iced_toast::app::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Make toasts linger a little longer
//! config.toast.auto_hide_delay_ms = Some(4_000);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Which built-in style the demo installs at its root scope.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StyleKind {
    #[default]
    Default,
    SnackBar,
}

impl std::str::FromStr for StyleKind {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        match value {
            "default" => Ok(StyleKind::Default),
            "snack-bar" | "snackbar" => Ok(StyleKind::SnackBar),
            other => Err(format!("unknown toast style: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

// =============================================================================
// Section Structs
// =============================================================================

/// Toast timing and layout settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ToastConfig {
    /// Delay before a visible toast hides itself (milliseconds).
    #[serde(
        default = "default_auto_hide_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_hide_delay_ms: Option<u64>,

    /// Gap between the toast and the bottom edge of the host content.
    #[serde(
        default = "default_bottom_padding",
        skip_serializing_if = "Option::is_none"
    )]
    pub bottom_padding: Option<f32>,

    /// Duration of the show transition (milliseconds).
    #[serde(
        default = "default_show_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub show_transition_ms: Option<u64>,

    /// Duration of the hide transition (milliseconds).
    #[serde(
        default = "default_hide_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hide_transition_ms: Option<u64>,
}

impl Default for ToastConfig {
    fn default() -> Self {
        Self {
            auto_hide_delay_ms: default_auto_hide_delay_ms(),
            bottom_padding: default_bottom_padding(),
            show_transition_ms: default_show_transition_ms(),
            hide_transition_ms: default_hide_transition_ms(),
        }
    }
}

/// Demo launcher settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DemoConfig {
    #[serde(default = "default_demo_message")]
    pub message: String,

    #[serde(default)]
    pub style: StyleKind,

    #[serde(default = "default_demo_action_label")]
    pub action_label: String,

    #[serde(default)]
    pub theme: ThemeMode,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            message: default_demo_message(),
            style: StyleKind::default(),
            action_label: default_demo_action_label(),
            theme: ThemeMode::default(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Crate configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub toast: ToastConfig,

    #[serde(default)]
    pub demo: DemoConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_auto_hide_delay_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_HIDE_DELAY_MS)
}

fn default_bottom_padding() -> Option<f32> {
    Some(DEFAULT_BOTTOM_PADDING)
}

fn default_show_transition_ms() -> Option<u64> {
    Some(DEFAULT_SHOW_TRANSITION_MS)
}

fn default_hide_transition_ms() -> Option<u64> {
    Some(DEFAULT_HIDE_TRANSITION_MS)
}

fn default_demo_message() -> String {
    DEFAULT_DEMO_MESSAGE.to_string()
}

fn default_demo_action_label() -> String {
    DEFAULT_DEMO_ACTION_LABEL.to_string()
}

// =============================================================================
// Path Helpers
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with a warning message explaining what went wrong.
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
                    return (
                        Config::default(),
                        Some(format!("{}: {err}", path.display())),
                    );
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

/// Saves the configuration into a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
