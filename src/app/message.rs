// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo application.

use super::config::StyleKind;
use crate::ui::toast;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// Host sets the main toast's flag to `true`.
    ShowToast,
    /// Host sets the main toast's flag to `false`.
    HideToast,
    /// Host sets the nested panel toast's flag to `true`.
    ShowPanelToast,
    Toast(toast::Message),
    PanelToast(toast::Message),
}

/// Runtime flags passed from the command line into the application.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Message override for the main toast.
    pub message: Option<String>,
    /// Root style override (`default` or `snack-bar`).
    pub style: Option<StyleKind>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_TOAST_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Start with the toast hidden instead of showing it at launch.
    pub hidden: bool,
}
