// SPDX-License-Identifier: MPL-2.0
//! Timing and layout knobs for a [`Toast`](super::Toast).

use crate::app::config::{
    ToastConfig, DEFAULT_AUTO_HIDE_DELAY_MS, DEFAULT_BOTTOM_PADDING, DEFAULT_HIDE_TRANSITION_MS,
    DEFAULT_SHOW_TRANSITION_MS, MAX_AUTO_HIDE_DELAY_MS, MAX_BOTTOM_PADDING, MAX_TRANSITION_MS,
    MIN_AUTO_HIDE_DELAY_MS,
};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Time between becoming visible and the automatic hide.
    pub auto_hide_delay: Duration,
    /// Gap between the toast and the bottom edge of the host content.
    pub bottom_padding: f32,
    pub show_transition: Duration,
    pub hide_transition: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            auto_hide_delay: Duration::from_millis(DEFAULT_AUTO_HIDE_DELAY_MS),
            bottom_padding: DEFAULT_BOTTOM_PADDING,
            show_transition: Duration::from_millis(DEFAULT_SHOW_TRANSITION_MS),
            hide_transition: Duration::from_millis(DEFAULT_HIDE_TRANSITION_MS),
        }
    }
}

impl From<&ToastConfig> for Settings {
    /// Out-of-range values are clamped to the supported bounds.
    fn from(config: &ToastConfig) -> Self {
        let delay_ms = config
            .auto_hide_delay_ms
            .unwrap_or(DEFAULT_AUTO_HIDE_DELAY_MS)
            .clamp(MIN_AUTO_HIDE_DELAY_MS, MAX_AUTO_HIDE_DELAY_MS);
        let bottom_padding = config
            .bottom_padding
            .filter(|padding| padding.is_finite())
            .unwrap_or(DEFAULT_BOTTOM_PADDING)
            .clamp(0.0, MAX_BOTTOM_PADDING);
        let show_ms = config
            .show_transition_ms
            .unwrap_or(DEFAULT_SHOW_TRANSITION_MS)
            .min(MAX_TRANSITION_MS);
        let hide_ms = config
            .hide_transition_ms
            .unwrap_or(DEFAULT_HIDE_TRANSITION_MS)
            .min(MAX_TRANSITION_MS);

        Self {
            auto_hide_delay: Duration::from_millis(delay_ms),
            bottom_padding,
            show_transition: Duration::from_millis(show_ms),
            hide_transition: Duration::from_millis(hide_ms),
        }
    }
}
