// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Auto-hide**: How long a toast stays on screen
//! - **Layout**: Where the toast sits relative to the host content
//! - **Transitions**: Show/hide animation durations
//! - **Demo**: Values used by the demo launcher

// ==========================================================================
// Auto-hide Defaults
// ==========================================================================

/// Delay between a toast becoming visible and its automatic hide (2.5 s).
pub const DEFAULT_AUTO_HIDE_DELAY_MS: u64 = 2_500;

/// Minimum allowed auto-hide delay.
pub const MIN_AUTO_HIDE_DELAY_MS: u64 = 500;

/// Maximum allowed auto-hide delay.
pub const MAX_AUTO_HIDE_DELAY_MS: u64 = 60_000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Distance between the toast body and the bottom edge of the host content.
pub const DEFAULT_BOTTOM_PADDING: f32 = 20.0;

/// Maximum bottom padding accepted from a config file.
pub const MAX_BOTTOM_PADDING: f32 = 200.0;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Duration of the spring used when the toast appears.
pub const DEFAULT_SHOW_TRANSITION_MS: u64 = 500;

/// Duration of the spring used when the toast disappears.
pub const DEFAULT_HIDE_TRANSITION_MS: u64 = 3_000;

/// Upper bound for either transition.
pub const MAX_TRANSITION_MS: u64 = 10_000;

// ==========================================================================
// Demo Defaults
// ==========================================================================

/// Message shown by the demo when none is configured.
pub const DEFAULT_DEMO_MESSAGE: &str = "Saved";

/// Snack-bar action label used by the demo.
pub const DEFAULT_DEMO_ACTION_LABEL: &str = "Undo";

const _: () = {
    assert!(MIN_AUTO_HIDE_DELAY_MS <= DEFAULT_AUTO_HIDE_DELAY_MS);
    assert!(DEFAULT_AUTO_HIDE_DELAY_MS <= MAX_AUTO_HIDE_DELAY_MS);
    assert!(DEFAULT_SHOW_TRANSITION_MS <= MAX_TRANSITION_MS);
    assert!(DEFAULT_HIDE_TRANSITION_MS <= MAX_TRANSITION_MS);
};
