// SPDX-License-Identifier: MPL-2.0
//! The pluggable body renderer behind every toast.
//!
//! A [`ToastStyle`] turns a message string into the visual body of the toast.
//! Styles are stored type-erased as [`AnyToastStyle`] so a
//! [`ToastEnvironment`](super::ToastEnvironment) can carry any of them.

use super::controller::Message;
use super::default_style::DefaultStyle;
use super::snack_bar::{Action, SnackBarStyle};
use iced::{Color, Element};
use std::fmt;
use std::sync::Arc;

/// Renders a message into the visual body of a toast.
///
/// Implementations must be total: every message, including the empty string,
/// produces a body.
pub trait ToastStyle: fmt::Debug + Send + Sync {
    /// Short identifier, used in logs.
    fn name(&self) -> &'static str;

    /// Builds the toast body.
    ///
    /// `opacity` is the presentation fade in `0.0..=1.0`; styles scale the
    /// alpha of their colors by it. `interactive` is false while the toast
    /// is hidden but still fading out; controls must not emit messages then.
    fn view<'a>(
        &self,
        message: &'a str,
        opacity: f32,
        interactive: bool,
    ) -> Element<'a, Message>;

    /// Label of the action button, for styles that render one.
    fn action_label(&self) -> Option<&str> {
        None
    }

    /// Callback behind the action button, for styles that render one.
    fn action(&self) -> Option<Action> {
        None
    }
}

/// Cheap-to-clone handle over any [`ToastStyle`].
#[derive(Debug, Clone)]
pub struct AnyToastStyle(Arc<dyn ToastStyle>);

impl AnyToastStyle {
    pub fn new<S: ToastStyle + 'static>(style: S) -> Self {
        Self(Arc::new(style))
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    #[must_use]
    pub fn action_label(&self) -> Option<&str> {
        self.0.action_label()
    }

    #[must_use]
    pub fn action(&self) -> Option<Action> {
        self.0.action()
    }

    pub fn view<'a>(
        &self,
        message: &'a str,
        opacity: f32,
        interactive: bool,
    ) -> Element<'a, Message> {
        self.0.view(message, opacity, interactive)
    }

    /// Returns whether both handles point at the same style instance.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Default for AnyToastStyle {
    fn default() -> Self {
        Self::new(DefaultStyle)
    }
}

impl<S: ToastStyle + 'static> From<S> for AnyToastStyle {
    fn from(style: S) -> Self {
        Self::new(style)
    }
}

/// The plain toast style.
#[must_use]
pub fn default_style() -> DefaultStyle {
    DefaultStyle
}

/// A snack bar with a button labeled `action_name` that calls `action`.
pub fn snack_bar_style(
    action_name: impl Into<String>,
    action: impl Fn() + Send + Sync + 'static,
) -> SnackBarStyle {
    SnackBarStyle::new(action_name, action)
}

/// Scales a color's alpha by the presentation fade.
pub(crate) fn faded(color: Color, opacity: f32) -> Color {
    Color {
        a: color.a * opacity.clamp(0.0, 1.0),
        ..color
    }
}
