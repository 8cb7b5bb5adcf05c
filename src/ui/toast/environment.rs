// SPDX-License-Identifier: MPL-2.0
//! Scoped style configuration passed down the view tree.
//!
//! Iced has no implicit environment, so the scope is a plain value that view
//! functions hand to their children. A child scope derived with
//! [`ToastEnvironment::toast_style`] shadows whatever its parent carried;
//! styles never merge.

use super::style::AnyToastStyle;
use iced::Element;

#[derive(Debug, Clone, Default)]
pub struct ToastEnvironment {
    style: Option<AnyToastStyle>,
}

impl ToastEnvironment {
    /// Root scope: no style set, toasts fall back to the default style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Derives a child scope in which `style` applies.
    #[must_use]
    pub fn toast_style<S>(&self, style: S) -> Self
    where
        S: Into<AnyToastStyle>,
    {
        Self {
            style: Some(style.into()),
        }
    }

    /// Resolves the style for a toast rendered in this scope.
    #[must_use]
    pub fn style(&self) -> AnyToastStyle {
        self.style.clone().unwrap_or_default()
    }

    /// Returns whether this scope carries a style.
    #[must_use]
    pub fn has_explicit_style(&self) -> bool {
        self.style.is_some()
    }
}

/// Builds a subtree under a child scope carrying `style`.
///
/// ```ignore
/// let panel = with_toast_style(&env, snack_bar_style("Undo", undo), |env| {
///     attach_toast(list_view(), &self.toast, env, Message::Toast)
/// });
/// ```
pub fn with_toast_style<'a, HostMessage, S, F>(
    env: &ToastEnvironment,
    style: S,
    build: F,
) -> Element<'a, HostMessage>
where
    S: Into<AnyToastStyle>,
    F: FnOnce(&ToastEnvironment) -> Element<'a, HostMessage>,
{
    let scope = env.toast_style(style);
    build(&scope)
}
