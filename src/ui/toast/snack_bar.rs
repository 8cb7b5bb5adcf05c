// SPDX-License-Identifier: MPL-2.0
//! Snack bar: a full-width bar with the message and one action button.

use super::controller::Message;
use super::style::{faded, ToastStyle};
use crate::ui::design_tokens::{opacity, palette, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Container, Row, Text};
use iced::{alignment, Color, Element, Length, Theme};
use std::fmt;
use std::sync::Arc;

/// A zero-argument callback owned by whoever built the style.
///
/// Carried inside [`Message::Action`] so the press travels through the host's
/// update loop before the callback runs.
#[derive(Clone)]
pub struct Action(Arc<dyn Fn() + Send + Sync>);

impl Action {
    pub fn new(callback: impl Fn() + Send + Sync + 'static) -> Self {
        Self(Arc::new(callback))
    }

    /// Runs the callback once, synchronously.
    pub fn invoke(&self) {
        (self.0)();
    }
}

impl fmt::Debug for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Action(..)")
    }
}

/// Snack-bar toast with an action button.
#[derive(Debug, Clone)]
pub struct SnackBarStyle {
    action_name: String,
    action: Action,
}

impl SnackBarStyle {
    pub fn new(action_name: impl Into<String>, action: impl Fn() + Send + Sync + 'static) -> Self {
        Self {
            action_name: action_name.into(),
            action: Action::new(action),
        }
    }

    #[must_use]
    pub fn action_name(&self) -> &str {
        &self.action_name
    }

    /// The message emitted when the action button is pressed.
    #[must_use]
    pub fn on_press(&self) -> Message {
        Message::Action(self.action.clone())
    }

    /// The button's press message, or `None` when the bar is fading out.
    fn press_message(&self, interactive: bool) -> Option<Message> {
        interactive.then(|| self.on_press())
    }
}

impl ToastStyle for SnackBarStyle {
    fn name(&self) -> &'static str {
        "snack-bar"
    }

    fn action_label(&self) -> Option<&str> {
        Some(&self.action_name)
    }

    fn action(&self) -> Option<Action> {
        Some(self.action.clone())
    }

    fn view<'a>(
        &self,
        message: &'a str,
        opacity: f32,
        interactive: bool,
    ) -> Element<'a, Message> {
        let label = Text::new(message)
            .size(typography::FOOTNOTE)
            .wrapping(text::Wrapping::None)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(palette::WHITE, opacity)),
            });

        let action_label = Text::new(self.action_name.clone())
            .size(typography::FOOTNOTE)
            .style(move |_theme: &Theme| text::Style {
                color: Some(faded(palette::WHITE, opacity)),
            });

        let action_button = button(action_label)
            .on_press_maybe(self.press_message(interactive))
            .padding([spacing::XXS, spacing::XS])
            .style(move |theme: &Theme, status| action_button_style(theme, status, opacity));

        // Layout: [message .......... action]
        let content = Row::new()
            .spacing(spacing::SM)
            .height(Length::Fixed(sizing::SNACK_BAR_HEIGHT))
            .align_y(alignment::Vertical::Center)
            .push(Container::new(label).width(Length::Fill))
            .push(action_button);

        Container::new(content)
            .width(Length::Fill)
            .padding([0.0, spacing::MD])
            .style(move |_theme: &Theme| bar_style(opacity))
            .into()
    }
}

fn bar_style(opacity: f32) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(faded(palette::INDIGO_500, opacity))),
        border: iced::Border {
            radius: radius::NONE.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        text_color: Some(faded(palette::WHITE, opacity)),
        ..Default::default()
    }
}

fn action_button_style(_theme: &Theme, status: button::Status, fade: f32) -> button::Style {
    let text_color = faded(palette::WHITE, fade);
    let overlay = |alpha: f32| {
        Some(iced::Background::Color(faded(
            Color {
                a: alpha,
                ..palette::WHITE
            },
            fade,
        )))
    };
    let rounded = iced::Border {
        radius: radius::SM.into(),
        ..Default::default()
    };

    match status {
        button::Status::Active => button::Style {
            background: None,
            text_color,
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: overlay(opacity::OVERLAY_SUBTLE),
            text_color,
            border: rounded,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Pressed => button::Style {
            background: overlay(opacity::OVERLAY_MEDIUM),
            text_color,
            border: rounded,
            shadow: shadow::NONE,
            snap: true,
        },
        button::Status::Disabled => button::Style {
            background: None,
            text_color: Color {
                a: text_color.a * opacity::OVERLAY_MEDIUM,
                ..text_color
            },
            border: iced::Border::default(),
            shadow: shadow::NONE,
            snap: true,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn exposes_action_label() {
        let style = SnackBarStyle::new("Undo", || {});
        assert_eq!(style.action_name(), "Undo");
        assert_eq!(style.action_label(), Some("Undo"));
    }

    #[test]
    fn each_press_invokes_callback_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let style = SnackBarStyle::new("Undo", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let Message::Action(action) = style.on_press() else {
            panic!("snack bar press should emit an action message");
        };
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        action.invoke();
        assert_eq!(calls.load(Ordering::SeqCst), 1);

        action.invoke();
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn bar_uses_indigo_surface() {
        let style = bar_style(1.0);
        assert_eq!(
            style.background,
            Some(iced::Background::Color(palette::INDIGO_500))
        );
    }

    #[test]
    fn hovered_button_has_overlay() {
        let style = action_button_style(&Theme::Dark, button::Status::Hovered, 1.0);
        assert!(style.background.is_some());
        let style = action_button_style(&Theme::Dark, button::Status::Active, 1.0);
        assert!(style.background.is_none());
    }

    #[test]
    fn renders_empty_message() {
        let style = SnackBarStyle::new("Undo", || {});
        let _ = style.view("", 1.0, true);
        let _ = style.view("Message deleted", 0.5, false);
    }

    #[test]
    fn button_is_inert_while_fading_out() {
        let style = SnackBarStyle::new("Undo", || {});
        assert!(matches!(style.press_message(true), Some(Message::Action(_))));
        assert!(style.press_message(false).is_none());
    }

    #[test]
    fn action_debug_does_not_expose_closure() {
        assert_eq!(format!("{:?}", Action::new(|| {})), "Action(..)");
    }
}
