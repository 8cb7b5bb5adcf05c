// SPDX-License-Identifier: MPL-2.0
//! Minimal toast body: the message in a rounded surface card.

use super::controller::Message;
use super::style::{faded, ToastStyle};
use crate::ui::design_tokens::{radius, shadow, sizing, spacing, typography};
use iced::widget::{container, text, Container, Text};
use iced::{Element, Theme};

/// The style applied when no scope sets one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DefaultStyle;

impl ToastStyle for DefaultStyle {
    fn name(&self) -> &'static str {
        "default"
    }

    fn view<'a>(
        &self,
        message: &'a str,
        opacity: f32,
        _interactive: bool,
    ) -> Element<'a, Message> {
        let body = Text::new(message)
            .size(typography::BODY)
            .style(move |theme: &Theme| text::Style {
                color: Some(faded(theme.palette().text, opacity)),
            });

        Container::new(body)
            .max_width(sizing::TOAST_MAX_WIDTH)
            .padding([spacing::XS, spacing::MD])
            .style(move |theme: &Theme| surface_style(theme, opacity))
            .into()
    }
}

fn surface_style(theme: &Theme, opacity: f32) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(iced::Background::Color(faded(
            palette.background.weak.color,
            opacity,
        ))),
        border: iced::Border {
            color: faded(palette.background.strong.color, opacity),
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: iced::Shadow {
            color: faded(shadow::MD.color, opacity * 0.3),
            ..shadow::MD
        },
        text_color: Some(faded(theme.palette().text, opacity)),
        ..Default::default()
    }
}
