// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! The root scope carries the configured style. The nested panel derives a
//! child scope with the other built-in style, so both toasts show how the
//! nearest scope wins.

use super::Message;
use crate::ui::design_tokens::{opacity, radius, spacing, typography};
use crate::ui::toast::{attach_toast, with_toast_style, AnyToastStyle, Toast, ToastEnvironment};
use iced::widget::{button, container, Column, Container, Row, Text};
use iced::{alignment, Background, Border, Color, Element, Length, Theme};

/// Height of the nested panel.
const PANEL_HEIGHT: f32 = 220.0;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub toast: &'a Toast,
    pub panel_toast: &'a Toast,
    pub root_style: &'a AnyToastStyle,
    pub panel_style: &'a AnyToastStyle,
    pub action_count: usize,
}

/// Renders the demo window.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let env = ToastEnvironment::new().toast_style(ctx.root_style.clone());

    let controls = Row::new()
        .spacing(spacing::SM)
        .push(button(Text::new("Show toast")).on_press(Message::ShowToast))
        .push(button(Text::new("Hide toast")).on_press(Message::HideToast));

    let status = Text::new(format!(
        "Root style: {} · actions invoked: {}",
        ctx.root_style.name(),
        ctx.action_count
    ))
    .size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::MD)
        .padding(spacing::LG)
        .width(Length::Fill)
        .push(controls)
        .push(status)
        .push(view_panel(ctx.panel_toast, &env, ctx.panel_style));

    attach_toast(content, ctx.toast, &env, Message::Toast)
}

/// Nested panel with its own toast under a child scope.
fn view_panel<'a>(
    toast: &'a Toast,
    env: &ToastEnvironment,
    style: &AnyToastStyle,
) -> Element<'a, Message> {
    let panel = with_toast_style(env, style.clone(), |scope| {
        let content = Column::new()
            .spacing(spacing::SM)
            .padding(spacing::MD)
            .push(Text::new(format!("Nested scope: {}", scope.style().name())))
            .push(button(Text::new("Show panel toast")).on_press(Message::ShowPanelToast));

        attach_toast(content, toast, scope, Message::PanelToast)
    });

    Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fixed(PANEL_HEIGHT))
        .align_y(alignment::Vertical::Top)
        .style(panel_style)
        .into()
}

fn panel_style(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..base
        })),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
