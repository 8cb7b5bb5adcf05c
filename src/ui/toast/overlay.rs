// SPDX-License-Identifier: MPL-2.0
//! Attaching a toast on top of host content.

use super::controller::{Message, Toast};
use super::environment::ToastEnvironment;
use iced::widget::Stack;
use iced::{Element, Length};

/// Stacks `toast` over `content`, rendering it with the style resolved from
/// `env`. Toast messages are mapped into the host's message type.
pub fn attach_toast<'a, HostMessage: 'a>(
    content: impl Into<Element<'a, HostMessage>>,
    toast: &'a Toast,
    env: &ToastEnvironment,
    on_message: impl Fn(Message) -> HostMessage + 'a,
) -> Element<'a, HostMessage> {
    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(content)
        .push(toast.view(env).map(on_message))
        .into()
}
