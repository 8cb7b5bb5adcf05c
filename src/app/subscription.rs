// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::ui::toast::Toast;
use iced::Subscription;

/// Frame ticks for every toast that is mid-transition.
pub fn create_toast_subscription(toast: &Toast, panel_toast: &Toast) -> Subscription<Message> {
    Subscription::batch([
        toast.subscription().map(Message::Toast),
        panel_toast.subscription().map(Message::PanelToast),
    ])
}
