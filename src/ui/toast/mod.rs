// SPDX-License-Identifier: MPL-2.0
//! Toast overlay for transient user feedback.
//!
//! A toast is a short message that appears over existing content, stays for
//! a fixed delay (2.5 s by default) and then hides itself. Its body is drawn
//! by a pluggable [`ToastStyle`] chosen through a scoped [`ToastEnvironment`].
//!
//! # Components
//!
//! - [`controller`] - `Toast` state machine, timer and overlay view
//! - [`style`] - `ToastStyle` trait, `AnyToastStyle` handle and style factories
//! - [`environment`] - Scoped style configuration passed down the view tree
//! - [`overlay`] - `attach_toast` decorator
//! - [`transition`] - Spring-eased show/hide presentation
//!
//! # Usage
//!
//! ```ignore
//! use iced_toast::ui::toast::{self, Toast, ToastEnvironment};
//!
//! // Host state
//! struct App { toast: Toast, toast_visible: bool }
//!
//! // Showing
//! self.toast_visible = true;
//! return self.toast.sync(self.toast_visible).map(Message::Toast);
//!
//! // Routing toast messages
//! Message::Toast(msg) => self.toast.update(msg, &mut self.toast_visible).map(Message::Toast),
//!
//! // Rendering
//! let env = ToastEnvironment::new().toast_style(toast::snack_bar_style("Undo", undo));
//! toast::attach_toast(content, &self.toast, &env, Message::Toast)
//! ```

pub mod controller;
mod default_style;
pub mod environment;
pub mod overlay;
mod settings;
mod snack_bar;
pub mod style;
pub mod transition;

pub use controller::{Expiry, Generation, HideReason, Message, Phase, Toast};
pub use default_style::DefaultStyle;
pub use environment::{with_toast_style, ToastEnvironment};
pub use overlay::attach_toast;
pub use settings::Settings;
pub use snack_bar::{Action, SnackBarStyle};
pub use style::{default_style, snack_bar_style, AnyToastStyle, ToastStyle};
