// SPDX-License-Identifier: MPL-2.0
//! Demo application: a host view with two toasts in nested style scopes.
//!
//! The `App` struct owns both visibility flags. It flips them in response to
//! its own buttons, reconciles each toast with `Toast::sync`, and routes toast
//! messages back through `Toast::update`, which clears a flag when its timer
//! fires.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::ui::toast::{self, AnyToastStyle, Settings, Toast};
use config::{Config, StyleKind, ThemeMode};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

pub const WINDOW_DEFAULT_HEIGHT: u32 = 480;
pub const WINDOW_DEFAULT_WIDTH: u32 = 640;

/// Root Iced application state.
pub struct App {
    toast: Toast,
    toast_visible: bool,
    panel_toast: Toast,
    panel_toast_visible: bool,
    root_style: AnyToastStyle,
    panel_style: AnyToastStyle,
    /// Number of times a snack-bar action has been invoked.
    action_count: Arc<AtomicUsize>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toast_visible", &self.toast_visible)
            .field("panel_toast_visible", &self.panel_toast_visible)
            .field("root_style", &self.root_style.name())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot function; flags are consumed on the first call.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from config and flags, showing the main
    /// toast right away unless `--hidden` was given.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load_with_override(flags.config_dir.map(PathBuf::from));
        if let Some(warning) = warning {
            tracing::warn!(%warning, "failed to load settings, using defaults");
        }

        let mut app = Self::from_config(&config, flags.message.as_deref(), flags.style);
        app.toast_visible = !flags.hidden;
        let task = app.toast.sync(app.toast_visible).map(Message::Toast);

        tracing::info!(
            style = app.root_style.name(),
            visible = app.toast_visible,
            "demo started"
        );
        (app, task)
    }

    /// Builds hidden toasts and the two scope styles from configuration.
    fn from_config(config: &Config, message: Option<&str>, style: Option<StyleKind>) -> Self {
        let settings = Settings::from(&config.toast);
        let action_count = Arc::new(AtomicUsize::new(0));

        let snack_bar: AnyToastStyle = {
            let counter = Arc::clone(&action_count);
            toast::snack_bar_style(config.demo.action_label.clone(), move || {
                let total = counter.fetch_add(1, Ordering::SeqCst) + 1;
                tracing::info!(total, "snack-bar action invoked");
            })
            .into()
        };
        let plain: AnyToastStyle = toast::default_style().into();

        let (root_style, panel_style) = match style.unwrap_or(config.demo.style) {
            StyleKind::Default => (plain, snack_bar),
            StyleKind::SnackBar => (snack_bar, plain),
        };

        let message = message.map_or_else(|| config.demo.message.clone(), str::to_owned);

        Self {
            toast: Toast::new(Some(message)).with_settings(settings),
            toast_visible: false,
            panel_toast: Toast::new(Some("Panel toast".to_string())).with_settings(settings),
            panel_toast_visible: false,
            root_style,
            panel_style,
            action_count,
            theme_mode: config.demo.theme,
        }
    }

    fn title(&self) -> String {
        "IcedToast".to_string()
    }

    fn theme(&self) -> Theme {
        match self.theme_mode {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_toast_subscription(&self.toast, &self.panel_toast)
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowToast => {
                self.toast_visible = true;
                self.toast.sync(self.toast_visible).map(Message::Toast)
            }
            Message::HideToast => {
                self.toast_visible = false;
                self.toast.sync(self.toast_visible).map(Message::Toast)
            }
            Message::ShowPanelToast => {
                self.panel_toast_visible = true;
                self.panel_toast
                    .sync(self.panel_toast_visible)
                    .map(Message::PanelToast)
            }
            Message::Toast(msg) => self
                .toast
                .update(msg, &mut self.toast_visible)
                .map(Message::Toast),
            Message::PanelToast(msg) => self
                .panel_toast
                .update(msg, &mut self.panel_toast_visible)
                .map(Message::PanelToast),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toast: &self.toast,
            panel_toast: &self.panel_toast,
            root_style: &self.root_style,
            panel_style: &self.panel_style,
            action_count: self.action_count.load(Ordering::SeqCst),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::Phase;

    fn app_with(style: Option<StyleKind>) -> App {
        App::from_config(&Config::default(), None, style)
    }

    #[test]
    fn default_config_uses_default_root_and_snack_bar_panel() {
        let app = app_with(None);
        assert_eq!(app.root_style.name(), "default");
        assert_eq!(app.panel_style.name(), "snack-bar");
        assert_eq!(app.panel_style.action_label(), Some("Undo"));
    }

    #[test]
    fn style_flag_overrides_config() {
        let app = app_with(Some(StyleKind::SnackBar));
        assert_eq!(app.root_style.name(), "snack-bar");
        assert_eq!(app.panel_style.name(), "default");
    }

    #[test]
    fn message_flag_overrides_config() {
        let app = App::from_config(&Config::default(), Some("Copied"), None);
        assert_eq!(app.toast.message(), Some("Copied"));

        let app = app_with(None);
        assert_eq!(app.toast.message(), Some("Saved"));
    }

    #[test]
    fn show_and_hide_buttons_drive_the_main_toast() {
        let mut app = app_with(None);

        let _ = app.update(Message::ShowToast);
        assert!(app.toast_visible);
        assert_eq!(app.toast.phase(), Phase::Visible);

        let _ = app.update(Message::HideToast);
        assert!(!app.toast_visible);
        assert_eq!(app.toast.phase(), Phase::Hidden);
    }

    #[test]
    fn expiry_clears_host_flag() {
        let mut app = app_with(None);
        let _ = app.update(Message::ShowToast);
        let generation = app.toast.generation();

        let _ = app.update(Message::Toast(toast::Message::Expired(generation)));
        assert!(!app.toast_visible);
    }

    #[test]
    fn panel_toast_is_independent() {
        let mut app = app_with(None);
        let _ = app.update(Message::ShowPanelToast);

        assert!(app.panel_toast_visible);
        assert!(!app.toast_visible);
        assert_eq!(app.toast.phase(), Phase::Hidden);
    }

    #[test]
    fn snack_bar_action_counts_invocations() {
        let mut app = app_with(None);
        let _ = app.update(Message::ShowPanelToast);

        let action = app
            .panel_style
            .action()
            .expect("panel scope should carry the snack bar");
        let _ = app.update(Message::PanelToast(toast::Message::Action(action.clone())));
        assert_eq!(app.action_count.load(Ordering::SeqCst), 1);

        let _ = app.update(Message::PanelToast(toast::Message::Action(action)));
        assert_eq!(app.action_count.load(Ordering::SeqCst), 2);
        assert!(app.panel_toast_visible);
    }

    #[test]
    fn view_renders_in_every_state() {
        let mut app = app_with(None);
        let _ = app.view();
        let _ = app.update(Message::ShowToast);
        let _ = app.update(Message::ShowPanelToast);
        let _ = app.view();
    }
}
