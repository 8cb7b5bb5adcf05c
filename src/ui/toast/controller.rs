// SPDX-License-Identifier: MPL-2.0
//! Show/auto-hide lifecycle of a single toast.
//!
//! The host owns the visibility flag. After changing it the host calls
//! [`Toast::sync`]; toast messages go through [`Toast::update`], which may
//! write `false` back into the flag when the auto-hide timer fires.
//!
//! ```text
//!            sync(true)
//!   Hidden ─────────────▶ Visible
//!     ▲                      │
//!     └──────────────────────┘
//!      Expired(current gen) or sync(false)
//! ```
//!
//! Every `Hidden → Visible` edge bumps the [`Generation`] and schedules one
//! timer tagged with it. Timers cannot be cancelled: one that fires for an
//! older generation, or after the toast is already hidden, is ignored.

use super::environment::ToastEnvironment;
use super::settings::Settings;
use super::snack_bar::Action;
use super::transition::Transition;
use crate::ui::design_tokens::spacing;
use iced::widget::{text, Container};
use iced::{alignment, time, Element, Length, Padding, Subscription, Task};
use std::time::{Duration, Instant};

/// Interval between animation frames while a transition runs.
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Identifies one show cycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Generation(u64);

impl Generation {
    fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Hidden,
    Visible,
}

/// Why a toast left the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HideReason {
    /// The auto-hide timer of the current cycle fired.
    Expired,
    /// The host set the flag to `false`.
    Host,
}

/// Messages produced by the toast and its styles.
#[derive(Debug, Clone)]
pub enum Message {
    /// Auto-hide timer for the given show cycle elapsed.
    Expired(Generation),
    /// The snack-bar action button was pressed.
    Action(Action),
    /// Animation frame.
    Frame(Instant),
}

/// A scheduled auto-hide that has not been delivered yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expiry {
    pub generation: Generation,
    pub deadline: Instant,
}

/// Toast controller and view.
#[derive(Debug)]
pub struct Toast {
    message: Option<String>,
    phase: Phase,
    generation: Generation,
    pending: Option<Expiry>,
    last_hide: Option<HideReason>,
    settings: Settings,
    transition: Transition,
    now: Instant,
}

impl Default for Toast {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Toast {
    /// Creates a hidden toast. An absent message renders an empty body.
    #[must_use]
    pub fn new(message: Option<String>) -> Self {
        Self {
            message,
            phase: Phase::Hidden,
            generation: Generation::default(),
            pending: None,
            last_hide: None,
            settings: Settings::default(),
            transition: Transition::hidden(),
            now: Instant::now(),
        }
    }

    #[must_use]
    pub fn with_settings(mut self, settings: Settings) -> Self {
        self.settings = settings;
        self
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Replaces the message; takes effect on the next render.
    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.phase == Phase::Visible
    }

    /// Generation of the most recent show cycle.
    #[must_use]
    pub fn generation(&self) -> Generation {
        self.generation
    }

    /// The most recently scheduled timer, until it is delivered.
    ///
    /// Hiding the toast early does not clear it: the timer is still in flight.
    #[must_use]
    pub fn pending_expiry(&self) -> Option<Expiry> {
        self.pending
    }

    /// Why the toast was last hidden, if it ever was.
    #[must_use]
    pub fn last_hide(&self) -> Option<HideReason> {
        self.last_hide
    }

    /// Whether the body is drawn, including while the hide transition runs.
    #[must_use]
    pub fn is_on_screen(&self) -> bool {
        self.transition.is_on_screen(self.now)
    }

    /// Reconciles the controller with the host's flag.
    ///
    /// Call once after creating the toast and again after every change the
    /// host makes to `visible`.
    pub fn sync(&mut self, visible: bool) -> Task<Message> {
        self.sync_at(visible, Instant::now())
    }

    /// [`Toast::sync`] with an explicit clock reading.
    pub fn sync_at(&mut self, visible: bool, now: Instant) -> Task<Message> {
        self.now = now;

        match (self.phase, visible) {
            (Phase::Hidden, true) => self.show(now),
            (Phase::Visible, false) => {
                self.hide(HideReason::Host, now);
                Task::none()
            }
            // Flag already matches the phase: re-triggering a visible toast
            // leaves its timer alone.
            (Phase::Hidden, false) | (Phase::Visible, true) => Task::none(),
        }
    }

    /// Handles a toast message, writing `false` into `visible` on expiry.
    pub fn update(&mut self, message: Message, visible: &mut bool) -> Task<Message> {
        match message {
            Message::Expired(generation) => {
                self.expire(generation, visible, Instant::now());
                Task::none()
            }
            Message::Action(action) => {
                if self.phase == Phase::Hidden {
                    tracing::trace!("toast action ignored while hidden");
                } else {
                    tracing::debug!("toast action activated");
                    action.invoke();
                }
                Task::none()
            }
            Message::Frame(now) => {
                self.now = now;
                Task::none()
            }
        }
    }

    /// Subscription driving the show/hide transitions.
    pub fn subscription(&self) -> Subscription<Message> {
        if self.transition.is_animating(self.now) {
            time::every(FRAME_INTERVAL).map(Message::Frame)
        } else {
            Subscription::none()
        }
    }

    /// Renders the overlay layer, anchored bottom-center.
    ///
    /// Returns an empty element that takes no space when nothing is on screen.
    pub fn view<'a>(&'a self, env: &ToastEnvironment) -> Element<'a, Message> {
        if !self.is_on_screen() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let presence = self.transition.presence(self.now);
        let body = env.style().view(
            self.message().unwrap_or_default(),
            self.transition.opacity(self.now),
            self.is_visible(),
        );

        // Slides up from the bottom edge as presence goes 0 → 1.
        let bottom = (self.settings.bottom_padding * presence).max(0.0);

        Container::new(body)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Bottom)
            .padding(Padding {
                top: 0.0,
                right: spacing::MD,
                bottom,
                left: spacing::MD,
            })
            .into()
    }

    fn show(&mut self, now: Instant) -> Task<Message> {
        self.phase = Phase::Visible;
        self.generation = self.generation.next();
        self.transition
            .start(true, now, self.settings.show_transition);

        let generation = self.generation;
        let delay = self.settings.auto_hide_delay;
        self.pending = Some(Expiry {
            generation,
            deadline: now + delay,
        });

        tracing::debug!(
            generation = generation.0,
            ?delay,
            "toast shown"
        );

        Task::perform(
            async move {
                tokio::time::sleep(delay).await;
                generation
            },
            Message::Expired,
        )
    }

    fn hide(&mut self, reason: HideReason, now: Instant) {
        self.phase = Phase::Hidden;
        self.last_hide = Some(reason);
        self.transition
            .start(false, now, self.settings.hide_transition);

        tracing::debug!(generation = self.generation.0, ?reason, "toast hidden");
    }

    fn expire(&mut self, generation: Generation, visible: &mut bool, now: Instant) {
        if self.pending.is_some_and(|expiry| expiry.generation == generation) {
            self.pending = None;
        }

        if generation != self.generation || self.phase == Phase::Hidden {
            tracing::trace!(
                generation = generation.0,
                current = self.generation.0,
                "stale toast timer ignored"
            );
            return;
        }

        self.now = now;
        self.hide(HideReason::Expired, now);
        *visible = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::toast::style::snack_bar_style;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn saved() -> Toast {
        Toast::new(Some("Saved".to_string()))
    }

    #[test]
    fn starts_hidden() {
        let toast = saved();
        assert_eq!(toast.phase(), Phase::Hidden);
        assert!(!toast.is_on_screen());
        assert!(toast.pending_expiry().is_none());
    }

    #[test]
    fn sync_true_shows_and_schedules_expiry() {
        let mut toast = saved();
        let now = Instant::now();

        let _ = toast.sync_at(true, now);

        assert!(toast.is_visible());
        assert!(toast.is_on_screen());
        let expiry = toast.pending_expiry().expect("expiry should be scheduled");
        assert_eq!(expiry.generation, toast.generation());
        assert_eq!(expiry.deadline, now + Duration::from_millis(2_500));
    }

    #[test]
    fn expiry_hides_and_clears_flag() {
        let mut toast = saved();
        let mut visible = true;
        let _ = toast.sync_at(visible, Instant::now());
        let generation = toast.generation();

        let _ = toast.update(Message::Expired(generation), &mut visible);

        assert!(!visible);
        assert_eq!(toast.phase(), Phase::Hidden);
        assert_eq!(toast.last_hide(), Some(HideReason::Expired));
        assert!(toast.pending_expiry().is_none());
    }

    #[test]
    fn host_hide_is_immediate_and_late_timer_is_noop() {
        let mut toast = saved();
        let mut visible = true;
        let _ = toast.sync_at(visible, Instant::now());
        let generation = toast.generation();

        visible = false;
        let _ = toast.sync_at(visible, Instant::now());
        assert_eq!(toast.phase(), Phase::Hidden);
        assert_eq!(toast.last_hide(), Some(HideReason::Host));
        assert!(toast.pending_expiry().is_some());

        let _ = toast.update(Message::Expired(generation), &mut visible);
        assert!(!visible);
        assert_eq!(toast.phase(), Phase::Hidden);
        assert_eq!(toast.last_hide(), Some(HideReason::Host));
        assert!(toast.pending_expiry().is_none());
    }

    #[test]
    fn retrigger_while_visible_keeps_timer() {
        let mut toast = saved();
        let start = Instant::now();
        let _ = toast.sync_at(true, start);
        let first = toast.pending_expiry();

        let _ = toast.sync_at(true, start + Duration::from_secs(1));

        assert_eq!(toast.pending_expiry(), first);
        assert_eq!(toast.generation(), first.map(|e| e.generation).unwrap());
    }

    #[test]
    fn reshow_starts_new_cycle_and_ignores_stale_timer() {
        let mut toast = saved();
        let mut visible = true;
        let start = Instant::now();
        let _ = toast.sync_at(visible, start);
        let first = toast.generation();

        visible = false;
        let _ = toast.sync_at(visible, start + Duration::from_millis(500));
        visible = true;
        let reshow_at = start + Duration::from_millis(1_000);
        let _ = toast.sync_at(visible, reshow_at);
        let second = toast.generation();
        assert!(second > first);
        assert_eq!(
            toast.pending_expiry().map(|e| e.deadline),
            Some(reshow_at + Duration::from_millis(2_500))
        );

        // The first cycle's timer lands while the second cycle is visible.
        let _ = toast.update(Message::Expired(first), &mut visible);
        assert!(visible);
        assert!(toast.is_visible());

        let _ = toast.update(Message::Expired(second), &mut visible);
        assert!(!visible);
        assert!(!toast.is_visible());
    }

    #[test]
    fn action_message_invokes_callback_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let style = snack_bar_style("Undo", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });

        let mut toast = saved();
        let mut visible = true;
        let _ = toast.sync_at(visible, Instant::now());
        let _ = toast.update(style.on_press(), &mut visible);

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(visible);
        assert!(toast.is_visible());
    }

    #[test]
    fn action_is_dropped_while_fading_out() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let style = snack_bar_style("Undo", move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        let env = ToastEnvironment::new().toast_style(style.clone());

        let mut toast = saved();
        let mut visible = true;
        let start = Instant::now();
        let _ = toast.sync_at(visible, start);

        visible = false;
        let _ = toast.sync_at(visible, start + Duration::from_millis(100));
        let _ = toast.update(
            Message::Frame(start + Duration::from_millis(1_500)),
            &mut visible,
        );
        assert_eq!(toast.phase(), Phase::Hidden);
        assert!(toast.is_on_screen());
        let _ = toast.view(&env);

        let _ = toast.update(style.on_press(), &mut visible);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(!visible);
    }

    #[test]
    fn frames_finish_hide_transition() {
        let mut toast = saved();
        let mut visible = true;
        let start = Instant::now();
        let _ = toast.sync_at(visible, start);
        visible = false;
        let hide_at = start + Duration::from_secs(1);
        let _ = toast.sync_at(visible, hide_at);
        assert!(toast.is_on_screen());

        let done = hide_at + toast.settings().hide_transition;
        let _ = toast.update(Message::Frame(done), &mut visible);
        assert!(!toast.is_on_screen());
    }

    #[test]
    fn custom_delay_is_used_for_expiry() {
        let settings = Settings {
            auto_hide_delay: Duration::from_secs(5),
            ..Settings::default()
        };
        let mut toast = saved().with_settings(settings);
        let now = Instant::now();
        let _ = toast.sync_at(true, now);

        assert_eq!(
            toast.pending_expiry().map(|e| e.deadline),
            Some(now + Duration::from_secs(5))
        );
    }

    #[test]
    fn view_renders_for_any_message() {
        let env = ToastEnvironment::new();
        for message in [None, Some(String::new()), Some("Saved".to_string())] {
            let mut toast = Toast::new(message);
            let _ = toast.view(&env);
            let _ = toast.sync_at(true, Instant::now());
            let _ = toast.view(&env);
        }
    }
}
