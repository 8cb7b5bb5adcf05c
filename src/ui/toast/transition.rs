// SPDX-License-Identifier: MPL-2.0
//! Spring-eased show/hide presentation.
//!
//! The transition only describes how present the toast body looks at a given
//! instant. The controller's phase changes immediately; this state trails it
//! and is advanced by frame ticks.

use std::time::{Duration, Instant};

const SPRING_DECAY: f32 = 6.0;
const SPRING_FREQUENCY: f32 = std::f32::consts::TAU;

#[derive(Debug, Clone, Copy)]
pub struct Transition {
    target: bool,
    from: f32,
    started_at: Option<Instant>,
    duration: Duration,
}

impl Transition {
    /// A fully hidden, settled transition.
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            target: false,
            from: 0.0,
            started_at: None,
            duration: Duration::ZERO,
        }
    }

    /// Starts moving toward `target` from wherever the body currently is.
    pub fn start(&mut self, target: bool, now: Instant, duration: Duration) {
        self.from = self.presence(now);
        self.target = target;
        self.started_at = Some(now);
        self.duration = duration;
    }

    /// Fraction of the transition elapsed, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        match self.started_at {
            Some(started) if !self.duration.is_zero() => {
                let elapsed = now.saturating_duration_since(started);
                (elapsed.as_secs_f32() / self.duration.as_secs_f32()).min(1.0)
            }
            _ => 1.0,
        }
    }

    /// How present the body is: 0 hidden, 1 shown. Briefly overshoots 1.
    #[must_use]
    pub fn presence(&self, now: Instant) -> f32 {
        let eased = spring(self.progress(now));
        let to = if self.target { 1.0 } else { 0.0 };
        self.from + (to - self.from) * eased
    }

    /// Opacity for the body, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        self.presence(now).clamp(0.0, 1.0)
    }

    #[must_use]
    pub fn is_animating(&self, now: Instant) -> bool {
        self.progress(now) < 1.0
    }

    /// Whether anything should be drawn at `now`.
    #[must_use]
    pub fn is_on_screen(&self, now: Instant) -> bool {
        self.target || self.is_animating(now)
    }
}

impl Default for Transition {
    fn default() -> Self {
        Self::hidden()
    }
}

/// Damped spring easing, 0 at `t = 0` and settled at 1 for `t >= 1`.
fn spring(t: f32) -> f32 {
    if t >= 1.0 {
        return 1.0;
    }
    1.0 - (-SPRING_DECAY * t).exp() * (SPRING_FREQUENCY * t).cos()
}
