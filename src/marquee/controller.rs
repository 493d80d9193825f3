//! Frame-driven autoscroll with pause-on-interaction.
//!
//! The controller is a small state machine driven by explicit timestamps:
//!
//! ```text
//!   mount ──► Starting ──(startup delay)──► Running ◄──(quiet interval)── Paused
//!                │                            │                            ▲
//!                └──────────── interaction ───┴────────── interaction ─────┘
//! ```
//!
//! Every interaction restarts the quiet interval from zero, so the scroll only
//! resumes once the user has left the strip alone for the whole interval.
//! Offsets advance by `velocity × elapsed`, never by a fixed step per frame,
//! and are wrapped into `[0, half_content_width)` after every frame.

use std::time::{Duration, Instant};

/// Tuning for the autoscroll.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarqueeSettings {
    /// Scroll speed in cells per second
    pub velocity: f64,
    /// Quiet time after the last interaction before scrolling resumes
    pub resume_delay: Duration,
    /// Delay between mounting and the first frame
    pub startup_delay: Duration,
}

impl Default for MarqueeSettings {
    fn default() -> Self {
        Self {
            velocity: 8.0,
            resume_delay: Duration::from_millis(500),
            startup_delay: Duration::from_millis(250),
        }
    }
}

/// User input that pauses the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Interaction {
    /// Mouse button pressed
    PointerDown,
    /// Touch began
    TouchStart,
    /// Wheel turned
    Wheel,
    /// Strip scrolled manually
    Scroll,
}

/// Where the controller is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueePhase {
    /// Waiting for the startup delay to pass
    Starting,
    /// Advancing every frame
    Running,
    /// Held by user interaction until the quiet interval passes
    Paused,
    /// Torn down, never advances again
    Unmounted,
}

/// Drives the scroll offset of the duplicated category strip.
#[derive(Debug, Clone)]
pub struct MarqueeController {
    settings: MarqueeSettings,
    phase: MarqueePhase,
    offset: f64,
    half_content_width: Option<f64>,
    last_frame: Option<Instant>,
    start_at: Option<Instant>,
    resume_at: Option<Instant>,
}

impl MarqueeController {
    /// Mounts a controller at `now`; scrolling starts after the startup delay.
    pub fn mount(settings: MarqueeSettings, now: Instant) -> Self {
        Self {
            settings,
            phase: MarqueePhase::Starting,
            offset: 0.0,
            half_content_width: None,
            last_frame: None,
            start_at: Some(now + settings.startup_delay),
            resume_at: None,
        }
    }

    /// Cancels the pending startup, resume, and frame. The controller stays
    /// where it is from now on.
    pub fn unmount(&mut self) {
        self.phase = MarqueePhase::Unmounted;
        self.start_at = None;
        self.resume_at = None;
        self.last_frame = None;
        tracing::debug!("marquee unmounted");
    }

    /// Records the width of one copy of the strip content.
    ///
    /// Widths that are zero, negative, or not finite mean the strip has not
    /// been laid out yet; frames are deferred until a usable width arrives.
    /// A new width re-wraps the current offset.
    pub fn measure(&mut self, half_content_width: f64) {
        if half_content_width.is_finite() && half_content_width > 0.0 {
            self.half_content_width = Some(half_content_width);
            self.offset = wrap(self.offset, half_content_width);
        } else {
            self.half_content_width = None;
        }
    }

    /// Pauses on user input and restarts the quiet interval.
    pub fn interact(&mut self, interaction: Interaction, now: Instant) {
        if self.phase == MarqueePhase::Unmounted {
            return;
        }

        if self.phase != MarqueePhase::Paused {
            tracing::debug!(?interaction, "marquee paused");
        }

        self.phase = MarqueePhase::Paused;
        self.start_at = None;
        self.resume_at = Some(now + self.settings.resume_delay);
        self.last_frame = None;
    }

    /// Manual scroll by `delta` cells. Counts as a scroll interaction.
    pub fn scroll_by(&mut self, delta: f64, now: Instant) {
        self.interact(Interaction::Scroll, now);
        if let Some(half) = self.half_content_width {
            if delta.is_finite() {
                self.offset = wrap(self.offset + delta, half);
            }
        }
    }

    /// Moves the offset without pausing.
    pub fn seek(&mut self, offset: f64) {
        if let Some(half) = self.half_content_width {
            if offset.is_finite() {
                self.offset = wrap(offset, half);
            }
        }
    }

    /// Runs one animation frame at `now`.
    ///
    /// Returns `true` when the frame ran in the running state (even with a
    /// zero elapsed time), `false` when it was skipped because the strip is
    /// starting, paused, unmeasured, or unmounted.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            MarqueePhase::Unmounted => return false,
            MarqueePhase::Starting => {
                if self.start_at.is_some_and(|at| now >= at) {
                    self.start();
                } else {
                    return false;
                }
            }
            MarqueePhase::Paused => {
                if self.resume_at.is_some_and(|at| now >= at) {
                    self.start();
                } else {
                    return false;
                }
            }
            MarqueePhase::Running => {}
        }

        // Not laid out yet: stand still, and keep the first real frame at Δt = 0
        let Some(half) = self.half_content_width else {
            return false;
        };

        let elapsed = self
            .last_frame
            .map_or(0.0, |prev| now.saturating_duration_since(prev).as_secs_f64());
        self.last_frame = Some(now);
        self.offset = wrap(self.offset + self.settings.velocity * elapsed, half);
        true
    }

    fn start(&mut self) {
        tracing::debug!(from = ?self.phase, "marquee running");
        self.phase = MarqueePhase::Running;
        self.start_at = None;
        self.resume_at = None;
        self.last_frame = None;
    }

    /// Earliest pending timer, if any. Useful as an event-poll deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.phase {
            MarqueePhase::Starting => self.start_at,
            MarqueePhase::Paused => self.resume_at,
            MarqueePhase::Running | MarqueePhase::Unmounted => None,
        }
    }

    /// Current lifecycle phase.
    pub const fn phase(&self) -> MarqueePhase {
        self.phase
    }

    /// True while user interaction holds the strip.
    pub fn is_paused(&self) -> bool {
        self.phase == MarqueePhase::Paused
    }

    /// Current scroll offset in cells.
    pub const fn offset(&self) -> f64 {
        self.offset
    }

    /// Width of one copy of the content, once measured.
    pub const fn half_content_width(&self) -> Option<f64> {
        self.half_content_width
    }

    /// Settings the controller was mounted with.
    pub const fn settings(&self) -> &MarqueeSettings {
        &self.settings
    }
}

/// Wraps `value` into `[0, half)`.
fn wrap(value: f64, half: f64) -> f64 {
    if (0.0..half).contains(&value) {
        return value;
    }
    let wrapped = value.rem_euclid(half);
    // rem_euclid can round up to `half` for tiny negative inputs
    if wrapped >= half {
        0.0
    } else {
        wrapped
    }
}
