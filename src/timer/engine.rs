//! Session lifecycle around the countdown.
//!
//! The engine owns the active session, if any. Starting, pausing,
//! skipping, leaving, and the one-second tick all go through it, as does
//! the ticker that schedules those ticks. The ticker is armed exactly
//! while the countdown runs, so pausing or leaving a session also cancels
//! its pending tick.

use std::time::{Duration, Instant};

use crate::catalog::{Category, SessionDescriptor};
use crate::timer::breathing::{BreathingDriver, BreathingVisual};
use crate::timer::countdown::Countdown;
use crate::timer::ticker::Ticker;

/// The session currently on the timer screen.
#[derive(Debug, Clone)]
pub struct ActiveSession {
    /// The catalog entry this session was started from.
    pub descriptor: SessionDescriptor,
    /// The countdown over the session's duration.
    pub countdown: Countdown,
    /// Breathing animation state, present only for breathing sessions.
    pub breathing: Option<BreathingDriver>,
}

/// Drives session lifecycles.
#[derive(Debug)]
pub struct TimerEngine {
    active: Option<ActiveSession>,
    ticker: Ticker,
    visual: BreathingVisual,
}

impl TimerEngine {
    #[must_use]
    pub const fn new(visual: BreathingVisual) -> Self {
        Self {
            active: None,
            ticker: Ticker::new(),
            visual,
        }
    }

    /// The active session, or None while the catalog is shown.
    #[must_use]
    pub fn active(&self) -> Option<&ActiveSession> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.active
            .as_ref()
            .is_some_and(|active| active.countdown.is_running())
    }

    /// True while a tick is scheduled.
    #[must_use]
    pub const fn ticker_armed(&self) -> bool {
        self.ticker.is_armed()
    }

    /// Start a session: full duration, running immediately, with breathing
    /// tracking for breathing sessions. Replaces any current session.
    pub fn start(&mut self, descriptor: &SessionDescriptor, now: Instant) {
        let mut countdown = Countdown::new(descriptor.duration());
        countdown.start();
        let breathing = (descriptor.category == Category::Breathing)
            .then(|| BreathingDriver::new(self.visual));
        self.active = Some(ActiveSession {
            descriptor: descriptor.clone(),
            countdown,
            breathing,
        });
        self.ticker.arm(now);
    }

    /// Flip the session between running and paused. A completed session
    /// restarts at the full duration instead.
    pub fn toggle(&mut self, now: Instant) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.countdown.is_completed() {
            active.countdown.reset();
            active.countdown.start();
            if active.breathing.is_some() {
                active.breathing = Some(BreathingDriver::new(self.visual));
            }
            self.ticker.arm(now);
            return;
        }
        active.countdown.toggle();
        if active.countdown.is_running() {
            self.ticker.arm(now);
        } else {
            self.ticker.disarm();
        }
    }

    /// End the session now: remaining time drops to zero and the countdown
    /// completes. The session stays on screen.
    pub fn skip(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.countdown.finish();
            self.ticker.disarm();
        }
    }

    /// Leave the session and return to the catalog. Its countdown is
    /// discarded.
    pub fn back(&mut self) {
        self.active = None;
        self.ticker.disarm();
    }

    /// Advance the session by one second.
    ///
    /// Returns true if this tick completed the countdown.
    pub fn tick(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };
        if !active.countdown.is_running() {
            return false;
        }
        let completed = active.countdown.tick();
        if let Some(breathing) = active.breathing.as_mut() {
            breathing.on_tick();
        }
        if completed {
            self.ticker.disarm();
        }
        completed
    }

    /// Fire every countdown tick due by `now`.
    ///
    /// Returns true if the countdown completed during this poll.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self.ticker.poll(now);
        let mut completed = false;
        for _ in 0..due {
            completed |= self.tick();
        }
        completed
    }

    /// Advance the continuous breathing animation by wall-clock time.
    /// Paused and completed sessions hold their phase.
    pub fn advance_breathing(&mut self, dt: Duration) {
        if let Some(active) = self.active.as_mut() {
            if active.countdown.is_running() {
                if let Some(breathing) = active.breathing.as_mut() {
                    breathing.advance(dt);
                }
            }
        }
    }
}
