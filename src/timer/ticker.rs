//! Tick scheduling for the countdown.
//!
//! The countdown advances on a recurring one-second tick. `Ticker` is the
//! single handle for that recurrence: armed while a session runs, disarmed
//! on pause, skip, back, and completion. A disarmed ticker never fires, so
//! no stale tick can reach a session that already left the screen.

use std::time::{Duration, Instant};

/// Interval between countdown ticks.
const PERIOD: Duration = Duration::from_secs(1);

/// Most ticks a single poll may fire before resynchronizing.
///
/// After a long stall (suspended process, stuck frame) the backlog is
/// dropped instead of fast-forwarding the countdown.
const MAX_CATCHUP: u32 = 5;

/// Schedules the recurring countdown tick.
#[derive(Debug, Clone, Default)]
pub struct Ticker {
    deadline: Option<Instant>,
}

impl Ticker {
    #[must_use]
    pub const fn new() -> Self {
        Self { deadline: None }
    }

    /// Schedule the next tick one period from `now`.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + PERIOD);
    }

    /// Cancel the pending tick.
    pub fn disarm(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Fire every tick due by `now`, advancing the deadline one period per
    /// tick. Returns the number of ticks fired, zero while disarmed.
    pub fn poll(&mut self, now: Instant) -> u32 {
        let Some(mut deadline) = self.deadline else {
            return 0;
        };
        let mut fired = 0;
        while deadline <= now && fired < MAX_CATCHUP {
            fired += 1;
            deadline += PERIOD;
        }
        if deadline <= now {
            // Still behind after the catch-up budget: drop the backlog.
            deadline = now + PERIOD;
        }
        self.deadline = Some(deadline);
        fired
    }
}
