//! The session countdown.
//!
//! A countdown is a one-second state machine over a fixed duration: it
//! holds the remaining time, decrements while running, and completes when
//! it reaches zero. Skipping completes it early by dropping the remaining
//! time to zero in one step.

use chrono::Duration;

/// Countdown state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CountdownState {
    /// Counting down
    Running,
    /// Holding at the current remaining time
    Paused,
    /// Reached zero, naturally or by skipping
    Completed,
}

/// A one-second countdown over a fixed duration.
#[derive(Debug, Clone)]
pub struct Countdown {
    total_seconds: i64,
    remaining_seconds: i64,
    state: CountdownState,
}

impl Countdown {
    /// Create a new countdown, paused at the full duration.
    #[must_use]
    pub const fn new(duration: Duration) -> Self {
        let seconds = duration.num_seconds();
        Self {
            total_seconds: seconds,
            remaining_seconds: seconds,
            state: CountdownState::Paused,
        }
    }

    /// Create a countdown from a number of seconds.
    #[must_use]
    pub const fn from_seconds(seconds: i64) -> Self {
        Self::new(Duration::seconds(seconds))
    }

    /// Start or resume the countdown.
    pub fn start(&mut self) {
        if self.remaining_seconds > 0 {
            self.state = CountdownState::Running;
        }
    }

    /// Pause the countdown, holding the remaining time.
    pub fn pause(&mut self) {
        if self.state == CountdownState::Running {
            self.state = CountdownState::Paused;
        }
    }

    /// Flip between running and paused.
    ///
    /// A completed countdown stays completed; two toggles always return
    /// a live countdown to its original state.
    pub fn toggle(&mut self) {
        match self.state {
            CountdownState::Running => self.pause(),
            CountdownState::Paused => self.start(),
            CountdownState::Completed => {}
        }
    }

    /// End the countdown now: remaining time drops to zero and the
    /// countdown completes.
    pub fn finish(&mut self) {
        self.remaining_seconds = 0;
        self.state = CountdownState::Completed;
    }

    /// Reset to the full duration, paused.
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.state = CountdownState::Paused;
    }

    /// Tick the countdown down by one second.
    ///
    /// Does nothing unless the countdown is running. Returns true if this
    /// tick completed the countdown.
    pub fn tick(&mut self) -> bool {
        if self.state != CountdownState::Running {
            return false;
        }
        if self.remaining_seconds > 0 {
            self.remaining_seconds -= 1;
        }
        if self.remaining_seconds == 0 {
            self.state = CountdownState::Completed;
            true
        } else {
            false
        }
    }

    /// Get the remaining time.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        Duration::seconds(self.remaining_seconds)
    }

    /// Fraction of the countdown already elapsed, from 0.0 to 1.0.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn progress(&self) -> f64 {
        if self.total_seconds == 0 {
            return 1.0;
        }
        1.0 - (self.remaining_seconds as f64 / self.total_seconds as f64)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == CountdownState::Running
    }

    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.state == CountdownState::Completed
    }

    #[must_use]
    pub const fn state(&self) -> CountdownState {
        self.state
    }

    /// Format the remaining time as a clock.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_clock(self.remaining())
    }
}

/// Format a duration as `M:SS`, with unpadded minutes.
#[must_use]
pub fn format_clock(duration: Duration) -> String {
    let total_seconds = duration.num_seconds().max(0);
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_countdown_is_paused_at_full_duration() {
        let countdown = Countdown::from_seconds(600);
        assert_eq!(countdown.state(), CountdownState::Paused);
        assert_eq!(countdown.remaining().num_seconds(), 600);
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_tick_decrements_only_while_running() {
        let mut countdown = Countdown::from_seconds(60);

        assert!(!countdown.tick());
        assert_eq!(countdown.remaining().num_seconds(), 60);

        countdown.start();
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining().num_seconds(), 59);

        countdown.pause();
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining().num_seconds(), 59);
    }

    #[test]
    fn test_tick_to_zero_completes() {
        let mut countdown = Countdown::from_seconds(3);
        countdown.start();

        assert!(!countdown.tick());
        assert!(!countdown.tick());
        assert!(countdown.tick());

        assert!(countdown.is_completed());
        assert!(!countdown.is_running());
        assert_eq!(countdown.remaining().num_seconds(), 0);

        // Further ticks are no-ops.
        assert!(!countdown.tick());
        assert_eq!(countdown.remaining().num_seconds(), 0);
    }

    #[test]
    fn test_double_toggle_returns_to_original_state() {
        let mut countdown = Countdown::from_seconds(60);
        countdown.start();
        countdown.toggle();
        countdown.toggle();
        assert!(countdown.is_running());

        let mut countdown = Countdown::from_seconds(60);
        countdown.toggle();
        countdown.toggle();
        assert_eq!(countdown.state(), CountdownState::Paused);
    }

    #[test]
    fn test_toggle_on_completed_is_a_noop() {
        let mut countdown = Countdown::from_seconds(10);
        countdown.finish();
        countdown.toggle();
        assert!(countdown.is_completed());
    }

    #[test]
    fn test_finish_ends_now() {
        let mut countdown = Countdown::from_seconds(300);
        countdown.start();
        countdown.tick();
        countdown.tick();
        countdown.tick();

        countdown.finish();
        assert_eq!(countdown.remaining().num_seconds(), 0);
        assert!(countdown.is_completed());
        assert!(!countdown.is_running());
        assert!(!countdown.tick());
    }

    #[test]
    fn test_reset_restores_full_duration() {
        let mut countdown = Countdown::from_seconds(120);
        countdown.start();
        for _ in 0..30 {
            countdown.tick();
        }
        countdown.reset();
        assert_eq!(countdown.remaining().num_seconds(), 120);
        assert_eq!(countdown.state(), CountdownState::Paused);
    }

    #[test]
    fn test_progress() {
        let mut countdown = Countdown::from_seconds(100);
        assert!((countdown.progress() - 0.0).abs() < f64::EPSILON);

        countdown.start();
        for _ in 0..50 {
            countdown.tick();
        }
        assert!((countdown.progress() - 0.5).abs() < f64::EPSILON);

        countdown.finish();
        assert!((countdown.progress() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_clock_leaves_minutes_unpadded() {
        assert_eq!(format_clock(Duration::seconds(0)), "0:00");
        assert_eq!(format_clock(Duration::seconds(59)), "0:59");
        assert_eq!(format_clock(Duration::seconds(65)), "1:05");
        assert_eq!(format_clock(Duration::seconds(600)), "10:00");
        assert_eq!(format_clock(Duration::seconds(1500)), "25:00");
    }

    #[test]
    fn test_format_remaining() {
        let mut countdown = Countdown::from_seconds(600);
        assert_eq!(countdown.format_remaining(), "10:00");
        countdown.start();
        countdown.tick();
        assert_eq!(countdown.format_remaining(), "9:59");
    }
}
