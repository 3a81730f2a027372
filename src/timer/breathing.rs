//! Breathing phase tracking for breathing sessions.
//!
//! Breathing sessions carry a guided animation alongside the countdown.
//! Two variants exist: a continuous eight-second inhale/hold/exhale cycle
//! whose circle grows and shrinks smoothly, and a simpler pulse that
//! alternates between two sizes on every countdown tick. Both freeze while
//! the countdown is paused.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// One full inhale/hold/exhale cycle.
pub const CYCLE: Duration = Duration::from_secs(8);

/// Which breathing animation a breathing session shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BreathingVisual {
    /// Continuous cycle with smooth growth, split into labeled phases.
    #[default]
    Phased,
    /// Two-state circle that flips size on every countdown tick.
    Pulse,
}

/// Phase of the guided breathing cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Inhale,
    Hold,
    Exhale,
}

impl Phase {
    /// The guidance text shown under the breathing circle.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Inhale => "Inhale...",
            Self::Hold => "Hold...",
            Self::Exhale => "Exhale...",
        }
    }
}

/// Tracks the breathing animation for one session.
///
/// The phased variant advances on wall-clock time through [`advance`];
/// the pulse variant flips on countdown ticks through [`on_tick`]. Each
/// variant ignores the other's input.
///
/// [`advance`]: BreathingDriver::advance
/// [`on_tick`]: BreathingDriver::on_tick
#[derive(Debug, Clone)]
pub struct BreathingDriver {
    visual: BreathingVisual,
    elapsed: Duration,
    expanded: bool,
}

impl BreathingDriver {
    /// Start a fresh cycle at the beginning of the inhale.
    #[must_use]
    pub const fn new(visual: BreathingVisual) -> Self {
        Self {
            visual,
            elapsed: Duration::ZERO,
            expanded: false,
        }
    }

    #[must_use]
    pub const fn visual(&self) -> BreathingVisual {
        self.visual
    }

    /// Advance the continuous cycle by wall-clock time, wrapping at the
    /// cycle length.
    pub fn advance(&mut self, dt: Duration) {
        if self.visual != BreathingVisual::Phased {
            return;
        }
        let total = self.elapsed + dt;
        self.elapsed = Duration::from_secs_f64(total.as_secs_f64() % CYCLE.as_secs_f64());
    }

    /// Flip the pulse on a countdown tick.
    pub fn on_tick(&mut self) {
        if self.visual == BreathingVisual::Pulse {
            self.expanded = !self.expanded;
        }
    }

    /// Position within the cycle, from 0.0 to just under 1.0.
    #[must_use]
    pub fn cycle_progress(&self) -> f64 {
        self.elapsed.as_secs_f64() / CYCLE.as_secs_f64()
    }

    /// Current phase: the cycle splits into equal inhale, hold, and
    /// exhale thirds.
    #[must_use]
    pub fn phase(&self) -> Phase {
        let progress = self.cycle_progress();
        if progress < 1.0 / 3.0 {
            Phase::Inhale
        } else if progress < 2.0 / 3.0 {
            Phase::Hold
        } else {
            Phase::Exhale
        }
    }

    /// Size of the breathing circle relative to its resting size.
    ///
    /// Grows from 1.0 to 1.2 over the first quarter of the cycle, holds,
    /// then shrinks back over the last quarter.
    #[must_use]
    pub fn intensity(&self) -> f64 {
        let progress = self.cycle_progress();
        if progress < 0.25 {
            1.0 + 0.2 * (progress / 0.25)
        } else if progress < 0.75 {
            1.2
        } else {
            1.2 - 0.2 * ((progress - 0.75) / 0.25)
        }
    }

    /// Pulse state: true while the circle holds its larger size.
    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }
}
