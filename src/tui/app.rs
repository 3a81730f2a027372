//! Application state for the TUI.

use std::time::Instant;

use crate::catalog::{filter_by_category, CategoryFilter, SessionDescriptor};
use crate::config::Config;
use crate::timer::TimerEngine;

/// How much one volume keypress moves the slider.
const VOLUME_STEP: f64 = 0.05;

/// Application state.
pub struct App {
    /// The full session catalog.
    pub sessions: Vec<SessionDescriptor>,
    /// Active category filter for the session list.
    pub filter: CategoryFilter,
    /// Currently selected index into the filtered list.
    pub selected: usize,
    /// Session lifecycle and countdown.
    pub engine: TimerEngine,
    /// Volume slider position, from 0.0 to 1.0.
    pub volume: f64,
    /// Whether the volume slider is shown on the session screen.
    pub show_volume: bool,
    /// Status message to display.
    pub status: Option<String>,
    /// Pending 'g' key for 'gg' command.
    pub pending_g: bool,
    /// When the last frame was processed, for animation timing.
    last_frame: Instant,
}

impl App {
    /// Create a new app instance from loaded configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            sessions: config.sessions().to_vec(),
            filter: CategoryFilter::All,
            selected: 0,
            engine: TimerEngine::new(config.ui.breathing_visual),
            volume: config.volume,
            show_volume: config.ui.show_volume,
            status: Some("Press ? for help".to_string()),
            pending_g: false,
            last_frame: Instant::now(),
        }
    }

    /// The sessions that pass the current filter, in catalog order.
    #[must_use]
    pub fn visible_sessions(&self) -> Vec<&SessionDescriptor> {
        filter_by_category(&self.sessions, self.filter)
    }

    /// Whether the timer screen is showing.
    #[must_use]
    pub fn in_session(&self) -> bool {
        self.engine.active().is_some()
    }

    /// Advance time-driven state: fire due countdown ticks and move the
    /// breathing animation.
    pub fn on_frame(&mut self, now: Instant) {
        let dt = now.saturating_duration_since(self.last_frame);
        self.last_frame = now;

        self.engine.advance_breathing(dt);
        if self.engine.poll(now) {
            self.status = Some("Session complete".to_string());
        }
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.pending_g = false;
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        let len = self.visible_sessions().len();
        if len > 0 && self.selected < len - 1 {
            self.selected += 1;
        }
        self.pending_g = false;
    }

    /// Jump to first session.
    pub fn select_first(&mut self) {
        self.selected = 0;
        self.pending_g = false;
    }

    /// Jump to last session.
    pub fn select_last(&mut self) {
        let len = self.visible_sessions().len();
        if len > 0 {
            self.selected = len - 1;
        }
        self.pending_g = false;
    }

    /// Step the category filter forward, resetting the selection.
    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.selected = 0;
    }

    /// Step the category filter backward, resetting the selection.
    pub fn cycle_filter_back(&mut self) {
        self.filter = self.filter.previous();
        self.selected = 0;
    }

    /// Start the selected session and switch to the timer screen.
    pub fn start_selected(&mut self, now: Instant) {
        let descriptor = self
            .visible_sessions()
            .get(self.selected)
            .map(|session| (*session).clone());
        if let Some(descriptor) = descriptor {
            self.start_descriptor(&descriptor, now);
        }
    }

    /// Start a specific session and switch to the timer screen.
    pub fn start_descriptor(&mut self, descriptor: &SessionDescriptor, now: Instant) {
        self.status = Some(format!("Started: {}", descriptor.title));
        self.engine.start(descriptor, now);
    }

    /// Play/pause the countdown. Restarts a completed session.
    pub fn toggle(&mut self, now: Instant) {
        self.engine.toggle(now);
        self.status = if self.engine.is_running() {
            None
        } else {
            Some("Paused".to_string())
        };
    }

    /// Skip to the end of the session.
    pub fn skip(&mut self) {
        self.engine.skip();
        self.status = Some("Session complete".to_string());
    }

    /// Leave the session and return to the catalog.
    pub fn back_to_catalog(&mut self) {
        self.engine.back();
        self.status = None;
    }

    /// Nudge the volume slider, clamped to its range.
    pub fn adjust_volume(&mut self, up: bool) {
        let delta = if up { VOLUME_STEP } else { -VOLUME_STEP };
        self.volume = (self.volume + delta).clamp(0.0, 1.0);
    }

    /// Handle 'g' key for 'gg' command.
    pub fn handle_g(&mut self) {
        if self.pending_g {
            // Second 'g' - go to top
            self.select_first();
        } else {
            // First 'g' - wait for second
            self.pending_g = true;
            self.status = Some("g-".to_string());
        }
    }

    /// Cancel pending 'g' command.
    pub fn cancel_pending(&mut self) {
        self.pending_g = false;
        self.status = None;
    }
}
