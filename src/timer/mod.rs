//! Countdown timing for sessions.
//!
//! This module provides:
//! - A one-second countdown state machine
//! - A session engine owning the active session lifecycle
//! - Breathing phase tracking for breathing sessions
//! - Tick scheduling with an explicit cancellation handle

pub mod breathing;
pub mod countdown;
pub mod engine;
pub mod ticker;

pub use breathing::{BreathingDriver, BreathingVisual, Phase};
pub use countdown::{format_clock, Countdown, CountdownState};
pub use engine::{ActiveSession, TimerEngine};
pub use ticker::Ticker;
