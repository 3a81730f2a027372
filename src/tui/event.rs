//! Event handling for the TUI.

use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::MindfulError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed. Keys are
/// routed to the catalog or the session screen depending on which is
/// showing.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, MindfulError> {
    // Poll for events with a small timeout
    if event::poll(Duration::from_millis(100))
        .map_err(|e| MindfulError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) = event::read()
            .map_err(|e| MindfulError::Terminal(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            if app.in_session() {
                return Ok(handle_session_key(app, key.code));
            }
            return Ok(handle_catalog_key(app, key.code));
        }
    }

    Ok(None)
}

/// Keys on the session list screen.
fn handle_catalog_key(app: &mut App, code: KeyCode) -> Option<Action> {
    match code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => {
            app.cancel_pending();
            return Some(Action::Quit);
        }

        // Navigation - vim style
        KeyCode::Char('j') | KeyCode::Down => {
            app.cancel_pending();
            app.select_next();
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.cancel_pending();
            app.select_previous();
        }

        // Jump to top/bottom
        KeyCode::Char('g') => {
            app.handle_g();
        }
        KeyCode::Char('G') | KeyCode::End => {
            app.cancel_pending();
            app.select_last();
        }
        KeyCode::Home => {
            app.cancel_pending();
            app.select_first();
        }

        // Category filter
        KeyCode::Char('f') | KeyCode::Tab => {
            app.cancel_pending();
            app.cycle_filter();
        }
        KeyCode::Char('F') | KeyCode::BackTab => {
            app.cancel_pending();
            app.cycle_filter_back();
        }

        // Start the selected session
        KeyCode::Enter => {
            app.cancel_pending();
            app.start_selected(Instant::now());
        }

        // Help
        KeyCode::Char('?') => {
            app.cancel_pending();
            app.status = Some(
                "j/k:nav | f:filter | Enter:start | g/G:top/bottom | q:quit".to_string(),
            );
        }

        _ => {
            app.cancel_pending();
        }
    }

    None
}

/// Keys on the timer screen.
fn handle_session_key(app: &mut App, code: KeyCode) -> Option<Action> {
    match code {
        // Quit
        KeyCode::Char('q') => {
            return Some(Action::Quit);
        }

        // Play/pause; restarts when complete
        KeyCode::Char(' ') | KeyCode::Enter => {
            app.toggle(Instant::now());
        }

        // Skip to the end of the session
        KeyCode::Char('s') => {
            app.skip();
        }

        // Back to the session list
        KeyCode::Char('b') | KeyCode::Esc | KeyCode::Backspace | KeyCode::Left => {
            app.back_to_catalog();
        }

        // Volume; Left is taken by back, so only Right doubles here
        KeyCode::Char('+') | KeyCode::Char('=') | KeyCode::Right => {
            app.adjust_volume(true);
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.adjust_volume(false);
        }

        // Help
        KeyCode::Char('?') => {
            app.status = Some(
                "Space:play/pause | s:skip | b/Esc:back | +/-:volume | q:quit".to_string(),
            );
        }

        _ => {}
    }

    None
}
