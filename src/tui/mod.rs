//! Terminal User Interface (TUI) for mindful.
//!
//! Provides an interactive timer with a session catalog, a one-second
//! countdown, and a breathing animation. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;
use std::time::Instant;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::catalog::SessionDescriptor;
use crate::config::Config;
use crate::error::MindfulError;

/// Run the TUI application.
///
/// When `initial` is set the timer starts on that session immediately,
/// skipping the catalog screen.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config, initial: Option<&SessionDescriptor>) -> Result<(), MindfulError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| MindfulError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| MindfulError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| MindfulError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(config);
    if let Some(descriptor) = initial {
        app.start_descriptor(descriptor, Instant::now());
    }
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), MindfulError> {
    loop {
        // Advance timers before drawing
        app.on_frame(Instant::now());

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| MindfulError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
            }
        }
    }

    Ok(())
}
