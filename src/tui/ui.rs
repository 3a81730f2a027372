//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Circle},
        Block, Borders, Gauge, List, ListItem, ListState, Paragraph,
    },
    Frame,
};

use crate::catalog::{Category, Icon};
use crate::timer::{format_clock, ActiveSession, BreathingVisual, CountdownState};
use crate::tui::app::App;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    if let Some(active) = app.engine.active() {
        render_session(frame, app, active);
    } else {
        render_catalog(frame, app);
    }
}

/// Render the session list screen.
fn render_catalog(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, list, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // List
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_catalog_header(frame, app, chunks[0]);
    render_session_list(frame, app, chunks[1]);
    render_catalog_status(frame, app, chunks[2]);
}

/// Render the catalog header.
fn render_catalog_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let title = format!(
        " mindful · {} ({} sessions) ",
        app.filter,
        app.visible_sessions().len()
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        );

    frame.render_widget(header, area);
}

/// Render the session list.
fn render_session_list(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let visible = app.visible_sessions();
    let items: Vec<ListItem<'_>> = visible
        .iter()
        .enumerate()
        .map(|(i, session)| {
            let is_selected = i == app.selected;

            let spans = vec![
                Span::styled(
                    format!("{} ", icon_glyph(session.icon)),
                    Style::default().fg(category_color(session.category)),
                ),
                Span::styled(
                    session.title.as_str(),
                    Style::default().add_modifier(if is_selected {
                        Modifier::BOLD
                    } else {
                        Modifier::empty()
                    }),
                ),
                Span::styled(
                    format!("  {}", session.category),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(
                    format!("  {}", format_clock(session.duration())),
                    Style::default().fg(Color::Yellow),
                ),
            ];

            let style = if is_selected {
                Style::default().bg(Color::DarkGray)
            } else {
                Style::default()
            };

            ListItem::new(Line::from(spans)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray));

    // Create list state for scrolling
    let mut state = ListState::default();
    state.select(Some(app.selected));

    frame.render_stateful_widget(list, area, &mut state);
}

/// Render the catalog status bar.
fn render_catalog_status(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app
        .status
        .as_deref()
        .unwrap_or("j/k:nav | f:filter | Enter:start | ?:help | q:quit");

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Render the timer screen.
fn render_session(frame: &mut Frame<'_>, app: &App, active: &ActiveSession) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Breathing visual
            Constraint::Length(1), // Phase label
            Constraint::Length(2), // Clock
            Constraint::Length(3), // Progress
            Constraint::Length(1), // Volume
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_session_header(frame, active, chunks[0]);
    render_breathing(frame, active, chunks[1]);
    render_phase_label(frame, active, chunks[2]);
    render_clock(frame, active, chunks[3]);
    render_progress(frame, active, chunks[4]);
    render_volume(frame, app, chunks[5]);
    render_session_status(frame, app, active, chunks[6]);
}

/// Render the session header.
fn render_session_header(frame: &mut Frame<'_>, active: &ActiveSession, area: Rect) {
    let descriptor = &active.descriptor;
    let title = format!(
        " {} {} · {} ",
        icon_glyph(descriptor.icon),
        descriptor.title,
        descriptor.category
    );

    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(category_color(descriptor.category))
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(category_color(descriptor.category))),
        );

    frame.render_widget(header, area);
}

/// Render the breathing circle for breathing sessions.
fn render_breathing(frame: &mut Frame<'_>, active: &ActiveSession, area: Rect) {
    let Some(breathing) = &active.breathing else {
        return;
    };

    let radius = match breathing.visual() {
        BreathingVisual::Phased => breathing.intensity(),
        BreathingVisual::Pulse => {
            if breathing.is_expanded() {
                1.4
            } else {
                1.0
            }
        }
    };

    let canvas = Canvas::default()
        .x_bounds([-2.0, 2.0])
        .y_bounds([-2.0, 2.0])
        .paint(move |ctx| {
            ctx.draw(&Circle {
                x: 0.0,
                y: 0.0,
                radius,
                color: Color::Cyan,
            });
        });

    frame.render_widget(canvas, area);
}

/// Render the breathing guidance text.
fn render_phase_label(frame: &mut Frame<'_>, active: &ActiveSession, area: Rect) {
    let Some(breathing) = &active.breathing else {
        return;
    };

    let label = match breathing.visual() {
        BreathingVisual::Phased => breathing.phase().label(),
        BreathingVisual::Pulse => {
            if breathing.is_expanded() {
                "Breathe in..."
            } else {
                "Breathe out..."
            }
        }
    };

    let paragraph = Paragraph::new(label)
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render the remaining time.
fn render_clock(frame: &mut Frame<'_>, active: &ActiveSession, area: Rect) {
    let state_word = match active.countdown.state() {
        CountdownState::Running => "",
        CountdownState::Paused => "paused",
        CountdownState::Completed => "complete",
    };

    let clock = Paragraph::new(vec![
        Line::from(Span::styled(
            active.countdown.format_remaining(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state_word,
            Style::default().fg(Color::DarkGray),
        )),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(clock, area);
}

/// Render the session progress gauge.
fn render_progress(frame: &mut Frame<'_>, active: &ActiveSession, area: Rect) {
    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(active.countdown.progress())
        .label("");

    frame.render_widget(gauge, area);
}

/// Render the volume slider.
fn render_volume(frame: &mut Frame<'_>, app: &App, area: Rect) {
    if !app.show_volume {
        return;
    }

    let text = format!(
        "volume {} {:.0}%",
        volume_bar(app.volume, 10),
        app.volume * 100.0
    );

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

/// Render the timer status bar.
fn render_session_status(frame: &mut Frame<'_>, app: &App, active: &ActiveSession, area: Rect) {
    let hints = match active.countdown.state() {
        CountdownState::Running => "Space:pause | s:skip | b/Esc:back | +/-:volume | q:quit",
        CountdownState::Paused => "Space:resume | s:skip | b/Esc:back | +/-:volume | q:quit",
        CountdownState::Completed => "Space:restart | b/Esc:back | q:quit",
    };
    let status_text = app.status.as_deref().unwrap_or(hints);

    let status = Paragraph::new(status_text).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, area);
}

/// Render a volume level as a bracketed bar.
fn volume_bar(volume: f64, width: usize) -> String {
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        clippy::cast_precision_loss
    )]
    let filled = ((volume * width as f64).round() as usize).min(width);
    let empty = width - filled;
    format!("[{}{}]", "█".repeat(filled), "░".repeat(empty))
}

const fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Sun => "☀",
        Icon::Wind => "≋",
        Icon::Activity => "∿",
        Icon::Moon => "☾",
    }
}

const fn category_color(category: Category) -> Color {
    match category {
        Category::Meditation => Color::Cyan,
        Category::Breathing => Color::Green,
        Category::BodyScan => Color::Magenta,
    }
}
