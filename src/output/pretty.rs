use colored::Colorize;

use crate::catalog::{Icon, SessionDescriptor};
use crate::timer::format_clock;

/// Format a list of sessions as a pretty table
pub fn format_sessions_pretty(sessions: &[&SessionDescriptor], title: &str) -> String {
    if sessions.is_empty() {
        return format!("{} (0 sessions)\n  No sessions", title);
    }

    let mut output = format!("{} ({} sessions)\n", title, sessions.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for session in sessions {
        let line = format!(
            "{} {}  {}  {}",
            icon_glyph(session.icon).cyan(),
            session.title.bold(),
            session.category.to_string().dimmed(),
            format_clock(session.duration()).yellow()
        );

        output.push_str(&line);
        output.push('\n');
    }

    output
}

const fn icon_glyph(icon: Icon) -> &'static str {
    match icon {
        Icon::Sun => "☀",
        Icon::Wind => "≋",
        Icon::Activity => "∿",
        Icon::Moon => "☾",
    }
}
