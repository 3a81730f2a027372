//! Output formatting for mindful.
//!
//! This module provides formatters for displaying the session catalog in
//! various formats.

mod json;
mod pretty;

use crate::catalog::SessionDescriptor;
use crate::cli::args::OutputFormat;
use crate::error::MindfulError;

pub use json::*;
pub use pretty::*;

/// Format sessions based on output format
///
/// # Errors
///
/// Returns `MindfulError::Parse` if JSON serialization fails.
pub fn format_sessions(
    sessions: &[&SessionDescriptor],
    title: &str,
    format: OutputFormat,
) -> Result<String, MindfulError> {
    match format {
        OutputFormat::Pretty => Ok(format_sessions_pretty(sessions, title)),
        OutputFormat::Json => format_sessions_json(sessions, title),
    }
}
