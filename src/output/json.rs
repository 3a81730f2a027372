//! JSON output formatting for mindful.
//!
//! This module provides functions for formatting the session catalog as JSON.

use serde::Serialize;
use serde_json::json;

use crate::catalog::SessionDescriptor;
use crate::error::MindfulError;

/// Format sessions as JSON
///
/// # Errors
///
/// Returns `MindfulError::Parse` if JSON serialization fails.
pub fn format_sessions_json(
    sessions: &[&SessionDescriptor],
    list_name: &str,
) -> Result<String, MindfulError> {
    let output = json!({
        "list": list_name,
        "count": sessions.len(),
        "items": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `MindfulError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, MindfulError> {
    Ok(serde_json::to_string_pretty(value)?)
}
