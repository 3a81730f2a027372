//! Error types for mindful.

use thiserror::Error;

/// Errors that can occur while running mindful.
#[derive(Error, Debug)]
pub enum MindfulError {
    /// Configuration could not be read, parsed, or validated.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A lookup (session, shell, ...) matched nothing.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Terminal setup, drawing, or event polling failed.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
