//! Configuration management for mindful.
//!
//! This module handles loading and saving configuration from `~/.mindful/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{Config, UiConfig};
