//! mindful - A meditation and breathing timer for the terminal
//!
//! This crate provides a fixed catalog of guided sessions, a one-second
//! countdown engine, and a breathing animation rendered in a TUI.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod output;
pub mod timer;
pub mod tui;

pub use catalog::{builtin_sessions, Category, SessionDescriptor};
pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::MindfulError;
