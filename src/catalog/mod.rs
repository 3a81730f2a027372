//! The session catalog: preset sessions and category filtering.
//!
//! The catalog is a fixed list of guided sessions. Users pick from it,
//! optionally narrowed by category; the timer runs whatever was picked.
//! A config file can replace the built-in presets entirely.

pub mod filter;
pub mod session;

pub use filter::{filter_by_category, CategoryFilter};
pub use session::{builtin_sessions, find_session, Category, Icon, SessionDescriptor};
