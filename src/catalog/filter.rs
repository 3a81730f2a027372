//! Category filtering over the session catalog.

use clap::ValueEnum;

use crate::catalog::session::{Category, SessionDescriptor};

/// Which slice of the catalog to show.
///
/// `All` passes every session through; the other variants keep only one
/// category. The filter cycles in a fixed order so the interactive list
/// can step through it with a single key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum CategoryFilter {
    #[default]
    All,
    Meditation,
    Breathing,
    BodyScan,
}

impl CategoryFilter {
    /// Whether a session in `category` passes this filter.
    #[must_use]
    pub const fn matches(self, category: Category) -> bool {
        matches!(
            (self, category),
            (Self::All, _)
                | (Self::Meditation, Category::Meditation)
                | (Self::Breathing, Category::Breathing)
                | (Self::BodyScan, Category::BodyScan)
        )
    }

    /// The next filter in cycle order.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::All => Self::Meditation,
            Self::Meditation => Self::Breathing,
            Self::Breathing => Self::BodyScan,
            Self::BodyScan => Self::All,
        }
    }

    /// The previous filter in cycle order.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            Self::All => Self::BodyScan,
            Self::Meditation => Self::All,
            Self::Breathing => Self::Meditation,
            Self::BodyScan => Self::Breathing,
        }
    }
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "All"),
            CategoryFilter::Meditation => write!(f, "Meditation"),
            CategoryFilter::Breathing => write!(f, "Breathing"),
            CategoryFilter::BodyScan => write!(f, "Body Scan"),
        }
    }
}

/// Keep the sessions that pass `filter`, preserving catalog order.
#[must_use]
pub fn filter_by_category(
    sessions: &[SessionDescriptor],
    filter: CategoryFilter,
) -> Vec<&SessionDescriptor> {
    sessions
        .iter()
        .filter(|s| filter.matches(s.category))
        .collect()
}
