//! Session descriptors and the built-in presets.

use chrono::Duration;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// What kind of practice a session guides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Meditation,
    Breathing,
    BodyScan,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Meditation => write!(f, "Meditation"),
            Category::Breathing => write!(f, "Breathing"),
            Category::BodyScan => write!(f, "Body Scan"),
        }
    }
}

/// Visual identifier attached to a session.
///
/// Icons are opaque tokens here; each presentation layer picks its own
/// glyphs for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Sun,
    Wind,
    Activity,
    Moon,
}

/// A preset session: what to practice and for how long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDescriptor {
    /// Unique id within the catalog.
    pub id: u32,
    /// Display title.
    pub title: String,
    /// Fixed session length in seconds.
    pub duration_seconds: u32,
    /// Practice category, used for filtering.
    pub category: Category,
    /// Icon shown next to the title.
    pub icon: Icon,
}

impl SessionDescriptor {
    #[must_use]
    pub fn new(id: u32, title: &str, duration_seconds: u32, category: Category, icon: Icon) -> Self {
        Self {
            id,
            title: title.to_string(),
            duration_seconds,
            category,
            icon,
        }
    }

    /// Session length as a duration.
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::seconds(i64::from(self.duration_seconds))
    }
}

static BUILTIN: Lazy<Vec<SessionDescriptor>> = Lazy::new(|| {
    vec![
        SessionDescriptor::new(1, "Morning Calm", 600, Category::Meditation, Icon::Sun),
        SessionDescriptor::new(2, "Stress Relief", 900, Category::Meditation, Icon::Wind),
        SessionDescriptor::new(3, "Deep Focus", 1200, Category::Meditation, Icon::Activity),
        SessionDescriptor::new(4, "Before Sleep", 1500, Category::Meditation, Icon::Moon),
        SessionDescriptor::new(5, "4-7-8 Breathing", 300, Category::Breathing, Icon::Wind),
        SessionDescriptor::new(6, "Box Breathing", 480, Category::Breathing, Icon::Wind),
        SessionDescriptor::new(7, "Quick Body Scan", 300, Category::BodyScan, Icon::Activity),
        SessionDescriptor::new(8, "Full Body Relaxation", 1200, Category::BodyScan, Icon::Moon),
    ]
});

/// The built-in session presets, in catalog order.
#[must_use]
pub fn builtin_sessions() -> &'static [SessionDescriptor] {
    &BUILTIN
}

/// Look up a session by id or by title (case-insensitive).
#[must_use]
pub fn find_session<'a>(
    sessions: &'a [SessionDescriptor],
    query: &str,
) -> Option<&'a SessionDescriptor> {
    if let Ok(id) = query.parse::<u32>() {
        return sessions.iter().find(|s| s.id == id);
    }
    let query = query.to_lowercase();
    sessions.iter().find(|s| s.title.to_lowercase() == query)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_has_eight_sessions() {
        let sessions = builtin_sessions();
        assert_eq!(sessions.len(), 8);

        let ids: Vec<u32> = sessions.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        assert!(sessions.iter().all(|s| s.duration_seconds > 0));
    }

    #[test]
    fn test_builtin_catalog_entries() {
        let sessions = builtin_sessions();

        assert_eq!(sessions[0].title, "Morning Calm");
        assert_eq!(sessions[0].duration_seconds, 600);
        assert_eq!(sessions[0].category, Category::Meditation);

        assert_eq!(sessions[4].title, "4-7-8 Breathing");
        assert_eq!(sessions[4].duration_seconds, 300);
        assert_eq!(sessions[4].category, Category::Breathing);

        assert_eq!(sessions[7].title, "Full Body Relaxation");
        assert_eq!(sessions[7].category, Category::BodyScan);
    }

    #[test]
    fn test_find_session_by_id() {
        let found = find_session(builtin_sessions(), "5");
        assert_eq!(found.map(|s| s.title.as_str()), Some("4-7-8 Breathing"));
    }

    #[test]
    fn test_find_session_by_title_case_insensitive() {
        let found = find_session(builtin_sessions(), "morning calm");
        assert_eq!(found.map(|s| s.id), Some(1));

        let found = find_session(builtin_sessions(), "BOX BREATHING");
        assert_eq!(found.map(|s| s.id), Some(6));
    }

    #[test]
    fn test_find_session_unknown_returns_none() {
        assert!(find_session(builtin_sessions(), "nonexistent").is_none());
        assert!(find_session(builtin_sessions(), "99").is_none());
    }

    #[test]
    fn test_duration_conversion() {
        let session = &builtin_sessions()[0];
        assert_eq!(session.duration().num_seconds(), 600);
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Meditation.to_string(), "Meditation");
        assert_eq!(Category::Breathing.to_string(), "Breathing");
        assert_eq!(Category::BodyScan.to_string(), "Body Scan");
    }

    #[test]
    fn test_descriptor_serialization() {
        let session = SessionDescriptor::new(7, "Quick Body Scan", 300, Category::BodyScan, Icon::Activity);
        let json = serde_json::to_string(&session).unwrap();

        assert!(json.contains("\"id\":7"));
        assert!(json.contains("\"duration_seconds\":300"));
        assert!(json.contains("\"category\":\"body-scan\""));
        assert!(json.contains("\"icon\":\"activity\""));

        let back: SessionDescriptor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, session);
    }
}
