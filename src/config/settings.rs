//! Configuration settings for mindful.
//!
//! Settings are loaded from `~/.mindful/config.yaml`.

use serde::{Deserialize, Serialize};

use crate::catalog::{builtin_sessions, SessionDescriptor};
use crate::config::Paths;
use crate::error::MindfulError;
use crate::timer::BreathingVisual;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Interface settings.
    pub ui: UiConfig,
    /// Initial volume for the volume slider, from 0.0 to 1.0.
    #[serde(default = "default_volume")]
    pub volume: f64,
    /// Replacement session catalog. When absent, the built-in presets
    /// are used.
    #[serde(default)]
    pub catalog: Option<Vec<SessionDescriptor>>,
}

/// Interface settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Show the volume slider on the session screen.
    #[serde(default = "default_true")]
    pub show_volume: bool,
    /// Which breathing animation breathing sessions show.
    #[serde(default)]
    pub breathing_visual: BreathingVisual,
}

// Default value functions for serde
const fn default_volume() -> f64 {
    0.7
}

const fn default_true() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ui: UiConfig::default(),
            volume: default_volume(),
            catalog: None,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            show_volume: default_true(),
            breathing_visual: BreathingVisual::default(),
        }
    }
}

impl Config {
    /// Load configuration from the default path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if its catalog override is invalid.
    pub fn load() -> Result<Self, MindfulError> {
        let paths = Paths::new()?;
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    /// An out-of-range volume is clamped rather than rejected.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed,
    /// or if its catalog override is invalid.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, MindfulError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            MindfulError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let mut config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            MindfulError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;

        config.volume = config.volume.clamp(0.0, 1.0);
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the default path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self) -> Result<(), MindfulError> {
        let paths = Paths::new()?;
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), MindfulError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| MindfulError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            MindfulError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// The active session catalog: the override from the config file, or
    /// the built-in presets.
    #[must_use]
    pub fn sessions(&self) -> &[SessionDescriptor] {
        self.catalog.as_deref().unwrap_or_else(|| builtin_sessions())
    }

    fn validate(&self) -> Result<(), MindfulError> {
        let Some(catalog) = &self.catalog else {
            return Ok(());
        };

        if catalog.is_empty() {
            return Err(MindfulError::Config(
                "Catalog override must list at least one session".to_string(),
            ));
        }

        let mut seen = std::collections::HashSet::new();
        for session in catalog {
            if session.id == 0 {
                return Err(MindfulError::Config(format!(
                    "Session '{}' has id 0; ids start at 1",
                    session.title
                )));
            }
            if !seen.insert(session.id) {
                return Err(MindfulError::Config(format!(
                    "Duplicate session id {} in catalog override",
                    session.id
                )));
            }
            if session.duration_seconds == 0 {
                return Err(MindfulError::Config(format!(
                    "Session '{}' has a zero duration",
                    session.title
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert!(config.ui.show_volume);
        assert_eq!(config.ui.breathing_visual, BreathingVisual::Phased);
        assert!((config.volume - 0.7).abs() < f64::EPSILON);
        assert!(config.catalog.is_none());
        assert_eq!(config.sessions().len(), 8);
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let config = Config::load_from_path(&config_path).unwrap();

        // Should return defaults when file doesn't exist
        assert!((config.volume - 0.7).abs() < f64::EPSILON);
    }

    #[test]
    fn test_save_and_load_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let mut config = Config::default();
        config.volume = 0.3;
        config.ui.breathing_visual = BreathingVisual::Pulse;

        config.save_to_path(&config_path).unwrap();

        let loaded = Config::load_from_path(&config_path).unwrap();

        assert!((loaded.volume - 0.3).abs() < f64::EPSILON);
        assert_eq!(loaded.ui.breathing_visual, BreathingVisual::Pulse);
    }

    #[test]
    fn test_partial_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        // Write a partial config (only some fields)
        let partial_yaml = r#"
volume: 0.2
"#;
        std::fs::write(&config_path, partial_yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();

        // Custom value should be loaded
        assert!((config.volume - 0.2).abs() < f64::EPSILON);
        // Defaults should be used for missing fields
        assert!(config.ui.show_volume);
        assert_eq!(config.ui.breathing_visual, BreathingVisual::Phased);
    }

    #[test]
    fn test_out_of_range_volume_is_clamped() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        std::fs::write(&config_path, "volume: 1.5\n").unwrap();
        let config = Config::load_from_path(&config_path).unwrap();
        assert!((config.volume - 1.0).abs() < f64::EPSILON);

        std::fs::write(&config_path, "volume: -0.4\n").unwrap();
        let config = Config::load_from_path(&config_path).unwrap();
        assert!(config.volume.abs() < f64::EPSILON);
    }

    #[test]
    fn test_catalog_override_replaces_builtins() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml = r#"
catalog:
  - id: 1
    title: Evening Wind Down
    duration_seconds: 300
    category: meditation
    icon: moon
"#;
        std::fs::write(&config_path, yaml).unwrap();

        let config = Config::load_from_path(&config_path).unwrap();
        let sessions = config.sessions();

        assert_eq!(sessions.len(), 1);
        assert_eq!(sessions[0].title, "Evening Wind Down");
        assert_eq!(sessions[0].duration_seconds, 300);
    }

    #[test]
    fn test_empty_catalog_override_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        std::fs::write(&config_path, "catalog: []\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(MindfulError::Config(_))));
    }

    #[test]
    fn test_duplicate_session_ids_are_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml = r#"
catalog:
  - id: 1
    title: First
    duration_seconds: 60
    category: meditation
    icon: sun
  - id: 1
    title: Second
    duration_seconds: 120
    category: breathing
    icon: wind
"#;
        std::fs::write(&config_path, yaml).unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(MindfulError::Config(message)) if message.contains("Duplicate")));
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        let yaml = r#"
catalog:
  - id: 1
    title: Instant
    duration_seconds: 0
    category: meditation
    icon: sun
"#;
        std::fs::write(&config_path, yaml).unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(MindfulError::Config(message)) if message.contains("duration")));
    }

    #[test]
    fn test_invalid_yaml_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");

        std::fs::write(&config_path, "ui: [not, a, mapping\n").unwrap();

        let result = Config::load_from_path(&config_path);
        assert!(matches!(result, Err(MindfulError::Config(_))));
    }
}
