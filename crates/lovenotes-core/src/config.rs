//! Application configuration.
//!
//! Read from an optional JSON file in the data directory. Every field has a
//! default, so a missing file or a partial one both work:
//!
//! ```json
//! { "particle_count": 30, "window": { "width": 480 } }
//! ```

use crate::error::{NotesError, NotesResult};
use crate::particles::DEFAULT_PARTICLE_COUNT;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "lovenotes.json";

/// Default database file name inside the data directory.
pub const DATABASE_FILE_NAME: &str = "lovenotes.redb";

/// Desktop window settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420.0,
            height: 860.0,
            resizable: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Hearts floating in the background
    pub particle_count: usize,
    pub window: WindowConfig,
    pub title: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            particle_count: DEFAULT_PARTICLE_COUNT,
            window: WindowConfig::default(),
            title: "Love Notes".to_string(),
        }
    }
}

impl AppConfig {
    /// Load from `path`; a missing file yields the defaults.
    pub fn load(path: impl AsRef<Path>) -> NotesResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| NotesError::Config(format!("{}: {}", path.display(), e)))?;
        tracing::info!(path = %path.display(), "Loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = AppConfig::load(temp_dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.particle_count, 60);
    }

    #[test]
    fn partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, r#"{ "particle_count": 12, "window": { "width": 500 } }"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.particle_count, 12);
        assert_eq!(config.window.width, 500.0);
        assert_eq!(config.window.height, 860.0);
        assert_eq!(config.title, "Love Notes");
    }

    #[test]
    fn malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(CONFIG_FILE_NAME);
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(AppConfig::load(&path), Err(NotesError::Config(_))));
    }
}
