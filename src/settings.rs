//! Line renderer settings
//!
//! Loaded from a JSON file next to the game data; missing or broken files
//! fall back to defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_TOLERANCE, MAX_FRAGMENTS};

#[derive(thiserror::Error, Debug)]
pub enum SettingsError {
    #[error("settings I/O failed")]
    Io(#[from] std::io::Error),
    #[error("settings JSON is malformed")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Dashed lines needing more fragments than this are not rendered
    pub max_fragments: usize,
    /// Epsilon used when comparing a line against its transform
    pub tolerance: f32,
    /// Log every re-render at info level (otherwise debug)
    pub log_renders: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            max_fragments: MAX_FRAGMENTS,
            tolerance: DEFAULT_TOLERANCE,
            log_renders: false,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load settings from disk, using defaults if that fails
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::try_load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::info!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn try_load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        std::fs::write(path.as_ref(), self.to_json()?)?;
        log::info!("Settings saved to {}", path.as_ref().display());
        Ok(())
    }
}
