//! User settings - stroke appearance, persisted as JSON.
//!
//! Settings are deliberately thin: just the render attributes applied to new
//! strokes. Drawings themselves are never persisted by this crate. Unknown or
//! missing fields fall back to defaults so old settings files keep loading.

use crate::constants::{DEFAULT_STROKE_COLOR, DEFAULT_STROKE_WIDTH};
use crate::types::{Color, StrokeStyle};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::warn;

/// Errors from loading or interpreting a settings file.
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid stroke color {0:?} (expected #rrggbb or #rrggbbaa)")]
    InvalidColor(String),
}

/// Stroke appearance settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Stroke color as a hex string, e.g. `"#1e90ff"`.
    pub stroke_color: String,
    /// Stroke width in content-space units.
    pub stroke_width: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl Settings {
    /// Default on-disk location: `<config dir>/inkboard/settings.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("inkboard").join("settings.json"))
    }

    /// Load settings from a JSON file.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Load settings, falling back to defaults if the file is missing or
    /// malformed. Failures are logged, not surfaced.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(settings) => settings,
            Err(err) => {
                warn!(path = %path.display(), %err, "settings unavailable, using defaults");
                Self::default()
            }
        }
    }

    /// Resolve the configured appearance into a validated [`StrokeStyle`].
    pub fn stroke_style(&self) -> Result<StrokeStyle, SettingsError> {
        let color = Color::from_hex(&self.stroke_color)
            .ok_or_else(|| SettingsError::InvalidColor(self.stroke_color.clone()))?;
        Ok(StrokeStyle {
            color,
            width: self.stroke_width,
        })
    }
}
