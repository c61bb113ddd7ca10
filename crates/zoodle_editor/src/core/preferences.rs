//! Editor preferences and settings.
//!
//! Persistent settings that survive editor restarts, stored as TOML.
//! Missing keys fall back to their defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use zoodle_math::consts::{PI, TAU};
use zoodle_math::Vec3;

use crate::scene::Color;

/// Errors while loading or saving preferences.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid preferences: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Dimensions of the axis widgets.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GizmoPreferences {
    /// Distance of each translate shaft from the origin
    pub shaft_offset: f32,
    pub shaft_half_length: f32,
    pub shaft_stroke: f32,
    pub tip_diameter: f32,
    pub tip_length: f32,
    pub tip_stroke: f32,
    pub origin_stroke: f32,
    pub ring_diameter: f32,
    pub ring_stroke: f32,
}

impl Default for GizmoPreferences {
    fn default() -> Self {
        Self {
            shaft_offset: 3.0,
            shaft_half_length: 1.5,
            shaft_stroke: 1.0,
            tip_diameter: 2.0,
            tip_length: 1.5,
            tip_stroke: 0.5,
            origin_stroke: 0.5,
            ring_diameter: 10.0,
            ring_stroke: 0.75,
        }
    }
}

/// Editor preferences and settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorPreferences {
    // Camera
    pub zoom: f32,
    pub orbit_sensitivity: f32,
    pub rotate_sensitivity: f32,

    // History
    pub history_limit: usize,

    // Overlays
    pub highlight_color: String,

    // Tables
    pub camera_rotate: Vec3,
    pub gizmo: GizmoPreferences,
}

impl Default for EditorPreferences {
    fn default() -> Self {
        Self {
            zoom: 10.0,
            orbit_sensitivity: PI,
            rotate_sensitivity: 1.0,

            history_limit: 100,

            highlight_color: "#E62".to_string(),

            // Isometric view
            camera_rotate: Vec3::new(-(1.0 / 2f32.sqrt()).atan(), TAU / 8.0, 0.0),
            gizmo: GizmoPreferences::default(),
        }
    }
}

impl EditorPreferences {
    const FALLBACK_HIGHLIGHT: Color = Color::rgb(0xee, 0x66, 0x22);

    /// Load preferences from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let prefs = Self::from_toml_str(&content)?;
        log::info!("Loaded preferences from {:?}", path);
        Ok(prefs)
    }

    /// Load preferences from the default location, falling back to
    /// defaults when the file is missing or broken.
    pub fn load_or_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::load_or_default_from(&path),
            None => Self::default(),
        }
    }

    /// Load preferences from `path`, falling back to defaults when the
    /// file is missing or broken.
    pub fn load_or_default_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        Self::load(path).unwrap_or_else(|e| {
            log::warn!("Using default preferences: {}", e);
            Self::default()
        })
    }

    /// Save preferences to a file, creating parent directories if needed.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_error = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        fs::write(path, self.to_toml_string()?).map_err(io_error)?;
        log::info!("Saved preferences to {:?}", path);
        Ok(())
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Get the default preferences path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|mut p| {
            p.push("zoodle");
            p.push("config.toml");
            p
        })
    }

    /// Parsed highlight color.
    pub fn highlight(&self) -> Color {
        Color::from_hex(&self.highlight_color).unwrap_or_else(|| {
            log::warn!("Invalid highlight color '{}'", self.highlight_color);
            Self::FALLBACK_HIGHLIGHT
        })
    }
}
